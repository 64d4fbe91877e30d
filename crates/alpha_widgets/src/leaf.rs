//! Shared leaf plumbing
//!
//! Every leaf prop record wraps a [`alpha_style::StyleIntent`]; this macro
//! stamps out the common shorthand builder delegations so each leaf only
//! declares what is specific to it. (`color` is deliberately not shared:
//! on boxes it means background, on text it means text color.)

macro_rules! impl_intent_builders {
    ($ty:ty) => {
        impl $ty {
            /// Replace the whole style intent
            pub fn props(mut self, props: alpha_style::StyleIntent) -> Self {
                self.props = props;
                self
            }

            pub fn bg(mut self, color: alpha_core::Color) -> Self {
                self.props = self.props.bg(color);
                self
            }

            pub fn flex(mut self, value: f32) -> Self {
                self.props = self.props.flex(value);
                self
            }

            pub fn fd(mut self, intent: alpha_style::FlexIntent) -> Self {
                self.props = self.props.fd(intent);
                self
            }

            pub fn gap(mut self, value: f32) -> Self {
                self.props = self.props.gap(value);
                self
            }

            pub fn p(mut self, value: f32) -> Self {
                self.props = self.props.p(value);
                self
            }

            pub fn ph(mut self, value: f32) -> Self {
                self.props = self.props.ph(value);
                self
            }

            pub fn pv(mut self, value: f32) -> Self {
                self.props = self.props.pv(value);
                self
            }

            pub fn pt(mut self, value: f32) -> Self {
                self.props = self.props.pt(value);
                self
            }

            pub fn pb(mut self, value: f32) -> Self {
                self.props = self.props.pb(value);
                self
            }

            pub fn pl(mut self, value: f32) -> Self {
                self.props = self.props.pl(value);
                self
            }

            pub fn pr(mut self, value: f32) -> Self {
                self.props = self.props.pr(value);
                self
            }

            pub fn m(mut self, value: f32) -> Self {
                self.props = self.props.m(value);
                self
            }

            pub fn mh(mut self, value: f32) -> Self {
                self.props = self.props.mh(value);
                self
            }

            pub fn mv(mut self, value: f32) -> Self {
                self.props = self.props.mv(value);
                self
            }

            pub fn mt(mut self, value: f32) -> Self {
                self.props = self.props.mt(value);
                self
            }

            pub fn mb(mut self, value: f32) -> Self {
                self.props = self.props.mb(value);
                self
            }

            pub fn ml(mut self, value: f32) -> Self {
                self.props = self.props.ml(value);
                self
            }

            pub fn mr(mut self, value: f32) -> Self {
                self.props = self.props.mr(value);
                self
            }

            pub fn size(mut self, value: f32) -> Self {
                self.props = self.props.size(value);
                self
            }

            pub fn w(mut self, value: f32) -> Self {
                self.props = self.props.w(value);
                self
            }

            pub fn h(mut self, value: f32) -> Self {
                self.props = self.props.h(value);
                self
            }

            pub fn br(mut self, radius: f32) -> Self {
                self.props = self.props.br(radius);
                self
            }

            pub fn bw(mut self, width: f32) -> Self {
                self.props = self.props.bw(width);
                self
            }

            pub fn bc(mut self, color: impl Into<alpha_style::ColorRef>) -> Self {
                self.props = self.props.bc(color);
                self
            }

            pub fn absolute(mut self) -> Self {
                self.props = self.props.absolute();
                self
            }

            pub fn inset(mut self, value: f32) -> Self {
                self.props = self.props.inset(value);
                self
            }

            pub fn inset_x(mut self, value: f32) -> Self {
                self.props = self.props.inset_x(value);
                self
            }

            pub fn inset_y(mut self, value: f32) -> Self {
                self.props = self.props.inset_y(value);
                self
            }

            pub fn top(mut self, value: f32) -> Self {
                self.props = self.props.top(value);
                self
            }

            pub fn right(mut self, value: f32) -> Self {
                self.props = self.props.right(value);
                self
            }

            pub fn bottom(mut self, value: f32) -> Self {
                self.props = self.props.bottom(value);
                self
            }

            pub fn left(mut self, value: f32) -> Self {
                self.props = self.props.left(value);
                self
            }

            pub fn opacity(mut self, value: f32) -> Self {
                self.props = self.props.opacity(value);
                self
            }

            pub fn elevation(mut self, level: u8) -> Self {
                self.props = self.props.elevation(level);
                self
            }

            pub fn z_index(mut self, value: i32) -> Self {
                self.props = self.props.z_index(value);
                self
            }

            /// Explicit style override, applied after expansion
            pub fn style(mut self, style: alpha_style::ResolvedStyle) -> Self {
                self.props = self.props.style(style);
                self
            }
        }
    };
}

pub(crate) use impl_intent_builders;
