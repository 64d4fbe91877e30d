//! List leaf
//!
//! Scrolling and virtualization are the host's concern; this record carries
//! the container style plus the list-shaped knobs the host reads.

use alpha_style::{resolve, Component, ResolvedStyle, StyleIntent, UiContext};

use crate::leaf::impl_intent_builders;

/// List container prop record
#[derive(Clone, Debug)]
pub struct ListProps {
    props: StyleIntent,
    horizontal: bool,
    item_gap: Option<f32>,
    shows_scroll_indicator: bool,
}

impl_intent_builders!(ListProps);

impl Default for ListProps {
    fn default() -> Self {
        Self {
            props: StyleIntent::new(),
            horizontal: false,
            item_gap: None,
            shows_scroll_indicator: true,
        }
    }
}

impl ListProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn horizontal(mut self) -> Self {
        self.horizontal = true;
        self
    }

    pub fn is_horizontal(&self) -> bool {
        self.horizontal
    }

    /// Spacing between items
    pub fn item_gap(mut self, gap: f32) -> Self {
        self.item_gap = Some(gap);
        self
    }

    pub fn hide_scroll_indicator(mut self) -> Self {
        self.shows_scroll_indicator = false;
        self
    }

    pub fn scroll_indicator(&self) -> bool {
        self.shows_scroll_indicator
    }

    pub fn resolve(&self, ctx: &UiContext) -> ResolvedStyle {
        let mut out = resolve(ctx, Component::List, &self.props);
        if out.gap.is_none() {
            out.gap = self.item_gap;
        }
        out
    }
}

/// Create a list leaf
pub fn list() -> ListProps {
    ListProps::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alpha_style::UiConfig;

    #[test]
    fn test_item_gap_feeds_resolved_gap() {
        let ctx = UiContext::new(UiConfig::default());
        let style = list().item_gap(12.0).resolve(&ctx);
        assert_eq!(style.gap, Some(12.0));
    }

    #[test]
    fn test_explicit_gap_prop_wins() {
        let ctx = UiContext::new(UiConfig::default());
        let style = list().gap(4.0).item_gap(12.0).resolve(&ctx);
        assert_eq!(style.gap, Some(4.0));
    }
}
