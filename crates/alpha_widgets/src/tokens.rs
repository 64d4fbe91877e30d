//! Input control design tokens
//!
//! Shared metrics for the form controls, compiled in as constants.

/// Shared control chrome
#[derive(Clone, Copy, Debug)]
pub struct ControlTokens {
    pub radius: f32,
    pub border_width: f32,
    pub disabled_opacity: f32,
    pub gap: f32,
}

/// Plain text field metrics
#[derive(Clone, Copy, Debug)]
pub struct TextFieldTokens {
    pub padding_horizontal: f32,
    pub padding_vertical: f32,
}

/// Password field metrics
#[derive(Clone, Copy, Debug)]
pub struct PasswordTokens {
    pub toggle_size: f32,
}

/// Select control metrics
#[derive(Clone, Copy, Debug)]
pub struct SelectTokens {
    pub padding_horizontal: f32,
    pub padding_vertical: f32,
    pub height: f32,
    pub modal_padding: f32,
    pub option_gap: f32,
    pub option_padding_vertical: f32,
    pub dropdown_icon_size: f32,
}

/// Date field metrics and formats
#[derive(Clone, Copy, Debug)]
pub struct DateTokens {
    pub padding_horizontal: f32,
    pub padding_vertical: f32,
    pub icon_size: f32,
    pub date_format: &'static str,
    pub time_format: &'static str,
}

/// The full input design token table
#[derive(Clone, Copy, Debug)]
pub struct InputTokens {
    pub control: ControlTokens,
    pub text_field: TextFieldTokens,
    pub password: PasswordTokens,
    pub select: SelectTokens,
    pub date: DateTokens,
}

/// Compiled-in defaults
pub const INPUT_TOKENS: InputTokens = InputTokens {
    control: ControlTokens {
        radius: 10.0,
        border_width: 1.0,
        disabled_opacity: 0.55,
        gap: 10.0,
    },
    text_field: TextFieldTokens {
        padding_horizontal: 16.0,
        padding_vertical: 14.0,
    },
    password: PasswordTokens { toggle_size: 20.0 },
    select: SelectTokens {
        padding_horizontal: 16.0,
        padding_vertical: 14.0,
        height: 56.0,
        modal_padding: 24.0,
        option_gap: 15.0,
        option_padding_vertical: 15.0,
        dropdown_icon_size: 10.0,
    },
    date: DateTokens {
        padding_horizontal: 16.0,
        padding_vertical: 14.0,
        icon_size: 20.0,
        date_format: "MMM D, YYYY",
        time_format: "h:mm A",
    },
};
