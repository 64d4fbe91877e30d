//! Color values and literal color parsing
//!
//! Style props accept color strings that are either semantic palette tokens
//! or literal values. The literal grammar covers what the built-in palettes
//! and callers actually write: `#rgb`, `#rrggbb`, `#rrggbbaa`,
//! `rgb(r, g, b)`, `rgba(r, g, b, a)` and a small named set.

use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::{char, multispace0};
use nom::combinator::{all_consuming, map_res};
use nom::number::complete::float;
use nom::sequence::{delimited, preceded};
use nom::IResult;
use std::str::FromStr;

/// RGBA color (linear space)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Parse a literal color string.
    ///
    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`,
    /// `rgba(r, g, b, a)` (channels 0-255, alpha 0.0-1.0) and named colors.
    pub fn parse(input: &str) -> Result<Color, ColorParseError> {
        let trimmed = input.trim();

        if let Ok((_, color)) = all_consuming(hex_color)(trimmed) {
            return Ok(color);
        }
        if let Ok((_, color)) = all_consuming(rgba_color)(trimmed) {
            return Ok(color);
        }
        if let Ok((_, color)) = all_consuming(rgb_color)(trimmed) {
            return Ok(color);
        }
        named_color(trimmed).ok_or_else(|| ColorParseError::Invalid(input.to_string()))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

/// Failure to interpret a string as a literal color value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("not a recognized color literal: {0:?}")]
    Invalid(String),
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`
fn hex_color(input: &str) -> IResult<&str, Color> {
    let (input, _) = char('#')(input)?;
    let (input, digits) = take_while1(|c: char| c.is_ascii_hexdigit())(input)?;

    let channel = |s: &str| u8::from_str_radix(s, 16).map(|v| v as f32 / 255.0);
    let short = |s: &str| u8::from_str_radix(&s.repeat(2), 16).map(|v| v as f32 / 255.0);

    let fail = || nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::HexDigit));

    let color = match digits.len() {
        3 => Color::rgb(
            short(&digits[0..1]).map_err(|_| fail())?,
            short(&digits[1..2]).map_err(|_| fail())?,
            short(&digits[2..3]).map_err(|_| fail())?,
        ),
        6 => Color::rgb(
            channel(&digits[0..2]).map_err(|_| fail())?,
            channel(&digits[2..4]).map_err(|_| fail())?,
            channel(&digits[4..6]).map_err(|_| fail())?,
        ),
        8 => Color::rgba(
            channel(&digits[0..2]).map_err(|_| fail())?,
            channel(&digits[2..4]).map_err(|_| fail())?,
            channel(&digits[4..6]).map_err(|_| fail())?,
            channel(&digits[6..8]).map_err(|_| fail())?,
        ),
        _ => return Err(fail()),
    };

    Ok((input, color))
}

/// A 0-255 color channel with surrounding whitespace
fn channel_u8(input: &str) -> IResult<&str, f32> {
    delimited(
        multispace0,
        map_res(take_while1(|c: char| c.is_ascii_digit()), |s: &str| {
            s.parse::<u16>().map(|v| (v.min(255) as f32) / 255.0)
        }),
        multispace0,
    )(input)
}

/// Parse `rgb(r, g, b)`
fn rgb_color(input: &str) -> IResult<&str, Color> {
    let (input, _) = tag("rgb")(input)?;
    let (input, _) = char('(')(input)?;
    let (input, r) = channel_u8(input)?;
    let (input, g) = preceded(char(','), channel_u8)(input)?;
    let (input, b) = preceded(char(','), channel_u8)(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, Color::rgb(r, g, b)))
}

/// Parse `rgba(r, g, b, a)`
fn rgba_color(input: &str) -> IResult<&str, Color> {
    let (input, _) = tag("rgba")(input)?;
    let (input, _) = char('(')(input)?;
    let (input, r) = channel_u8(input)?;
    let (input, g) = preceded(char(','), channel_u8)(input)?;
    let (input, b) = preceded(char(','), channel_u8)(input)?;
    let (input, a) = preceded(char(','), delimited(multispace0, float, multispace0))(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, Color::rgba(r, g, b, a.clamp(0.0, 1.0))))
}

/// Named colors (CSS values for the names the palettes use)
fn named_color(input: &str) -> Option<Color> {
    let color = match input.to_ascii_lowercase().as_str() {
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "red" => Color::rgb(1.0, 0.0, 0.0),
        "green" => Color::from_hex(0x008000),
        "blue" => Color::rgb(0.0, 0.0, 1.0),
        "yellow" => Color::from_hex(0xFFFF00),
        "orange" => Color::from_hex(0xFFA500),
        "purple" => Color::from_hex(0x800080),
        "gray" | "grey" => Color::from_hex(0x808080),
        "transparent" => Color::TRANSPARENT,
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_six_digits() {
        let c = Color::parse("#0095E0").unwrap();
        assert_eq!(c, Color::from_hex(0x0095E0));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_hex_three_digits() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("#000").unwrap(), Color::BLACK);
    }

    #[test]
    fn test_hex_with_alpha_suffix() {
        let c = Color::parse("#57A4FF1A").unwrap();
        assert_eq!(c.with_alpha(1.0), Color::from_hex(0x57A4FF));
        assert!((c.a - 0x1A as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_rgb_function() {
        let c = Color::parse("rgb(24,24,25)").unwrap();
        assert!((c.r - 24.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_rgba_function_with_spaces() {
        let c = Color::parse("rgba(153, 153, 153, 0.24)").unwrap();
        assert!((c.a - 0.24).abs() < 1e-6);
        assert!((c.g - 153.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::parse("green").unwrap(), Color::from_hex(0x008000));
        assert_eq!(Color::parse("transparent").unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn test_invalid_literal() {
        assert!(Color::parse("not-a-color").is_err());
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("rgb(1,2)").is_err());
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(Color::lerp(&a, &b, 0.0), a);
        assert_eq!(Color::lerp(&a, &b, 1.0), b);
        assert_eq!(Color::lerp(&a, &b, 0.5).r, 0.5);
    }
}
