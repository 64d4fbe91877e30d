//! Elevation shadow lookup table
//!
//! Integer depth levels 1-10 map to hand-tuned platform shadow descriptors.
//! The numbers are not formula-derived; they are carried verbatim so shadow
//! rendering stays bit-exact across ports.

use alpha_core::Color;

/// Platform shadow descriptor for one elevation level
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElevationShadow {
    pub offset_width: f32,
    pub offset_height: f32,
    pub opacity: f32,
    pub radius: f32,
    /// Flat elevation number for platforms that take a single depth value
    pub android_elevation: u8,
    pub color: Color,
}

impl ElevationShadow {
    const fn level(offset_height: f32, opacity: f32, radius: f32, android_elevation: u8) -> Self {
        Self {
            offset_width: 0.0,
            offset_height,
            opacity,
            radius,
            android_elevation,
            color: Color::BLACK,
        }
    }
}

/// Look up the shadow descriptor for an elevation level.
///
/// Level 0 and anything outside the table yield no shadow.
pub fn elevation(level: u8) -> Option<ElevationShadow> {
    let shadow = match level {
        1 => ElevationShadow::level(1.0, 0.18, 1.00, 1),
        2 => ElevationShadow::level(1.0, 0.20, 1.41, 2),
        3 => ElevationShadow::level(1.0, 0.22, 2.22, 3),
        4 => ElevationShadow::level(2.0, 0.23, 2.62, 4),
        5 => ElevationShadow::level(2.0, 0.25, 3.84, 5),
        6 => ElevationShadow::level(3.0, 0.27, 4.65, 6),
        7 => ElevationShadow::level(3.0, 0.29, 4.65, 7),
        8 => ElevationShadow::level(4.0, 0.30, 4.65, 8),
        9 => ElevationShadow::level(4.0, 0.32, 5.46, 9),
        10 => ElevationShadow::level(5.0, 0.34, 6.27, 10),
        _ => return None,
    };
    Some(shadow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_zero_and_out_of_range_are_empty() {
        assert_eq!(elevation(0), None);
        assert_eq!(elevation(11), None);
        assert_eq!(elevation(255), None);
    }

    #[test]
    fn test_level_three_exact_descriptor() {
        let shadow = elevation(3).unwrap();
        assert_eq!(shadow.opacity, 0.22);
        assert_eq!(shadow.radius, 2.22);
        assert_eq!(shadow.android_elevation, 3);
        assert_eq!(shadow.offset_height, 1.0);
        assert_eq!(shadow.offset_width, 0.0);
        assert_eq!(shadow.color, Color::BLACK);
    }

    #[test]
    fn test_table_is_monotonic_in_opacity() {
        let mut last = 0.0;
        for level in 1..=10 {
            let shadow = elevation(level).unwrap();
            assert!(shadow.opacity >= last, "level {level}");
            last = shadow.opacity;
        }
    }
}
