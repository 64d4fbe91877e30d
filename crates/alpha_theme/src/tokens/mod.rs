//! Design tokens
//!
//! The atomic values of the design system: semantic colors, font families,
//! and the elevation shadow table.

mod color;
mod elevation;
mod typography;

pub use color::*;
pub use elevation::*;
pub use typography::*;
