//! Alpha UI Core
//!
//! Foundational primitives shared by every layer of the styling pipeline:
//!
//! - **Colors**: linear-space RGBA values plus literal parsing for hex,
//!   `rgb()`/`rgba()` and named color strings
//! - **Viewport geometry**: window dimensions, safe-area insets, and
//!   device-class checks read from the host environment
//! - **State machines**: flat interaction state machines owned by
//!   individual composite widgets
//!
//! # Example
//!
//! ```rust
//! use alpha_core::Color;
//!
//! let brand = Color::from_hex(0x0095E0);
//! let literal: Color = "#0095E0".parse().unwrap();
//! assert_eq!(brand, literal);
//! ```

pub mod color;
pub mod fsm;
pub mod geometry;

pub use color::{Color, ColorParseError};
pub use fsm::{EventId, StateId, StateMachine, Transition};
pub use geometry::{EdgeInsets, Viewport};
