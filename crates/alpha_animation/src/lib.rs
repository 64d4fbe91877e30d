//! Alpha UI Animation Values
//!
//! Value production for widget presentation timelines: easing curves,
//! multi-track timelines, and spring physics.
//!
//! This crate never blocks or schedules anything. Widgets set target values
//! and start/stop timelines; the host's animation clock drives `tick`/`step`
//! each frame and reads the current values back.

pub mod easing;
pub mod spring;
pub mod timeline;

pub use easing::Easing;
pub use spring::{Spring, SpringConfig};
pub use timeline::{Timeline, TrackId};
