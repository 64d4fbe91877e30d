//! Alpha UI Widgets
//!
//! The renderable surface of the library:
//!
//! - **Leaf prop records** (`view`, `text`, `input`, `image`, `list`) —
//!   shorthand-prop wrappers that resolve into concrete styles against the
//!   UI context
//! - **Composite widgets** (select, bottom sheet, password field, date
//!   field, button, progress bar) — leaves plus per-instance interaction
//!   state machines
//!
//! Widget state is owned exclusively by the instance: created on mount,
//! discarded on unmount, never shared. None of these machines define error
//! states; malformed input is accepted silently.

mod button;
mod date_field;
mod image;
mod input;
mod leaf;
mod list;
mod password;
mod progress;
mod select;
mod sheet;
mod text;
mod tokens;
mod view;

pub use button::{button, Button};
pub use date_field::{DateField, DateValue};
pub use image::{image, ImageProps, ResizeMode};
pub use input::{input, InputProps};
pub use list::{list, ListProps};
pub use password::PasswordField;
pub use progress::ProgressBar;
pub use select::{Select, SelectOption, SelectionEvent};
pub use sheet::{sheet_states, BottomSheet};
pub use text::{text, TextProps};
pub use tokens::{InputTokens, INPUT_TOKENS};
pub use view::{view, ViewProps};
