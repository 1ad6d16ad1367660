//! Domain model types (pure).
//!
//! All types in this module are plain data shared by the state machine,
//! the loaders, and the host shell.

pub mod error;
pub mod event;
pub mod item;
pub mod key_action;
pub mod value;

// Re-export for convenience
pub use error::{AppError, ItemsError, LoadError};
pub use event::{ErrorEvent, ErrorKind, SelectEvent};
pub use item::{items_from_strings, Item, RawItem};
pub use key_action::{KeyAction, SelectKey};
pub use value::{JustValue, SelectValue, ValueInput};
