//! Select state machine (pure).
//!
//! All transitions are synchronous methods on [`Select`] or free functions
//! over plain data, testable without a terminal. The only asynchronous
//! piece is [`drive_load`], which awaits the injected loader between two
//! synchronous halves.

pub mod aria;
pub mod debounce;
pub mod equality;
pub mod filter;
pub mod group;
pub mod hooks;
pub mod hover;
pub mod keyboard;
pub mod load_options;
pub mod pointer;
pub mod select;
pub mod value;

// Re-export for convenience
pub use aria::{aria_context, aria_selection};
pub use debounce::{Clock, Debouncer, LoadRequest, ManualClock, SystemClock, TimerHandle};
pub use equality::{is_item_selectable, is_selectable, is_string_list, items_equal, value_changed};
pub use filter::{canonical_items, filter_items, FilterInput};
pub use group::group_items;
pub use hooks::SelectHooks;
pub use hover::{first_selectable_index, is_active, next_index, Direction};
pub use keyboard::KeyOutcome;
pub use load_options::{drive_due_loads, drive_load, LoadTrigger};
pub use select::{Select, SelectBuilder, SelectState};
