//! dropselect
//!
//! A headless select/combobox state machine with a terminal host.
//!
//! The core ([`state::Select`]) owns the selection, the filter text, hover,
//! focus, and async option loading. It is driven by plain method calls and
//! reports back through a queue of [`model::SelectEvent`]s, so it can sit
//! behind any renderer. [`view`] is one such renderer built on ratatui.
//!
//! ```
//! use dropselect::config::SelectConfig;
//! use dropselect::model::{Item, SelectEvent, SelectKey};
//! use dropselect::state::Select;
//!
//! let mut select = Select::builder(SelectConfig::default())
//!     .items(vec![Item::labeled("pizza", "Pizza"), Item::labeled("cake", "Cake")])
//!     .build();
//!
//! select.handle_focus();
//! select.set_filter_text("ca");
//! select.handle_key_down(SelectKey::Enter);
//!
//! assert_eq!(select.value().as_single(), Some(&Item::labeled("cake", "Cake")));
//! assert!(select
//!     .drain_events()
//!     .iter()
//!     .any(|e| matches!(e, SelectEvent::Change(_))));
//! ```

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
