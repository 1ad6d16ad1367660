//! Async load-options controller.
//!
//! A load is split in two halves around the only suspension point in the
//! widget:
//!
//! - [`Select::handle_load_options`] marks the widget as loading and either
//!   queues the request for immediate execution or parks it on the
//!   debouncer.
//! - [`Select::apply_load_outcome`] commits whatever the loader resolved to,
//!   re-reading current state at that moment rather than state captured when
//!   the request started.
//!
//! [`drive_load`] glues the two together for a `RefCell`-shared select. The
//! controller keeps no request generations: superseded requests are expected
//! to resolve to `LoadResponse::Cancelled`, which leaves state untouched.

use crate::model::{ErrorEvent, ErrorKind, Item, JustValue, LoadError, RawItem, SelectEvent, SelectValue};
use crate::source::LoadResponse;
use crate::state::debounce::LoadRequest;
use crate::state::equality::{is_string_list, items_equal};
use crate::state::filter::canonical_items;
use crate::state::select::Select;
use std::cell::RefCell;
use std::time::Duration;

/// Why a load is being initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTrigger {
    /// The user edited the filter text; debounced when the text changed.
    FilterText,
    /// A host-side dependency changed; runs immediately.
    Dependencies,
}

impl Select {
    /// Enter the load controller.
    ///
    /// With a loader and not disabled: sets `loading`, then debounces a
    /// filter-text change or queues anything else for immediate execution.
    /// Non-empty filter text opens a closed list. With a loader but disabled,
    /// the selection, just-value, and raw items are cleared instead.
    pub fn handle_load_options(&mut self, trigger: LoadTrigger) {
        if self.loader.is_none() {
            return;
        }
        if self.config.disabled {
            self.clear_for_disabled();
            return;
        }

        self.state.loading = true;
        let request = LoadRequest {
            filter_text: self.state.filter_text.clone(),
        };
        let is_filter_text_change = trigger == LoadTrigger::FilterText
            && self.state.filter_text != self.state.prev_filter_text;
        self.state.prev_filter_text = self.state.filter_text.clone();

        if is_filter_text_change {
            let wait = Duration::from_millis(self.config.debounce_wait_ms);
            let now = self.clock.now();
            self.pending_timer = Some(self.debouncer.schedule(request, wait, now));
            tracing::debug!(filter_text = %self.state.filter_text, ?wait, "Load debounced");
        } else {
            tracing::debug!(filter_text = %self.state.filter_text, "Load queued");
            self.ready_load = Some(request);
        }

        if !self.state.filter_text.is_empty() && !self.state.list_open {
            self.state.list_open = true;
        }
    }

    /// Reload for a dependency change, bypassing the debounce window.
    pub fn reload_options(&mut self) {
        self.handle_load_options(LoadTrigger::Dependencies);
    }

    /// Take the next load that should run now.
    ///
    /// Immediate requests win over debounced ones; a debounced request is
    /// returned only once its window has elapsed on the injected clock.
    /// A disabled widget never has a due load.
    pub fn poll_due_load(&mut self) -> Option<LoadRequest> {
        if self.config.disabled {
            return None;
        }
        if let Some(request) = self.ready_load.take() {
            return Some(request);
        }
        let now = self.clock.now();
        self.debouncer.take_ready(now)
    }

    /// Commit a loader result.
    ///
    /// Results arriving after the widget was disabled are dropped.
    pub fn apply_load_outcome(&mut self, outcome: Result<LoadResponse, LoadError>) {
        if self.config.disabled {
            tracing::debug!("Load resolved while disabled; discarding");
            return;
        }
        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "loadOptions error");
                self.emit(SelectEvent::Error(ErrorEvent {
                    kind: ErrorKind::LoadOptions,
                    details: err.to_string(),
                }));
                self.state.items = None;
                self.state.loading = false;
                return;
            }
        };

        self.state.items = match response {
            LoadResponse::Cancelled => {
                tracing::debug!("Load cancelled by loader; keeping state");
                return;
            }
            LoadResponse::Null => None,
            LoadResponse::Items(raw) if is_string_list(&raw) => {
                Some(canonical_items(&raw).into_iter().map(RawItem::Object).collect())
            }
            LoadResponse::Items(raw) => Some(raw),
        };

        let loaded: Vec<Item> = self
            .state
            .items
            .as_deref()
            .map(canonical_items)
            .unwrap_or_default();

        if self.state.value.has_value() {
            if loaded.is_empty() {
                self.state.value = SelectValue::cleared(self.config.multiple);
            } else if !self.value_present_in(&loaded) {
                tracing::debug!("Selected value vanished from loaded items");
                self.state.value = SelectValue::cleared(self.config.multiple);
                if self.config.use_just_value {
                    self.state.just_value = JustValue::cleared(self.config.multiple);
                }
            }
        }

        self.state.loading = false;
        tracing::debug!(count = loaded.len(), "Options loaded");
        self.emit(SelectEvent::Loaded(loaded));
        self.sync_value();
        self.reset_hover();
    }

    fn value_present_in(&self, loaded: &[Item]) -> bool {
        let item_id = self.config.item_id.as_str();
        let present = |selected: &Item| {
            loaded
                .iter()
                .any(|candidate| items_equal(Some(candidate), Some(selected), item_id))
        };
        match &self.state.value {
            SelectValue::Empty => true,
            SelectValue::Single(item) => present(item),
            SelectValue::Multiple(items) => items.iter().all(present),
        }
    }

    /// Enable or disable the widget.
    ///
    /// Disabling with a loader configured drops the selection, the
    /// just-value, and the raw items, since they can no longer be refreshed.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        if disabled {
            self.state.list_open = false;
            self.handle_load_options(LoadTrigger::Dependencies);
        }
    }

    fn clear_for_disabled(&mut self) {
        let has_just_value = self.config.use_just_value && self.state.just_value.is_present();
        if self.state.value.has_value() || has_just_value {
            self.state.value = SelectValue::cleared(self.config.multiple);
            if self.config.use_just_value {
                self.state.just_value = JustValue::cleared(self.config.multiple);
            }
        }
        self.cancel_pending_loads();
        self.state.items = None;
        self.sync_value();
    }

    fn cancel_pending_loads(&mut self) {
        if let Some(handle) = self.pending_timer.take() {
            if self.debouncer.cancel(handle) {
                tracing::debug!("Debounced load cancelled");
            }
        }
        self.ready_load = None;
        self.state.loading = false;
    }
}

/// Run one load against a shared select.
///
/// The borrow is released while the loader's future is pending, so other
/// handlers may mutate the select in the meantime; the outcome is applied to
/// whatever state exists when it resolves.
pub async fn drive_load(select: &RefCell<Select>, request: LoadRequest) {
    let pending = {
        let select = select.borrow();
        match select.loader.as_ref() {
            Some(loader) => loader.load(&request.filter_text),
            None => return,
        }
    };

    let outcome = pending.await;
    select.borrow_mut().apply_load_outcome(outcome);
}

/// Drain and run every load that is due now, one after another.
pub async fn drive_due_loads(select: &RefCell<Select>) {
    loop {
        let next = select.borrow_mut().poll_due_load();
        match next {
            Some(request) => drive_load(select, request).await,
            None => break,
        }
    }
}

#[cfg(test)]
#[path = "load_options_tests.rs"]
mod tests;
