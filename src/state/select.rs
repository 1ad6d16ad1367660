//! The select aggregate.
//!
//! `Select` owns one widget instance: its props, its mutable state, the
//! injected loader and clock, and the outbox of notifications. Every
//! operation in the sibling modules is an `impl Select` block that mutates
//! this struct in one synchronous step, so a renderer reading it between
//! calls never observes a partial update.

use crate::config::SelectConfig;
use crate::model::{JustValue, Item, RawItem, SelectEvent, SelectValue, ValueInput};
use crate::source::OptionsLoader;
use crate::state::debounce::{Clock, Debouncer, LoadRequest, SystemClock, TimerHandle};
use crate::state::filter::{filter_items, FilterInput};
use crate::state::hooks::SelectHooks;
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

// ===== SelectState =====

/// Mutable state of one select instance. Pure data, no side effects.
///
/// The filtered list is deliberately absent: it is derived on demand by
/// [`Select::filtered_items`] so it can never go stale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectState {
    /// Raw item list; `None` models an absent list.
    pub items: Option<Vec<RawItem>>,

    /// Current selection.
    pub value: SelectValue,

    /// Selection at the last identity-change notification.
    pub prev_value: SelectValue,

    /// Id-only projection bound to hidden form fields.
    pub just_value: JustValue,

    /// Text typed into the filter input.
    pub filter_text: String,

    /// Filter text at the last load initiation.
    pub prev_filter_text: String,

    /// Whether the option list is shown.
    pub list_open: bool,

    /// Highlighted position in the filtered list.
    /// May point past the end after a shrink; consumers treat that as
    /// "no hovered item".
    pub hover_item_index: usize,

    /// Whether the control has focus. Key handling requires it.
    pub focused: bool,

    /// A load is outstanding.
    pub loading: bool,

    /// Keyboard-focused chip in multi mode.
    pub active_value: Option<usize>,

    /// A scroll gesture is in progress; pointer hover is suppressed.
    pub is_scrolling: bool,

    /// Set while a multi item clear is being projected, so the just-value
    /// is not rehydrated from the value that was just removed.
    pub clear_state: bool,
}

// ===== Select =====

/// One select widget instance.
pub struct Select {
    pub(crate) config: SelectConfig,
    pub(crate) hooks: SelectHooks,
    pub(crate) state: SelectState,
    pub(crate) loader: Option<Rc<dyn OptionsLoader>>,
    pub(crate) debouncer: Debouncer,
    pub(crate) pending_timer: Option<TimerHandle>,
    pub(crate) ready_load: Option<LoadRequest>,
    pub(crate) clock: Rc<dyn Clock>,
    events: Vec<SelectEvent>,
}

impl Select {
    /// Start building a select with the given props.
    pub fn builder(config: SelectConfig) -> SelectBuilder {
        SelectBuilder::new(config)
    }

    /// A select with the given props and no items.
    pub fn new(config: SelectConfig) -> Self {
        SelectBuilder::new(config).build()
    }

    /// Props.
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// Overridable behavior.
    pub fn hooks(&self) -> &SelectHooks {
        &self.hooks
    }

    /// Full state snapshot.
    pub fn state(&self) -> &SelectState {
        &self.state
    }

    /// Current selection.
    pub fn value(&self) -> &SelectValue {
        &self.state.value
    }

    /// Raw items, if any.
    pub fn items(&self) -> Option<&[RawItem]> {
        self.state.items.as_deref()
    }

    /// Current filter text.
    pub fn filter_text(&self) -> &str {
        &self.state.filter_text
    }

    /// Whether the list is open.
    pub fn is_list_open(&self) -> bool {
        self.state.list_open
    }

    /// Highlighted index in the filtered list.
    pub fn hover_item_index(&self) -> usize {
        self.state.hover_item_index
    }

    /// Whether the control has focus.
    pub fn is_focused(&self) -> bool {
        self.state.focused
    }

    /// Whether a load is outstanding.
    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    /// Keyboard-focused chip in multi mode.
    pub fn active_value(&self) -> Option<usize> {
        self.state.active_value
    }

    /// Id-only projection of the selection.
    pub fn just_value(&self) -> &JustValue {
        &self.state.just_value
    }

    /// Whether an options loader is configured.
    pub fn has_loader(&self) -> bool {
        self.loader.is_some()
    }

    /// The pending debounced load, if any.
    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    /// Current time from the injected clock.
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// The list to display, derived from the current inputs.
    pub fn filtered_items(&self) -> Vec<Item> {
        filter_items(&self.filter_input(), &self.hooks)
    }

    /// The hovered entry of the filtered list, if the index is in range.
    pub fn hovered_item(&self) -> Option<Item> {
        self.filtered_items()
            .into_iter()
            .nth(self.state.hover_item_index)
    }

    /// Notifications queued since the last drain, oldest first.
    pub fn events(&self) -> &[SelectEvent] {
        &self.events
    }

    /// Take all queued notifications.
    pub fn drain_events(&mut self) -> Vec<SelectEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: SelectEvent) {
        tracing::trace!(event = event.name(), "Select event");
        self.events.push(event);
    }

    pub(crate) fn filter_input(&self) -> FilterInput<'_> {
        FilterInput {
            items: self.state.items.as_deref(),
            has_loader: self.loader.is_some(),
            filter_text: &self.state.filter_text,
            multiple: self.config.multiple,
            value: &self.state.value,
            item_id: &self.config.item_id,
            label: &self.config.label,
            filter_selected_items: self.config.filter_selected_items,
            group_header_selectable: self.config.group_header_selectable,
        }
    }
}

impl fmt::Debug for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("has_loader", &self.loader.is_some())
            .field("debouncer", &self.debouncer)
            .field("queued_events", &self.events.len())
            .finish_non_exhaustive()
    }
}

// ===== SelectBuilder =====

/// Builder for [`Select`].
///
/// The initial value is normalized against the initial items once, at
/// build time. Construction never queues notifications.
pub struct SelectBuilder {
    config: SelectConfig,
    hooks: SelectHooks,
    items: Option<Vec<RawItem>>,
    value: ValueInput,
    just_value: JustValue,
    filter_text: String,
    loader: Option<Rc<dyn OptionsLoader>>,
    clock: Rc<dyn Clock>,
}

impl SelectBuilder {
    /// Builder with default hooks and no items.
    pub fn new(config: SelectConfig) -> Self {
        Self {
            config,
            hooks: SelectHooks::default(),
            items: None,
            value: ValueInput::None,
            just_value: JustValue::Empty,
            filter_text: String::new(),
            loader: None,
            clock: Rc::new(SystemClock),
        }
    }

    /// Override behavior hooks.
    pub fn hooks(mut self, hooks: SelectHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Initial raw items.
    pub fn items(mut self, items: impl IntoIterator<Item = impl Into<RawItem>>) -> Self {
        self.items = Some(items.into_iter().map(Into::into).collect());
        self
    }

    /// Initial value in any boundary form.
    pub fn value(mut self, value: impl Into<ValueInput>) -> Self {
        self.value = value.into();
        self
    }

    /// Previously submitted id projection, used with `use_just_value`.
    pub fn just_value(mut self, just_value: JustValue) -> Self {
        self.just_value = just_value;
        self
    }

    /// Initial filter text.
    pub fn filter_text(mut self, text: impl Into<String>) -> Self {
        self.filter_text = text.into();
        self
    }

    /// Async options loader.
    pub fn loader(mut self, loader: impl OptionsLoader + 'static) -> Self {
        self.loader = Some(Rc::new(loader));
        self
    }

    /// Shared options loader.
    pub fn shared_loader(mut self, loader: Rc<dyn OptionsLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Time source for debouncing.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Rc::new(clock);
        self
    }

    /// Finish construction.
    pub fn build(self) -> Select {
        let mut hooks = self.hooks;
        if hooks.group_by.is_none() {
            if let Some(field) = self.config.group_by.clone() {
                hooks = hooks.group_by_field(field);
            }
        }

        let mut select = Select {
            config: self.config,
            hooks,
            state: SelectState {
                items: self.items,
                just_value: self.just_value,
                prev_filter_text: self.filter_text.clone(),
                filter_text: self.filter_text,
                ..SelectState::default()
            },
            loader: self.loader,
            debouncer: Debouncer::new(),
            pending_timer: None,
            ready_load: None,
            clock: self.clock,
            events: Vec::new(),
        };

        select.state.value = select.resolve_initial_value(self.value);
        select.reject_duplicates();
        select.compute_just_value();
        select.state.prev_value = select.state.value.clone();
        select.state.hover_item_index = select.first_selectable_index();
        select.events.clear();

        tracing::debug!(
            multiple = select.config.multiple,
            has_loader = select.loader.is_some(),
            has_value = select.state.value.has_value(),
            "Select built"
        );
        select
    }
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
