//! In-memory options loader.

use super::{LoadFuture, LoadResponse, OptionsLoader};
use crate::model::{Item, LoadError, RawItem};
use futures::FutureExt;

/// Loader that filters a fixed item list by label.
///
/// Useful for demos and tests: it behaves like a remote search endpoint
/// without any I/O. A configured failure makes every load reject.
#[derive(Debug, Clone)]
pub struct StaticLoader {
    items: Vec<Item>,
    label: String,
    failure: Option<String>,
}

impl StaticLoader {
    /// Serve `items`, matching filter text against the `label` field.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            label: "label".to_string(),
            failure: None,
        }
    }

    /// Match against a different label field.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Reject every load with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            label: "label".to_string(),
            failure: Some(message.into()),
        }
    }

    fn matching(&self, filter_text: &str) -> Vec<RawItem> {
        let needle = filter_text.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.label(&self.label)
                    .is_some_and(|label| label.to_lowercase().contains(&needle))
            })
            .cloned()
            .map(RawItem::Object)
            .collect()
    }
}

impl OptionsLoader for StaticLoader {
    fn load(&self, filter_text: &str) -> LoadFuture {
        let result = match &self.failure {
            Some(message) => Err(LoadError::failed(message.clone())),
            None => Ok(LoadResponse::Items(self.matching(filter_text))),
        };
        tracing::debug!(filter_text, ok = result.is_ok(), "Static load");
        async move { result }.boxed_local()
    }
}
