//! JSON item files.
//!
//! Provides a one-shot reader for the demo's static item list and a loader
//! that re-reads the file on every request, so edits to the file show up on
//! the next keystroke.

use super::{LoadFuture, LoadResponse, OptionsLoader};
use crate::model::error::ItemsError;
use crate::model::{LoadError, RawItem};
use futures::FutureExt;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a JSON array of strings and/or objects.
///
/// # Errors
///
/// Returns `ItemsError::FileNotFound` if the file does not exist.
/// Returns `ItemsError::InvalidJson` if the content is not an item array.
/// Returns `ItemsError::Io` for other I/O errors.
pub fn read_items_file(path: impl AsRef<Path>) -> Result<Vec<RawItem>, ItemsError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ItemsError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let items: Vec<RawItem> =
        serde_json::from_str(&content).map_err(|e| ItemsError::InvalidJson {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(path = %path.display(), count = items.len(), "Read items file");
    Ok(items)
}

/// Loader backed by a JSON file, filtered by label on each request.
#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    path: PathBuf,
    label: String,
}

impl JsonFileLoader {
    /// Serve items from `path`, matching against the `label` field.
    pub fn new(path: impl Into<PathBuf>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

impl OptionsLoader for JsonFileLoader {
    fn load(&self, filter_text: &str) -> LoadFuture {
        let path = self.path.clone();
        let label = self.label.clone();
        let needle = filter_text.to_lowercase();

        async move {
            let content = fs::read_to_string(&path)?;
            let raw: Vec<RawItem> = serde_json::from_str(&content)?;
            let matching = raw
                .into_iter()
                .filter(|entry| {
                    let text = match entry {
                        RawItem::Text(text) => Some(text.to_lowercase()),
                        RawItem::Object(item) => item.label(&label).map(|l| l.to_lowercase()),
                    };
                    text.is_some_and(|t| t.contains(&needle))
                })
                .collect();
            Ok::<_, LoadError>(LoadResponse::Items(matching))
        }
        .boxed_local()
    }
}
