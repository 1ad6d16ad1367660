//! Option loaders.
//!
//! A loader is the injected collaborator that produces items for a given
//! filter text. The core never performs I/O itself: it hands the loader a
//! filter string and applies whatever the returned future resolves to.

pub mod file;
pub mod memory;

pub use file::{read_items_file, JsonFileLoader};
pub use memory::StaticLoader;

use crate::model::{LoadError, RawItem};
use futures::future::LocalBoxFuture;
use std::fmt;

/// What a loader resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadResponse {
    /// A list of items or plain strings.
    Items(Vec<RawItem>),
    /// No result; treated as an empty item set.
    Null,
    /// The loader superseded this request; state must stay untouched.
    Cancelled,
}

impl From<Vec<RawItem>> for LoadResponse {
    fn from(items: Vec<RawItem>) -> Self {
        LoadResponse::Items(items)
    }
}

/// Future returned by [`OptionsLoader::load`].
pub type LoadFuture = LocalBoxFuture<'static, Result<LoadResponse, LoadError>>;

/// Asynchronous source of options.
pub trait OptionsLoader {
    /// Start fetching items for `filter_text`.
    ///
    /// The returned future must not borrow from `self`; loaders clone
    /// whatever they need before the first await.
    fn load(&self, filter_text: &str) -> LoadFuture;
}

/// Adapter turning a closure into an [`OptionsLoader`].
pub struct FnLoader<F>(F);

impl<F> OptionsLoader for FnLoader<F>
where
    F: Fn(&str) -> LoadFuture,
{
    fn load(&self, filter_text: &str) -> LoadFuture {
        (self.0)(filter_text)
    }
}

impl<F> fmt::Debug for FnLoader<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnLoader")
    }
}

/// Wrap a closure as a loader.
///
/// ```
/// use dropselect::source::{loader_fn, LoadResponse, OptionsLoader};
/// use futures::FutureExt;
///
/// let loader = loader_fn(|text: &str| {
///     let items = vec![text.to_uppercase().into()];
///     async move { Ok(LoadResponse::Items(items)) }.boxed_local()
/// });
/// let result = futures::executor::block_on(loader.load("abc")).unwrap();
/// assert_eq!(result, LoadResponse::Items(vec!["ABC".into()]));
/// ```
pub fn loader_fn<F>(f: F) -> FnLoader<F>
where
    F: Fn(&str) -> LoadFuture,
{
    FnLoader(f)
}
