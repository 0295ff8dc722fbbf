use std::future::Future;
use std::sync::Arc;

use lsp_types::Uri;
use parking_lot::Mutex;
use tracing::trace;

use crate::protocol::NavigationTree;

#[derive(Debug)]
struct Entry {
	uri: String,
	version: i32,
	tree: Arc<NavigationTree>,
}

/// Single-slot cache of the last successful response, keyed by document and version.
///
/// Symbols are typically requested by several consumers (outline, breadcrumbs,
/// sticky scroll) for the same document version in quick succession.
#[derive(Debug, Default)]
pub struct CachedResponse {
	entry: Mutex<Option<Entry>>,
}

impl CachedResponse {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the cached tree for `uri` at `version`, or runs `fetch` and
	/// caches its result if it succeeded.
	pub async fn execute<F, Fut>(&self, uri: &Uri, version: i32, fetch: F) -> Option<Arc<NavigationTree>>
	where
		F: FnOnce() -> Fut,
		Fut: Future<Output = Option<Arc<NavigationTree>>>,
	{
		if let Some(tree) = self.get(uri, version) {
			trace!(uri = uri.as_str(), version, "navtree cache hit");
			return Some(tree);
		}

		let tree = fetch().await?;
		*self.entry.lock() = Some(Entry {
			uri: uri.as_str().to_string(),
			version,
			tree: tree.clone(),
		});
		Some(tree)
	}

	/// Looks up the cached tree without fetching.
	pub fn get(&self, uri: &Uri, version: i32) -> Option<Arc<NavigationTree>> {
		self.entry
			.lock()
			.as_ref()
			.filter(|entry| entry.version == version && entry.uri == uri.as_str())
			.map(|entry| entry.tree.clone())
	}

	/// Drops the cached response.
	pub fn clear(&self) {
		*self.entry.lock() = None;
	}
}
