//! Document symbol provider over a language-service client.

use std::sync::Arc;

use async_trait::async_trait;
use lsp_types::{DocumentSymbol, Uri};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::convert::convert_tree;
use crate::protocol::NavigationTree;

mod cache;

#[cfg(test)]
mod tests;

pub use cache::CachedResponse;

/// Errors a [`NavTreeClient`] may report.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ClientError {
	/// The service answered with a failure.
	#[error("server error: {0}")]
	Server(String),
	/// The request was cancelled before a response arrived.
	#[error("request cancelled")]
	Cancelled,
	/// The service process is not running.
	#[error("server stopped")]
	ServerStopped,
	/// The response could not be decoded.
	#[error("deserialization failed: {0}")]
	Deserialize(#[from] serde_json::Error),
	/// The peer violated the request/response protocol.
	#[error("protocol error: {0}")]
	Protocol(String),
}

/// Connection to the language service.
#[async_trait]
pub trait NavTreeClient: Send + Sync {
	/// Resolves the service-side path of an open document, if the service knows it.
	fn to_open_file_path(&self, uri: &Uri) -> Option<String>;

	/// Executes a `navtree` request for `file`. `Ok(None)` means the response had no body.
	async fn navtree(&self, file: &str) -> Result<Option<NavigationTree>, ClientError>;
}

#[async_trait]
impl<T: NavTreeClient + ?Sized> NavTreeClient for Arc<T> {
	fn to_open_file_path(&self, uri: &Uri) -> Option<String> {
		(**self).to_open_file_path(uri)
	}

	async fn navtree(&self, file: &str) -> Result<Option<NavigationTree>, ClientError> {
		(**self).navtree(file).await
	}
}

/// Provides document symbols for open documents.
pub struct DocumentSymbolProvider<C> {
	client: C,
	cache: Option<CachedResponse>,
}

impl<C: NavTreeClient> DocumentSymbolProvider<C> {
	/// Creates a provider that caches the last response.
	pub fn new(client: C) -> Self {
		Self {
			client,
			cache: Some(CachedResponse::new()),
		}
	}

	/// Enables or disables response caching.
	#[must_use]
	pub fn with_cache(mut self, enabled: bool) -> Self {
		self.cache = enabled.then(CachedResponse::new);
		self
	}

	/// The underlying client.
	pub fn client(&self) -> &C {
		&self.client
	}

	/// Computes the symbols of document `uri` at `version`.
	///
	/// Returns `None` when the document is not known to the service, when the
	/// request fails or is cancelled through `token`, or when the response
	/// carries no items. Failures are never propagated.
	pub async fn provide_document_symbols(
		&self,
		uri: &Uri,
		version: i32,
		token: &CancellationToken,
	) -> Option<Vec<DocumentSymbol>> {
		let Some(file) = self.client.to_open_file_path(uri) else {
			debug!(uri = uri.as_str(), "document not open in language service");
			return None;
		};

		let tree = match &self.cache {
			Some(cache) => cache.execute(uri, version, || self.fetch(&file, token)).await,
			None => self.fetch(&file, token).await,
		}?;

		if tree.child_items.is_empty() {
			debug!(file = file.as_str(), "navtree response has no items");
			return None;
		}

		// The root item represents the file itself.
		Some(convert_tree(&tree))
	}

	async fn fetch(&self, file: &str, token: &CancellationToken) -> Option<Arc<NavigationTree>> {
		if token.is_cancelled() {
			debug!(file, "navtree request cancelled before dispatch");
			return None;
		}

		let result = tokio::select! {
			biased;
			() = token.cancelled() => Err(ClientError::Cancelled),
			result = self.client.navtree(file) => result,
		};

		match result {
			Ok(Some(tree)) => Some(Arc::new(tree)),
			Ok(None) => {
				debug!(file, "navtree response has no body");
				None
			}
			Err(error) => {
				debug!(file, %error, "navtree request failed");
				None
			}
		}
	}
}
