use std::sync::atomic::{AtomicUsize, Ordering};

use lsp_types::SymbolKind;
use parking_lot::Mutex;

use super::*;
use crate::protocol::{Location, TextSpan, kinds};

enum Reply {
	Tree(NavigationTree),
	NoBody,
	Fail,
	Hang,
}

struct MockClient {
	calls: AtomicUsize,
	reply: Mutex<Reply>,
}

impl MockClient {
	fn new(reply: Reply) -> Arc<Self> {
		Arc::new(Self {
			calls: AtomicUsize::new(0),
			reply: Mutex::new(reply),
		})
	}

	fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl NavTreeClient for MockClient {
	fn to_open_file_path(&self, uri: &Uri) -> Option<String> {
		uri.as_str().strip_prefix("file://").map(str::to_string)
	}

	async fn navtree(&self, _file: &str) -> Result<Option<NavigationTree>, ClientError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		let reply = match &*self.reply.lock() {
			Reply::Tree(tree) => Some(Ok(Some(tree.clone()))),
			Reply::NoBody => Some(Ok(None)),
			Reply::Fail => Some(Err(ClientError::Server("No Project.".into()))),
			Reply::Hang => None,
		};
		match reply {
			Some(reply) => reply,
			None => std::future::pending().await,
		}
	}
}

fn span(start: u32, end: u32) -> TextSpan {
	TextSpan::new(Location::new(start, 1), Location::new(end, 1))
}

fn sample_tree() -> NavigationTree {
	NavigationTree::new("\"main\"", kinds::SCRIPT, span(1, 20)).with_children(vec![
		NavigationTree::new("Foo", kinds::CLASS, span(1, 10))
			.with_children(vec![NavigationTree::new("bar", kinds::METHOD, span(2, 4))]),
		NavigationTree::new("<function>", kinds::FUNCTION, span(12, 14)),
	])
}

fn uri(s: &str) -> Uri {
	s.parse().unwrap()
}

#[tokio::test]
async fn test_provides_converted_symbols() {
	let client = MockClient::new(Reply::Tree(sample_tree()));
	let provider = DocumentSymbolProvider::new(client.clone());

	let symbols = provider
		.provide_document_symbols(&uri("file:///src/main.ts"), 1, &CancellationToken::new())
		.await
		.unwrap();

	assert_eq!(symbols.len(), 1);
	assert_eq!(symbols[0].name, "Foo");
	assert_eq!(symbols[0].kind, SymbolKind::CLASS);
	assert_eq!(symbols[0].children.as_ref().unwrap()[0].name, "bar");
}

#[tokio::test]
async fn test_unknown_document_yields_none() {
	let client = MockClient::new(Reply::Tree(sample_tree()));
	let provider = DocumentSymbolProvider::new(client.clone());

	let result = provider
		.provide_document_symbols(&uri("untitled:Untitled-1"), 1, &CancellationToken::new())
		.await;
	assert!(result.is_none());
	assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_rejection_yields_none() {
	let provider = DocumentSymbolProvider::new(MockClient::new(Reply::Fail));
	let result = provider
		.provide_document_symbols(&uri("file:///a.ts"), 1, &CancellationToken::new())
		.await;
	assert!(result.is_none());
}

#[tokio::test]
async fn test_missing_body_or_items_yields_none() {
	let provider = DocumentSymbolProvider::new(MockClient::new(Reply::NoBody));
	assert!(provider.provide_document_symbols(&uri("file:///a.ts"), 1, &CancellationToken::new()).await.is_none());

	let empty = NavigationTree::new("\"a\"", kinds::SCRIPT, span(1, 1));
	let provider = DocumentSymbolProvider::new(MockClient::new(Reply::Tree(empty)));
	assert!(provider.provide_document_symbols(&uri("file:///a.ts"), 1, &CancellationToken::new()).await.is_none());
}

#[tokio::test]
async fn test_cancellation_yields_none() {
	let client = MockClient::new(Reply::Hang);
	let provider = DocumentSymbolProvider::new(client.clone());
	let token = CancellationToken::new();
	let document = uri("file:///slow.ts");

	let (result, ()) = tokio::join!(provider.provide_document_symbols(&document, 1, &token), async {
		tokio::task::yield_now().await;
		token.cancel();
	});

	assert!(result.is_none());
	assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn test_already_cancelled_skips_request() {
	let client = MockClient::new(Reply::Tree(sample_tree()));
	let provider = DocumentSymbolProvider::new(client.clone());
	let token = CancellationToken::new();
	token.cancel();

	assert!(provider.provide_document_symbols(&uri("file:///a.ts"), 1, &token).await.is_none());
	assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_cache_reuses_response_per_version() {
	let client = MockClient::new(Reply::Tree(sample_tree()));
	let provider = DocumentSymbolProvider::new(client.clone());
	let token = CancellationToken::new();
	let document = uri("file:///a.ts");

	let first = provider.provide_document_symbols(&document, 3, &token).await;
	let second = provider.provide_document_symbols(&document, 3, &token).await;
	assert_eq!(first, second);
	assert_eq!(client.calls(), 1);

	provider.provide_document_symbols(&document, 4, &token).await;
	assert_eq!(client.calls(), 2);

	provider.provide_document_symbols(&uri("file:///b.ts"), 4, &token).await;
	assert_eq!(client.calls(), 3);
}

#[tokio::test]
async fn test_failures_are_not_cached() {
	let client = MockClient::new(Reply::Fail);
	let provider = DocumentSymbolProvider::new(client.clone());
	let token = CancellationToken::new();
	let document = uri("file:///a.ts");

	assert!(provider.provide_document_symbols(&document, 1, &token).await.is_none());
	*client.reply.lock() = Reply::Tree(sample_tree());
	assert!(provider.provide_document_symbols(&document, 1, &token).await.is_some());
	assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn test_cache_disabled() {
	let client = MockClient::new(Reply::Tree(sample_tree()));
	let provider = DocumentSymbolProvider::new(client.clone()).with_cache(false);
	let token = CancellationToken::new();
	let document = uri("file:///a.ts");

	provider.provide_document_symbols(&document, 1, &token).await;
	provider.provide_document_symbols(&document, 1, &token).await;
	assert_eq!(client.calls(), 2);
}
