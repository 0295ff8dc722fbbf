//! `weft symbols`: document symbols from a saved `navtree` response.

use std::path::Path;

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::info;
use weft_config::Config;
use weft_symbols::lsp_types::Uri;
use weft_symbols::protocol::NAVTREE_COMMAND;
use weft_symbols::{ClientError, DocumentSymbolProvider, NavTreeClient, NavigationTree, ServerResponse};

/// Contents of a navtree file: a full response envelope or just its body.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NavTreeInput {
	Response(ServerResponse<NavigationTree>),
	Tree(NavigationTree),
}

impl NavTreeInput {
	fn into_response(self) -> ServerResponse<NavigationTree> {
		match self {
			Self::Response(response) => response,
			Self::Tree(tree) => ServerResponse {
				kind: "response".to_string(),
				command: NAVTREE_COMMAND.to_string(),
				request_seq: 0,
				success: true,
				message: None,
				body: Some(tree),
			},
		}
	}
}

/// Replays a recorded response for every `file:` document.
struct RecordedClient {
	response: ServerResponse<NavigationTree>,
}

#[async_trait]
impl NavTreeClient for RecordedClient {
	fn to_open_file_path(&self, uri: &Uri) -> Option<String> {
		uri.as_str().strip_prefix("file://").map(str::to_string)
	}

	async fn navtree(&self, _file: &str) -> Result<Option<NavigationTree>, ClientError> {
		self.response.clone().into_body()
	}
}

pub async fn run(config: &Config, file: &Path, uri: Option<&str>, version: i32) -> anyhow::Result<()> {
	let content = std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
	let input: NavTreeInput =
		serde_json::from_str(&content).with_context(|| format!("parsing navtree from {}", file.display()))?;

	let uri = match uri {
		Some(uri) => uri.to_string(),
		None => format!("file://{}", std::path::absolute(file)?.display()),
	};
	let uri: Uri = uri.parse().map_err(|error| anyhow!("invalid document uri '{uri}': {error}"))?;

	let provider = DocumentSymbolProvider::new(RecordedClient {
		response: input.into_response(),
	})
	.with_cache(config.symbols.cache);

	let symbols = provider
		.provide_document_symbols(&uri, version, &CancellationToken::new())
		.await;
	if symbols.is_none() {
		info!(uri = uri.as_str(), "no document symbols");
	}

	println!("{}", serde_json::to_string_pretty(&symbols)?);
	Ok(())
}
