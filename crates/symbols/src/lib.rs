//! Document symbols from language-service navigation trees.
//!
//! The language service answers a `navtree` request with a tree describing the
//! structure of a file. This crate turns that tree into the editor's
//! [`DocumentSymbol`] model:
//!
//! - [`kind::symbol_kind`] maps protocol kind strings onto [`SymbolKind`]s.
//! - [`convert::convert_tree`] filters and reshapes the tree. Placeholder and
//!   alias entries are dropped and their qualifying descendants are hoisted
//!   into the nearest emitted ancestor.
//! - [`DocumentSymbolProvider`] drives one request through a [`NavTreeClient`],
//!   honouring cancellation and reporting every failure as "no result".
//!
//! [`DocumentSymbol`]: lsp_types::DocumentSymbol
//! [`SymbolKind`]: lsp_types::SymbolKind

/// Re-export of the [`lsp_types`] dependency of this crate.
pub use lsp_types;

pub mod convert;
pub mod kind;
pub mod position;
pub mod protocol;
mod provider;

pub use convert::{convert_node, convert_tree, should_include};
pub use kind::symbol_kind;
pub use protocol::{Location, NavigationTree, ServerResponse, TextSpan};
pub use provider::{CachedResponse, ClientError, DocumentSymbolProvider, NavTreeClient};
