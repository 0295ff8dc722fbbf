//! Wire types of the language service's `navtree` request.
//!
//! Field names follow the service's camelCase JSON. Lines and offsets are
//! one-based.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ClientError;

/// Request command name.
pub const NAVTREE_COMMAND: &str = "navtree";

/// Script element kind strings.
pub mod kinds {
	pub const ALIAS: &str = "alias";
	pub const CLASS: &str = "class";
	pub const CONST: &str = "const";
	pub const CONSTRUCT_SIGNATURE: &str = "construct";
	pub const CONSTRUCTOR_IMPLEMENTATION: &str = "constructor";
	pub const ENUM: &str = "enum";
	pub const FUNCTION: &str = "function";
	pub const INTERFACE: &str = "interface";
	pub const LET: &str = "let";
	pub const LOCAL_FUNCTION: &str = "local function";
	pub const LOCAL_VARIABLE: &str = "local var";
	pub const MEMBER_GET_ACCESSOR: &str = "getter";
	pub const MEMBER_SET_ACCESSOR: &str = "setter";
	pub const MEMBER_VARIABLE: &str = "property";
	pub const METHOD: &str = "method";
	pub const MODULE: &str = "module";
	pub const SCRIPT: &str = "script";
	pub const TYPE: &str = "type";
	pub const VARIABLE: &str = "var";
}

/// Kind modifier strings.
pub mod kind_modifiers {
	pub const DEPRECATED: &str = "deprecated";
	pub const EXPORT: &str = "export";
	pub const OPTIONAL: &str = "optional";
}

/// Position in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
	/// One-based line.
	pub line: u32,
	/// One-based character offset within the line.
	pub offset: u32,
}

impl Location {
	pub const fn new(line: u32, offset: u32) -> Self {
		Self { line, offset }
	}
}

/// Half-open span between two locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextSpan {
	pub start: Location,
	pub end: Location,
}

impl TextSpan {
	pub const fn new(start: Location, end: Location) -> Self {
		Self { start, end }
	}
}

/// One node of a navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationTree {
	/// Display text; empty or a placeholder such as `<function>` for anonymous items.
	pub text: String,
	/// Script element kind, see [`kinds`].
	pub kind: String,
	/// Comma or whitespace separated modifiers, see [`kind_modifiers`].
	#[serde(default)]
	pub kind_modifiers: String,
	/// Spans covered by this item. Merged declarations have several.
	#[serde(default)]
	pub spans: Vec<TextSpan>,
	/// Span of the item's name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name_span: Option<TextSpan>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub child_items: Vec<NavigationTree>,
}

impl NavigationTree {
	/// Creates a leaf node covering one span.
	pub fn new(text: impl Into<String>, kind: impl Into<String>, span: TextSpan) -> Self {
		Self {
			text: text.into(),
			kind: kind.into(),
			spans: vec![span],
			..Self::default()
		}
	}

	/// Builder-style child list.
	#[must_use]
	pub fn with_children(mut self, children: Vec<NavigationTree>) -> Self {
		self.child_items = children;
		self
	}

	/// Builder-style kind modifiers.
	#[must_use]
	pub fn with_modifiers(mut self, modifiers: impl Into<String>) -> Self {
		self.kind_modifiers = modifiers.into();
		self
	}

	/// Builder-style name span.
	#[must_use]
	pub fn with_name_span(mut self, span: TextSpan) -> Self {
		self.name_span = Some(span);
		self
	}

	/// Parsed set of kind modifiers.
	pub fn modifiers(&self) -> HashSet<&str> {
		parse_kind_modifiers(&self.kind_modifiers)
	}
}

/// Splits a kind-modifier string on commas and whitespace.
pub fn parse_kind_modifiers(modifiers: &str) -> HashSet<&str> {
	modifiers
		.split(|c: char| c == ',' || c.is_whitespace())
		.filter(|m| !m.is_empty())
		.collect()
}

/// Response envelope of a language-service request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerResponse<T> {
	/// Always `"response"` for responses.
	#[serde(rename = "type")]
	pub kind: String,
	pub command: String,
	#[serde(default, rename = "request_seq")]
	pub request_seq: u64,
	pub success: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub body: Option<T>,
}

impl<T> ServerResponse<T> {
	/// Unwraps the body of a successful response.
	///
	/// # Errors
	///
	/// Returns [`ClientError::Server`] when the service reported a failure and
	/// [`ClientError::Protocol`] when the envelope is not a response.
	pub fn into_body(self) -> Result<Option<T>, ClientError> {
		if self.kind != "response" {
			return Err(ClientError::Protocol(format!("expected a response, got '{}'", self.kind)));
		}
		if !self.success {
			return Err(ClientError::Server(self.message.unwrap_or_else(|| format!("{} failed", self.command))));
		}
		Ok(self.body)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_deserialize_wire_format() {
		let json = r#"{
			"type": "response",
			"command": "navtree",
			"request_seq": 7,
			"success": true,
			"body": {
				"text": "\"main\"",
				"kind": "script",
				"kindModifiers": "",
				"spans": [{ "start": { "line": 1, "offset": 1 }, "end": { "line": 9, "offset": 1 } }],
				"childItems": [{
					"text": "Foo",
					"kind": "class",
					"kindModifiers": "export,deprecated",
					"spans": [{ "start": { "line": 2, "offset": 1 }, "end": { "line": 4, "offset": 2 } }],
					"nameSpan": { "start": { "line": 2, "offset": 14 }, "end": { "line": 2, "offset": 17 } }
				}]
			}
		}"#;

		let response: ServerResponse<NavigationTree> = serde_json::from_str(json).unwrap();
		assert_eq!(response.request_seq, 7);
		let tree = response.into_body().unwrap().unwrap();
		assert_eq!(tree.kind, kinds::SCRIPT);
		assert_eq!(tree.child_items.len(), 1);

		let class = &tree.child_items[0];
		assert_eq!(class.name_span, Some(TextSpan::new(Location::new(2, 14), Location::new(2, 17))));
		assert!(class.child_items.is_empty());
		assert_eq!(class.modifiers(), HashSet::from(["export", "deprecated"]));
	}

	#[test]
	fn test_failed_response_is_error() {
		let response: ServerResponse<NavigationTree> =
			serde_json::from_str(r#"{ "type": "response", "command": "navtree", "success": false, "message": "No Project." }"#)
				.unwrap();
		assert!(matches!(response.into_body(), Err(ClientError::Server(msg)) if msg == "No Project."));
	}

	#[test]
	fn test_modifier_separators() {
		assert_eq!(parse_kind_modifiers("export, declare\toptional"), HashSet::from(["export", "declare", "optional"]));
		assert!(parse_kind_modifiers("").is_empty());
	}
}
