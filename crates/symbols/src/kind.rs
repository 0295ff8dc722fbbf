//! Protocol kind strings to editor symbol kinds.

use lsp_types::SymbolKind;

use crate::protocol::kinds;

/// Maps a script element kind onto a [`SymbolKind`].
///
/// Unrecognized kinds map to [`SymbolKind::VARIABLE`].
pub fn symbol_kind(kind: &str) -> SymbolKind {
	match kind {
		kinds::MODULE => SymbolKind::MODULE,
		kinds::CLASS => SymbolKind::CLASS,
		kinds::ENUM => SymbolKind::ENUM,
		kinds::INTERFACE => SymbolKind::INTERFACE,
		kinds::METHOD => SymbolKind::METHOD,
		kinds::MEMBER_VARIABLE | kinds::MEMBER_GET_ACCESSOR | kinds::MEMBER_SET_ACCESSOR => SymbolKind::PROPERTY,
		kinds::VARIABLE | kinds::CONST | kinds::LOCAL_VARIABLE => SymbolKind::VARIABLE,
		kinds::FUNCTION | kinds::LOCAL_FUNCTION => SymbolKind::FUNCTION,
		kinds::CONSTRUCT_SIGNATURE | kinds::CONSTRUCTOR_IMPLEMENTATION => SymbolKind::CONSTRUCTOR,
		_ => SymbolKind::VARIABLE,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn table() {
		for (kind, expected) in [
			("module", SymbolKind::MODULE),
			("class", SymbolKind::CLASS),
			("enum", SymbolKind::ENUM),
			("interface", SymbolKind::INTERFACE),
			("method", SymbolKind::METHOD),
			("property", SymbolKind::PROPERTY),
			("getter", SymbolKind::PROPERTY),
			("setter", SymbolKind::PROPERTY),
			("var", SymbolKind::VARIABLE),
			("const", SymbolKind::VARIABLE),
			("local var", SymbolKind::VARIABLE),
			("function", SymbolKind::FUNCTION),
			("local function", SymbolKind::FUNCTION),
			("construct", SymbolKind::CONSTRUCTOR),
			("constructor", SymbolKind::CONSTRUCTOR),
		] {
			assert_eq!(symbol_kind(kind), expected, "kind {kind}");
		}
	}

	#[test]
	fn unknown_defaults_to_variable() {
		assert_eq!(symbol_kind("let"), SymbolKind::VARIABLE);
		assert_eq!(symbol_kind("type"), SymbolKind::VARIABLE);
		assert_eq!(symbol_kind(""), SymbolKind::VARIABLE);
	}
}
