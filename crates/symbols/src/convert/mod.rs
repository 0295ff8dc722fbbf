//! Navigation tree to document symbol conversion.
//!
//! The conversion is a depth-first walk returning a keep flag alongside the
//! converted nodes. A node that does not qualify is not emitted, but its
//! qualifying descendants are moved into the output list of the nearest
//! emitted ancestor and its keep flag still reports them upward.

use lsp_types::{DocumentSymbol, Range, SymbolTag};

use crate::kind::symbol_kind;
use crate::position::{contains, intersects, span_to_range};
use crate::protocol::{NavigationTree, kind_modifiers, kinds};


/// Labels the service uses for anonymous functions and classes.
pub const PLACEHOLDER_LABELS: [&str; 2] = ["<function>", "<class>"];

/// Returns true if `item` should appear as a symbol of its own.
///
/// Aliases, unnamed items and placeholder labels are excluded.
pub fn should_include(item: &NavigationTree) -> bool {
	if item.kind == kinds::ALIAS {
		return false;
	}
	!item.text.is_empty() && !PLACEHOLDER_LABELS.contains(&item.text.as_str())
}

/// Converts a whole tree. The root represents the file itself and is not emitted.
pub fn convert_tree(root: &NavigationTree) -> Vec<DocumentSymbol> {
	let mut output = Vec::new();
	for item in &root.child_items {
		convert_node(&mut output, item);
	}
	output
}

/// Converts `item` into `output` and returns whether anything was kept.
///
/// One symbol is built per span of `item`. Each child is assigned to the first
/// span it intersects and converted into that symbol's children; children that
/// intersect no span are dropped.
pub fn convert_node(output: &mut Vec<DocumentSymbol>, item: &NavigationTree) -> bool {
	let qualifies = should_include(item);
	if !qualifies && item.child_items.is_empty() {
		return false;
	}

	let mut keep = qualifies;
	let mut pending: Vec<&NavigationTree> = item.child_items.iter().collect();

	for span in &item.spans {
		let range = span_to_range(span);
		let mut children = Vec::new();

		pending.retain(|child| {
			let inside = child.spans.iter().any(|s| intersects(&range, &span_to_range(s)));
			if inside {
				keep |= convert_node(&mut children, child);
			}
			!inside
		});

		if qualifies {
			output.push(convert_symbol(item, range, children));
		} else {
			output.extend(children);
		}
	}

	keep
}

fn convert_symbol(item: &NavigationTree, range: Range, children: Vec<DocumentSymbol>) -> DocumentSymbol {
	let selection_range = item
		.name_span
		.as_ref()
		.map(span_to_range)
		.filter(|name| contains(&range, name))
		.unwrap_or(range);

	let name = match item.kind.as_str() {
		kinds::MEMBER_GET_ACCESSOR => format!("(get) {}", item.text),
		kinds::MEMBER_SET_ACCESSOR => format!("(set) {}", item.text),
		_ => item.text.clone(),
	};

	let tags = item
		.modifiers()
		.contains(kind_modifiers::DEPRECATED)
		.then(|| vec![SymbolTag::DEPRECATED]);

	#[allow(deprecated, reason = "DocumentSymbol::deprecated is superseded by tags but still a field")]
	let symbol = DocumentSymbol {
		name,
		detail: None,
		kind: symbol_kind(&item.kind),
		tags,
		deprecated: None,
		range,
		selection_range,
		children: (!children.is_empty()).then_some(children),
	};
	symbol
}
