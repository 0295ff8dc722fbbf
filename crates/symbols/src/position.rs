//! Span conversion between the service's one-based locations and editor ranges.

use lsp_types::{Position, Range};

use crate::protocol::{Location, TextSpan};

/// Converts a one-based location to a zero-based position.
pub fn location_to_position(location: Location) -> Position {
	Position::new(location.line.saturating_sub(1), location.offset.saturating_sub(1))
}

/// Converts a span to a range.
pub fn span_to_range(span: &TextSpan) -> Range {
	Range::new(location_to_position(span.start), location_to_position(span.end))
}

fn key(position: Position) -> (u32, u32) {
	(position.line, position.character)
}

/// Returns true if the ranges overlap or touch.
pub fn intersects(a: &Range, b: &Range) -> bool {
	let start = key(a.start).max(key(b.start));
	let end = key(a.end).min(key(b.end));
	start <= end
}

/// Returns true if `inner` lies within `outer` (bounds inclusive).
pub fn contains(outer: &Range, inner: &Range) -> bool {
	key(outer.start) <= key(inner.start) && key(inner.end) <= key(outer.end)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn range(sl: u32, sc: u32, el: u32, ec: u32) -> Range {
		Range::new(Position::new(sl, sc), Position::new(el, ec))
	}

	#[test]
	fn test_span_is_zero_based() {
		let span = TextSpan::new(Location::new(1, 1), Location::new(3, 5));
		assert_eq!(span_to_range(&span), range(0, 0, 2, 4));
	}

	#[test]
	fn test_zero_location_saturates() {
		assert_eq!(location_to_position(Location::new(0, 0)), Position::new(0, 0));
	}

	#[test]
	fn test_intersection() {
		assert!(intersects(&range(0, 0, 5, 0), &range(2, 0, 3, 0)));
		assert!(intersects(&range(0, 0, 2, 0), &range(2, 0, 3, 0)));
		assert!(!intersects(&range(0, 0, 1, 9), &range(2, 0, 3, 0)));
		assert!(!intersects(&range(4, 0, 5, 0), &range(2, 0, 3, 0)));
	}

	#[test]
	fn test_containment() {
		assert!(contains(&range(0, 0, 5, 0), &range(0, 0, 5, 0)));
		assert!(contains(&range(0, 0, 5, 0), &range(1, 4, 1, 7)));
		assert!(!contains(&range(1, 0, 5, 0), &range(0, 4, 1, 7)));
	}
}
