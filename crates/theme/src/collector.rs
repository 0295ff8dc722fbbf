//! Style-rule collection.

use indexmap::IndexSet;

/// Sink for the style rules a theming participant emits.
pub trait StyleCollector {
	/// Adds one style rule.
	fn add_rule(&mut self, rule: &str);
}

/// Ordered, de-duplicated set of style rules.
///
/// Several participants commonly emit the same rule for shared widgets; only
/// the first occurrence is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
	rules: IndexSet<String>,
}

impl RuleSet {
	/// Creates an empty rule set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Rules in first-seen order.
	pub fn rules(&self) -> Vec<&str> {
		self.rules.iter().map(String::as_str).collect()
	}

	/// Number of distinct rules.
	pub fn len(&self) -> usize {
		self.rules.len()
	}

	/// Returns true if no rule was collected.
	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	/// Joins all rules into a single stylesheet, one rule per line.
	pub fn to_stylesheet(&self) -> String {
		let mut out = String::new();
		for rule in &self.rules {
			out.push_str(rule);
			out.push('\n');
		}
		out
	}
}

impl StyleCollector for RuleSet {
	fn add_rule(&mut self, rule: &str) {
		if !self.rules.contains(rule) {
			self.rules.insert(rule.to_string());
		}
	}
}

impl StyleCollector for Vec<String> {
	fn add_rule(&mut self, rule: &str) {
		self.push(rule.to_string());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rule_set_dedupes_in_order() {
		let mut rules = RuleSet::new();
		rules.add_rule(".a { color: red; }");
		rules.add_rule(".b { color: blue; }");
		rules.add_rule(".a { color: red; }");

		assert_eq!(rules.len(), 2);
		assert_eq!(rules.rules(), [".a { color: red; }", ".b { color: blue; }"]);
		assert_eq!(rules.to_stylesheet(), ".a { color: red; }\n.b { color: blue; }\n");
	}
}
