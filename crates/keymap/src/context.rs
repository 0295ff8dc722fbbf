//! Context keys and the `when` predicates evaluated against them.

use std::collections::HashMap;
use std::fmt;

/// Value of a context key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextValue {
	Bool(bool),
	String(String),
}

impl ContextValue {
	/// Truthiness used by [`ContextKeyExpr::Has`].
	pub fn is_truthy(&self) -> bool {
		match self {
			ContextValue::Bool(b) => *b,
			ContextValue::String(s) => !s.is_empty(),
		}
	}
}

impl From<bool> for ContextValue {
	fn from(value: bool) -> Self {
		ContextValue::Bool(value)
	}
}

impl From<&str> for ContextValue {
	fn from(value: &str) -> Self {
		ContextValue::String(value.to_string())
	}
}

impl From<String> for ContextValue {
	fn from(value: String) -> Self {
		ContextValue::String(value)
	}
}

impl fmt::Display for ContextValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ContextValue::Bool(b) => write!(f, "{b}"),
			ContextValue::String(s) => write!(f, "'{s}'"),
		}
	}
}

/// The set of context keys active at some point in the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextKeys {
	values: HashMap<String, ContextValue>,
}

impl ContextKeys {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets `key` to `value`, replacing any previous value.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<ContextValue>) -> &mut Self {
		self.values.insert(key.into(), value.into());
		self
	}

	/// Builder-style [`Self::set`].
	#[must_use]
	pub fn with(mut self, key: impl Into<String>, value: impl Into<ContextValue>) -> Self {
		self.set(key, value);
		self
	}

	pub fn get(&self, key: &str) -> Option<&ContextValue> {
		self.values.get(key)
	}

	pub fn remove(&mut self, key: &str) -> Option<ContextValue> {
		self.values.remove(key)
	}
}

/// A `when` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextKeyExpr {
	/// Key is set to a truthy value.
	Has(String),
	/// Key equals a value.
	Equals(String, ContextValue),
	/// Negation.
	Not(Box<ContextKeyExpr>),
	/// All operands hold.
	And(Vec<ContextKeyExpr>),
	/// Any operand holds.
	Or(Vec<ContextKeyExpr>),
}

impl ContextKeyExpr {
	pub fn has(key: impl Into<String>) -> Self {
		Self::Has(key.into())
	}

	pub fn equals(key: impl Into<String>, value: impl Into<ContextValue>) -> Self {
		Self::Equals(key.into(), value.into())
	}

	pub fn not(expr: ContextKeyExpr) -> Self {
		Self::Not(Box::new(expr))
	}

	pub fn and(exprs: impl IntoIterator<Item = ContextKeyExpr>) -> Self {
		Self::And(exprs.into_iter().collect())
	}

	pub fn or(exprs: impl IntoIterator<Item = ContextKeyExpr>) -> Self {
		Self::Or(exprs.into_iter().collect())
	}

	/// Evaluates the clause against `keys`. Missing keys are falsy.
	pub fn evaluate(&self, keys: &ContextKeys) -> bool {
		match self {
			Self::Has(key) => keys.get(key).is_some_and(ContextValue::is_truthy),
			Self::Equals(key, value) => keys.get(key) == Some(value),
			Self::Not(expr) => !expr.evaluate(keys),
			Self::And(exprs) => exprs.iter().all(|e| e.evaluate(keys)),
			Self::Or(exprs) => exprs.iter().any(|e| e.evaluate(keys)),
		}
	}

	fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, parent_is_and: bool) -> fmt::Result {
		if parent_is_and && matches!(self, Self::Or(exprs) if exprs.len() > 1) {
			write!(f, "({self})")
		} else {
			write!(f, "{self}")
		}
	}
}

impl fmt::Display for ContextKeyExpr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Has(key) => f.write_str(key),
			Self::Equals(key, ContextValue::Bool(true)) => f.write_str(key),
			Self::Equals(key, value) => write!(f, "{key} == {value}"),
			Self::Not(expr) => match expr.as_ref() {
				Self::Has(_) => write!(f, "!{expr}"),
				_ => write!(f, "!({expr})"),
			},
			Self::And(exprs) | Self::Or(exprs) => {
				let is_and = matches!(self, Self::And(_));
				let sep = if is_and { " && " } else { " || " };
				for (i, expr) in exprs.iter().enumerate() {
					if i > 0 {
						f.write_str(sep)?;
					}
					expr.fmt_operand(f, is_and)?;
				}
				Ok(())
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn quick_pick_when() -> ContextKeyExpr {
		ContextKeyExpr::and([
			ContextKeyExpr::or([
				ContextKeyExpr::equals("quickInputType", "quickPick"),
				ContextKeyExpr::equals("quickInputType", "quickTree"),
			]),
			ContextKeyExpr::has("inQuickInput"),
		])
	}

	#[test]
	fn test_evaluate() {
		let when = quick_pick_when();
		let mut keys = ContextKeys::new().with("inQuickInput", true).with("quickInputType", "quickPick");
		assert!(when.evaluate(&keys));

		keys.set("quickInputType", "quickTree");
		assert!(when.evaluate(&keys));

		keys.set("quickInputType", "inputBox");
		assert!(!when.evaluate(&keys));

		keys.set("quickInputType", "quickPick").set("inQuickInput", false);
		assert!(!when.evaluate(&keys));

		keys.remove("inQuickInput");
		assert!(!when.evaluate(&keys));
	}

	#[test]
	fn test_not() {
		let expr = ContextKeyExpr::not(ContextKeyExpr::has("editorFocus"));
		assert!(expr.evaluate(&ContextKeys::new()));
		assert!(!expr.evaluate(&ContextKeys::new().with("editorFocus", true)));
		assert_eq!(expr.to_string(), "!editorFocus");
	}

	#[test]
	fn test_display() {
		assert_eq!(
			quick_pick_when().to_string(),
			"(quickInputType == 'quickPick' || quickInputType == 'quickTree') && inQuickInput"
		);
	}
}
