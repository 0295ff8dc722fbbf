use std::sync::atomic::{AtomicUsize, Ordering};

use weft_primitives::{KeyCode, KeyMod, Platform};

use super::*;
use crate::quick_pick::{self, commands};
use crate::weight;

struct NoServices;

impl ServiceAccessor for NoServices {}

fn counting_rule(id: &str, counter: &Arc<AtomicUsize>) -> KeybindingRule {
	let counter = counter.clone();
	KeybindingRule::new(id, move |_| {
		counter.fetch_add(1, Ordering::SeqCst);
	})
}

#[test]
fn test_register_and_execute() {
	let registry = KeybindingsRegistry::new();
	let counter = Arc::new(AtomicUsize::new(0));
	let mut rule = counting_rule("test.run", &counter);
	rule.primary = Some(KeyMod::CTRL_CMD | KeyCode::Char('r'));
	registry.register_command_and_keybinding_rule(rule);

	assert!(registry.execute("test.run", &mut NoServices));
	assert!(!registry.execute("test.missing", &mut NoServices));
	assert_eq!(counter.load(Ordering::SeqCst), 1);
	assert_eq!(registry.rules().len(), 1);
	assert_eq!(registry.items().len(), 1);
	assert!(registry.items()[0].is_primary);
}

#[test]
fn test_duplicate_command_keeps_rules_and_latest_handler() {
	let registry = KeybindingsRegistry::new();
	let first = Arc::new(AtomicUsize::new(0));
	let second = Arc::new(AtomicUsize::new(0));

	let mut a = counting_rule("test.dup", &first);
	a.primary = Some(KeyCode::F(1).into());
	let mut b = counting_rule("test.dup", &second);
	b.primary = Some(KeyCode::F(2).into());
	registry.register_command_and_keybinding_rule(a);
	registry.register_command_and_keybinding_rule(b);

	registry.execute("test.dup", &mut NoServices);
	assert_eq!(first.load(Ordering::SeqCst), 0);
	assert_eq!(second.load(Ordering::SeqCst), 1);
	assert_eq!(registry.rules().len(), 2);
	assert_eq!(registry.command_ids().len(), 1);
	assert_eq!(registry.rule("test.dup").unwrap().primary, Some(Chord::from(KeyCode::F(2))));
}

#[test]
fn test_items_sorted_by_weight_then_registration() {
	let registry = KeybindingsRegistry::new();
	let counter = Arc::new(AtomicUsize::new(0));
	let chord = KeyMod::ALT | KeyCode::DownArrow;

	let mut heavy = counting_rule("test.heavy", &counter);
	heavy.primary = Some(chord);
	heavy.weight = weight::EXTERNAL_EXTENSION;
	registry.register_command_and_keybinding_rule(heavy);

	quick_pick::register_quick_pick_rules(&registry, Platform::Linux);

	let items = registry.items_for_chord(chord);
	let bound: Vec<&str> = items.iter().map(|item| &*item.command).collect();
	assert_eq!(bound, [commands::NEXT_SEPARATOR_WITH_QUICK_ACCESS_FALLBACK, "test.heavy"]);
	assert!(items[0].when.is_some());
	assert!(items[1].when.is_none());
}

#[test]
fn test_secondary_items_are_not_primary() {
	let registry = KeybindingsRegistry::new();
	quick_pick::register_quick_pick_rules(&registry, Platform::Linux);

	let items = registry.items_for_chord(KeyMod::CTRL_CMD | KeyCode::DownArrow);
	assert_eq!(items.len(), 1);
	assert_eq!(&*items[0].command, commands::NEXT);
	assert!(!items[0].is_primary);
}

#[test]
fn test_global_registry() {
	let counter = Arc::new(AtomicUsize::new(0));
	keybindings_registry().register_command_and_keybinding_rule(counting_rule("test.global", &counter));
	assert!(keybindings_registry().command("test.global").is_some());
	assert!(keybindings_registry().rule("test.global").unwrap().primary.is_none());
}
