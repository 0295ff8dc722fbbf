//! Append-only table of commands and keybindings.

use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::{debug, warn};
use weft_primitives::Chord;

use crate::{CommandHandler, ContextKeyExpr, KeybindingRule, ServiceAccessor};

#[cfg(test)]
mod tests;

/// One chord-to-command entry of the keybinding table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeybindingItem {
	pub chord: Chord,
	pub command: Arc<str>,
	pub when: Option<ContextKeyExpr>,
	pub weight: i32,
	/// Registration order, used to order items of equal weight.
	pub sequence: usize,
	/// True for the rule's primary chord.
	pub is_primary: bool,
}

#[derive(Default)]
struct Tables {
	rules: Vec<Arc<KeybindingRule>>,
	commands: IndexMap<Arc<str>, CommandHandler>,
	items: Vec<KeybindingItem>,
}

/// Commands and keybindings registered at startup.
#[derive(Default)]
pub struct KeybindingsRegistry {
	tables: RwLock<Tables>,
}

impl std::fmt::Debug for KeybindingsRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let tables = self.tables.read();
		f.debug_struct("KeybindingsRegistry")
			.field("rules", &tables.rules.len())
			.field("commands", &tables.commands.len())
			.field("items", &tables.items.len())
			.finish()
	}
}

impl KeybindingsRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers the rule's command handler and its chords.
	///
	/// Registering an id twice keeps both rules; the later handler replaces
	/// the earlier one.
	pub fn register_command_and_keybinding_rule(&self, rule: KeybindingRule) {
		let mut tables = self.tables.write();
		let command: Arc<str> = Arc::from(rule.id.as_str());

		if tables.commands.insert(command.clone(), rule.handler.clone()).is_some() {
			warn!(command = %command, "command registered twice, replacing handler");
		}

		let sequence = tables.rules.len();
		for (index, chord) in rule.chords().enumerate() {
			tables.items.push(KeybindingItem {
				chord,
				command: command.clone(),
				when: rule.when.clone(),
				weight: rule.weight,
				sequence,
				is_primary: index == 0 && rule.primary.is_some(),
			});
		}

		debug!(
			command = %command,
			chords = rule.secondary.len() + usize::from(rule.primary.is_some()),
			"registered keybinding rule"
		);
		tables.rules.push(Arc::new(rule));
	}

	/// Snapshot of all rules in registration order.
	pub fn rules(&self) -> Vec<Arc<KeybindingRule>> {
		self.tables.read().rules.clone()
	}

	/// The latest rule registered for `id`.
	pub fn rule(&self, id: &str) -> Option<Arc<KeybindingRule>> {
		self.tables.read().rules.iter().rev().find(|rule| rule.id == id).cloned()
	}

	/// Handler registered for `id`.
	pub fn command(&self, id: &str) -> Option<CommandHandler> {
		self.tables.read().commands.get(id).cloned()
	}

	/// Registered command ids in first-registration order.
	pub fn command_ids(&self) -> Vec<Arc<str>> {
		self.tables.read().commands.keys().cloned().collect()
	}

	/// Runs the handler of `id`. Returns false if no such command exists.
	pub fn execute(&self, id: &str, accessor: &mut dyn ServiceAccessor) -> bool {
		let Some(handler) = self.command(id) else {
			debug!(command = id, "no handler for command");
			return false;
		};
		handler(accessor);
		true
	}

	/// The keybinding table, ordered by weight and then registration order.
	pub fn items(&self) -> Vec<KeybindingItem> {
		let mut items = self.tables.read().items.clone();
		items.sort_by_key(|item| (item.weight, item.sequence));
		items
	}

	/// Items bound to `chord`, ordered like [`Self::items`].
	pub fn items_for_chord(&self, chord: Chord) -> Vec<KeybindingItem> {
		let mut items: Vec<_> = self.tables.read().items.iter().filter(|item| item.chord == chord).cloned().collect();
		items.sort_by_key(|item| (item.weight, item.sequence));
		items
	}
}

static KEYBINDINGS: LazyLock<KeybindingsRegistry> = LazyLock::new(KeybindingsRegistry::new);

/// Process-wide keybinding registry.
pub fn keybindings_registry() -> &'static KeybindingsRegistry {
	&KEYBINDINGS
}
