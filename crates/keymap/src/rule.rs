//! Keybinding rules and the command handlers they invoke.

use std::fmt;
use std::sync::Arc;

use weft_primitives::{Chord, Platform};

use crate::ContextKeyExpr;
use crate::quick_pick::QuickInputService;

/// Rule weights. When several rules bind the same chord, the higher weight wins.
pub mod weight {
	pub const EDITOR_CORE: i32 = 0;
	pub const EDITOR_CONTRIB: i32 = 100;
	pub const WORKBENCH_CONTRIB: i32 = 200;
	pub const BUILTIN_EXTENSION: i32 = 300;
	pub const EXTERNAL_EXTENSION: i32 = 400;
}

/// The services a command handler can reach.
pub trait ServiceAccessor {
	/// The quick-input service, if the host has one.
	fn quick_input(&mut self) -> Option<&mut dyn QuickInputService> {
		None
	}
}

/// Handler invoked when a command runs.
pub type CommandHandler = Arc<dyn Fn(&mut dyn ServiceAccessor) + Send + Sync>;

/// A command plus the chords that trigger it.
#[derive(Clone)]
pub struct KeybindingRule {
	/// Command id, e.g. `quickInput.next`.
	pub id: String,
	/// See [`weight`].
	pub weight: i32,
	/// Activation predicate; `None` means always active.
	pub when: Option<ContextKeyExpr>,
	/// Primary chord shown in menus.
	pub primary: Option<Chord>,
	/// Additional chords.
	pub secondary: Vec<Chord>,
	/// Description shown in the keybindings editor.
	pub description: Option<String>,
	pub handler: CommandHandler,
}

impl KeybindingRule {
	/// Creates an unbound, always-active rule.
	pub fn new<F>(id: impl Into<String>, handler: F) -> Self
	where
		F: Fn(&mut dyn ServiceAccessor) + Send + Sync + 'static,
	{
		Self {
			id: id.into(),
			weight: weight::WORKBENCH_CONTRIB,
			when: None,
			primary: None,
			secondary: Vec::new(),
			description: None,
			handler: Arc::new(handler),
		}
	}

	/// Primary chord followed by the secondary chords.
	pub fn chords(&self) -> impl Iterator<Item = Chord> + '_ {
		self.primary.iter().chain(self.secondary.iter()).copied()
	}

	/// Chord labels for `platform`, primary first.
	pub fn labels(&self, platform: Platform) -> Vec<String> {
		self.chords().map(|chord| chord.label(platform)).collect()
	}
}

impl fmt::Debug for KeybindingRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("KeybindingRule")
			.field("id", &self.id)
			.field("weight", &self.weight)
			.field("when", &self.when.as_ref().map(ToString::to_string))
			.field("primary", &self.primary)
			.field("secondary", &self.secondary)
			.field("description", &self.description)
			.finish_non_exhaustive()
	}
}
