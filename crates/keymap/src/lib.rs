//! Keybinding rules and the quick-pick navigation table.
//!
//! - [`KeybindingsRegistry`]: append-only table of commands, their handlers and
//!   the chords bound to them.
//! - [`ContextKeyExpr`]: `when` clauses deciding when a rule is active.
//! - [`quick_pick`]: the quick-pick list navigation rules, with modifier
//!   variants derived per platform.

mod context;
pub mod quick_pick;
mod registry;
mod rule;

pub use context::{ContextKeyExpr, ContextKeys, ContextValue};
pub use quick_pick::{
	ModifierOptions, QuickInputService, QuickPick, QuickPickFocus, QuickPickRule, build_rule, register_quick_pick_rules,
	secondary_chords,
};
pub use registry::{KeybindingItem, KeybindingsRegistry, keybindings_registry};
pub use rule::{CommandHandler, KeybindingRule, ServiceAccessor, weight};
pub use weft_primitives::{Chord, KeyCode, KeyMod, Platform};
