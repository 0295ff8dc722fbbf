//! Quick-pick list navigation keybindings.
//!
//! Every navigation command is bound to a primary chord plus modifier
//! variants of it, so that navigation keeps working while the user still
//! holds the modifier that opened the picker. [`ModifierOptions`] selects
//! which variants a rule gets; [`secondary_chords`] enumerates them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use weft_primitives::{Chord, KeyCode, KeyMod, Platform};

use crate::{CommandHandler, ContextKeyExpr, KeybindingRule, KeybindingsRegistry, ServiceAccessor, weight};


/// Context key set while any quick input is visible.
pub const IN_QUICK_INPUT: &str = "inQuickInput";
/// Context key holding the kind of the visible quick input.
pub const QUICK_INPUT_TYPE: &str = "quickInputType";
/// [`QUICK_INPUT_TYPE`] value of a flat quick pick.
pub const QUICK_PICK: &str = "quickPick";
/// [`QUICK_INPUT_TYPE`] value of a tree-shaped quick pick.
pub const QUICK_TREE: &str = "quickTree";

/// Description attached to every quick-pick rule unless the rule has its own.
pub const DEFAULT_DESCRIPTION: &str = "Used while in the context of the quick pick. If you change one keybinding for this \
	command, you should change all of the other keybindings (modifier variants) of this command as well.";

const NEXT_SEPARATOR_FALLBACK_DESCRIPTION: &str = "If we're in quick access mode, this will navigate to the next item. \
	If we are not in quick access mode, this will navigate to the next separator.";
const PREVIOUS_SEPARATOR_FALLBACK_DESCRIPTION: &str = "If we're in quick access mode, this will navigate to the \
	previous item. If we are not in quick access mode, this will navigate to the previous separator.";

/// Command ids.
pub mod commands {
	pub const PAGE_NEXT: &str = "quickInput.pageNext";
	pub const PAGE_PREVIOUS: &str = "quickInput.pagePrevious";
	pub const FIRST: &str = "quickInput.first";
	pub const LAST: &str = "quickInput.last";
	pub const NEXT: &str = "quickInput.next";
	pub const PREVIOUS: &str = "quickInput.previous";
	pub const NEXT_SEPARATOR_WITH_QUICK_ACCESS_FALLBACK: &str = "quickInput.nextSeparatorWithQuickAccessFallback";
	pub const NEXT_SEPARATOR: &str = "quickInput.nextSeparator";
	pub const PREVIOUS_SEPARATOR_WITH_QUICK_ACCESS_FALLBACK: &str = "quickInput.previousSeparatorWithQuickAccessFallback";
	pub const PREVIOUS_SEPARATOR: &str = "quickInput.previousSeparator";
}

/// Item a navigation command moves the quick-pick focus to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickPickFocus {
	First,
	Last,
	Next,
	Previous,
	NextPage,
	PreviousPage,
	NextSeparator,
	PreviousSeparator,
}

/// A visible quick pick.
pub trait QuickPick {
	/// Moves the focus.
	fn focus(&mut self, focus: QuickPickFocus);

	/// True while the picker was opened in quick-navigate mode, i.e. the
	/// opening modifier is still held.
	fn quick_navigate(&self) -> bool {
		false
	}
}

/// Host service owning the active quick input.
pub trait QuickInputService {
	/// The active quick pick, if the visible quick input is one.
	fn current_quick_pick(&mut self) -> Option<&mut dyn QuickPick>;
}

/// Which modifier variants of the primary chord a rule also binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModifierOptions {
	/// Bind Alt + primary.
	pub with_alt_mod: bool,
	/// Bind Ctrl + primary (the physical Control key on macOS).
	pub with_ctrl_mod: bool,
	/// Bind Cmd + primary. Only applies on macOS.
	pub with_cmd_mod: bool,
}

impl ModifierOptions {
	/// No variants.
	pub const NONE: Self = Self {
		with_alt_mod: false,
		with_ctrl_mod: false,
		with_cmd_mod: false,
	};

	/// Every variant.
	pub const ALL: Self = Self {
		with_alt_mod: true,
		with_ctrl_mod: true,
		with_cmd_mod: true,
	};

	#[must_use]
	pub const fn alt(self) -> Self {
		Self { with_alt_mod: true, ..self }
	}

	#[must_use]
	pub const fn ctrl(self) -> Self {
		Self { with_ctrl_mod: true, ..self }
	}

	#[must_use]
	pub const fn cmd(self) -> Self {
		Self { with_cmd_mod: true, ..self }
	}
}

/// A quick-pick rule before defaults and modifier variants are applied.
#[derive(Clone)]
pub struct QuickPickRule {
	pub id: String,
	/// Required; [`build_rule`] panics without it.
	pub primary: Option<Chord>,
	pub secondary: Vec<Chord>,
	/// Overrides [`DEFAULT_DESCRIPTION`].
	pub description: Option<String>,
	pub handler: CommandHandler,
}

impl QuickPickRule {
	pub fn new(id: impl Into<String>, primary: Chord, handler: CommandHandler) -> Self {
		Self {
			id: id.into(),
			primary: Some(primary),
			secondary: Vec::new(),
			description: None,
			handler,
		}
	}

	#[must_use]
	pub fn with_secondary(mut self, secondary: Vec<Chord>) -> Self {
		self.secondary = secondary;
		self
	}

	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}
}

/// The `when` clause shared by all quick-pick rules.
pub fn quick_pick_when() -> ContextKeyExpr {
	ContextKeyExpr::and([
		ContextKeyExpr::or([
			ContextKeyExpr::equals(QUICK_INPUT_TYPE, QUICK_PICK),
			ContextKeyExpr::equals(QUICK_INPUT_TYPE, QUICK_TREE),
		]),
		ContextKeyExpr::has(IN_QUICK_INPUT),
	])
}

/// Appends the modifier variants of `primary` selected by `options` to `existing`.
///
/// Order: alt, ctrl, alt+ctrl, then on macOS only cmd, cmd+ctrl, cmd+alt,
/// cmd+alt+ctrl. Variant modifiers are added to those already on `primary`.
pub fn secondary_chords(primary: Chord, existing: &[Chord], options: ModifierOptions, platform: Platform) -> Vec<Chord> {
	let ctrl = KeyMod::ctrl_for(platform);
	let mut chords = existing.to_vec();

	if options.with_alt_mod {
		chords.push(primary.add(KeyMod::ALT));
	}
	if options.with_ctrl_mod {
		chords.push(primary.add(ctrl));
		if options.with_alt_mod {
			chords.push(primary.add(KeyMod::ALT | ctrl));
		}
	}

	if options.with_cmd_mod && platform.is_mac() {
		chords.push(primary.add(KeyMod::CTRL_CMD));
		if options.with_ctrl_mod {
			chords.push(primary.add(KeyMod::CTRL_CMD | KeyMod::WIN_CTRL));
		}
		if options.with_alt_mod {
			chords.push(primary.add(KeyMod::CTRL_CMD | KeyMod::ALT));
			if options.with_ctrl_mod {
				chords.push(primary.add(KeyMod::CTRL_CMD | KeyMod::ALT | KeyMod::WIN_CTRL));
			}
		}
	}

	chords
}

/// Applies the quick-pick defaults to `base` and derives its secondary chords.
///
/// # Panics
///
/// Panics if `base` has no primary chord.
pub fn build_rule(base: QuickPickRule, options: ModifierOptions, platform: Platform) -> KeybindingRule {
	let Some(primary) = base.primary else {
		panic!("quick pick rule '{}' has no primary keybinding", base.id);
	};

	KeybindingRule {
		secondary: secondary_chords(primary, &base.secondary, options, platform),
		id: base.id,
		weight: weight::WORKBENCH_CONTRIB,
		when: Some(quick_pick_when()),
		primary: Some(primary),
		description: Some(base.description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string())),
		handler: base.handler,
	}
}

/// Handler moving the focus of the active quick pick.
///
/// With `quick_navigate_fallback` set, a picker in quick-navigate mode is
/// moved with the fallback instead.
pub fn focus_handler(focus: QuickPickFocus, quick_navigate_fallback: Option<QuickPickFocus>) -> CommandHandler {
	std::sync::Arc::new(move |accessor: &mut dyn ServiceAccessor| {
		let Some(picker) = accessor.quick_input().and_then(|service| service.current_quick_pick()) else {
			return;
		};
		match quick_navigate_fallback {
			Some(fallback) if picker.quick_navigate() => picker.focus(fallback),
			_ => picker.focus(focus),
		}
	})
}

/// The quick-pick navigation rules before variants are derived, with their default options.
pub fn quick_pick_rule_specs(platform: Platform) -> Vec<(QuickPickRule, ModifierOptions)> {
	use QuickPickFocus as Focus;
	use commands::*;

	let ctrl = KeyMod::ctrl_for(platform);
	let rule = |id: &str, primary: Chord, focus: Focus| QuickPickRule::new(id, primary, focus_handler(focus, None));

	let mut specs = vec![
		(rule(PAGE_NEXT, KeyCode::PageDown.into(), Focus::NextPage), ModifierOptions::ALL),
		(rule(PAGE_PREVIOUS, KeyCode::PageUp.into(), Focus::PreviousPage), ModifierOptions::ALL),
		(rule(FIRST, ctrl | KeyCode::Home, Focus::First), ModifierOptions::NONE.alt().cmd()),
		(rule(LAST, ctrl | KeyCode::End, Focus::Last), ModifierOptions::NONE.alt().cmd()),
		(rule(NEXT, KeyCode::DownArrow.into(), Focus::Next), ModifierOptions::NONE.ctrl()),
		(rule(PREVIOUS, KeyCode::UpArrow.into(), Focus::Previous), ModifierOptions::NONE.ctrl()),
	];

	let fallback = |id: &str, primary: Chord, focus: Focus, on_quick_navigate: Focus, description: &str| {
		QuickPickRule::new(id, primary, focus_handler(focus, Some(on_quick_navigate))).with_description(description)
	};

	// In quick access mode the opening modifier is still held, so modifier+arrow
	// must move to the next item; the separator commands fall back accordingly.
	// macOS holds Cmd for that, so separator navigation moves to Cmd+Alt there.
	if platform.is_mac() {
		specs.extend([
			(
				fallback(
					NEXT_SEPARATOR_WITH_QUICK_ACCESS_FALLBACK,
					KeyMod::CTRL_CMD | KeyCode::DownArrow,
					Focus::NextSeparator,
					Focus::Next,
					NEXT_SEPARATOR_FALLBACK_DESCRIPTION,
				),
				ModifierOptions::NONE,
			),
			(
				rule(NEXT_SEPARATOR, (KeyMod::CTRL_CMD | KeyMod::ALT) | KeyCode::DownArrow, Focus::NextSeparator)
					.with_secondary(vec![(KeyMod::CTRL_CMD | KeyMod::WIN_CTRL) | KeyCode::DownArrow]),
				ModifierOptions::NONE.ctrl(),
			),
			(
				fallback(
					PREVIOUS_SEPARATOR_WITH_QUICK_ACCESS_FALLBACK,
					KeyMod::CTRL_CMD | KeyCode::UpArrow,
					Focus::PreviousSeparator,
					Focus::Previous,
					PREVIOUS_SEPARATOR_FALLBACK_DESCRIPTION,
				),
				ModifierOptions::NONE,
			),
			(
				rule(PREVIOUS_SEPARATOR, (KeyMod::CTRL_CMD | KeyMod::ALT) | KeyCode::UpArrow, Focus::PreviousSeparator)
					.with_secondary(vec![(KeyMod::CTRL_CMD | KeyMod::WIN_CTRL) | KeyCode::UpArrow]),
				ModifierOptions::NONE.ctrl(),
			),
		]);
	} else {
		specs.extend([
			(
				fallback(
					NEXT_SEPARATOR_WITH_QUICK_ACCESS_FALLBACK,
					KeyMod::ALT | KeyCode::DownArrow,
					Focus::NextSeparator,
					Focus::Next,
					NEXT_SEPARATOR_FALLBACK_DESCRIPTION,
				),
				ModifierOptions::NONE,
			),
			(
				rule(NEXT_SEPARATOR, (KeyMod::CTRL_CMD | KeyMod::ALT) | KeyCode::DownArrow, Focus::NextSeparator),
				ModifierOptions::NONE,
			),
			(
				fallback(
					PREVIOUS_SEPARATOR_WITH_QUICK_ACCESS_FALLBACK,
					KeyMod::ALT | KeyCode::UpArrow,
					Focus::PreviousSeparator,
					Focus::Previous,
					PREVIOUS_SEPARATOR_FALLBACK_DESCRIPTION,
				),
				ModifierOptions::NONE,
			),
			(
				rule(PREVIOUS_SEPARATOR, (KeyMod::CTRL_CMD | KeyMod::ALT) | KeyCode::UpArrow, Focus::PreviousSeparator),
				ModifierOptions::NONE,
			),
		]);
	}

	specs
}

/// All quick-pick navigation rules for `platform`.
pub fn quick_pick_rules(platform: Platform) -> Vec<KeybindingRule> {
	quick_pick_rules_with(platform, &HashMap::new())
}

/// Like [`quick_pick_rules`], with per-command [`ModifierOptions`] overrides.
pub fn quick_pick_rules_with(platform: Platform, overrides: &HashMap<String, ModifierOptions>) -> Vec<KeybindingRule> {
	quick_pick_rule_specs(platform)
		.into_iter()
		.map(|(rule, options)| {
			let options = overrides.get(&rule.id).copied().unwrap_or(options);
			build_rule(rule, options, platform)
		})
		.collect()
}

/// Registers every quick-pick navigation rule for `platform`.
pub fn register_quick_pick_rules(registry: &KeybindingsRegistry, platform: Platform) {
	register_quick_pick_rules_with(registry, platform, &HashMap::new());
}

/// Like [`register_quick_pick_rules`], with per-command [`ModifierOptions`] overrides.
pub fn register_quick_pick_rules_with(
	registry: &KeybindingsRegistry,
	platform: Platform,
	overrides: &HashMap<String, ModifierOptions>,
) {
	let rules = quick_pick_rules_with(platform, overrides);
	debug!(%platform, rules = rules.len(), overrides = overrides.len(), "registering quick pick keybindings");
	for rule in rules {
		registry.register_command_and_keybinding_rule(rule);
	}
}
