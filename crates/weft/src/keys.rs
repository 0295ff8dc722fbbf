//! `weft keys`: the quick-pick navigation keybinding table.

use weft_config::Config;
use weft_keymap::quick_pick::{self, quick_pick_when};
use weft_keymap::{KeybindingsRegistry, keybindings_registry};
use weft_primitives::Platform;

pub fn run(config: &Config, platform: Option<Platform>) -> anyhow::Result<()> {
	let platform = platform.unwrap_or_else(|| config.keymap.platform());
	let registry = keybindings_registry();
	quick_pick::register_quick_pick_rules_with(registry, platform, &config.keymap.modifiers);

	print!("{}", render_table(registry, platform));
	Ok(())
}

/// One line per rule: command id, then its chords with the primary first.
fn render_table(registry: &KeybindingsRegistry, platform: Platform) -> String {
	let rules = registry.rules();
	let width = rules.iter().map(|rule| rule.id.len()).max().unwrap_or_default();

	let mut out = format!("# {platform}, when {}\n", quick_pick_when());
	for rule in rules {
		out.push_str(&format!("{:<width$}  {}\n", rule.id, rule.labels(platform).join(", ")));
	}
	out
}
