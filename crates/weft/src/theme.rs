//! `weft theme`: renders a colour theme through the workbench participants.

use std::path::Path;

use anyhow::Context;
use tracing::debug;
use weft_config::Config;
use weft_theme::{ColorTheme, ParticipantHandle, StyleCollector, Theme, ThemingRegistry, theming_registry};

pub fn run(config: &Config, file: Option<&Path>) -> anyhow::Result<()> {
	let theme = match file {
		Some(path) => weft_config::load_theme_file(path).with_context(|| format!("loading theme {}", path.display()))?,
		None => Theme::new("Default", config.theme.scheme),
	};

	let registry = theming_registry();
	let handles = register_workbench_participants(registry);
	debug!(participants = registry.len(), theme = %theme.label, "rendering theme");

	print!("{}", registry.render(&theme).to_stylesheet());

	for handle in handles {
		handle.dispose();
	}
	Ok(())
}

/// Registers the participants styling the workbench parts this tool knows about.
fn register_workbench_participants(registry: &ThemingRegistry) -> Vec<ParticipantHandle> {
	vec![
		registry.register(|theme, collector| {
			collector.add_rule(&format!(".weft-workbench {{ color-scheme: {}; }}", scheme_name(theme)));
		}),
		registry.register(|theme, collector| {
			color_rule(theme, collector, "editor.background", ".weft-editor", "background-color");
			color_rule(theme, collector, "editor.foreground", ".weft-editor", "color");
		}),
		registry.register(|theme, collector| {
			color_rule(theme, collector, "quickInput.background", ".quick-input-widget", "background-color");
			color_rule(
				theme,
				collector,
				"quickInputList.focusBackground",
				".quick-input-list .focused",
				"background-color",
			);
		}),
		registry.register(|theme, collector| {
			if theme.scheme().is_high_contrast() {
				let outline = theme.color("contrastActiveBorder").map_or_else(|| "currentcolor".to_string(), |c| c.to_string());
				collector.add_rule(&format!(".quick-input-list .focused {{ outline: 1px dashed {outline}; }}"));
			}
		}),
	]
}

fn scheme_name(theme: &dyn ColorTheme) -> &'static str {
	if theme.scheme().is_dark() { "dark" } else { "light" }
}

fn color_rule(theme: &dyn ColorTheme, collector: &mut dyn StyleCollector, id: &str, selector: &str, property: &str) {
	if let Some(color) = theme.color(id) {
		collector.add_rule(&format!("{selector} {{ {property}: {color}; }}"));
	}
}
