//! Standalone theme files.
//!
//! A theme file is a TOML table with a `label`, a `type` naming the colour
//! scheme and a `colors` table of `#rrggbb[aa]` values:
//!
//! ```toml
//! label = "Night"
//! type = "dark"
//!
//! [colors]
//! "editor.background" = "#1e1e1e"
//! ```

use std::path::Path;

use tracing::{debug, warn};
use weft_theme::Theme;

use crate::error::{ConfigError, Result};

/// Parses a theme from a TOML string.
pub fn parse_theme(input: &str) -> Result<Theme> {
	Ok(toml::from_str(input)?)
}

/// Loads a standalone theme file.
pub fn load_theme_file(path: impl AsRef<Path>) -> Result<Theme> {
	let path = path.as_ref();
	let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
		path: path.to_path_buf(),
		error,
	})?;
	let theme: Theme = toml::from_str(&content).map_err(|error| ConfigError::Parse {
		path: path.to_path_buf(),
		error,
	})?;
	debug!(path = %path.display(), label = %theme.label, scheme = %theme.scheme, "loaded theme");
	Ok(theme)
}

/// Loads every `*.toml` theme in `dir`, sorted by file name.
///
/// Files that fail to load are skipped with a warning.
pub fn load_themes_from_directory(dir: impl AsRef<Path>) -> Result<Vec<Theme>> {
	let dir = dir.as_ref();
	let entries = std::fs::read_dir(dir).map_err(|error| ConfigError::Io {
		path: dir.to_path_buf(),
		error,
	})?;

	let mut paths: Vec<_> = entries
		.flatten()
		.map(|entry| entry.path())
		.filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
		.collect();
	paths.sort();

	let mut themes = Vec::with_capacity(paths.len());
	for path in paths {
		match load_theme_file(&path) {
			Ok(theme) => themes.push(theme),
			Err(error) => warn!(path = %path.display(), %error, "failed to load theme"),
		}
	}
	Ok(themes)
}
