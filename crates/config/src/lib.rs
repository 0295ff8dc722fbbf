//! Configuration for weft.
//!
//! Configuration is a single TOML file. Every section and field is optional:
//!
//! ```toml
//! [keymap]
//! platform = "mac"
//!
//! [keymap.modifiers."quickInput.pageNext"]
//! with_alt_mod = true
//!
//! [symbols]
//! cache = false
//!
//! [theme]
//! scheme = "hc-dark"
//! ```
//!
//! Weft looks for the file at `$XDG_CONFIG_HOME/weft/config.toml` (or the
//! platform equivalent, see [`Config::default_path`]). A missing file means
//! defaults; an unreadable or invalid one is an error.

pub mod error;
pub mod theme;

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
pub use theme::{load_theme_file, load_themes_from_directory, parse_theme};
use tracing::debug;
use weft_keymap::ModifierOptions;
use weft_primitives::Platform;
use weft_theme::ColorScheme;

#[cfg(test)]
mod tests;

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub keymap: KeymapConfig,
	pub symbols: SymbolsConfig,
	pub theme: ThemeConfig,
}

/// `[keymap]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeymapConfig {
	/// Platform whose chord table is generated. Defaults to the host.
	pub platform: Option<Platform>,
	/// Per-command replacements of the default [`ModifierOptions`].
	pub modifiers: HashMap<String, ModifierOptions>,
}

impl KeymapConfig {
	/// The configured platform, or the host platform.
	pub fn platform(&self) -> Platform {
		self.platform.unwrap_or(Platform::current())
	}
}

/// `[symbols]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SymbolsConfig {
	/// Reuse the last navigation tree while the document version is unchanged.
	pub cache: bool,
}

impl Default for SymbolsConfig {
	fn default() -> Self {
		Self { cache: true }
	}
}

/// `[theme]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
	/// Colour scheme used when no theme file is given.
	pub scheme: ColorScheme,
}

impl Config {
	/// Parse a TOML string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = toml::from_str(&content).map_err(|error| ConfigError::Parse {
			path: path.to_path_buf(),
			error,
		})?;
		debug!(path = %path.display(), "loaded config");
		Ok(config)
	}

	/// Like [`Config::load`], but a missing file yields the defaults.
	pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		match Self::load(path) {
			Err(ConfigError::Io { error, .. }) if error.kind() == ErrorKind::NotFound => {
				debug!(path = %path.display(), "no config file, using defaults");
				Ok(Self::default())
			}
			result => result,
		}
	}

	/// `config.toml` inside the user's weft config directory.
	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join("weft").join("config.toml"))
	}
}
