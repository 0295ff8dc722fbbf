//! Colour theme model.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Color;

/// Base appearance of a colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
	#[default]
	Dark,
	Light,
	#[serde(rename = "hc-dark")]
	HighContrastDark,
	#[serde(rename = "hc-light")]
	HighContrastLight,
}

impl ColorScheme {
	/// Returns true for the dark and high-contrast dark schemes.
	pub const fn is_dark(self) -> bool {
		matches!(self, ColorScheme::Dark | ColorScheme::HighContrastDark)
	}

	/// Returns true for either high-contrast scheme.
	pub const fn is_high_contrast(self) -> bool {
		matches!(self, ColorScheme::HighContrastDark | ColorScheme::HighContrastLight)
	}

	/// CSS class name the host applies to the workbench root.
	pub const fn class_name(self) -> &'static str {
		match self {
			ColorScheme::Dark => "vs-dark",
			ColorScheme::Light => "vs",
			ColorScheme::HighContrastDark => "hc-black",
			ColorScheme::HighContrastLight => "hc-light",
		}
	}
}

impl fmt::Display for ColorScheme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			ColorScheme::Dark => "dark",
			ColorScheme::Light => "light",
			ColorScheme::HighContrastDark => "hc-dark",
			ColorScheme::HighContrastLight => "hc-light",
		})
	}
}

/// The view of the active colour theme handed to theming participants.
pub trait ColorTheme {
	/// Base appearance.
	fn scheme(&self) -> ColorScheme;

	/// Display label.
	fn label(&self) -> &str;

	/// Resolves a colour identifier such as `editor.background`.
	fn color(&self, id: &str) -> Option<Color>;

	/// Returns true if the theme itself defines `id`.
	fn defines(&self, id: &str) -> bool {
		self.color(id).is_some()
	}
}

/// A map-backed colour theme.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
	/// Display label.
	pub label: String,
	/// Base appearance.
	#[serde(rename = "type", default)]
	pub scheme: ColorScheme,
	/// Colour identifier to colour.
	#[serde(default)]
	pub colors: BTreeMap<String, Color>,
}

impl Theme {
	/// Creates a theme without colours.
	pub fn new(label: impl Into<String>, scheme: ColorScheme) -> Self {
		Self {
			label: label.into(),
			scheme,
			colors: BTreeMap::new(),
		}
	}

	/// Builder-style colour definition.
	#[must_use]
	pub fn with_color(mut self, id: impl Into<String>, color: Color) -> Self {
		self.colors.insert(id.into(), color);
		self
	}
}

impl ColorTheme for Theme {
	fn scheme(&self) -> ColorScheme {
		self.scheme
	}

	fn label(&self) -> &str {
		&self.label
	}

	fn color(&self, id: &str) -> Option<Color> {
		self.colors.get(id).copied()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_theme_from_toml() {
		let theme: Theme = toml::from_str(
			r##"
			label = "Solarized Light"
			type = "light"

			[colors]
			"editor.background" = "#fdf6e3"
			"focusBorder" = "#b58900"
			"##,
		)
		.unwrap();

		assert_eq!(theme.scheme, ColorScheme::Light);
		assert_eq!(theme.color("editor.background"), Some(Color::rgb(0xfd, 0xf6, 0xe3)));
		assert!(theme.defines("focusBorder"));
		assert!(!theme.defines("editor.foreground"));
	}

	#[test]
	fn test_high_contrast_names() {
		let theme: Theme = toml::from_str("label = \"HC\"\ntype = \"hc-dark\"\n").unwrap();
		assert_eq!(theme.scheme, ColorScheme::HighContrastDark);
		assert!(theme.scheme.is_dark());
		assert!(theme.scheme.is_high_contrast());
		assert_eq!(theme.scheme.to_string(), "hc-dark");
	}
}
