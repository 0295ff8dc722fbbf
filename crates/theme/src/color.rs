//! RGBA colours and their `#rrggbb[aa]` notation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An RGBA colour with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: u8,
}

impl Color {
	/// Fully transparent black.
	pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

	/// Creates an opaque colour.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 0xff }
	}

	/// Creates a colour with an explicit alpha channel.
	pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self { r, g, b, a }
	}

	/// Returns true if the colour has no transparency.
	pub const fn is_opaque(self) -> bool {
		self.a == 0xff
	}

	/// Scales the alpha channel by `factor` (clamped to `0.0..=1.0`).
	#[must_use]
	pub fn transparent(self, factor: f32) -> Self {
		let factor = factor.clamp(0.0, 1.0);
		Self {
			a: (f32::from(self.a) * factor).round() as u8,
			..self
		}
	}

	/// Relative luminance per WCAG 2.0, in `0.0..=1.0`.
	pub fn luminance(self) -> f32 {
		fn channel(c: u8) -> f32 {
			let c = f32::from(c) / 255.0;
			if c <= 0.03928 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
		}
		0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
	}

	/// Returns true if the colour reads as dark (luminance below one half).
	pub fn is_dark(self) -> bool {
		self.luminance() < 0.5
	}
}

/// A colour string that is not `#rgb`, `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color format: {0}")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
	type Err = ColorParseError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let value = value.trim();
		let err = || ColorParseError(value.to_string());
		let hex = value.strip_prefix('#').ok_or_else(err)?;
		if !hex.is_ascii() {
			return Err(err());
		}
		let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());

		match hex.len() {
			3 => Ok(Color::rgb(
				byte(&hex[0..1].repeat(2))?,
				byte(&hex[1..2].repeat(2))?,
				byte(&hex[2..3].repeat(2))?,
			)),
			6 => Ok(Color::rgb(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)),
			8 => Ok(Color::rgba(
				byte(&hex[0..2])?,
				byte(&hex[2..4])?,
				byte(&hex[4..6])?,
				byte(&hex[6..8])?,
			)),
			_ => Err(err()),
		}
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
		if !self.is_opaque() {
			write!(f, "{:02x}", self.a)?;
		}
		Ok(())
	}
}

impl Serialize for Color {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Color {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(serde::de::Error::custom)
	}
}
