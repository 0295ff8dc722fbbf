use std::fmt;
use std::ops::BitOr;

use super::{KeyCode, KeyMod, Modifiers};
use crate::Platform;

/// A key code plus logical modifier bits.
///
/// Chords are platform independent; [`Chord::resolve`] and [`Chord::label`]
/// map them onto the physical keys of a given platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
	/// Logical modifiers.
	pub mods: KeyMod,
	/// Base key.
	pub code: KeyCode,
}

impl Chord {
	/// Creates a chord with no modifiers.
	pub const fn new(code: KeyCode) -> Self {
		Self {
			mods: KeyMod::empty(),
			code,
		}
	}

	/// Creates a chord with the given modifiers.
	pub const fn with_mods(mods: KeyMod, code: KeyCode) -> Self {
		Self { mods, code }
	}

	/// Returns a copy with `mods` added to the existing modifiers.
	#[must_use]
	pub fn add(self, mods: KeyMod) -> Self {
		Self {
			mods: self.mods | mods,
			code: self.code,
		}
	}

	/// Physical modifiers held for this chord on `platform`.
	pub fn resolve(self, platform: Platform) -> Modifiers {
		self.mods.resolve(platform)
	}

	/// Human-readable label such as `Ctrl+Alt+DownArrow`.
	pub fn label(self, platform: Platform) -> String {
		let mut label = String::new();
		for part in self.resolve(platform).labels(platform) {
			label.push_str(part);
			label.push('+');
		}
		label.push_str(&self.code.to_string());
		label
	}
}

impl From<KeyCode> for Chord {
	fn from(code: KeyCode) -> Self {
		Self::new(code)
	}
}

impl BitOr<KeyCode> for KeyMod {
	type Output = Chord;

	fn bitor(self, code: KeyCode) -> Chord {
		Chord::with_mods(self, code)
	}
}

impl fmt::Display for Chord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.label(Platform::current()))
	}
}
