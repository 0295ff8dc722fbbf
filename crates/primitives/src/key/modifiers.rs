//! Logical and physical key modifiers.

use crate::Platform;

bitflags::bitflags! {
	/// Logical modifier bits attached to a chord.
	///
	/// `CTRL_CMD` is the platform's primary modifier (Cmd on macOS, Ctrl
	/// elsewhere). `WIN_CTRL` is the secondary one (Ctrl on macOS, the
	/// Windows/Super key elsewhere).
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
	pub struct KeyMod: u8 {
		/// Primary modifier.
		const CTRL_CMD = 1 << 0;
		/// Shift.
		const SHIFT = 1 << 1;
		/// Alt / Option.
		const ALT = 1 << 2;
		/// Secondary modifier.
		const WIN_CTRL = 1 << 3;
	}
}

impl KeyMod {
	/// The modifier the quick-pick tables call "ctrl" on `platform`.
	///
	/// On macOS the primary modifier is Cmd, so "ctrl" means the physical
	/// Control key (`WIN_CTRL`); everywhere else it is `CTRL_CMD`.
	pub const fn ctrl_for(platform: Platform) -> Self {
		if platform.is_mac() { Self::WIN_CTRL } else { Self::CTRL_CMD }
	}

	/// Resolves logical bits to the physical keys held on `platform`.
	pub fn resolve(self, platform: Platform) -> Modifiers {
		let primary = self.contains(Self::CTRL_CMD);
		let secondary = self.contains(Self::WIN_CTRL);
		let (ctrl, meta) = if platform.is_mac() { (secondary, primary) } else { (primary, secondary) };
		Modifiers {
			ctrl,
			alt: self.contains(Self::ALT),
			shift: self.contains(Self::SHIFT),
			meta,
		}
	}
}

/// Physical key modifiers (Ctrl, Alt, Shift, Meta).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	/// Whether Ctrl is held.
	pub ctrl: bool,
	/// Whether Alt is held.
	pub alt: bool,
	/// Whether Shift is held.
	pub shift: bool,
	/// Whether Meta (Cmd, Windows, Super) is held.
	pub meta: bool,
}

impl Modifiers {
	/// No modifiers pressed.
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
		meta: false,
	};

	/// Returns a copy with Ctrl added.
	pub fn ctrl(self) -> Self {
		Self { ctrl: true, ..self }
	}

	/// Returns a copy with Alt added.
	pub fn alt(self) -> Self {
		Self { alt: true, ..self }
	}

	/// Returns a copy with Shift added.
	pub fn shift(self) -> Self {
		Self { shift: true, ..self }
	}

	/// Returns a copy with Meta added.
	pub fn meta(self) -> Self {
		Self { meta: true, ..self }
	}

	/// Returns true if no modifiers are set.
	pub fn is_empty(self) -> bool {
		!self.ctrl && !self.alt && !self.shift && !self.meta
	}

	/// Modifier labels in display order for `platform`.
	pub fn labels(self, platform: Platform) -> impl Iterator<Item = &'static str> {
		let meta = match platform {
			Platform::Mac => "Cmd",
			Platform::Windows => "Win",
			Platform::Linux => "Super",
		};
		[(self.ctrl, "Ctrl"), (self.shift, "Shift"), (self.alt, "Alt"), (self.meta, meta)]
			.into_iter()
			.filter_map(|(held, label)| held.then_some(label))
	}
}
