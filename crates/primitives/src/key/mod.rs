//! Key codes, modifiers and chords.

mod chord;
mod modifiers;


use std::fmt;

pub use chord::Chord;
pub use modifiers::{KeyMod, Modifiers};

/// Base key of a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	/// A printable character key.
	Char(char),
	/// Function key (F1 to F24).
	F(u8),
	Backspace,
	Tab,
	Enter,
	Escape,
	Space,
	PageUp,
	PageDown,
	End,
	Home,
	LeftArrow,
	UpArrow,
	RightArrow,
	DownArrow,
	Insert,
	Delete,
}

impl fmt::Display for KeyCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			KeyCode::Char(c) => return write!(f, "{}", c.to_ascii_uppercase()),
			KeyCode::F(n) => return write!(f, "F{n}"),
			KeyCode::Backspace => "Backspace",
			KeyCode::Tab => "Tab",
			KeyCode::Enter => "Enter",
			KeyCode::Escape => "Escape",
			KeyCode::Space => "Space",
			KeyCode::PageUp => "PageUp",
			KeyCode::PageDown => "PageDown",
			KeyCode::End => "End",
			KeyCode::Home => "Home",
			KeyCode::LeftArrow => "LeftArrow",
			KeyCode::UpArrow => "UpArrow",
			KeyCode::RightArrow => "RightArrow",
			KeyCode::DownArrow => "DownArrow",
			KeyCode::Insert => "Insert",
			KeyCode::Delete => "Delete",
		};
		f.write_str(name)
	}
}
