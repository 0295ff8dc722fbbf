//! Leaf types shared across weft crates: platforms, key codes, modifiers and chords.

/// Key codes, logical and physical modifiers, and chords.
pub mod key;
/// Host platform detection.
pub mod platform;

pub use key::{Chord, KeyCode, KeyMod, Modifiers};
pub use platform::{Platform, UnknownPlatform};
