//! Host platform detection.
//!
//! Keybinding generation is platform-sensitive: macOS reserves the command key
//! as the primary modifier, so logical modifiers resolve to different physical
//! keys there.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Platform family a keybinding table is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
	/// macOS (command key is the primary modifier).
	Mac,
	/// Linux and other unix desktops.
	Linux,
	/// Windows.
	Windows,
}

impl Platform {
	/// All platforms, in display order.
	pub const ALL: [Platform; 3] = [Platform::Mac, Platform::Linux, Platform::Windows];

	/// Returns the platform this binary was compiled for.
	pub const fn current() -> Self {
		if cfg!(target_os = "macos") {
			Platform::Mac
		} else if cfg!(windows) {
			Platform::Windows
		} else {
			Platform::Linux
		}
	}

	/// Returns true for macOS.
	#[inline]
	pub const fn is_mac(self) -> bool {
		matches!(self, Platform::Mac)
	}

	/// Lowercase name used in configuration files and on the command line.
	pub const fn as_str(self) -> &'static str {
		match self {
			Platform::Mac => "mac",
			Platform::Linux => "linux",
			Platform::Windows => "windows",
		}
	}
}

impl Default for Platform {
	fn default() -> Self {
		Self::current()
	}
}

impl fmt::Display for Platform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when a platform name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform '{0}' (expected mac, linux or windows)")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
	type Err = UnknownPlatform;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"mac" | "macos" | "darwin" => Ok(Platform::Mac),
			"linux" => Ok(Platform::Linux),
			"windows" | "win32" => Ok(Platform::Windows),
			_ => Err(UnknownPlatform(s.to_string())),
		}
	}
}
