//! Colour themes and the theming-participant registry.
//!
//! UI components that derive their styling from the active colour theme
//! register a [`ThemingParticipant`]. When the theme changes, the host calls
//! [`ThemingRegistry::render`], which invokes every participant with the new
//! theme and a [`StyleCollector`] and returns the collected style rules.
//!
//! ```
//! use weft_theme::{ColorScheme, Theme, ThemingRegistry};
//!
//! let registry = ThemingRegistry::new();
//! let handle = registry.register(|theme, collector| {
//! 	if let Some(bg) = theme.color("editor.background") {
//! 		collector.add_rule(&format!(".editor {{ background-color: {bg}; }}"));
//! 	}
//! });
//!
//! let theme = Theme::new("Dark", ColorScheme::Dark).with_color("editor.background", "#1e1e1e".parse().unwrap());
//! assert_eq!(registry.render(&theme).rules(), [".editor { background-color: #1e1e1e; }"]);
//!
//! handle.dispose();
//! assert!(registry.is_empty());
//! ```

mod collector;
mod color;
mod registry;
mod theme;

pub use collector::{RuleSet, StyleCollector};
pub use color::{Color, ColorParseError};
pub use registry::{
	AddedListener, ListenerId, ParticipantHandle, ParticipantId, ThemingParticipant, ThemingRegistry,
	register_theming_participant, theming_registry,
};
pub use theme::{ColorScheme, ColorTheme, Theme};
