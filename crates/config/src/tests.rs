use std::io::Write;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_empty_is_default() {
	let config = Config::parse("").unwrap();
	assert_eq!(config, Config::default());
	assert!(config.symbols.cache);
	assert_eq!(config.theme.scheme, ColorScheme::Dark);
	assert!(config.keymap.modifiers.is_empty());
	assert_eq!(config.keymap.platform(), Platform::current());
}

#[test]
fn test_parse_all_sections() {
	let config = Config::parse(
		r#"
[keymap]
platform = "mac"

[keymap.modifiers."quickInput.pageNext"]
with_alt_mod = true

[symbols]
cache = false

[theme]
scheme = "hc-light"
"#,
	)
	.unwrap();

	assert_eq!(config.keymap.platform(), Platform::Mac);
	assert_eq!(config.keymap.modifiers["quickInput.pageNext"], ModifierOptions::NONE.alt());
	assert!(!config.symbols.cache);
	assert_eq!(config.theme.scheme, ColorScheme::HighContrastLight);
}

#[test]
fn test_unknown_keys_rejected() {
	assert!(matches!(Config::parse("[symbols]\ncaching = true\n"), Err(ConfigError::Toml(_))));
	assert!(Config::parse("[editor]\n").is_err());
	assert!(Config::parse("[keymap.modifiers.\"quickInput.next\"]\nwith_shift_mod = true\n").is_err());
}

#[test]
fn test_invalid_platform_rejected() {
	assert!(Config::parse("[keymap]\nplatform = \"beos\"\n").is_err());
}

#[test]
fn test_load_from_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "[theme]\nscheme = \"light\"").unwrap();

	let config = Config::load(file.path()).unwrap();
	assert_eq!(config.theme.scheme, ColorScheme::Light);
}

#[test]
fn test_load_invalid_file_reports_path() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "[symbols]\ncache = \"yes\"").unwrap();

	match Config::load(file.path()) {
		Err(ConfigError::Parse { path, .. }) => assert_eq!(path, file.path()),
		other => panic!("expected parse error, got {other:?}"),
	}
}

#[test]
fn test_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("config.toml");

	assert!(matches!(Config::load(&path), Err(ConfigError::Io { .. })));
	assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
}

#[test]
fn test_default_path_file_name() {
	if let Some(path) = Config::default_path() {
		assert!(path.ends_with("weft/config.toml"));
	}
}

#[test]
fn test_theme_file() {
	let theme = parse_theme(
		r##"
label = "Night"
type = "dark"

[colors]
"editor.background" = "#1e1e1e"
"##,
	)
	.unwrap();
	assert_eq!(theme.label, "Night");
	assert_eq!(theme.scheme, ColorScheme::Dark);
	assert_eq!(theme.colors.len(), 1);
}

#[test]
fn test_themes_from_directory_skip_invalid() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join("b.toml"), "label = \"B\"\ntype = \"light\"\n").unwrap();
	std::fs::write(dir.path().join("a.toml"), "label = \"A\"\n").unwrap();
	std::fs::write(dir.path().join("broken.toml"), "label = 3\n").unwrap();
	std::fs::write(dir.path().join("notes.txt"), "not a theme").unwrap();

	let themes = load_themes_from_directory(dir.path()).unwrap();
	let labels: Vec<_> = themes.iter().map(|theme| theme.label.as_str()).collect();
	assert_eq!(labels, ["A", "B"]);
}
