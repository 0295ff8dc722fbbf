//! Weft command line front end.
//!
//! Each subcommand drives one of the editor layers against local input:
//! - `keys` prints the quick-pick navigation keybinding table
//! - `symbols` converts a saved `navtree` response into document symbols
//! - `theme` renders a colour theme through the theming participants

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use weft_config::Config;
use weft_primitives::Platform;

mod keys;
mod symbols;
mod theme;

/// Weft command line arguments.
#[derive(Parser, Debug)]
#[command(name = "weft")]
#[command(about = "Editor keybinding, symbol and theming layers")]
struct Args {
	/// Config file to use instead of the default location
	#[arg(short, long, value_name = "PATH", global = true)]
	config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print the quick-pick navigation keybindings
	Keys {
		/// Platform to generate chords for (mac, linux, windows)
		#[arg(short, long)]
		platform: Option<Platform>,
	},
	/// Convert a navtree response into document symbols
	Symbols {
		/// JSON file holding a navtree response or a bare navigation tree
		file: PathBuf,

		/// Document URI to request symbols for
		#[arg(long)]
		uri: Option<String>,

		/// Document version
		#[arg(long, default_value_t = 1)]
		version: i32,
	},
	/// Render a theme through the theming participants
	Theme {
		/// Theme file; without one an empty theme of the configured scheme is used
		file: Option<PathBuf>,
	},
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	setup_tracing(args.verbose);

	let config = load_config(args.config.as_deref())?;

	match args.command {
		Command::Keys { platform } => keys::run(&config, platform),
		Command::Symbols { file, uri, version } => symbols::run(&config, &file, uri.as_deref(), version).await,
		Command::Theme { file } => theme::run(&config, file.as_deref()),
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
	if let Some(path) = path {
		return Config::load(path).with_context(|| format!("loading config {}", path.display()));
	}

	match Config::default_path() {
		Some(path) => {
			debug!(path = %path.display(), "looking for config");
			Ok(Config::load_or_default(&path)?)
		}
		None => Ok(Config::default()),
	}
}
