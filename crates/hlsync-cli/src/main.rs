//! # hlsync-cli
//!
//! Mirror a directory tree into a destination using hardlinks.
//!
//! This is the main entry point for the hlsync tool. It parses the
//! command line, sets up logging, builds the immutable run configuration
//! and dispatches to the link or unlink handler.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use hlsync_core::error::SyncResult;
use hlsync_core::types::SyncConfig;

mod commands;
mod output;

use commands::CommandContext;

/// Mirror a directory tree into a destination using hardlinks
#[derive(Parser, Debug)]
#[command(name = "hlsync", version, about = "Hardlink-based directory mirroring")]
pub struct Cli {
    /// Source directory; with --unlink, the directory whose mirrored
    /// entries are removed
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Destination directory receiving the hardlinked entries
    #[arg(value_name = "DEST", required_unless_present = "unlink", conflicts_with = "unlink")]
    pub dest: Option<PathBuf>,

    /// Remove previously created links instead of creating them
    #[arg(short = 'u', long)]
    pub unlink: bool,

    /// Ignore file read from the source root
    #[arg(
        long,
        value_name = "NAME",
        env = "HLSYNC_IGNORE_FILE",
        default_value = SyncConfig::DEFAULT_IGNORE_FILE
    )]
    pub ignore_file: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the immutable run configuration from the parsed arguments
    pub fn into_config(self) -> SyncConfig {
        let config = match (self.unlink, self.dest) {
            (true, _) => SyncConfig::unlink(self.source),
            (false, Some(dest)) => SyncConfig::link(self.source, dest),
            (false, None) => unreachable!("clap requires DEST unless --unlink"),
        };
        config.with_ignore_file(self.ignore_file)
    }
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    info!("Starting hlsync v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_cli(cli) {
        let formatter = output::ErrorFormatter::new();
        eprintln!("{}", formatter.format_error(&e));
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> SyncResult<()> {
    let config = cli.into_config();
    let ctx = CommandContext::new();
    commands::dispatch(config, &ctx)
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "hlsync_cli={level},hlsync_engine={level},hlsync_core={level}"
        ))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("hlsync crashed! This is a bug.");
        eprintln!("Please report this at: https://github.com/hlsync/hlsync/issues");
        eprintln!("Error: {}", panic_info);
    }));
}
