//! Congo — interactive in-memory storage management CLI.
//!
//! # Usage
//!
//! ```text
//! congo [--format plain|table|json] [--no-color]          (same as `congo menu`)
//! congo menu
//! congo selftest
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `warn`); logs go to stderr.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::list::ListFormat;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "congo",
    version,
    about = "Track stored items by id and list them by description",
    long_about = None,
)]
struct Cli {
    /// Listing format for "List Items by Description": plain | table | json.
    #[arg(long, global = true, value_name = "FORMAT", default_value_t = ListFormat::Plain)]
    format: ListFormat,

    /// Disable coloured output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive menu (default).
    Menu,

    /// Run the built-in duplicate-addition and item-not-found checks.
    Selftest,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    init_tracing();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu::run(cli.format),
        Commands::Selftest => commands::selftest::run(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
