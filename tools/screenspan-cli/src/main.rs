//! Screenspan CLI — inspect the monitor layout and capture pixels.
//!
//! Usage:
//!   screenspan monitors        Show the current monitor configuration
//!   screenspan reset           Re-enumerate the monitor setup (experimental)
//!   screenspan capture [OPTS]  Capture a monitor or rectangle to a PNG
//!   screenspan check           Check system capture capabilities

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "screenspan",
    about = "Multi-monitor coordinate space and screen capture",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current monitor configuration
    Monitors,

    /// Re-enumerate the monitor setup (experimental; previously issued
    /// handles keep stale geometry)
    Reset,

    /// Capture a monitor, or an explicit global rectangle, to a PNG file
    Capture {
        /// Zero-based monitor id (an out-of-range id clamps to the primary)
        #[arg(short, long, default_value = "0")]
        monitor: usize,

        /// Explicit rectangle in global coordinates, as "X,Y,WxH"
        #[arg(long)]
        rect: Option<String>,

        /// Output file
        #[arg(short, long, default_value = "capture.png")]
        output: PathBuf,
    },

    /// Check system capabilities
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    screenspan_common::logging::init_logging(&screenspan_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Monitors => commands::monitors::run(),
        Commands::Reset => commands::reset::run(),
        Commands::Capture {
            monitor,
            rect,
            output,
        } => commands::capture::run(monitor, rect, output),
        Commands::Check => commands::check::run(),
    }
}
