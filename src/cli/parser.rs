use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for pressrate
#[derive(Parser)]
#[command(
    name = "pressrate",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record location-tagged button presses and serve a recency-weighted duration estimate",
    long_about = None
)]
pub struct Cli {
    /// Override database path (takes precedence over DATABASE_URL)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// YAML configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the presses table in the configured database
    Init,

    /// Run the HTTP service
    Serve {
        #[arg(long, value_name = "ADDR", help = "Address to bind, e.g. 0.0.0.0:8080")]
        bind: Option<String>,

        #[arg(long = "static-dir", value_name = "DIR", help = "Directory of frontend assets")]
        static_dir: Option<PathBuf>,
    },

    /// Record a press from the command line
    Press {
        /// Button identifier (0..4)
        button: String,

        #[arg(long, short, help = "Location tag (default: unknown)")]
        location: Option<String>,
    },

    /// Export every recorded press
    Dump {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, short, value_name = "FILE", help = "Write to FILE instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Print the current estimate for one location, or for all of them
    Estimate {
        location: Option<String>,
    },
}
