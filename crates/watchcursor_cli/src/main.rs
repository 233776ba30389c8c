//! watchcursor CLI
//!
//! Command-line tools for working with watch resume cursors.
//!
//! # Commands
//!
//! - `encode` - Encode a cursor into a token
//! - `decode` - Decode a token and show its fields
//! - `sentinel` - Print the no-event token
//! - `types` - List watchable resource types
//! - `classify` - Show the resource type owning an event kind
//! - `map` - Build the token for a raw source event

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Watch resume cursor tools.
#[derive(Parser)]
#[command(name = "watchcursor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a cursor into a token
    Encode {
        /// Resource type name (host, host_relation, biz, set, module, object, no_event)
        #[arg(short, long)]
        kind: String,

        /// Position seconds
        #[arg(short, long)]
        seconds: u32,

        /// Position counter
        #[arg(short, long, default_value = "0")]
        counter: u32,

        /// 24-character hex object id
        #[arg(short, long)]
        oid: String,
    },

    /// Decode a token and show its fields
    Decode {
        /// Token to decode
        token: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print the no-event token
    Sentinel {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List watchable resource types and their wire codes
    Types {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show the resource type owning an event kind
    Classify {
        /// Event kind label, e.g. hostcreate
        event_kind: String,
    },

    /// Build the token for a raw source event
    Map {
        /// Source collection name
        #[arg(long)]
        collection: String,

        /// Position seconds
        #[arg(short, long)]
        seconds: u32,

        /// Position counter
        #[arg(short, long, default_value = "0")]
        counter: u32,

        /// 24-character hex object id
        #[arg(short, long)]
        oid: String,

        /// JSON file with the collection table
        #[arg(long)]
        sources: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    watchcursor_core::init();

    match cli.command {
        Commands::Encode {
            kind,
            seconds,
            counter,
            oid,
        } => {
            commands::codec::encode(&kind, seconds, counter, &oid)?;
        }
        Commands::Decode { token, format } => {
            commands::codec::decode(&token, &format)?;
        }
        Commands::Sentinel { format } => {
            commands::codec::sentinel(&format)?;
        }
        Commands::Types { format } => {
            commands::types::list(&format)?;
        }
        Commands::Classify { event_kind } => {
            commands::types::classify(&event_kind);
        }
        Commands::Map {
            collection,
            seconds,
            counter,
            oid,
            sources,
        } => {
            commands::map::run(&collection, seconds, counter, &oid, sources.as_deref())?;
        }
        Commands::Version => {
            println!("watchcursor CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("watchcursor core v{}", watchcursor_core::VERSION);
            println!("cursor format v{}", watchcursor_core::CURSOR_VERSION);
        }
    }

    Ok(())
}
