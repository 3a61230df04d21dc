//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Saro - Operational-risk classification of SARO narratives against the ORX taxonomy
#[derive(Parser, Debug)]
#[command(name = "saro")]
#[command(
    about = "Classify SARO event narratives against the ORX operational-risk taxonomy",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a narrative and print the result as JSON
    Classify {
        /// The SARO event narrative to classify
        narrative: Option<String>,

        /// Read the narrative from a file instead
        #[arg(long, value_name = "PATH", conflicts_with = "narrative")]
        file: Option<PathBuf>,

        /// Chat model to use instead of the default
        #[arg(long)]
        model: Option<String>,

        /// Drop selected categories that are not in the offered catalog
        #[arg(long)]
        strict: bool,

        /// Pretty-print the JSON result
        #[arg(long)]
        pretty: bool,
    },

    /// Serve the classification HTTP API
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Chat model to use instead of the default
        #[arg(long)]
        model: Option<String>,
    },

    /// Inspect the ORX reference taxonomy
    Taxonomy {
        /// Restrict output to these level-1 labels (repeatable)
        #[arg(long = "label")]
        labels: Vec<String>,

        /// Print a flat sorted union of level-2 names instead of per-label buckets
        #[arg(long)]
        flat: bool,
    },
}
