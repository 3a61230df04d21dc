//! Saro CLI binary.
//!
//! This binary provides command-line access to the classification pipeline:
//! - Classify a single SARO narrative from the command line
//! - Serve the classification HTTP API
//! - Inspect the ORX reference taxonomy

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_classify, handle_serve, handle_taxonomy};

    // Load environment variables from a .env file when one is present
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Classify {
            narrative,
            file,
            model,
            strict,
            pretty,
        } => {
            handle_classify(
                narrative.as_deref(),
                file.as_deref(),
                model.as_deref(),
                strict,
                pretty,
            )
            .await?;
        }

        Commands::Serve { port, model } => {
            handle_serve(port, model.as_deref()).await?;
        }

        Commands::Taxonomy { labels, flat } => {
            handle_taxonomy(&labels, flat)?;
        }
    }

    Ok(())
}
