//! Serve command handler.

use saro_oracle::OpenAiClient;
use saro_pipeline::SaroClassifier;
use saro_server::AppState;

/// Handle the `serve` command
pub async fn handle_serve(
    port: u16,
    model: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Build the classifier from environment configuration
    let client = OpenAiClient::from_env()?;
    let mut classifier = SaroClassifier::new(client);
    if let Some(model) = model {
        classifier = classifier.with_model(model);
    }

    tracing::info!("Classification API starting. Press Ctrl+C to stop.");

    saro_server::run(AppState::new(classifier), port).await?;

    Ok(())
}
