//! Classify command handler.

use saro_oracle::OpenAiClient;
use saro_pipeline::SaroClassifier;
use std::path::Path;

/// Handle the `classify` command
pub async fn handle_classify(
    narrative: Option<&str>,
    file: Option<&Path>,
    model: Option<&str>,
    strict: bool,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let narrative = match (narrative, file) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => return Err("a narrative argument or --file is required".into()),
    };

    // Build the classifier from environment configuration
    let client = OpenAiClient::from_env()?;
    let mut classifier = SaroClassifier::new(client);
    if let Some(model) = model {
        classifier = classifier.with_model(model);
    }
    if strict {
        classifier = classifier.with_strict_selection();
    }

    let result = classifier.classify(&narrative).await?;

    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");

    Ok(())
}
