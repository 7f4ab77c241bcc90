use std::path::PathBuf;

use signup::config::Configuration;
use signup::{Controller, HttpRequest, telemetry};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Configuration::default();
    if let Some(path) = std::env::args().nth(1) {
        config = config.path(PathBuf::from(path));
    }
    let (config, config_error) = config.read();

    telemetry::setup_tracing(&config.log)?;
    if let Some(err) = config_error {
        tracing::error!(
            error = %err,
            "configuration not loaded, using defaults"
        );
    }

    let controller = signup::initialize_controller(&config)?;
    tracing::info!("ready to read sign up requests from stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    // One JSON request body per line, one JSON response per line.
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let request = match serde_json::from_str(&line) {
            Ok(body) => HttpRequest::new(body),
            Err(err) => {
                tracing::warn!(error = %err, "request body is not valid JSON");
                HttpRequest::default()
            },
        };

        let response = controller.handle(request).await;
        let mut output = serde_json::to_vec(&response)?;
        output.push(b'\n');
        stdout.write_all(&output).await?;
        stdout.flush().await?;
    }

    Ok(())
}
