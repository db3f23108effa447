use std::net::TcpListener;
use std::sync::Arc;

use assessment_auth::auth::TokenCodec;
use assessment_auth::configuration::get_configuration;
use assessment_auth::startup::run;
use assessment_auth::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_telemetry();

    tracing::info!("Starting application");

    let configuration = match get_configuration() {
        Ok(config) => {
            tracing::info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            tracing::error!("Failed to read configuration: {}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Configuration error",
            ));
        }
    };

    // Key material is loaded once here; bad keys stop the process
    let codec = TokenCodec::from_settings(&configuration.jwt).map_err(|e| {
        tracing::error!(kind = e.kind(), "Failed to initialize token codec: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let address = configuration.application.address();
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Server listening on: {}", address);

    let server = run(listener, Arc::new(codec))?;
    server.await
}
