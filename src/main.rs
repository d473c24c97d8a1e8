use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use hmo_chatbot::{api, config, llm};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("HMO chatbot starting v{}", config::APP_VERSION);

    // Missing credentials must stop the process before it serves anything.
    let settings = match config::Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "Configuration error");
            return ExitCode::FAILURE;
        }
    };

    let client = match llm::AzureOpenAiClient::new(
        &settings.azure_endpoint,
        &settings.azure_api_key,
        &settings.deployment,
        settings.llm_timeout_secs,
    ) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Cannot build completion client");
            return ExitCode::FAILURE;
        }
    };

    let state = api::AppState::new(Arc::new(client), settings.knowledge_base_dir.clone());

    let mut server = match api::start_server(settings.bind_addr, state).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, addr = %settings.bind_addr, "Cannot bind server");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(addr = %server.addr(), kb = %settings.knowledge_base_dir.display(), "Ready");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Cannot listen for shutdown signal");
    }
    server.shutdown();

    ExitCode::SUCCESS
}
