//! Environment-derived service settings.
//!
//! Credentials are read once at startup; a missing credential aborts the
//! process before it can accept a request.

use std::net::SocketAddr;
use std::path::PathBuf;

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "hmo_chatbot=info"
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Everything the service needs from its environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub azure_endpoint: String,
    pub azure_api_key: String,
    pub deployment: String,
    pub knowledge_base_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub llm_timeout_secs: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build settings from any variable source. Tests pass a map instead
    /// of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let azure_endpoint = lookup("AZURE_OPENAI_ENDPOINT")
            .ok_or(ConfigError::MissingVar("AZURE_OPENAI_ENDPOINT"))?;
        let azure_api_key = lookup("AZURE_OPENAI_API_KEY")
            .ok_or(ConfigError::MissingVar("AZURE_OPENAI_API_KEY"))?;

        let deployment = lookup("AZURE_OPENAI_DEPLOYMENT").unwrap_or_else(|| "gpt-4o".into());

        let knowledge_base_dir = lookup("KNOWLEDGE_BASE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("knowledge_base"));

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                var: "BIND_ADDR",
                reason: format!("'{raw}' is not a socket address"),
            })?,
            None => SocketAddr::from(([127, 0, 0, 1], 8000)),
        };

        let llm_timeout_secs = match lookup("LLM_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                var: "LLM_TIMEOUT_SECS",
                reason: format!("'{raw}' is not a number of seconds"),
            })?,
            None => 60,
        };

        Ok(Self {
            azure_endpoint,
            azure_api_key,
            deployment,
            knowledge_base_dir,
            bind_addr,
            llm_timeout_secs,
        })
    }
}
