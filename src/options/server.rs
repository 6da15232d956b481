use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Server", inline)]
#[serde(default)]
pub struct ServerOptions {
    /// Address the dashboard listens on.
    pub bind: String,
    /// Tokio worker threads.
    pub worker_threads: usize,
    /// Verbose logging and detailed error bodies.
    pub debug: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8050".to_owned(),
            worker_threads: 2,
            debug: false,
        }
    }
}
