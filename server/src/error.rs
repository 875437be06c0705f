//! Top-level server errors.

use std::net::SocketAddr;

use crate::config::ConfigError;

/// Failures that stop the server before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `[[workspace.metadata.leptos]]` or `LEPTOS_*` settings are unusable.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("serve failed: {0}")]
    Serve(#[source] std::io::Error),
}
