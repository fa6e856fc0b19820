//! The failure taxonomy of a client run.

use std::path::PathBuf;

/// Errors that end a client run.
///
/// Every variant is fatal: nothing is retried and no further calls are made
/// once one of these surfaces. The library only returns them; deciding to
/// terminate the process is left to the binary.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The TLS certificate could not be read.
    #[error("failed to load TLS certificate from '{}': {source}", .path.display())]
    Credential {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// The channel to the greeter service could not be constructed.
    #[error("failed to build a channel to '{address}': {source:#}")]
    Connect {
        address: String,
        #[source]
        source: anyhow::Error,
    },

    /// A greeting call was rejected by the server or the transport.
    #[error("greeting call failed: {0}")]
    Call(#[from] tonic::Status),
}
