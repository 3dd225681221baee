//! Credential Provider Port (Driven Port)
//!
//! Interface for obtaining and refreshing carrier API credentials.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A carrier API credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Bearer token presented to the carrier.
    pub token: String,
    /// Whether this credential belongs to the automated-caller partition.
    pub automated: bool,
}

impl Credential {
    /// Create a credential.
    #[must_use]
    pub fn new(token: impl Into<String>, automated: bool) -> Self {
        Self {
            token: token.into(),
            automated,
        }
    }

    /// The same credential with a freshly issued token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }
}

/// Credential provider error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    /// No default credential exists for the requested partition.
    #[error("no default credential for automated={automated}")]
    NoCredential {
        /// The partition that had no credential.
        automated: bool,
    },

    /// The credential store itself failed.
    #[error("credential store error: {message}")]
    Store {
        /// Error details.
        message: String,
    },
}

/// Port for credential management.
///
/// Default credentials are partitioned by whether the caller is an automated
/// (bot) request or a human one.
#[async_trait]
pub trait CredentialProviderPort: Send + Sync {
    /// The default credential for the given caller partition.
    async fn default_credential(&self, automated: bool) -> Result<Credential, AuthError>;

    /// Refresh an expired credential. Returns the new token, or `None` when
    /// the credential cannot be refreshed.
    async fn refresh(&self, credential: &Credential) -> Result<Option<String>, AuthError>;
}
