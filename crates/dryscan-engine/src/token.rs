//! Bearer-token resolution for the engine API.

use thiserror::Error;
use tokio::process::Command;

/// Environment variable consulted before falling back to `gcloud`.
const TOKEN_ENV: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

/// Errors that can occur while resolving an access token.
#[derive(Error, Debug)]
pub enum TokenError {
    /// The `gcloud` executable could not be invoked.
    #[error("Failed to invoke gcloud: {0}")]
    Spawn(#[from] std::io::Error),

    /// `gcloud` exited unsuccessfully.
    #[error("gcloud auth print-access-token failed: {stderr}")]
    Gcloud {
        /// Trimmed stderr output from gcloud.
        stderr: String,
    },

    /// No token could be obtained from any source.
    #[error("No access token available (set {TOKEN_ENV} or run `gcloud auth login`)")]
    Missing,
}

/// An OAuth bearer token for the engine API.
///
/// The secret is redacted from `Debug` output.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps an already-obtained token value.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.0
    }

    /// Resolves a token from the environment, falling back to
    /// `gcloud auth print-access-token`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither source yields a non-empty token.
    pub async fn resolve() -> Result<Self, TokenError> {
        if let Ok(secret) = std::env::var(TOKEN_ENV)
            && !secret.trim().is_empty()
        {
            return Ok(Self::new(secret.trim()));
        }

        let output = Command::new("gcloud")
            .args(["auth", "print-access-token"])
            .output()
            .await?;

        if !output.status.success() {
            return Err(TokenError::Gcloud {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let secret = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if secret.is_empty() {
            return Err(TokenError::Missing);
        }

        Ok(Self(secret))
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let token = AccessToken::new("ya29.secret-value");
        assert_eq!(format!("{token:?}"), "AccessToken(..)");
    }

    #[test]
    fn test_secret_roundtrip() {
        let token = AccessToken::new("ya29.value");
        assert_eq!(token.secret(), "ya29.value");
    }
}
