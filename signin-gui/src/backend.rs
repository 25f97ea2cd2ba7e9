//! Stand-in for the service receiving the sign-in form.
//!
//! It sends nothing: after the configured delay it either accepts the
//! address or reports itself unavailable for the configured addresses.

use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::BackendConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("Server unavailable")]
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct DebugBackend {
    delay: Duration,
    unavailable: Vec<String>,
}

impl DebugBackend {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.delay_ms),
            unavailable: config.unavailable.clone(),
        }
    }

    /// Requests a sign-in link for `email`, returns the address it was sent to.
    pub async fn send_sign_in_link(self, email: String) -> Result<String, BackendError> {
        tokio::time::sleep(self.delay).await;
        if self
            .unavailable
            .iter()
            .any(|address| address.eq_ignore_ascii_case(&email))
        {
            warn!("Backend unavailable for {}", email);
            return Err(BackendError::Unavailable);
        }
        info!("Sign-in link sent to {}", email);
        Ok(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> DebugBackend {
        DebugBackend::new(&BackendConfig {
            delay_ms: 0,
            unavailable: vec!["unavailable@example.com".to_string()],
        })
    }

    #[tokio::test]
    async fn sends_link() {
        assert_eq!(
            backend()
                .send_sign_in_link("jane@example.com".to_string())
                .await,
            Ok("jane@example.com".to_string())
        );
    }

    #[tokio::test]
    async fn unavailable_address() {
        assert_eq!(
            backend()
                .send_sign_in_link("Unavailable@Example.com".to_string())
                .await,
            Err(BackendError::Unavailable)
        );
    }
}
