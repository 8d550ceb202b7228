//! Service Hub
//!
//! Bundles the external collaborators (authentication store, logger) behind a
//! cheap-to-clone handle that the state layer reaches through the global store.

use crate::constants::{LOG_CHANNEL_CAPACITY, MOCK_AUTH_LATENCY_MS};
use crate::domain::Credentials;
use crate::error::Result;
use crate::services::{AppLogger, Authenticator, LogRecord, MockAuthStore, run_in_tokio};
use crossbeam_channel::Receiver;
use std::sync::Arc;
use std::time::Duration;

/// Central hub for the application's collaborators
#[derive(Clone)]
pub struct ServiceHub {
    auth: Arc<dyn Authenticator>,
    logger: AppLogger,
}

impl ServiceHub {
    /// Create a hub around an authenticator, returning the log receiver for the UI
    pub fn new(auth: Arc<dyn Authenticator>) -> (Self, Receiver<LogRecord>) {
        let (logger, rx) = AppLogger::new(LOG_CHANNEL_CAPACITY);
        (Self { auth, logger }, rx)
    }

    /// Hub backed by the demo mock store
    pub fn with_mock_store() -> (Self, Receiver<LogRecord>) {
        let store = MockAuthStore::new(Duration::from_millis(MOCK_AUTH_LATENCY_MS));
        Self::new(Arc::new(store))
    }

    pub fn logger(&self) -> &AppLogger {
        &self.logger
    }

    /// Run the authenticator on the tokio runtime with the raw field values
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<bool> {
        let future = self
            .auth
            .authenticate(&credentials.username, &credentials.password);
        run_in_tokio(future).await
    }
}

impl std::fmt::Debug for ServiceHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceHub")
            .field("logger", &self.logger)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEMO_PASSWORD, DEMO_USERNAME};

    #[test]
    fn test_authenticate_through_runtime_bridge() {
        let (hub, _rx) = ServiceHub::new(Arc::new(MockAuthStore::new(Duration::ZERO)));

        let ok = futures::executor::block_on(
            hub.authenticate(&Credentials::new(DEMO_USERNAME, DEMO_PASSWORD)),
        );
        assert!(ok.expect("mock store does not fail"));

        let rejected =
            futures::executor::block_on(hub.authenticate(&Credentials::new(DEMO_USERNAME, "x")));
        assert!(!rejected.expect("mock store does not fail"));
    }

    #[test]
    fn test_logger_shares_receiver() {
        let (hub, rx) = ServiceHub::new(Arc::new(MockAuthStore::new(Duration::ZERO)));
        hub.clone().logger().info("hub", "hello", None);
        assert_eq!(rx.try_recv().expect("record").message, "hello");
    }
}
