//! Authentication Collaborator
//!
//! The login form only needs one async operation: given credentials, resolve
//! to `true`/`false` or fail. `MockAuthStore` is the in-memory stand-in used by
//! the demo.

use crate::constants::{DEMO_PASSWORD, DEMO_USERNAME};
use crate::domain::normalize_rut;
use crate::error::{Error, Result};
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// External authentication store
pub trait Authenticator: Send + Sync {
    /// Check a username/password pair
    ///
    /// `Ok(false)` means wrong credentials; `Err` means the store itself failed.
    fn authenticate(&self, username: &str, password: &str) -> BoxFuture<'static, Result<bool>>;
}

/// In-memory credential table with simulated latency
#[derive(Clone)]
pub struct MockAuthStore {
    users: Arc<HashMap<String, String>>,
    latency: Duration,
    failure: Option<Arc<str>>,
}

impl MockAuthStore {
    /// Store seeded with the demo credentials shown on the login screen
    pub fn new(latency: Duration) -> Self {
        Self {
            users: Arc::new(HashMap::new()),
            latency,
            failure: None,
        }
        .with_user(DEMO_USERNAME, DEMO_PASSWORD)
    }

    /// Register an extra user; RUT usernames are keyed in canonical form
    pub fn with_user(mut self, username: &str, password: &str) -> Self {
        Arc::make_mut(&mut self.users).insert(user_key(username), password.to_string());
        self
    }

    /// Make every call fail with the given message
    pub fn failing(mut self, message: impl Into<Arc<str>>) -> Self {
        self.failure = Some(message.into());
        self
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

impl Authenticator for MockAuthStore {
    fn authenticate(&self, username: &str, password: &str) -> BoxFuture<'static, Result<bool>> {
        let matches = self
            .users
            .get(&user_key(username))
            .is_some_and(|expected| expected == password);
        let latency = self.latency;
        let failure = self.failure.clone();

        Box::pin(async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            if let Some(message) = failure {
                return Err(Error::Auth {
                    message: message.to_string(),
                });
            }
            Ok(matches)
        })
    }
}

impl std::fmt::Debug for MockAuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockAuthStore")
            .field("users", &self.users.len())
            .field("latency", &self.latency)
            .field("failing", &self.failure.is_some())
            .finish()
    }
}

fn user_key(username: &str) -> String {
    normalize_rut(username).unwrap_or_else(|| username.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_credentials_accepted() {
        let store = MockAuthStore::new(Duration::ZERO);
        assert!(store.authenticate(DEMO_USERNAME, DEMO_PASSWORD).await.expect("ok"));
        // Same RUT written without dots
        assert!(store.authenticate("12345678-5", DEMO_PASSWORD).await.expect("ok"));
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let store = MockAuthStore::new(Duration::ZERO);
        assert!(!store.authenticate(DEMO_USERNAME, "nope").await.expect("ok"));
        assert!(!store.authenticate("11111111-1", DEMO_PASSWORD).await.expect("ok"));
    }

    #[tokio::test]
    async fn test_extra_user() {
        let store = MockAuthStore::new(Duration::ZERO).with_user("10.000.013-k", "kpass");
        assert_eq!(store.user_count(), 2);
        assert!(store.authenticate("10000013-K", "kpass").await.expect("ok"));
    }

    #[tokio::test]
    async fn test_failing_store() {
        let store = MockAuthStore::new(Duration::ZERO).failing("store offline");
        let err = store
            .authenticate(DEMO_USERNAME, DEMO_PASSWORD)
            .await
            .expect_err("should fail");
        assert!(err.to_string().contains("store offline"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_simulated() {
        let store = MockAuthStore::new(Duration::from_millis(800));
        let started = tokio::time::Instant::now();
        assert!(store.authenticate(DEMO_USERNAME, DEMO_PASSWORD).await.expect("ok"));
        assert!(started.elapsed() >= Duration::from_millis(800));
    }
}
