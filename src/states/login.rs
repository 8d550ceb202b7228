//! Login State
//!
//! The login form is a small state machine:
//!
//! ```text
//! Idle ──submit──▶ Submitting ──auth settles──▶ Settled(Success | Failed)
//!  ▲                                               │
//!  └────────────────── next submit ◀───────────────┘
//! ```
//!
//! Two validation layers run before the authenticator is touched: field
//! presence (inline errors) and RUT format/check digit (banner).

use crate::constants::FORGOT_PASSWORD_TOOLTIP_MS;
use crate::domain::{Credentials, FieldErrors, LoginField, RutStatus, validate_rut};
use crate::error::Result;
use crate::states::AulaGlobalStore;
use gpui::{Context, EventEmitter, Task};
use serde_json::json;
use std::time::Duration;

const SCOPE: &str = "login";

/// Why a submission did not log the user in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFailure {
    /// Username is not a valid RUT; the authenticator was not called
    InvalidRut(RutStatus),
    /// Authenticator answered `false`
    InvalidCredentials,
    /// Authenticator itself failed
    Unexpected,
}

impl LoginFailure {
    /// Translation key of the banner message
    pub fn message_key(self) -> &'static str {
        match self {
            LoginFailure::InvalidRut(status) => status.message_key(),
            LoginFailure::InvalidCredentials => "login.invalid_credentials",
            LoginFailure::Unexpected => "login.unexpected_error",
        }
    }
}

/// Result of a settled submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    Failed(LoginFailure),
}

/// Observable phase of the form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Settled(LoginOutcome),
}

/// What `begin_submit` decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// A submission is already in flight
    Ignored,
    /// Validation failed; nothing to send
    Blocked,
    /// Call the authenticator with these credentials
    Proceed(Credentials),
}

/// GPUI-independent form model
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    credentials: Credentials,
    field_errors: FieldErrors,
    phase: LoginPhase,
    password_visible: bool,
    tooltip_visible: bool,
    tooltip_generation: u64,
}

impl LoginForm {
    /// How long the "forgot password" tooltip stays up
    pub const TOOLTIP_DELAY: Duration = Duration::from_millis(FORGOT_PASSWORD_TOOLTIP_MS);

    // ==================== Getters ====================

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    pub fn field_error(&self, field: LoginField) -> Option<&'static str> {
        self.field_errors.get(field)
    }

    /// The single error banner, if any
    pub fn banner(&self) -> Option<LoginFailure> {
        match self.phase {
            LoginPhase::Settled(LoginOutcome::Failed(failure)) => Some(failure),
            _ => None,
        }
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn tooltip_visible(&self) -> bool {
        self.tooltip_visible
    }

    // ==================== Transitions ====================

    /// Update a field value; editing clears that field's inline error
    pub fn set_field(&mut self, field: LoginField, value: impl Into<String>) {
        if self.is_submitting() {
            return;
        }
        let value = value.into();
        match field {
            LoginField::Username => self.credentials.username = value,
            LoginField::Password => self.credentials.password = value,
        }
        self.field_errors.clear(field);
    }

    /// Run both validation layers and move to `Submitting` if they pass
    pub fn begin_submit(&mut self) -> SubmitDecision {
        if self.is_submitting() {
            return SubmitDecision::Ignored;
        }

        let field_errors = self.credentials.check_required();
        if !field_errors.is_empty() {
            self.field_errors = field_errors;
            self.phase = LoginPhase::Idle;
            return SubmitDecision::Blocked;
        }
        self.field_errors = FieldErrors::default();

        let rut = validate_rut(&self.credentials.username);
        if !rut.valid {
            self.phase = LoginPhase::Settled(LoginOutcome::Failed(LoginFailure::InvalidRut(
                rut.status,
            )));
            return SubmitDecision::Blocked;
        }

        self.phase = LoginPhase::Submitting;
        SubmitDecision::Proceed(self.credentials.clone())
    }

    /// Apply the authenticator's answer
    ///
    /// Success clears both fields. Calls outside `Submitting` are ignored.
    pub fn finish_submit(&mut self, result: &Result<bool>) -> Option<LoginOutcome> {
        if !self.is_submitting() {
            return None;
        }

        let outcome = match result {
            Ok(true) => {
                self.credentials = Credentials::default();
                self.password_visible = false;
                LoginOutcome::Success
            }
            Ok(false) => LoginOutcome::Failed(LoginFailure::InvalidCredentials),
            Err(_) => LoginOutcome::Failed(LoginFailure::Unexpected),
        };
        self.phase = LoginPhase::Settled(outcome);
        Some(outcome)
    }

    pub fn toggle_password_visibility(&mut self) -> bool {
        self.password_visible = !self.password_visible;
        self.password_visible
    }

    /// Show the "forgot password" tooltip, returning the token its timer must present
    pub fn show_tooltip(&mut self) -> u64 {
        self.tooltip_generation += 1;
        self.tooltip_visible = true;
        self.tooltip_generation
    }

    /// Hide the tooltip if `generation` is still the latest show
    pub fn dismiss_tooltip(&mut self, generation: u64) -> bool {
        if generation != self.tooltip_generation || !self.tooltip_visible {
            return false;
        }
        self.tooltip_visible = false;
        true
    }
}

/// Events emitted to the login view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    /// Authentication succeeded and the fields were cleared
    LoggedIn { username: String },
}

/// Login form entity
#[derive(Default)]
pub struct LoginState {
    form: LoginForm,
    pending: Option<Task<()>>,
}

impl EventEmitter<LoginEvent> for LoginState {}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn set_field(&mut self, field: LoginField, value: String, cx: &mut Context<Self>) {
        let had_error = self.form.field_error(field).is_some();
        self.form.set_field(field, value);
        if had_error {
            cx.notify();
        }
    }

    /// Validate and, if valid, call the authenticator once
    pub fn submit(&mut self, cx: &mut Context<Self>) {
        let services = cx.global::<AulaGlobalStore>().services().clone();

        let credentials = match self.form.begin_submit() {
            SubmitDecision::Ignored => return,
            SubmitDecision::Blocked => {
                let reason = self
                    .form
                    .banner()
                    .map(LoginFailure::message_key)
                    .unwrap_or("login.fields_required");
                services.logger().warn(
                    SCOPE,
                    "Submission blocked by validation",
                    Some(json!({ "reason": reason })),
                );
                cx.notify();
                return;
            }
            SubmitDecision::Proceed(credentials) => credentials,
        };

        services.logger().info(
            SCOPE,
            "Submitting credentials",
            Some(json!({ "username": credentials.username })),
        );
        cx.notify();

        self.pending = Some(cx.spawn(async move |this, cx| {
            let result = services.authenticate(&credentials).await;
            if let Err(e) = &result {
                services
                    .logger()
                    .error(SCOPE, "Authentication call failed", Some(json!({ "error": e.to_string() })));
            }

            let _ = this.update(cx, |this, cx| {
                this.pending = None;
                this.settle(credentials.username, &result, cx);
            });
        }));
    }

    fn settle(&mut self, username: String, result: &Result<bool>, cx: &mut Context<Self>) {
        let Some(outcome) = self.form.finish_submit(result) else {
            return;
        };

        let services = cx.global::<AulaGlobalStore>().services().clone();
        match outcome {
            LoginOutcome::Success => {
                services
                    .logger()
                    .info(SCOPE, "Login succeeded", Some(json!({ "username": username })));
                cx.emit(LoginEvent::LoggedIn { username });
            }
            LoginOutcome::Failed(failure) => {
                services.logger().warn(
                    SCOPE,
                    "Login failed",
                    Some(json!({ "username": username, "reason": failure.message_key() })),
                );
            }
        }
        cx.notify();
    }

    pub fn toggle_password_visibility(&mut self, cx: &mut Context<Self>) {
        self.form.toggle_password_visibility();
        cx.notify();
    }

    /// Show the recovery tooltip and schedule its auto-dismiss
    pub fn show_forgot_password_tooltip(&mut self, cx: &mut Context<Self>) {
        let generation = self.form.show_tooltip();
        cx.notify();

        cx.spawn(async move |this, cx| {
            cx.background_executor()
                .timer(LoginForm::TOOLTIP_DELAY)
                .await;
            let _ = this.update(cx, |this, cx| {
                if this.form.dismiss_tooltip(generation) {
                    cx.notify();
                }
            });
        })
        .detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::services::{Authenticator, MockAuthStore};
    use futures::future::BoxFuture;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Authenticator that records how often it was called
    struct CountingAuth {
        calls: Arc<AtomicUsize>,
        answer: fn() -> Result<bool>,
    }

    impl CountingAuth {
        fn new(answer: fn() -> Result<bool>) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    calls: calls.clone(),
                    answer,
                },
                calls,
            )
        }
    }

    impl Authenticator for CountingAuth {
        fn authenticate(&self, _username: &str, _password: &str) -> BoxFuture<'static, Result<bool>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let answer = self.answer;
            Box::pin(async move { answer() })
        }
    }

    /// Drive one submission the way `LoginState::submit` does
    fn submit(form: &mut LoginForm, auth: &dyn Authenticator) -> Option<LoginOutcome> {
        match form.begin_submit() {
            SubmitDecision::Proceed(creds) => {
                let result =
                    futures::executor::block_on(auth.authenticate(&creds.username, &creds.password));
                form.finish_submit(&result)
            }
            SubmitDecision::Blocked | SubmitDecision::Ignored => None,
        }
    }

    fn filled(username: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::default();
        form.set_field(LoginField::Username, username);
        form.set_field(LoginField::Password, password);
        form
    }

    #[test]
    fn test_empty_fields_block_without_auth_call() {
        for (username, password, user_err, pass_err) in [
            ("", "secret", true, false),
            ("12345678-5", "", false, true),
            ("", "", true, true),
        ] {
            let (auth, calls) = CountingAuth::new(|| Ok(true));
            let mut form = filled(username, password);

            assert_eq!(submit(&mut form, &auth), None);
            assert_eq!(calls.load(Ordering::SeqCst), 0);
            assert_eq!(form.phase(), LoginPhase::Idle);
            assert_eq!(form.field_error(LoginField::Username).is_some(), user_err);
            assert_eq!(form.field_error(LoginField::Password).is_some(), pass_err);
            assert_eq!(form.banner(), None);
        }
    }

    #[test]
    fn test_whitespace_password_reaches_auth_once() {
        let (auth, calls) = CountingAuth::new(|| Ok(false));
        let mut form = filled("12345678-5", "   ");

        assert_eq!(
            submit(&mut form, &auth),
            Some(LoginOutcome::Failed(LoginFailure::InvalidCredentials))
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(form.field_error(LoginField::Password), None);
    }

    #[test]
    fn test_blank_username_gets_rut_banner() {
        let (auth, calls) = CountingAuth::new(|| Ok(true));
        let mut form = filled("   ", "secret");

        assert_eq!(submit(&mut form, &auth), None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(form.field_error(LoginField::Username), None);
        assert_eq!(form.banner(), Some(LoginFailure::InvalidRut(RutStatus::Empty)));
    }

    #[test]
    fn test_invalid_rut_blocks_with_banner() {
        for (username, status) in [
            ("not-a-rut", RutStatus::InvalidFormat),
            ("12345678", RutStatus::InvalidFormat),
            ("12345678-4", RutStatus::InvalidCheckDigit),
        ] {
            let (auth, calls) = CountingAuth::new(|| Ok(true));
            let mut form = filled(username, "secret");

            assert_eq!(submit(&mut form, &auth), None);
            assert_eq!(calls.load(Ordering::SeqCst), 0);
            assert_eq!(form.banner(), Some(LoginFailure::InvalidRut(status)));
            assert_eq!(form.field_error(LoginField::Username), None);
        }
    }

    #[test]
    fn test_valid_rut_calls_auth_exactly_once() {
        let (auth, calls) = CountingAuth::new(|| Ok(false));
        let mut form = filled("12.345.678-5", "anything");

        submit(&mut form, &auth);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        submit(&mut form, &auth);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_outcomes_map_to_banners() {
        let (ok, _) = CountingAuth::new(|| Ok(true));
        let mut form = filled("12345678-5", "pw");
        assert_eq!(submit(&mut form, &ok), Some(LoginOutcome::Success));
        assert_eq!(form.banner(), None);
        assert_eq!(form.credentials(), &Credentials::default());

        let (wrong, _) = CountingAuth::new(|| Ok(false));
        let mut form = filled("12345678-5", "pw");
        submit(&mut form, &wrong);
        assert_eq!(form.banner(), Some(LoginFailure::InvalidCredentials));
        assert_eq!(
            form.banner().map(LoginFailure::message_key),
            Some("login.invalid_credentials")
        );
        assert_eq!(form.credentials().password, "pw");

        let (broken, _) = CountingAuth::new(|| {
            Err(Error::Auth {
                message: "boom".to_string(),
            })
        });
        let mut form = filled("12345678-5", "pw");
        submit(&mut form, &broken);
        assert_eq!(form.banner(), Some(LoginFailure::Unexpected));
    }

    #[test]
    fn test_double_submit_is_ignored_while_pending() {
        let mut form = filled("12345678-5", "pw");
        assert!(matches!(form.begin_submit(), SubmitDecision::Proceed(_)));
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), SubmitDecision::Ignored);

        // Fields are frozen while submitting
        form.set_field(LoginField::Password, "changed");
        assert_eq!(form.credentials().password, "pw");

        assert_eq!(
            form.finish_submit(&Ok(false)),
            Some(LoginOutcome::Failed(LoginFailure::InvalidCredentials))
        );
        assert_eq!(form.finish_submit(&Ok(true)), None);
    }

    #[test]
    fn test_editing_clears_field_error_only() {
        let mut form = LoginForm::default();
        assert_eq!(form.begin_submit(), SubmitDecision::Blocked);
        form.set_field(LoginField::Username, "1");
        assert_eq!(form.field_error(LoginField::Username), None);
        assert!(form.field_error(LoginField::Password).is_some());
    }

    #[test]
    fn test_resubmit_after_failure_recovers() {
        let store = MockAuthStore::new(Duration::ZERO);
        let mut form = filled(crate::constants::DEMO_USERNAME, "wrong");
        let store_ref: &dyn Authenticator = &store;

        let outcome = futures::executor::block_on(async {
            let SubmitDecision::Proceed(creds) = form.begin_submit() else {
                panic!("expected proceed");
            };
            let result = crate::services::run_in_tokio(
                store_ref.authenticate(&creds.username, &creds.password),
            )
            .await;
            form.finish_submit(&result)
        });
        assert_eq!(outcome, Some(LoginOutcome::Failed(LoginFailure::InvalidCredentials)));

        form.set_field(LoginField::Password, crate::constants::DEMO_PASSWORD);
        let outcome = futures::executor::block_on(async {
            let SubmitDecision::Proceed(creds) = form.begin_submit() else {
                panic!("expected proceed");
            };
            let result = crate::services::run_in_tokio(
                store_ref.authenticate(&creds.username, &creds.password),
            )
            .await;
            form.finish_submit(&result)
        });
        assert_eq!(outcome, Some(LoginOutcome::Success));
    }

    #[test]
    fn test_password_visibility_toggle() {
        let mut form = LoginForm::default();
        assert!(!form.password_visible());
        assert!(form.toggle_password_visibility());
        assert!(!form.toggle_password_visibility());
    }

    #[test]
    fn test_tooltip_generations() {
        let mut form = LoginForm::default();
        let first = form.show_tooltip();
        let second = form.show_tooltip();
        assert!(form.tooltip_visible());

        // Stale timer from the first show does nothing
        assert!(!form.dismiss_tooltip(first));
        assert!(form.tooltip_visible());

        assert!(form.dismiss_tooltip(second));
        assert!(!form.tooltip_visible());
        assert!(!form.dismiss_tooltip(second));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tooltip_hides_after_delay() {
        let form = Arc::new(Mutex::new(LoginForm::default()));
        let generation = form.lock().expect("form lock").show_tooltip();

        let timer = {
            let form = form.clone();
            tokio::spawn(async move {
                tokio::time::sleep(LoginForm::TOOLTIP_DELAY).await;
                form.lock().expect("form lock").dismiss_tooltip(generation)
            })
        };
        tokio::task::yield_now().await;

        tokio::time::advance(LoginForm::TOOLTIP_DELAY - Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert!(form.lock().expect("form lock").tooltip_visible());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(timer.await.expect("timer task"));
        assert!(!form.lock().expect("form lock").tooltip_visible());
        assert_eq!(LoginForm::TOOLTIP_DELAY, Duration::from_millis(3000));
    }
}
