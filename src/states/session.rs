//! Session State
//!
//! In-memory record of who is logged in. Nothing is persisted.

use chrono::{DateTime, Local};
use gpui::Context;

/// Authenticated user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    /// RUT as typed at login
    pub username: String,
    pub logged_in_at: DateTime<Local>,
}

/// Session state entity
#[derive(Debug, Default)]
pub struct SessionState {
    user: Option<SessionUser>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn start(&mut self, username: String, cx: &mut Context<Self>) {
        self.user = Some(SessionUser {
            username,
            logged_in_at: Local::now(),
        });
        cx.notify();
    }

    pub fn end(&mut self, cx: &mut Context<Self>) {
        if self.user.take().is_some() {
            cx.notify();
        }
    }
}
