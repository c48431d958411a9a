//! Authentication slice.
//!
//! The sign-in flow lives elsewhere; this slice only records who is signed in
//! and carries the session token that admin API calls attach.

use serde::Serialize;
use std::any::Any;
use userdesk_states::State;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthState {
    pub status: AuthStatus,
    pub username: Option<String>,
    /// Session token sent as `Authorization: Bearer <token>`.
    #[serde(skip)]
    pub token: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStatus {
    #[default]
    LoggedOut,
    LoggingIn,
    LoggedIn,
    LoginFailed,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.status == AuthStatus::LoggedIn
    }

    pub fn is_logging_in(&self) -> bool {
        self.status == AuthStatus::LoggingIn
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn start_login(&mut self) {
        self.status = AuthStatus::LoggingIn;
        self.error = None;
    }

    pub fn login_success(&mut self, username: String, token: Option<String>) {
        self.status = AuthStatus::LoggedIn;
        self.username = Some(username);
        self.token = token;
        self.error = None;
    }

    pub fn login_failed(&mut self, error: String) {
        self.status = AuthStatus::LoginFailed;
        self.token = None;
        self.error = Some(error);
    }

    pub fn logout(&mut self) {
        self.status = AuthStatus::LoggedOut;
        self.username = None;
        self.token = None;
        self.error = None;
    }
}

impl State for AuthState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}
