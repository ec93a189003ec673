//! Login and registration flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login is the only place a token enters the session store. Registration
//! talks to the same API but never stores anything; the user logs in
//! afterwards.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::messages;
use crate::session::SessionStore;
use crate::transport::Transport;
use crate::types::{Credentials, NewUser};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Authenticated,
    Failed,
}

/// Login screen state. The form stays editable in every phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub phase: LoginPhase,
    pub error: Option<&'static str>,
}

impl LoginState {
    pub fn begin(&mut self) {
        self.phase = LoginPhase::Submitting;
        self.error = None;
    }

    pub fn finish(&mut self, result: &Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.phase = LoginPhase::Authenticated;
                self.error = None;
            }
            Err(_) => {
                self.phase = LoginPhase::Failed;
                self.error = Some(messages::LOGIN_FAILED);
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegistrationPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationState {
    pub phase: RegistrationPhase,
    pub message: Option<&'static str>,
}

impl RegistrationState {
    pub fn begin(&mut self) {
        self.phase = RegistrationPhase::Submitting;
        self.message = None;
    }

    pub fn finish(&mut self, result: &Result<(), ApiError>) {
        self.phase = if result.is_ok() { RegistrationPhase::Succeeded } else { RegistrationPhase::Failed };
        self.message = Some(registration_message(result));
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == RegistrationPhase::Submitting
    }
}

/// User-facing text for a registration outcome.
pub fn registration_message(result: &Result<(), ApiError>) -> &'static str {
    match result {
        Ok(()) => messages::REGISTER_SUCCEEDED,
        Err(ApiError::Validation { .. }) => messages::REGISTER_REJECTED,
        Err(_) => messages::REGISTER_FAILED,
    }
}

/// Exchange credentials for a token and store it. Nothing is stored on
/// failure.
///
/// # Errors
///
/// Any [`ApiError`] from [`ApiClient::login`].
pub async fn login<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    credentials: &Credentials,
) -> Result<(), ApiError> {
    let token = api.login(credentials).await?;
    api.session().set(&token);
    tracing::info!(email = %credentials.email, "login succeeded");
    Ok(())
}

/// Create an account. Does not log in.
///
/// # Errors
///
/// Any [`ApiError`] from [`ApiClient::register`].
pub async fn register<T: Transport, S: SessionStore>(api: &ApiClient<T, S>, user: &NewUser) -> Result<(), ApiError> {
    api.register(user).await?;
    tracing::info!(email = %user.email, "registration succeeded");
    Ok(())
}

/// Forget the stored token.
pub fn logout<S: SessionStore>(session: &S) {
    session.clear();
    tracing::info!("session cleared");
}
