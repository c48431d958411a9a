//! Users list compute + `GetUsersCommand`.
//!
//! - `UsersListCompute` caches the current page and the request status.
//! - `GetUsersCommand` performs the request and updates the compute through
//!   the updater.
//!
//! UI sets `GetUsersInput.url` and enqueues the command; it reads the result
//! via `ctx.cached::<UsersListCompute>()`.

use std::any::Any;

use log::{info, warn};
use serde::Serialize;
use userdesk_states::{
    CancellationToken, Command, CommandFuture, CommandSnapshot, Compute, LatestOnlyUpdater, State,
    assign_impl,
};

use super::api as users_api;
use super::model::User;
use crate::{AuthState, BusinessConfig};

/// Status of the last remote call a compute tracks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

impl RequestStatus {
    /// Success or error.
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsersListCompute {
    /// `None` until the first page arrives.
    pub users: Option<Vec<User>>,
    pub total_docs: u64,
    pub status: RequestStatus,
    pub message: Option<String>,
}

impl UsersListCompute {
    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    pub fn is_success(&self) -> bool {
        self.status == RequestStatus::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == RequestStatus::Error
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn users(&self) -> Option<&[User]> {
        self.users.as_deref()
    }

    fn pending(&self) -> Self {
        Self {
            status: RequestStatus::Pending,
            message: None,
            ..self.clone()
        }
    }
}

impl Compute for UsersListCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Input for `GetUsersCommand`.
#[derive(Debug, Clone, Default)]
pub struct GetUsersInput {
    /// Path relative to the API base, e.g. `/admin/users?page=1&limit=100`.
    pub url: Option<String>,
}

impl State for GetUsersInput {
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

/// Fetches one page of users.
#[derive(Debug, Default)]
pub struct GetUsersCommand;

impl Command for GetUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let url = snap.state::<GetUsersInput>().url.clone();
        let api_url = snap.state::<BusinessConfig>().api_url();
        let token = snap.state::<AuthState>().token.clone();
        let previous = snap.compute::<UsersListCompute>().clone();

        Box::pin(async move {
            let Some(url) = url else {
                updater.set(UsersListCompute {
                    status: RequestStatus::Error,
                    message: Some("GetUsersCommand: missing GetUsersInput.url".to_owned()),
                    ..previous
                });
                return;
            };

            updater.set(previous.pending());
            info!("Fetching users: {url}");

            match users_api::list_users(api_url.as_str(), token.as_deref(), &url).await {
                Ok(response) => {
                    updater.set(UsersListCompute {
                        users: Some(response.users),
                        total_docs: response.total_docs,
                        status: RequestStatus::Success,
                        message: response.message,
                    });
                }
                Err(err) => {
                    warn!("Fetching users failed: {err}");
                    updater.set(UsersListCompute {
                        status: RequestStatus::Error,
                        message: Some(err.to_string()),
                        ..previous
                    });
                }
            }
        })
    }
}
