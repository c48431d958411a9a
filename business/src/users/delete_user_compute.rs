//! Delete-user compute and its two commands.
//!
//! - `DeleteUserCommand` deletes `DeleteUserInput.id`
//! - `ResetDeleteUserCommand` puts the compute back to idle once the alert for
//!   the last delete is gone

use std::any::Any;

use log::{info, warn};
use serde::Serialize;
use userdesk_states::{
    CancellationToken, Command, CommandFuture, CommandSnapshot, Compute, LatestOnlyUpdater, State,
    assign_impl,
};
use ustr::Ustr;

use super::api as users_api;
use super::list_users_compute::RequestStatus;
use crate::{AuthState, BusinessConfig};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteUserCompute {
    pub status: RequestStatus,
    /// Server message for the last settled delete.
    pub message: Option<String>,
    pub target: Option<Ustr>,
    /// Deletes started since the last reset. Tells two settled deletes apart.
    pub attempt: u64,
}

impl DeleteUserCompute {
    pub fn is_pending(&self) -> bool {
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
}

impl Compute for DeleteUserCompute {
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

/// Input for `DeleteUserCommand`.
#[derive(Debug, Clone, Default)]
pub struct DeleteUserInput {
    pub id: Option<Ustr>,
}

impl State for DeleteUserInput {
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

#[derive(Debug, Default)]
pub struct DeleteUserCommand;

impl Command for DeleteUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let id = snap
            .state::<DeleteUserInput>()
            .id
            .filter(|id| !id.is_empty());
        let api_url = snap.state::<BusinessConfig>().api_url();
        let token = snap.state::<AuthState>().token.clone();
        let attempt = snap.compute::<DeleteUserCompute>().attempt.saturating_add(1);

        Box::pin(async move {
            let Some(id) = id else {
                warn!("DeleteUserCommand: no user id set, nothing to delete");
                return;
            };

            updater.set(DeleteUserCompute {
                status: RequestStatus::Pending,
                message: None,
                target: Some(id),
                attempt,
            });
            info!("Deleting user {id}");

            let result = users_api::delete_user(api_url.as_str(), token.as_deref(), &id).await;
            let compute = match result {
                Ok(body) => DeleteUserCompute {
                    status: RequestStatus::Success,
                    message: Some(body.message),
                    target: Some(id),
                    attempt,
                },
                Err(err) => {
                    warn!("Deleting user {id} failed: {err}");
                    DeleteUserCompute {
                        status: RequestStatus::Error,
                        message: Some(err.to_string()),
                        target: Some(id),
                        attempt,
                    }
                }
            };
            updater.set(compute);
        })
    }
}

/// Clears status, message and target of the last delete.
#[derive(Debug, Default)]
pub struct ResetDeleteUserCommand;

impl Command for ResetDeleteUserCommand {
    fn run(
        &self,
        _snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        Box::pin(async move {
            updater.set(DeleteUserCompute::default());
        })
    }
}
