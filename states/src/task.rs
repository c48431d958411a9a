//! Task identity and cooperative cancellation for spawned commands.
//!
//! Every flush of a command type bumps that type's generation. The pair
//! `(TypeId, generation)` names one spawned task, which lets the context cancel
//! the previous run and lets [`crate::LatestOnlyUpdater`] drop late results.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Unique identifier for a spawned task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher values were spawned later.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to a spawned task.
///
/// Cancelling does not abort the future. The context races the command future
/// against `cancelled()`, so a cancelled command stops at its next await point.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
