use std::any::{Any, TypeId, type_name};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use flume::Sender;
use log::{debug, warn};

use crate::{Compute, TaskId};

pub(crate) type UpdateMessage = (TypeId, Box<dyn Any + Send>);

/// Sends compute values back to the owning [`crate::StateCtx`].
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<UpdateMessage>,
}

impl Updater {
    pub(crate) fn new(send: Sender<UpdateMessage>) -> Self {
        Self { send }
    }

    pub fn set<T: Compute>(&self, value: T) {
        if self.send.send((TypeId::of::<T>(), Box::new(value))).is_err() {
            warn!(
                "Dropped update for {}: state context is gone",
                type_name::<T>()
            );
        }
    }
}

/// An [`Updater`] bound to one task generation.
///
/// Once a newer run of the same command has been flushed, `set` becomes a
/// no-op, so a slow response can never overwrite a newer one.
#[derive(Debug, Clone)]
pub struct LatestOnlyUpdater {
    inner: Updater,
    task_id: TaskId,
    latest: Arc<AtomicU64>,
}

impl LatestOnlyUpdater {
    pub(crate) fn new(inner: Updater, task_id: TaskId, latest: Arc<AtomicU64>) -> Self {
        Self {
            inner,
            task_id,
            latest,
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn is_latest(&self) -> bool {
        self.latest.load(Ordering::Acquire) == self.task_id.generation()
    }

    pub fn set<T: Compute>(&self, value: T) {
        if self.is_latest() {
            self.inner.set(value);
        } else {
            debug!(
                "Dropped stale {} from generation {}",
                type_name::<T>(),
                self.task_id.generation()
            );
        }
    }
}
