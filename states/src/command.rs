use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, LatestOnlyUpdater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// A manual-only side effect, run when explicitly enqueued.
///
/// `run` executes on the UI thread and must copy what it needs out of the
/// snapshot before returning. The returned future runs on the tokio runtime and
/// reports back only through the updater.
pub trait Command: Any + Send + Sync {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> CommandFuture;
}
