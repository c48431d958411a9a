//! Application state container.
//!
//! - [`State`]: UI-owned values, one per type
//! - [`Compute`]: caches written by commands through an [`Updater`]
//! - [`Command`]: manual-only side effects spawned on tokio
//!
//! Widgets read states and computes from a [`StateCtx`] and trigger changes by
//! enqueueing commands. They never perform IO themselves.

mod command;
mod compute;
mod ctx;
mod error;
mod snapshot;
mod state;
mod task;
mod time;
mod updater;

pub use command::{Command, CommandFuture};
pub use compute::{Compute, assign_impl};
pub use ctx::StateCtx;
pub use error::Error;
pub use snapshot::CommandSnapshot;
pub use state::State;
pub use task::{TaskHandle, TaskId};
pub use time::Time;
pub use updater::{LatestOnlyUpdater, Updater};

pub use tokio_util::sync::CancellationToken;

#[cfg(test)]
mod state_ctx_tests {
    use std::any::Any;
    use std::time::Duration;

    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    struct Counter {
        value: i32,
    }

    impl State for Counter {
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

    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    struct Echo {
        value: Option<i32>,
    }

    impl Compute for Echo {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            assign_impl(self, new_self);
        }
    }

    /// Copies `Counter` into `Echo`, optionally after a delay.
    #[derive(Debug, Default)]
    struct EchoCommand;

    impl Command for EchoCommand {
        fn run(
            &self,
            snap: CommandSnapshot,
            updater: LatestOnlyUpdater,
            _cancel: CancellationToken,
        ) -> CommandFuture {
            let value = snap.state::<Counter>().value;
            Box::pin(async move {
                if value == 1 {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                }
                updater.set(Echo { value: Some(value) });
            })
        }
    }

    fn test_ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter::default());
        ctx.record_compute(Echo::default());
        ctx.record_command(EchoCommand);
        ctx
    }

    async fn drain(ctx: &mut StateCtx) {
        while ctx.task_set_mut().join_next().await.is_some() {}
        ctx.sync_computes();
    }

    #[test]
    fn update_mutates_registered_state() {
        let mut ctx = test_ctx();
        ctx.update::<Counter>(|counter| counter.value = 7);
        assert_eq!(ctx.state::<Counter>().value, 7);
    }

    #[test]
    fn try_state_reports_missing_type() {
        let ctx = StateCtx::new();
        let err = ctx.try_state::<Counter>().expect_err("Counter is not registered");
        assert!(err.to_string().contains("Counter"), "unexpected error: {err}");
    }

    #[test]
    fn updater_values_apply_on_sync() {
        let mut ctx = test_ctx();
        ctx.updater().set(Echo { value: Some(3) });

        assert_eq!(ctx.compute::<Echo>().value, None);
        ctx.sync_computes();
        assert_eq!(ctx.compute::<Echo>().value, Some(3));
    }

    #[test]
    fn enqueue_without_flush_only_queues() {
        let mut ctx = test_ctx();
        ctx.enqueue_command::<EchoCommand>();
        assert_eq!(ctx.queued_commands(), 1);
        assert_eq!(ctx.task_count(), 0);
    }

    #[tokio::test]
    async fn flushed_command_reads_snapshot() {
        let mut ctx = test_ctx();
        ctx.update::<Counter>(|counter| counter.value = 5);
        ctx.enqueue_command::<EchoCommand>();
        ctx.flush_commands();

        drain(&mut ctx).await;
        assert_eq!(ctx.compute::<Echo>().value, Some(5));
    }

    #[tokio::test]
    async fn newer_generation_wins_over_slow_one() {
        let mut ctx = test_ctx();

        ctx.update::<Counter>(|counter| counter.value = 1);
        ctx.enqueue_command::<EchoCommand>();
        ctx.flush_commands();

        ctx.update::<Counter>(|counter| counter.value = 2);
        ctx.enqueue_command::<EchoCommand>();
        ctx.flush_commands();

        drain(&mut ctx).await;
        assert_eq!(ctx.compute::<Echo>().value, Some(2));
    }

    #[tokio::test]
    async fn unregistered_command_is_skipped() {
        let mut ctx = StateCtx::new();
        ctx.enqueue_command::<EchoCommand>();
        ctx.flush_commands();
        assert_eq!(ctx.task_count(), 0);
        assert_eq!(ctx.queued_commands(), 0);
    }

    #[tokio::test]
    async fn shutdown_cancels_running_tasks() {
        let mut ctx = test_ctx();
        ctx.update::<Counter>(|counter| counter.value = 1);
        ctx.enqueue_command::<EchoCommand>();
        ctx.flush_commands();

        ctx.shutdown().await;
        ctx.sync_computes();
        assert_eq!(ctx.task_count(), 0);
        assert_eq!(ctx.compute::<Echo>().value, None);
    }
}
