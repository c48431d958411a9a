use std::any::{TypeId, type_name};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use flume::{Receiver, Sender};
use log::{debug, error};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::updater::UpdateMessage;
use crate::{
    Command, CommandSnapshot, Compute, Error, LatestOnlyUpdater, State, TaskHandle, TaskId, Updater,
};

/// Owns every registered state, compute and command of the application.
///
/// Frame order used by the app loop:
/// 1. `sync_computes()` applies results sent by finished commands
/// 2. widgets read states/computes and enqueue commands
/// 3. `flush_commands()` spawns the queued commands
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    commands: BTreeMap<TypeId, (&'static str, Box<dyn Command>)>,
    queue: Vec<(TypeId, &'static str)>,

    send: Sender<UpdateMessage>,
    recv: Receiver<UpdateMessage>,

    tasks: JoinSet<()>,
    generations: BTreeMap<TypeId, Arc<AtomicU64>>,
    running: BTreeMap<TypeId, TaskHandle>,
    shutdown: CancellationToken,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("queued", &self.queue.len())
            .field("tasks", &self.tasks.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            queue: Vec::new(),
            send,
            recv,
            tasks: JoinSet::new(),
            generations: BTreeMap::new(),
            running: BTreeMap::new(),
            shutdown: CancellationToken::new(),
        }
    }

    // =====================
    // States
    // =====================

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn has_state<T: State>(&self) -> bool {
        self.states.contains_key(&TypeId::of::<T>())
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or(Error::StateNotFound {
                name: type_name::<T>(),
            })
    }

    /// # Panics
    /// Panics when `T` was never registered with [`StateCtx::add_state`].
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    /// Panics when `T` was never registered with [`StateCtx::add_state`].
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| {
                panic!(
                    "{}",
                    Error::StateNotFound {
                        name: type_name::<T>(),
                    }
                )
            })
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    // =====================
    // Computes
    // =====================

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(TypeId::of::<T>(), Box::new(compute));
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
    }

    /// # Panics
    /// Panics when `T` was never registered with [`StateCtx::record_compute`].
    pub fn compute<T: Compute>(&self) -> &T {
        self.cached::<T>().unwrap_or_else(|| {
            panic!(
                "{}",
                Error::ComputeNotFound {
                    name: type_name::<T>(),
                }
            )
        })
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Applies every compute value sent since the last call and reaps finished
    /// tasks.
    pub fn sync_computes(&mut self) {
        for (type_id, value) in self.recv.try_iter() {
            match self.computes.get_mut(&type_id) {
                Some(compute) => compute.assign_box(value),
                None => error!("Received update for an unregistered compute: {type_id:?}"),
            }
        }

        while let Some(joined) = self.tasks.try_join_next() {
            if let Err(err) = joined
                && err.is_panic()
            {
                error!("Command task panicked: {err}");
            }
        }
    }

    // =====================
    // Commands
    // =====================

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands
            .insert(TypeId::of::<C>(), (type_name::<C>(), Box::new(command)));
    }

    /// Queues `C` for the next [`StateCtx::flush_commands`].
    pub fn enqueue_command<C: Command>(&mut self) {
        self.queue.push((TypeId::of::<C>(), type_name::<C>()));
    }

    pub fn queued_commands(&self) -> usize {
        self.queue.len()
    }

    /// Spawns every queued command on the current tokio runtime.
    ///
    /// A command type that is still running from an earlier flush is cancelled
    /// first, and its updater stops delivering.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime and the queue is not empty.
    pub fn flush_commands(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        for (type_id, name) in std::mem::take(&mut self.queue) {
            if !self.commands.contains_key(&type_id) {
                error!("{}", Error::CommandNotFound { name });
                continue;
            }

            let snapshot = self.snapshot();

            let latest = Arc::clone(
                self.generations
                    .entry(type_id)
                    .or_insert_with(|| Arc::new(AtomicU64::new(0))),
            );
            let generation = latest.fetch_add(1, Ordering::AcqRel) + 1;
            let task_id = TaskId::new(type_id, generation);

            if let Some(previous) = self.running.remove(&type_id) {
                debug!(
                    "Cancelling {name} generation {}",
                    previous.id().generation()
                );
                previous.cancel();
            }

            let token = self.shutdown.child_token();
            let updater = LatestOnlyUpdater::new(self.updater(), task_id, latest);

            let Some((_, command)) = self.commands.get(&type_id) else {
                continue;
            };
            let future = command.run(snapshot, updater, token.clone());

            let cancelled = token.clone();
            self.tasks.spawn(async move {
                tokio::select! {
                    () = cancelled.cancelled() => {
                        debug!("{name} generation {generation} cancelled");
                    }
                    () = future => {}
                }
            });

            self.running.insert(type_id, TaskHandle::new(task_id, token));
        }
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn task_set_mut(&mut self) -> &mut JoinSet<()> {
        &mut self.tasks
    }

    pub fn has_pending_work(&self) -> bool {
        !self.queue.is_empty() || !self.tasks.is_empty()
    }

    /// Cancels every running command and waits for the tasks to wind down.
    pub async fn shutdown(&mut self) {
        self.shutdown.cancel();
        while self.tasks.join_next().await.is_some() {}
        self.running.clear();
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snapshot = CommandSnapshot::new();
        for (type_id, state) in &self.states {
            if let Some(value) = state.snapshot() {
                snapshot.insert_state(*type_id, value);
            }
        }
        for (type_id, compute) in &self.computes {
            if let Some(value) = compute.snapshot() {
                snapshot.insert_compute(*type_id, value);
            }
        }
        snapshot
    }
}
