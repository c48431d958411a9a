use std::any::Any;

/// A value stored once per type inside [`crate::StateCtx`].
///
/// States are owned and mutated by the UI thread. A state that commands need to
/// read must return a clone from [`State::snapshot`], since commands run off the
/// frame loop.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// An owned copy handed to running commands. `None` keeps the state private
    /// to the UI thread.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}
