use std::any::{Any, type_name};

use log::error;

/// A cache written only through [`crate::Updater::set`].
///
/// Updates sent from a command are applied on the next
/// [`crate::StateCtx::sync_computes`], so the UI always reads a value that was
/// complete at the start of the frame.
pub trait Compute: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Replaces `target` with the boxed value when the types line up.
pub fn assign_impl<T: Compute>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => error!(
            "Discarded compute update: payload is not a {}",
            type_name::<T>()
        ),
    }
}
