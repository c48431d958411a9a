use std::any::Any;

use chrono::{DateTime, Duration, Utc};

use crate::State;

/// Virtual clock.
///
/// The app loop moves it to the wall clock once per frame. Tests move it by
/// hand, which makes every deadline in the business layer deterministic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl Time {
    pub fn at(virt: DateTime<Utc>) -> Self {
        Self { virt }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.virt
    }

    pub fn set(&mut self, virt: DateTime<Utc>) {
        self.virt = virt;
    }

    pub fn advance(&mut self, by: Duration) {
        self.virt += by;
    }
}

impl State for Time {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(*self))
    }
}

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.virt
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}
