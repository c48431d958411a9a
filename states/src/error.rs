use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("State not registered: {name}")]
    StateNotFound { name: &'static str },
    #[error("Compute not registered: {name}")]
    ComputeNotFound { name: &'static str },
    #[error("Command not registered: {name}")]
    CommandNotFound { name: &'static str },
}
