//! Error type for running a picker.
//!
//! Handling input never fails. Errors only come from the terminal program
//! loop or from setting up the runtime that drives it.

/// Errors returned by the run drivers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The terminal program failed to start or crashed while running.
    #[error(transparent)]
    Program(#[from] bubbletea_rs::Error),

    /// The blocking driver could not build its async runtime.
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_error_message() {
        let err = Error::Runtime(std::io::Error::other("no threads"));
        assert_eq!(err.to_string(), "failed to start runtime: no threads");
        assert!(std::error::Error::source(&err).is_some());
    }
}
