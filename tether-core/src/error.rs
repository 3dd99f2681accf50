//! Error types.
//!
//! Failures here are developer-facing: a connected component mounted without
//! a provider above it, or a host that keeps updating an instance after
//! unmounting it. Panics raised by user mappers and render functions are not
//! caught and reach the host unchanged.

use thiserror::Error;

/// Errors surfaced by the store bindings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No provider published a store of the requested state type in any
    /// enclosing scope.
    #[error("no store published under `{key}` in any enclosing scope")]
    MissingStore {
        /// Name of the context key that was looked up.
        key: &'static str,
    },

    /// The instance was updated after it had been disposed.
    #[error("component instance was updated after unmount")]
    Unmounted,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
