//! Ambient Registry
//!
//! Components receive values from their ancestors through a scoped registry
//! instead of explicit props. A provider writes a value into its scope, and
//! any descendant can read it back through the same key.
//!
//! # Design
//!
//! Keys are typed tokens rather than bare strings. A missing or mistyped
//! entry shows up as `None` at the lookup site, never as a fault further
//! down the call chain.

mod key;
mod scope;

pub use key::ContextKey;
pub use scope::Scope;
