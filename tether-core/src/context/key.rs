//! Typed context keys.
//!
//! A key is a token that names one slot in the ambient registry. Its identity
//! is the pair (value type, name), so two keys with the same name but
//! different value types never collide, and a lookup can only ever return a
//! value of the type the key promises.

use std::any::TypeId;
use std::fmt;
use std::marker::PhantomData;

/// A typed token identifying a slot in a [`Scope`](super::Scope).
///
/// # Example
///
/// ```rust
/// use tether_core::context::{ContextKey, Scope};
///
/// const THEME: ContextKey<&'static str> = ContextKey::new("theme");
///
/// let root = Scope::root();
/// root.provide(&THEME, "dark");
/// assert_eq!(root.child().consume(&THEME), Some("dark"));
/// ```
pub struct ContextKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T: 'static> ContextKey<T> {
    /// Create a key with the given name.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// The key's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn slot(&self) -> SlotId {
        SlotId {
            type_id: TypeId::of::<T>(),
            name: self.name,
        }
    }
}

impl<T> Clone for ContextKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ContextKey<T> {}

impl<T> fmt::Debug for ContextKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContextKey").field(&self.name).finish()
    }
}

/// Resolved identity of a key: the value type plus the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SlotId {
    type_id: TypeId,
    name: &'static str,
}
