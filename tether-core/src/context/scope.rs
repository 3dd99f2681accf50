//! Tree-scoped registry.
//!
//! Each mounted component sees a `Scope`: one frame of key/value entries
//! plus a link to the frame of its parent. Lookups walk from the current
//! frame towards the root and return the first entry found, so the nearest
//! ancestor that provided a key wins.
//!
//! # Lifetime
//!
//! Frames are reference counted. A provided value lives as long as the
//! frame it was written into, which in turn lives as long as the component
//! that owns the scope or any descendant scope still holding it.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use smallvec::SmallVec;

use super::key::{ContextKey, SlotId};

type Value = Arc<dyn Any + Send + Sync>;

/// A frame usually carries zero or one entries (a provider publishes a
/// single store), so keep them inline.
type Entries = SmallVec<[(SlotId, Value); 2]>;

struct Frame {
    parent: Option<Scope>,
    depth: usize,
    entries: RwLock<Entries>,
}

/// Handle to one frame of the ambient registry.
///
/// Cloning a `Scope` yields another handle to the same frame.
#[derive(Clone)]
pub struct Scope {
    frame: Arc<Frame>,
}

impl Scope {
    /// Create a root scope with no parent.
    pub fn root() -> Self {
        Self::with_parent(None)
    }

    /// Create a scope nested under this one.
    pub fn child(&self) -> Self {
        Self::with_parent(Some(self.clone()))
    }

    fn with_parent(parent: Option<Scope>) -> Self {
        let depth = parent.as_ref().map_or(0, |p| p.depth() + 1);
        Self {
            frame: Arc::new(Frame {
                parent,
                depth,
                entries: RwLock::new(SmallVec::new()),
            }),
        }
    }

    /// Distance from the root scope.
    pub fn depth(&self) -> usize {
        self.frame.depth
    }

    /// The enclosing scope, if any.
    pub fn parent(&self) -> Option<&Scope> {
        self.frame.parent.as_ref()
    }

    /// Publish `value` under `key` in this frame.
    ///
    /// Replaces a value previously provided under the same key in this
    /// frame. Values in ancestor frames are shadowed, not touched.
    pub fn provide<T>(&self, key: &ContextKey<T>, value: T)
    where
        T: Clone + Send + Sync + 'static,
    {
        let slot = key.slot();
        let value: Value = Arc::new(value);
        let mut entries = self.frame.entries.write();
        match entries.iter_mut().find(|(id, _)| *id == slot) {
            Some(entry) => entry.1 = value,
            None => entries.push((slot, value)),
        }
    }

    /// Look up `key`, walking from this frame towards the root.
    pub fn consume<T>(&self, key: &ContextKey<T>) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let slot = key.slot();
        let mut scope = Some(self);
        while let Some(current) = scope {
            let found = current
                .frame
                .entries
                .read()
                .iter()
                .find(|(id, _)| *id == slot)
                .and_then(|(_, value)| value.downcast_ref::<T>().cloned());
            if found.is_some() {
                return found;
            }
            scope = current.parent();
        }
        None
    }

    /// Check whether this frame itself (ignoring ancestors) provides `key`.
    pub fn provides<T: 'static>(&self, key: &ContextKey<T>) -> bool {
        let slot = key.slot();
        self.frame.entries.read().iter().any(|(id, _)| *id == slot)
    }

    /// Check whether two handles refer to the same frame.
    pub fn ptr_eq(&self, other: &Scope) -> bool {
        Arc::ptr_eq(&self.frame, &other.frame)
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("depth", &self.depth())
            .field("entries", &self.frame.entries.read().len())
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: ContextKey<String> = ContextKey::new("name");
    const COUNT: ContextKey<u32> = ContextKey::new("count");

    #[test]
    fn consume_on_empty_scope_is_none() {
        let root = Scope::root();
        assert_eq!(root.consume(&NAME), None);
    }

    #[test]
    fn child_sees_parent_value() {
        let root = Scope::root();
        root.provide(&NAME, "outer".to_string());

        let grandchild = root.child().child();
        assert_eq!(grandchild.depth(), 2);
        assert_eq!(grandchild.consume(&NAME).as_deref(), Some("outer"));
    }

    #[test]
    fn nearest_ancestor_wins() {
        let root = Scope::root();
        root.provide(&NAME, "outer".to_string());

        let middle = root.child();
        middle.provide(&NAME, "inner".to_string());

        let leaf = middle.child();
        assert_eq!(leaf.consume(&NAME).as_deref(), Some("inner"));
        // The outer frame keeps its own value.
        assert_eq!(root.consume(&NAME).as_deref(), Some("outer"));
    }

    #[test]
    fn provide_twice_replaces_in_frame() {
        let root = Scope::root();
        root.provide(&COUNT, 1);
        root.provide(&COUNT, 2);
        assert_eq!(root.consume(&COUNT), Some(2));
        assert_eq!(root.frame.entries.read().len(), 1);
    }

    #[test]
    fn keys_are_typed() {
        let root = Scope::root();
        root.provide(&COUNT, 7);

        let same_name_other_type: ContextKey<String> = ContextKey::new("count");
        assert_eq!(root.consume(&same_name_other_type), None);
        assert!(root.provides(&COUNT));
        assert!(!root.child().provides(&COUNT));
    }

    #[test]
    fn clones_share_the_frame() {
        let root = Scope::root();
        let alias = root.clone();
        alias.provide(&COUNT, 3);
        assert!(root.ptr_eq(&alias));
        assert_eq!(root.consume(&COUNT), Some(3));
    }
}
