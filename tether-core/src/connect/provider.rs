//! Store provider.

use tracing::debug;

use crate::context::{ContextKey, Scope};
use crate::store::StoreRef;

/// Name of the context slot holding the store.
pub const STORE_KEY: &str = "store";

/// The context key under which a store of state type `S` is published.
pub const fn store_key<S: Send + Sync + 'static>() -> ContextKey<StoreRef<S>> {
    ContextKey::new(STORE_KEY)
}

/// Props of [`provider`].
pub struct ProviderProps<S, C> {
    /// The store to publish.
    pub store: StoreRef<S>,
    /// Rendered unchanged.
    pub children: C,
}

/// Publish `store` to every component rendered in `scope` or below it,
/// then hand back `children` untouched.
///
/// The store is not inspected or subscribed to. A provider in a nearer
/// scope shadows this one.
pub fn provider<S, C>(scope: &Scope, props: ProviderProps<S, C>) -> C
where
    S: Send + Sync + 'static,
{
    debug!(depth = scope.depth(), "providing store");
    scope.provide(&store_key::<S>(), props.store);
    props.children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Action, Listener, Store, Unsubscribe};
    use std::sync::Arc;

    struct Fixed(Arc<u8>);

    impl Store for Fixed {
        type State = u8;

        fn get_state(&self) -> Arc<u8> {
            self.0.clone()
        }

        fn dispatch(&self, action: Action) -> Action {
            action
        }

        fn subscribe(&self, _listener: Listener) -> Unsubscribe {
            Unsubscribe::noop()
        }
    }

    #[test]
    fn returns_children_and_publishes_store() {
        let root = Scope::root();
        let store: StoreRef<u8> = Arc::new(Fixed(Arc::new(9)));

        let children = provider(
            &root,
            ProviderProps {
                store: store.clone(),
                children: vec!["a", "b"],
            },
        );

        assert_eq!(children, vec!["a", "b"]);
        let found = root.child().consume(&store_key::<u8>()).unwrap();
        assert!(Arc::ptr_eq(&found, &store));
        assert_eq!(*found.get_state(), 9);
    }

    #[test]
    fn other_state_types_do_not_see_it() {
        let root = Scope::root();
        let store: StoreRef<u8> = Arc::new(Fixed(Arc::new(1)));
        provider(&root, ProviderProps { store, children: () });

        assert!(root.consume(&store_key::<u16>()).is_none());
    }
}
