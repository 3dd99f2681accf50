//! Connected Components
//!
//! `connect` wraps a render function into a component that reads its props
//! from the nearest store.
//!
//! # How It Works
//!
//! 1. On mount, the instance resolves the store from its scope. If a state
//!    mapper is configured it computes the initial state props and
//!    subscribes a listener.
//!
//! 2. The listener recomputes state props from the current state and the
//!    latest own props. When the result changed it caches it, marks it as
//!    already mapped and requests a refresh from the host.
//!
//! 3. On every update the instance remembers the new own props, recomputes
//!    state props if the mapper reads own props (unless a notification
//!    already did), derives dispatch props, merges and renders.
//!
//! 4. On dispose (or drop) the subscription is released exactly once.
//!
//! # Locking
//!
//! The state shared with the listener is behind a mutex that is never held
//! while user code or the store runs, so a render that dispatches (and so
//! fires the listener synchronously) cannot deadlock.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::trace;

use super::mapping::{shallow_merge, ChangeDetection, MapDispatch, MapState, MergeProps};
use super::provider::{store_key, STORE_KEY};
use crate::context::Scope;
use crate::error::{Error, Result};
use crate::host::{Component, InstanceId, MountContext, Mountable, Refresh};
use crate::props::{DispatchProp, Props};
use crate::store::{Dispatch, Listener, Store, StoreRef, Subscription};

type RenderFn<M, R> = Arc<dyn Fn(&Scope, M) -> R + Send + Sync>;

/// A component definition bound to a store of state type `S`.
///
/// Built by [`connect`] or [`connect_with`] and configured with the
/// builder methods. Mount it with a [`Mount`](crate::host::Mount) or any
/// other host.
pub struct Connect<S, M, R> {
    render: RenderFn<M, R>,
    map_state: Option<MapState<S>>,
    map_dispatch: Option<MapDispatch>,
    merge: MergeProps<M>,
    change_detection: ChangeDetection,
}

/// Wrap `render`, passing it the shallow union of own, state and dispatch
/// props.
///
/// # Example
///
/// ```rust
/// use tether_core::connect::connect;
/// use tether_core::props::Props;
///
/// struct AppState {
///     count: i64,
/// }
///
/// let counter = connect(|_scope, props: Props| {
///     format!("{}: {}", props.str("message").unwrap_or(""), props.str("countValue").unwrap_or(""))
/// })
/// .map_state(|state: &AppState| Props::new().with("countValue", state.count.to_string()));
/// # let _ = counter;
/// ```
pub fn connect<S, R, F>(render: F) -> Connect<S, Props, R>
where
    F: Fn(&Scope, Props) -> R + Send + Sync + 'static,
{
    Connect {
        render: Arc::new(render),
        map_state: None,
        map_dispatch: None,
        merge: shallow_merge(),
        change_detection: ChangeDetection::default(),
    }
}

/// Wrap `render`, building its props with a custom `merge`.
///
/// The merge result is passed to `render` verbatim.
pub fn connect_with<S, M, R, F, G>(render: F, merge: G) -> Connect<S, M, R>
where
    F: Fn(&Scope, M) -> R + Send + Sync + 'static,
    G: Fn(&Arc<Props>, Props, &Props) -> M + Send + Sync + 'static,
{
    Connect {
        render: Arc::new(render),
        map_state: None,
        map_dispatch: None,
        merge: Arc::new(merge),
        change_detection: ChangeDetection::default(),
    }
}

impl<S, M, R> Connect<S, M, R>
where
    S: Send + Sync + 'static,
{
    /// Derive state props from store state alone.
    ///
    /// Recomputed only when the store notifies.
    pub fn map_state<F, P>(mut self, map: F) -> Self
    where
        F: Fn(&S) -> P + Send + Sync + 'static,
        P: Into<Arc<Props>>,
    {
        self.map_state = Some(MapState::State(Arc::new(move |state: &S| -> Arc<Props> {
            map(state).into()
        })));
        self
    }

    /// Derive state props from store state and own props.
    ///
    /// Recomputed when the store notifies and on every own-props update.
    pub fn map_state_with_props<F, P>(mut self, map: F) -> Self
    where
        F: Fn(&S, &Props) -> P + Send + Sync + 'static,
        P: Into<Arc<Props>>,
    {
        self.map_state = Some(MapState::StateAndProps(Arc::new(
            move |state: &S, own: &Props| -> Arc<Props> { map(state, own).into() },
        )));
        self
    }

    /// Derive dispatch props. Replaces the default `dispatch` prop.
    pub fn map_dispatch<F>(mut self, map: F) -> Self
    where
        F: Fn(&Dispatch, &Props) -> Props + Send + Sync + 'static,
    {
        self.map_dispatch = Some(Arc::new(map));
        self
    }

    /// Replace the merge function.
    pub fn merge_props<F>(mut self, merge: F) -> Self
    where
        F: Fn(&Arc<Props>, Props, &Props) -> M + Send + Sync + 'static,
    {
        self.merge = Arc::new(merge);
        self
    }

    /// Choose how notifications detect changed state props.
    pub fn change_detection(mut self, policy: ChangeDetection) -> Self {
        self.change_detection = policy;
        self
    }

    /// Whether a state mapper is configured, i.e. mounts will subscribe.
    pub fn subscribes(&self) -> bool {
        self.map_state.is_some()
    }
}

impl<S, M, R> Clone for Connect<S, M, R> {
    fn clone(&self) -> Self {
        Self {
            render: Arc::clone(&self.render),
            map_state: self.map_state.clone(),
            map_dispatch: self.map_dispatch.clone(),
            merge: Arc::clone(&self.merge),
            change_detection: self.change_detection,
        }
    }
}

impl<S, M, R> fmt::Debug for Connect<S, M, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connect")
            .field("map_state", &self.map_state)
            .field("map_dispatch", &self.map_dispatch.is_some())
            .field("change_detection", &self.change_detection)
            .finish()
    }
}

/// State shared between an instance and its store listener.
struct Shared {
    /// Latest own props delivered by the host.
    own: Props,
    /// Cached state props.
    state_props: Arc<Props>,
    /// Set when state props are already current for the next update.
    mapped: bool,
}

/// A mounted [`Connect`].
pub struct Connected<S, M, R> {
    id: InstanceId,
    scope: Scope,
    store: StoreRef<S>,
    dispatch: Dispatch,
    definition: Connect<S, M, R>,
    shared: Arc<Mutex<Shared>>,
    subscription: Option<Subscription>,
    disposed: bool,
}

impl<S, M, R> Mountable for Connect<S, M, R>
where
    S: Send + Sync + 'static,
{
    type Instance = Connected<S, M, R>;

    fn mount(&self, ctx: MountContext, props: &Props) -> Result<Self::Instance> {
        let store = ctx
            .scope
            .consume(&store_key::<S>())
            .ok_or(Error::MissingStore { key: STORE_KEY })?;

        let shared = Arc::new(Mutex::new(Shared {
            own: props.clone(),
            state_props: Arc::new(Props::new()),
            mapped: false,
        }));

        let subscription = match &self.map_state {
            Some(map_state) => {
                let initial = map_state.map(&store.get_state(), props);
                {
                    let mut shared = shared.lock();
                    shared.state_props = initial;
                    shared.mapped = true;
                }
                let listener = state_listener(
                    Arc::downgrade(&store),
                    map_state.clone(),
                    self.change_detection,
                    Arc::clone(&shared),
                    ctx.refresh.clone(),
                );
                Some(Subscription::new(ctx.instance, store.subscribe(listener)))
            }
            None => None,
        };

        Ok(Connected {
            id: ctx.instance,
            scope: ctx.scope,
            dispatch: Dispatch::from_store(Arc::clone(&store)),
            store,
            definition: self.clone(),
            shared,
            subscription,
            disposed: false,
        })
    }
}

/// Build the store listener for one instance.
fn state_listener<S>(
    store: Weak<dyn Store<State = S>>,
    map_state: MapState<S>,
    change_detection: ChangeDetection,
    shared: Arc<Mutex<Shared>>,
    refresh: Refresh,
) -> Listener
where
    S: Send + Sync + 'static,
{
    Listener::new(move || {
        let Some(store) = store.upgrade() else {
            return;
        };
        let own = shared.lock().own.clone();
        let next = map_state.map(&store.get_state(), &own);

        let mut guard = shared.lock();
        if !change_detection.changed(&guard.state_props, &next) {
            trace!(instance = ?refresh.instance(), "state props unchanged");
            return;
        }
        guard.state_props = next;
        guard.mapped = true;
        drop(guard);

        refresh.request();
    })
}

impl<S, M, R> Connected<S, M, R> {
    /// Identity of this instance.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Whether the instance holds a store subscription.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    /// The store this instance is bound to.
    pub fn store(&self) -> &StoreRef<S> {
        &self.store
    }
}

impl<S, M, R> Component for Connected<S, M, R>
where
    S: Send + Sync + 'static,
{
    type Props = Props;
    type Output = R;

    fn update(&mut self, own: Props) -> Result<R> {
        if self.disposed {
            return Err(Error::Unmounted);
        }

        let recompute = {
            let mut shared = self.shared.lock();
            shared.own = own.clone();
            let stale = !shared.mapped;
            shared.mapped = false;
            stale
        };

        let state_props = match &self.definition.map_state {
            Some(map_state) if recompute && map_state.is_own_props_sensitive() => {
                let next = map_state.map(&self.store.get_state(), &own);
                self.shared.lock().state_props = Arc::clone(&next);
                next
            }
            _ => Arc::clone(&self.shared.lock().state_props),
        };

        let dispatch_props = match &self.definition.map_dispatch {
            Some(map_dispatch) => map_dispatch(&self.dispatch, &own),
            None => DispatchProp {
                dispatch: self.dispatch.clone(),
            }
            .into(),
        };

        let merged = (self.definition.merge)(&state_props, dispatch_props, &own);

        trace!(instance = ?self.id, "rendering connected component");
        Ok((self.definition.render)(&self.scope, merged))
    }

    fn dispose(&mut self) {
        self.disposed = true;
        if let Some(mut subscription) = self.subscription.take() {
            subscription.release();
        }
    }
}

impl<S, M, R> fmt::Debug for Connected<S, M, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connected")
            .field("id", &self.id)
            .field("subscribed", &self.is_subscribed())
            .field("disposed", &self.disposed)
            .finish()
    }
}
