//! Mapping functions and change detection.

use std::fmt;
use std::sync::Arc;

use crate::props::Props;
use crate::store::Dispatch;

type StateOnly<S> = dyn Fn(&S) -> Arc<Props> + Send + Sync;
type StateAndProps<S> = dyn Fn(&S, &Props) -> Arc<Props> + Send + Sync;

/// Derives state props from store state.
///
/// The variant decides whether own-props updates trigger a recompute:
/// `State` mappers only rerun on store notifications, `StateAndProps`
/// mappers also rerun on every own-props update.
pub enum MapState<S> {
    /// `state -> props`.
    State(Arc<StateOnly<S>>),
    /// `(state, own props) -> props`.
    StateAndProps(Arc<StateAndProps<S>>),
}

impl<S> MapState<S> {
    /// Whether the mapper reads own props.
    pub fn is_own_props_sensitive(&self) -> bool {
        matches!(self, MapState::StateAndProps(_))
    }

    /// Run the mapper.
    pub fn map(&self, state: &S, own: &Props) -> Arc<Props> {
        match self {
            MapState::State(f) => f(state),
            MapState::StateAndProps(f) => f(state, own),
        }
    }
}

impl<S> Clone for MapState<S> {
    fn clone(&self) -> Self {
        match self {
            MapState::State(f) => MapState::State(Arc::clone(f)),
            MapState::StateAndProps(f) => MapState::StateAndProps(Arc::clone(f)),
        }
    }
}

impl<S> fmt::Debug for MapState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapState::State(_) => f.write_str("MapState::State(..)"),
            MapState::StateAndProps(_) => f.write_str("MapState::StateAndProps(..)"),
        }
    }
}

/// Derives dispatch props from the dispatch capability and own props.
pub type MapDispatch = Arc<dyn Fn(&Dispatch, &Props) -> Props + Send + Sync>;

/// Combines state, dispatch and own props into the final props.
pub type MergeProps<M> = Arc<dyn Fn(&Arc<Props>, Props, &Props) -> M + Send + Sync>;

/// How a store notification decides that state props changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeDetection {
    /// Changed when the mapper returns a different allocation.
    ///
    /// Mappers that build a fresh `Props` on every call therefore refresh
    /// on every notification. Return a cached `Arc` to avoid it.
    #[default]
    Identity,

    /// Changed when the new props are not equal to the cached ones.
    Equality,
}

impl ChangeDetection {
    /// Decide whether `next` replaces `current`.
    pub fn changed(self, current: &Arc<Props>, next: &Arc<Props>) -> bool {
        match self {
            ChangeDetection::Identity => !Arc::ptr_eq(current, next),
            ChangeDetection::Equality => !Arc::ptr_eq(current, next) && current != next,
        }
    }
}

/// The default merge: `{ ...own, ...state, ...dispatch }`.
pub(crate) fn shallow_merge() -> MergeProps<Props> {
    Arc::new(|state: &Arc<Props>, dispatch: Props, own: &Props| {
        Props::shallow_union(own, state, &dispatch)
    })
}
