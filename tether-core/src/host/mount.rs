//! Mount Driver
//!
//! `Mount` plays the part of the rendering host for one component slot. It
//! owns the instance, delivers prop updates, records refresh requests and
//! tears the instance down on unmount.
//!
//! # Refresh Model
//!
//! A refresh request only raises a flag. The instance is re-rendered when
//! the host calls [`Mount::flush`], which re-delivers the most recent own
//! props. Requests raised while an update is running (for example by a
//! store listener fired from a dispatch inside render) are therefore never
//! re-entrant.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::trace;

use super::lifecycle::{Component, MountContext, Mountable};
use super::instance::{InstanceId, Refresh};
use crate::context::Scope;
use crate::error::{Error, Result};

type PropsOf<C> = <<C as Mountable>::Instance as Component>::Props;
type OutputOf<C> = <<C as Mountable>::Instance as Component>::Output;

/// A single mounted component slot.
pub struct Mount<C: Mountable> {
    id: InstanceId,
    definition: C,
    scope: Scope,
    pending: Arc<AtomicBool>,
    instance: Option<C::Instance>,
    props: Option<PropsOf<C>>,
    unmounted: bool,
}

impl<C: Mountable> Mount<C> {
    /// Prepare a slot for `definition` rendered inside `scope`.
    ///
    /// Nothing is mounted until the first [`render`](Self::render).
    pub fn new(scope: Scope, definition: C) -> Self {
        Self {
            id: InstanceId::new(),
            definition,
            scope,
            pending: Arc::new(AtomicBool::new(false)),
            instance: None,
            props: None,
            unmounted: false,
        }
    }

    /// Identity of the instance living in this slot.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// The scope the instance renders in.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Whether an instance is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.instance.is_some()
    }

    /// Deliver new props, mounting the instance first if needed.
    ///
    /// Clears any pending refresh, since this update already renders with
    /// current state.
    pub fn render(&mut self, props: PropsOf<C>) -> Result<OutputOf<C>> {
        if self.unmounted {
            return Err(Error::Unmounted);
        }

        if self.instance.is_none() {
            trace!(instance = ?self.id, depth = self.scope.depth(), "mounting component");
            let pending = Arc::clone(&self.pending);
            let ctx = MountContext {
                instance: self.id,
                scope: self.scope.clone(),
                refresh: Refresh::new(self.id, move || pending.store(true, Ordering::SeqCst)),
            };
            self.instance = Some(self.definition.mount(ctx, &props)?);
        }

        self.props = Some(props.clone());
        self.pending.store(false, Ordering::SeqCst);

        trace!(instance = ?self.id, "updating component");
        match self.instance.as_mut() {
            Some(instance) => instance.update(props),
            None => Err(Error::Unmounted),
        }
    }

    /// Whether the instance asked to be re-rendered since its last update.
    pub fn is_refresh_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Re-render with the last delivered props if a refresh is pending.
    ///
    /// Returns `Ok(None)` when there was nothing to do.
    pub fn flush(&mut self) -> Result<Option<OutputOf<C>>> {
        if !self.is_refresh_pending() {
            return Ok(None);
        }
        match self.props.clone() {
            Some(props) => self.render(props).map(Some),
            None => Ok(None),
        }
    }

    /// Dispose the instance. Later calls do nothing.
    pub fn unmount(&mut self) {
        self.unmounted = true;
        if let Some(mut instance) = self.instance.take() {
            trace!(instance = ?self.id, "unmounting component");
            instance.dispose();
        }
    }
}

impl<C: Mountable> Drop for Mount<C> {
    fn drop(&mut self) {
        self.unmount();
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
