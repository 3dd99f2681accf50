//! Component lifecycle traits.
//!
//! These traits are the seam between a rendering host and the components it
//! drives. A [`Mountable`] is a component definition; mounting it yields a
//! [`Component`] instance that receives one `update` per prop-update cycle
//! and a single `dispose` when it leaves the tree.

use std::fmt;
use std::sync::Arc;

use super::instance::{InstanceId, Refresh};
use crate::context::Scope;
use crate::error::Result;
use crate::props::Props;

/// Everything a component receives from its host at mount time.
#[derive(Debug, Clone)]
pub struct MountContext {
    /// Identity of the instance being mounted.
    pub instance: InstanceId,
    /// The instance's position in the ambient registry.
    pub scope: Scope,
    /// Re-render requests for this instance.
    pub refresh: Refresh,
}

/// A mounted component instance.
pub trait Component {
    /// Props delivered by the parent on each update.
    type Props: Clone;

    /// What one render produces.
    type Output;

    /// Render with the latest props.
    fn update(&mut self, props: Self::Props) -> Result<Self::Output>;

    /// Tear the instance down. Called at most once by the host.
    fn dispose(&mut self) {}
}

/// A component definition that can be mounted any number of times.
pub trait Mountable {
    /// The per-mount instance.
    type Instance: Component;

    /// Create an instance. `props` are the props of the first update.
    fn mount(
        &self,
        ctx: MountContext,
        props: &<Self::Instance as Component>::Props,
    ) -> Result<Self::Instance>;
}

/// A stateless component built from a render function.
///
/// See [`component`].
pub struct Plain<R> {
    render: Arc<dyn Fn(&Scope, Props) -> R + Send + Sync>,
}

/// Wrap a plain render function so it can be mounted.
pub fn component<R, F>(render: F) -> Plain<R>
where
    F: Fn(&Scope, Props) -> R + Send + Sync + 'static,
{
    Plain {
        render: Arc::new(render),
    }
}

impl<R> Clone for Plain<R> {
    fn clone(&self) -> Self {
        Self {
            render: Arc::clone(&self.render),
        }
    }
}

impl<R> fmt::Debug for Plain<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Plain(..)")
    }
}

/// A mounted [`Plain`] component.
pub struct PlainInstance<R> {
    scope: Scope,
    render: Arc<dyn Fn(&Scope, Props) -> R + Send + Sync>,
}

impl<R> Mountable for Plain<R> {
    type Instance = PlainInstance<R>;

    fn mount(&self, ctx: MountContext, _props: &Props) -> Result<Self::Instance> {
        Ok(PlainInstance {
            scope: ctx.scope,
            render: Arc::clone(&self.render),
        })
    }
}

impl<R> Component for PlainInstance<R> {
    type Props = Props;
    type Output = R;

    fn update(&mut self, props: Props) -> Result<R> {
        Ok((self.render)(&self.scope, props))
    }
}
