//! Host Seam
//!
//! The bindings do not render anything themselves. They plug into a host
//! that mounts components, delivers prop updates and unmounts them. This
//! module defines that contract and a minimal driver for it.
//!
//! # Lifecycle
//!
//! 1. The host calls [`Mountable::mount`] once, with a [`MountContext`]
//!    carrying the component's scope and a [`Refresh`] handle.
//!
//! 2. The host calls [`Component::update`] once per prop-update cycle.
//!
//! 3. A component may call [`Refresh::request`] at any time. The host
//!    answers by calling `update` again with the current props.
//!
//! 4. The host calls [`Component::dispose`] at most once, on unmount.

mod instance;
mod lifecycle;
mod mount;

pub use instance::{InstanceId, Refresh};
pub use lifecycle::{component, Component, MountContext, Mountable, Plain, PlainInstance};
pub use mount::Mount;
