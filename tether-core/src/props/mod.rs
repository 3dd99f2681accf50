//! Props
//!
//! Props flow into a connected component from three sources: the parent
//! (own props), the store state (state props) and the dispatch capability
//! (dispatch props). They are carried in a dynamic, ordered bag so the
//! default merge can be a plain shallow union where later sources override
//! earlier ones.

mod map;
mod prop;

pub use map::{DispatchProp, Props, DISPATCH_KEY};
pub use prop::{Callback, Prop};
