//! Android platform adapter utilities for Glint.
//!
//! The Android embedding hands Glint opaque references into object graphs
//! it does not own: the context chain leading to the hosting activity and
//! the platform view tree. This crate answers the point queries the
//! embedding shell needs against those graphs.

mod context;
mod focus;
mod hierarchy;
mod platform;
mod view_id;

pub use context::*;
pub use focus::*;
pub use hierarchy::*;
pub use platform::*;
pub use view_id::*;
