//! Pooled storage for SVG output nodes.
//!
//! The pool is an arena with generational indices, adapted for a
//! clear-and-rebuild renderer:
//!
//! - **Generational Indices**: [`NodeId`] contains index + generation so a
//!   stale handle to a released slot is detected instead of silently reading
//!   the node that reused it.
//!
//! - **Per-Kind Free Lists**: released nodes are parked by element kind and
//!   handed back by [`NodePool::acquire`], keeping their allocations warm.
//!   Rendering the same scene twice allocates almost nothing on the second
//!   pass.
//!
//! - **Attachment Invariants**: a node can have at most one parent, and must
//!   be detached and childless before release. Violations are programming
//!   errors and panic.
//!
//! - **Pristine Flag**: true until the first attribute, text or handle
//!   mutation after acquisition. Child attachment does not clear it; the
//!   group flattening optimization keys off this.

pub mod node;
#[allow(clippy::module_inception)]
pub mod pool;
pub mod serialize;

pub use node::SvgNode;
pub use pool::{NodeId, NodePool};
pub use serialize::write_svg;

/// Namespace of SVG elements.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Namespace for cross-document link attributes (`xlink:href`).
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
