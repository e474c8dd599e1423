//! The rendering engine.
//!
//! Turns a projected presentation tree into a pooled SVG node tree:
//!
//! - Each presentation node runs through an ordered [`RuleSet`]; every rule
//!   whose tag matches the item's type chain executes, seeing the output of
//!   the previous matching rule, so refining types layer behavior on top of
//!   the node their base rule created.
//! - Composite rules recurse through [`Renderer::render_node`] on cloned
//!   selector chains and attach child results through [`Renderer::attach`],
//!   which optionally flattens redundant pristine group wrappers.
//! - A pass fully reclears the previous output subtree into the pool before
//!   rebuilding; there is no diffing, pooling only keeps allocations warm.

pub mod context;
pub mod engine;
pub mod error;
pub mod factory;
pub mod options;
pub mod rule;
pub mod rules;

pub use context::SvgContext;
pub use engine::Renderer;
pub use error::RenderError;
pub use factory::{default_renderer, default_rule_set};
pub use options::RenderOptions;
pub use rule::{RenderFn, RenderRule, RuleSet};
