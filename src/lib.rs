//! A retained-mode SVG rendering pipeline for interactive 2D graphics.
//!
//! The crate turns an already-projected presentation tree into a tree of
//! attributed SVG nodes. Applications that re-render on every change keep
//! their output cheap two ways: released nodes are recycled through a pool
//! instead of reallocated, and redundant group wrappers are flattened away.
//!
//! Rendering behavior is composed from [`render::RenderRule`]s: every rule
//! whose type tag matches a source item runs in registration order, each
//! seeing the output of the previous one, so a refining type layers behavior
//! (say, a drag handle) onto the element its base type's rule created.

pub mod interaction;
pub mod math;
pub mod pool;
pub mod render;
pub mod scene;
pub mod shapes;
pub mod style;

pub mod prelude {
    pub use crate::interaction::Handle;
    pub use crate::math::{Matrix3, Vector2};
    pub use crate::pool::{NodeId, NodePool, SvgNode};
    pub use crate::render::{
        default_renderer, default_rule_set, RenderError, RenderOptions, RenderRule, Renderer,
        RuleSet, SvgContext,
    };
    pub use crate::scene::{CircleShape, Control, GraphicItem, PresentationNode, TypeTag, View};
    pub use crate::shapes::{
        ButtonControl, ClipPath, ControlObject, ControlPoint, FixedRadiusCircle, Group, Line,
        Mask, Polygon, Polyline, QuadraticCurve, ScalableText, SymbolElement, Text, TextAnchor,
        TwoPointCircle, TwoPointImage, TwoPointPattern, TwoPointRectangle, UseElement,
    };
    pub use crate::style::{GraphicStyle, SelectorChain, StyleRule, StyleSelector, StyleSheet};
}
