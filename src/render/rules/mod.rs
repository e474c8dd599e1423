//! The stock render rules, one module per source item family.
//!
//! Rules are assembled in a canonical order by [`super::default_rule_set`];
//! see that function for why the order matters.

pub mod circle;
pub mod clip_path;
pub mod control;
pub mod curve;
pub mod group;
pub mod image;
pub mod line;
pub mod mask;
pub mod pattern;
pub mod polygon;
pub mod rectangle;
pub mod symbol;
pub mod text;
pub mod use_element;
pub mod view;

pub use circle::{fixed_radius_circle_rule, two_point_circle_rule};
pub use clip_path::clip_path_rule;
pub use control::{button_control_rule, control_object_rule, control_point_rule};
pub use curve::quadratic_curve_rule;
pub use group::group_rule;
pub use image::image_rule;
pub use line::line_rule;
pub use mask::mask_rule;
pub use pattern::pattern_rule;
pub use polygon::{polygon_rule, polyline_rule};
pub use rectangle::rectangle_rule;
pub use symbol::symbol_rule;
pub use text::{scalable_text_rule, text_rule};
pub use use_element::use_element_rule;
pub use view::view_rule;

use crate::math::Vector2;
use crate::pool::NodeId;
use crate::render::{RenderError, Renderer};
use crate::scene::PresentationNode;
use crate::style::SelectorChain;

/// Fail the pass when projected geometry left the finite range.
fn ensure_finite(kind: &'static str, points: &[Vector2]) -> Result<(), RenderError> {
    if points.iter().all(Vector2::is_finite) {
        Ok(())
    } else {
        Err(RenderError::NonFiniteGeometry { kind })
    }
}

/// Render every presentation child on its own cloned chain and attach the
/// results to `parent`, in source order.
fn render_children_into(
    renderer: &mut Renderer,
    node: &PresentationNode,
    chain: &SelectorChain,
    parent: NodeId,
) -> Result<(), RenderError> {
    for child in node.children() {
        let mut child_chain = chain.clone();
        let rendered = renderer.render_node(child, &mut child_chain)?;
        renderer.attach(parent, rendered);
    }
    Ok(())
}

/// Join points as an SVG points list: `x,y x,y …`.
fn points_attribute(points: &[Vector2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
