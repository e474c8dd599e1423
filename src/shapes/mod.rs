//! The stock source item types.
//!
//! Each type mirrors one family of render rules: plain geometry (lines,
//! rectangles, circles, polygons, curves), text, references (use, image,
//! pattern, symbol, mask, clip path), grouping, and the interactive control
//! family built by refining group and circle rendering.

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

pub use circle::{FixedRadiusCircle, TwoPointCircle};
pub use clip_path::ClipPath;
pub use control::{ButtonControl, ControlObject, ControlPoint};
pub use curve::QuadraticCurve;
pub use group::Group;
pub use image::TwoPointImage;
pub use line::Line;
pub use mask::Mask;
pub use pattern::TwoPointPattern;
pub use polygon::{Polygon, Polyline};
pub use rectangle::TwoPointRectangle;
pub use symbol::SymbolElement;
pub use text::{ScalableText, Text, TextAnchor};
pub use use_element::UseElement;
