use std::any::Any;

use crate::math::{Matrix3, Vector2};
use crate::scene::{GraphicItem, TypeTag};
use crate::style::{GraphicStyle, StyleSelector};

/// Horizontal anchoring of text relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Text at an anchor point, sized by the stylesheet.
pub struct Text {
    pub anchor: Vector2,
    pub content: String,
    pub text_anchor: TextAnchor,
    selector: StyleSelector,
    id: Option<String>,
    style: Option<GraphicStyle>,
}

impl Text {
    pub const TAG: TypeTag = TypeTag::new("text");

    pub fn new(anchor: Vector2, content: impl Into<String>) -> Self {
        Self {
            anchor,
            content: content.into(),
            text_anchor: TextAnchor::default(),
            selector: StyleSelector::new("text"),
            id: None,
            style: None,
        }
    }

    pub fn with_text_anchor(mut self, text_anchor: TextAnchor) -> Self {
        self.text_anchor = text_anchor;
        self
    }

    pub fn with_selector(mut self, selector: impl Into<StyleSelector>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_style(mut self, style: GraphicStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn anchor_transformed(&self, projection: &Matrix3) -> Vector2 {
        projection.apply(self.anchor)
    }
}

impl GraphicItem for Text {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[Text::TAG];
        CHAIN
    }

    fn selector(&self) -> StyleSelector {
        self.selector.clone()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn inline_style(&self) -> Option<&GraphicStyle> {
        self.style.as_ref()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Text whose font size lives in item coordinates and zooms with the view.
pub struct ScalableText {
    pub anchor: Vector2,
    pub content: String,
    pub text_anchor: TextAnchor,
    pub font_size: f64,
    selector: StyleSelector,
    id: Option<String>,
    style: Option<GraphicStyle>,
}

impl ScalableText {
    pub const TAG: TypeTag = TypeTag::new("scalable-text");

    pub fn new(anchor: Vector2, content: impl Into<String>, font_size: f64) -> Self {
        Self {
            anchor,
            content: content.into(),
            text_anchor: TextAnchor::default(),
            font_size,
            selector: StyleSelector::new("text"),
            id: None,
            style: None,
        }
    }

    pub fn with_text_anchor(mut self, text_anchor: TextAnchor) -> Self {
        self.text_anchor = text_anchor;
        self
    }

    pub fn with_selector(mut self, selector: impl Into<StyleSelector>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_style(mut self, style: GraphicStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn anchor_transformed(&self, projection: &Matrix3) -> Vector2 {
        projection.apply(self.anchor)
    }

    /// Font size scaled by the projection's uniform scaling factor.
    pub fn font_size_transformed(&self, projection: &Matrix3) -> f64 {
        self.font_size * projection.scaling_factor()
    }
}

impl GraphicItem for ScalableText {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[ScalableText::TAG];
        CHAIN
    }

    fn selector(&self) -> StyleSelector {
        self.selector.clone()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn inline_style(&self) -> Option<&GraphicStyle> {
        self.style.as_ref()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
