use std::any::Any;
use std::rc::Rc;

use crate::scene::{GraphicItem, TypeTag};
use crate::style::{GraphicStyle, StyleSelector};

/// A clip path definition, referenced through `clip-path: url(#id)`.
pub struct ClipPath {
    children: Vec<Rc<dyn GraphicItem>>,
    selector: StyleSelector,
    id: String,
    style: Option<GraphicStyle>,
}

impl ClipPath {
    pub const TAG: TypeTag = TypeTag::new("clip-path");

    pub fn new(id: impl Into<String>) -> Self {
        Self {
            children: Vec::new(),
            selector: StyleSelector::new("clip-path"),
            id: id.into(),
            style: None,
        }
    }

    pub fn append_child(&mut self, child: Rc<dyn GraphicItem>) {
        self.children.push(child);
    }

    pub fn with_selector(mut self, selector: impl Into<StyleSelector>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn with_style(mut self, style: GraphicStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Reference value for styles: `url(#id)`.
    pub fn reference(&self) -> String {
        format!("url(#{})", self.id)
    }
}

impl GraphicItem for ClipPath {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[ClipPath::TAG];
        CHAIN
    }

    fn selector(&self) -> StyleSelector {
        self.selector.clone()
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn inline_style(&self) -> Option<&GraphicStyle> {
        self.style.as_ref()
    }

    fn children(&self) -> &[Rc<dyn GraphicItem>] {
        &self.children
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
