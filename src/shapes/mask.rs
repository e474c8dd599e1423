use std::any::Any;
use std::rc::Rc;

use crate::scene::{GraphicItem, TypeTag};
use crate::style::{GraphicStyle, StyleSelector};

/// A mask definition. Other items reference it through their style's `mask`
/// field as `url(#id)`, so an id is mandatory.
pub struct Mask {
    children: Vec<Rc<dyn GraphicItem>>,
    selector: StyleSelector,
    id: String,
    style: Option<GraphicStyle>,
}

impl Mask {
    pub const TAG: TypeTag = TypeTag::new("mask");

    pub fn new(id: impl Into<String>) -> Self {
        Self {
            children: Vec::new(),
            selector: StyleSelector::new("mask"),
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

impl GraphicItem for Mask {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[Mask::TAG];
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
