use std::any::Any;
use std::rc::Rc;

use crate::math::Matrix3;
use crate::scene::{GraphicItem, TypeTag};
use crate::style::{GraphicStyle, StyleSelector};

/// An ordered group of child items sharing a local transform.
pub struct Group {
    children: Vec<Rc<dyn GraphicItem>>,
    transform: Matrix3,
    selector: StyleSelector,
    id: Option<String>,
    style: Option<GraphicStyle>,
}

impl Group {
    pub const TAG: TypeTag = TypeTag::new("group");

    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            transform: Matrix3::IDENTITY,
            selector: StyleSelector::new("group"),
            id: None,
            style: None,
        }
    }

    pub fn append_child(&mut self, child: Rc<dyn GraphicItem>) {
        self.children.push(child);
    }

    pub fn set_transform(&mut self, transform: Matrix3) {
        self.transform = transform;
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
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicItem for Group {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[Group::TAG];
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

    fn local_transform(&self) -> Matrix3 {
        self.transform
    }

    fn children(&self) -> &[Rc<dyn GraphicItem>] {
        &self.children
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
