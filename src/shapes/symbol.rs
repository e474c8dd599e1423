use std::any::Any;
use std::rc::Rc;

use crate::scene::{GraphicItem, TypeTag};
use crate::style::{GraphicStyle, StyleSelector};

/// A reusable definition rendered only where a use element references it.
pub struct SymbolElement {
    children: Vec<Rc<dyn GraphicItem>>,
    selector: StyleSelector,
    id: Option<String>,
    style: Option<GraphicStyle>,
}

impl SymbolElement {
    pub const TAG: TypeTag = TypeTag::new("symbol-element");

    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            selector: StyleSelector::new("symbol"),
            id: None,
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

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_style(mut self, style: GraphicStyle) -> Self {
        self.style = Some(style);
        self
    }
}

impl Default for SymbolElement {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicItem for SymbolElement {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[SymbolElement::TAG];
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

    fn children(&self) -> &[Rc<dyn GraphicItem>] {
        &self.children
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
