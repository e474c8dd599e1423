use std::any::Any;
use std::rc::Rc;

use crate::math::{Matrix3, Vector2};
use crate::style::StyleSelector;

use super::{GraphicItem, PresentationNode, TypeTag};

/// The root of a rendered scene: a viewport transform plus the mounted
/// content items.
///
/// A view is itself an item: the presentation root carries it as source and
/// an ordinary rule renders it, so there is no special-cased root handling
/// in the engine.
pub struct View {
    mounted: Vec<Rc<dyn GraphicItem>>,
    transform: Matrix3,
}

impl View {
    pub const TAG: TypeTag = TypeTag::new("view");

    pub fn new() -> Self {
        Self {
            mounted: Vec::new(),
            transform: Matrix3::IDENTITY,
        }
    }

    /// Mount the content item, replacing any previous content.
    pub fn mount(&mut self, item: Rc<dyn GraphicItem>) {
        self.mounted.clear();
        self.mounted.push(item);
    }

    /// Set the viewport transform directly.
    pub fn set_transform(&mut self, transform: Matrix3) {
        self.transform = transform;
    }

    /// Pan/zoom convenience: the content point `center` maps to the view
    /// origin and all lengths scale by `scale`.
    pub fn set_viewport(&mut self, center: Vector2, scale: f64) {
        self.transform = Matrix3::scale(scale).then(&Matrix3::translate(-center.x, -center.y));
    }

    pub fn transform(&self) -> Matrix3 {
        self.transform
    }

    /// Build the projected presentation tree for this view.
    pub fn presentation(view: &Rc<View>) -> PresentationNode {
        let item: Rc<dyn GraphicItem> = Rc::clone(view) as Rc<dyn GraphicItem>;
        PresentationNode::project(&item, &Matrix3::IDENTITY)
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicItem for View {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[View::TAG];
        CHAIN
    }

    fn selector(&self) -> StyleSelector {
        StyleSelector::new("view")
    }

    fn local_transform(&self) -> Matrix3 {
        self.transform
    }

    fn children(&self) -> &[Rc<dyn GraphicItem>] {
        &self.mounted
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
