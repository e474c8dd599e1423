use std::rc::Rc;

use crate::math::Matrix3;

use super::GraphicItem;

/// One node of the projected presentation tree.
///
/// The presentation tree mirrors the item tree with transforms already
/// composed top-down; the renderer only reads it. A node may carry no source
/// item at all, in which case it is structural and renders to nothing.
pub struct PresentationNode {
    source: Option<Rc<dyn GraphicItem>>,
    projection: Matrix3,
    children: Vec<PresentationNode>,
}

impl PresentationNode {
    pub fn new(source: Option<Rc<dyn GraphicItem>>, projection: Matrix3) -> Self {
        Self {
            source,
            projection,
            children: Vec::new(),
        }
    }

    /// Build the presentation subtree for an item: compose the parent
    /// projection with the item's local transform and recurse.
    pub fn project(item: &Rc<dyn GraphicItem>, parent_projection: &Matrix3) -> Self {
        let projection = parent_projection.then(&item.local_transform());
        let children = item
            .children()
            .iter()
            .map(|child| PresentationNode::project(child, &projection))
            .collect();
        Self {
            source: Some(Rc::clone(item)),
            projection,
            children,
        }
    }

    pub fn source(&self) -> Option<&Rc<dyn GraphicItem>> {
        self.source.as_ref()
    }

    /// Downcast the source item to a concrete type.
    pub fn source_as<T: 'static>(&self) -> Option<&T> {
        self.source.as_ref()?.as_any().downcast_ref()
    }

    /// The projection rules use for geometry.
    ///
    /// With native transforms the projection is not baked into coordinates;
    /// geometry stays in item space and every produced node carries its local
    /// transform as an attribute instead.
    pub fn projection(&self, native_transforms: bool) -> Matrix3 {
        if native_transforms {
            Matrix3::IDENTITY
        } else {
            self.projection
        }
    }

    /// The source item's own transform, emitted as a `transform` attribute
    /// in native mode.
    pub fn local_transform(&self) -> Matrix3 {
        self.source
            .as_ref()
            .map(|item| item.local_transform())
            .unwrap_or(Matrix3::IDENTITY)
    }

    pub fn children(&self) -> &[PresentationNode] {
        &self.children
    }

    /// Manually append a child node. The projection pipeline builds trees via
    /// [`PresentationNode::project`]; this exists for hand-built trees.
    pub fn push_child(&mut self, child: PresentationNode) {
        self.children.push(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Group, Line};
    use crate::math::Vector2;

    #[test]
    fn test_project_composes_transforms() {
        let mut group = Group::new();
        group.set_transform(Matrix3::translate(10.0, 0.0));
        group.append_child(Rc::new(Line::new(
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
        )));
        let group: Rc<dyn GraphicItem> = Rc::new(group);

        let root = PresentationNode::project(&group, &Matrix3::scale(2.0));

        // Group projection: scale then its own translation.
        let p = root.projection(false).apply(Vector2::new(0.0, 0.0));
        assert_eq!(p, Vector2::new(20.0, 0.0));

        // Child inherits the composed matrix.
        assert_eq!(root.children().len(), 1);
        let child = &root.children()[0];
        let q = child.projection(false).apply(Vector2::new(1.0, 0.0));
        assert_eq!(q, Vector2::new(22.0, 0.0));
    }

    #[test]
    fn test_native_mode_returns_identity() {
        let line: Rc<dyn GraphicItem> = Rc::new(Line::new(
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 1.0),
        ));
        let node = PresentationNode::project(&line, &Matrix3::scale(3.0));
        assert!(node.projection(true).is_identity());
        assert!(!node.projection(false).is_identity());
    }

    #[test]
    fn test_structural_node_has_no_source() {
        let node = PresentationNode::new(None, Matrix3::IDENTITY);
        assert!(node.source().is_none());
        assert!(node.local_transform().is_identity());
    }
}
