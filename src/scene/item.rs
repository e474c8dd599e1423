use std::any::Any;
use std::rc::Rc;

use crate::math::{Matrix3, Vector2};
use crate::style::{GraphicStyle, StyleSelector};

/// A stable tag identifying one source item type.
///
/// Items report a chain of tags, most-derived first, so a rule registered
/// for a base tag also matches every refining type. This replaces runtime
/// inheritance inspection with data the item itself declares.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TypeTag(&'static str);

impl TypeTag {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// A source object in the scene document tree.
///
/// The renderer reads items exclusively through this trait: their tag chain
/// for rule dispatch, their selector for the style cascade, their local
/// transform for projection, and their children for recursion.
pub trait GraphicItem {
    /// Type tags, most-derived first, including every conceptual ancestor.
    fn type_chain(&self) -> &'static [TypeTag];

    /// The item's style selector, added to the chain by its render rule.
    fn selector(&self) -> StyleSelector;

    /// Optional element identity, written as the `id` attribute.
    fn id(&self) -> Option<&str> {
        None
    }

    /// Per-item style overriding everything the stylesheet resolves.
    fn inline_style(&self) -> Option<&GraphicStyle> {
        None
    }

    /// Transform from this item's coordinates into its parent's.
    fn local_transform(&self) -> Matrix3 {
        Matrix3::IDENTITY
    }

    /// Child items in document order.
    fn children(&self) -> &[Rc<dyn GraphicItem>] {
        &[]
    }

    fn as_any(&self) -> &dyn Any;

    /// Capability of activatable controls.
    fn as_control(&self) -> Option<&dyn Control> {
        None
    }

    /// Capability of circle-shaped items.
    fn as_circle(&self) -> Option<&dyn CircleShape> {
        None
    }
}

/// Items that can become the active editing target when clicked.
pub trait Control {
    fn activate(&self);
    fn is_active(&self) -> bool;
}

/// Geometry shared by every circle-shaped item, so one rule renders all of
/// them without knowing the concrete type.
pub trait CircleShape {
    /// Center projected into target space.
    fn center_transformed(&self, projection: &Matrix3) -> Vector2;

    /// Radius in target units under the given projection.
    fn radius_transformed(&self, projection: &Matrix3) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl GraphicItem for Plain {
        fn type_chain(&self) -> &'static [TypeTag] {
            const CHAIN: &[TypeTag] = &[TypeTag::new("plain"), TypeTag::new("base")];
            CHAIN
        }

        fn selector(&self) -> StyleSelector {
            StyleSelector::new("plain")
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_type_chain_contains_ancestors() {
        let item = Plain;
        assert!(item.type_chain().contains(&TypeTag::new("plain")));
        assert!(item.type_chain().contains(&TypeTag::new("base")));
        assert!(!item.type_chain().contains(&TypeTag::new("other")));
    }

    #[test]
    fn test_capability_defaults() {
        let item = Plain;
        assert!(item.as_control().is_none());
        assert!(item.as_circle().is_none());
        assert!(item.id().is_none());
        assert!(item.local_transform().is_identity());
    }
}
