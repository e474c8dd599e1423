use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::math::{Matrix3, Vector2};
use crate::scene::{CircleShape, Control, GraphicItem, TypeTag};
use crate::style::{GraphicStyle, StyleSelector};

/// An editable object: a group of visual children plus the anchor points an
/// editor exposes while the object is active.
///
/// Its tag chain includes [`super::Group::TAG`], so the group rule renders
/// the children and the control rule only refines the produced node with an
/// activation handle.
pub struct ControlObject {
    children: Vec<Rc<dyn GraphicItem>>,
    points: Vec<Rc<RefCell<Vector2>>>,
    transform: Matrix3,
    active: Cell<bool>,
    selector: StyleSelector,
    id: Option<String>,
    style: Option<GraphicStyle>,
}

impl ControlObject {
    pub const TAG: TypeTag = TypeTag::new("control-object");

    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            points: Vec::new(),
            transform: Matrix3::IDENTITY,
            active: Cell::new(false),
            selector: StyleSelector::new("control-object"),
            id: None,
            style: None,
        }
    }

    pub fn append_child(&mut self, child: Rc<dyn GraphicItem>) {
        self.children.push(child);
    }

    /// Register an anchor point. The cell is shared with the control points
    /// an editor builds for the active object.
    pub fn add_point(&mut self, point: Rc<RefCell<Vector2>>) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Rc<RefCell<Vector2>>] {
        &self.points
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

impl Default for ControlObject {
    fn default() -> Self {
        Self::new()
    }
}

impl Control for ControlObject {
    fn activate(&self) {
        self.active.set(true);
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl GraphicItem for ControlObject {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[ControlObject::TAG, super::Group::TAG];
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

    fn as_control(&self) -> Option<&dyn Control> {
        Some(self)
    }
}

/// A draggable marker for one anchor point of the active control object.
///
/// Rendered by the fixed-radius circle rule through its tag chain; the
/// control point rule then attaches the drag behavior. The center cell is
/// the same one the owning object registered, so dragging the marker moves
/// the object's anchor.
pub struct ControlPoint {
    center: Rc<RefCell<Vector2>>,
    pub radius: f64,
    selector: StyleSelector,
    id: Option<String>,
    style: Option<GraphicStyle>,
}

impl ControlPoint {
    pub const TAG: TypeTag = TypeTag::new("control-point");

    pub fn new(center: Rc<RefCell<Vector2>>, radius: f64) -> Self {
        Self {
            center,
            radius,
            selector: StyleSelector::new("control-point"),
            id: None,
            style: None,
        }
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

    pub fn center(&self) -> Vector2 {
        *self.center.borrow()
    }

    /// Move the anchor by `delta` in item coordinates.
    pub fn drag(&self, delta: Vector2) {
        let mut center = self.center.borrow_mut();
        *center = center.add(delta);
    }
}

impl CircleShape for ControlPoint {
    fn center_transformed(&self, projection: &Matrix3) -> Vector2 {
        projection.apply(self.center())
    }

    // Markers keep their screen size under zoom.
    fn radius_transformed(&self, _projection: &Matrix3) -> f64 {
        self.radius
    }
}

impl GraphicItem for ControlPoint {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[ControlPoint::TAG, super::FixedRadiusCircle::TAG];
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

    fn as_circle(&self) -> Option<&dyn CircleShape> {
        Some(self)
    }
}

/// A clickable control that runs an action when pressed.
pub struct ButtonControl {
    children: Vec<Rc<dyn GraphicItem>>,
    transform: Matrix3,
    active: Cell<bool>,
    action: Box<dyn Fn()>,
    selector: StyleSelector,
    id: Option<String>,
    style: Option<GraphicStyle>,
}

impl ButtonControl {
    pub const TAG: TypeTag = TypeTag::new("button-control");

    pub fn new(action: impl Fn() + 'static) -> Self {
        Self {
            children: Vec::new(),
            transform: Matrix3::IDENTITY,
            active: Cell::new(false),
            action: Box::new(action),
            selector: StyleSelector::new("button"),
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

    /// Run the button's action.
    pub fn press(&self) {
        (self.action)();
    }
}

impl Control for ButtonControl {
    fn activate(&self) {
        self.active.set(true);
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl GraphicItem for ButtonControl {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[
            ButtonControl::TAG,
            ControlObject::TAG,
            super::Group::TAG,
        ];
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

    fn as_control(&self) -> Option<&dyn Control> {
        Some(self)
    }
}
