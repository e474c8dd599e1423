//! End-to-end tests of the render pipeline: rule dispatch and chaining,
//! selector chain isolation, group flattening and pool accounting.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use sagoma::prelude::*;
use sagoma::scene::TypeTag;

fn renderer_with(options: RenderOptions) -> Renderer {
    default_renderer(StyleSheet::new(), options)
}

fn fill(color: &str) -> GraphicStyle {
    GraphicStyle {
        fill: Some(color.to_string()),
        ..GraphicStyle::new()
    }
}

/// Find the first descendant of `id` (inclusive) with the given kind.
fn find_kind(renderer: &Renderer, id: NodeId, kind: &str) -> Option<NodeId> {
    if renderer.pool().node(id).kind() == kind {
        return Some(id);
    }
    for &child in renderer.pool().node(id).children() {
        if let Some(found) = find_kind(renderer, child, kind) {
            return Some(found);
        }
    }
    None
}

#[test]
fn node_without_source_renders_to_nothing() {
    let mut renderer = renderer_with(RenderOptions::default());
    let node = PresentationNode::new(None, Matrix3::IDENTITY);
    let mut chain = SelectorChain::new();

    let result = renderer.render_node(&node, &mut chain).unwrap();
    assert!(result.is_none());
    assert_eq!(renderer.pool().live_count(), 0);
}

/// An item type no stock rule knows about.
struct UnknownItem;

impl GraphicItem for UnknownItem {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[TypeTag::new("unknown")];
        CHAIN
    }

    fn selector(&self) -> StyleSelector {
        StyleSelector::new("unknown")
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn unmatched_item_is_skipped_without_acquisitions() {
    let mut renderer = renderer_with(RenderOptions::default());
    let item: Rc<dyn GraphicItem> = Rc::new(UnknownItem);
    let node = PresentationNode::project(&item, &Matrix3::IDENTITY);
    let mut chain = SelectorChain::new();

    let result = renderer.render_node(&node, &mut chain).unwrap();
    assert!(result.is_none());
    assert_eq!(renderer.pool().live_count(), 0);
}

#[test]
fn unmatched_child_is_omitted_from_parent() {
    let mut renderer = renderer_with(RenderOptions::empty());
    let mut group = Group::new();
    group.append_child(Rc::new(UnknownItem));
    group.append_child(Rc::new(Line::new(
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 1.0),
    )));
    let group: Rc<dyn GraphicItem> = Rc::new(group);
    let node = PresentationNode::project(&group, &Matrix3::IDENTITY);
    let mut chain = SelectorChain::new();

    let result = renderer.render_node(&node, &mut chain).unwrap().unwrap();
    assert_eq!(renderer.pool().node(result).children().len(), 1);
}

const BADGE_TAG: TypeTag = TypeTag::new("badge");
const FANCY_BADGE_TAG: TypeTag = TypeTag::new("fancy-badge");

/// A refinement of a badge: the base rule creates the element, the fancy
/// rule only decorates it.
struct FancyBadge;

impl GraphicItem for FancyBadge {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[FANCY_BADGE_TAG, BADGE_TAG];
        CHAIN
    }

    fn selector(&self) -> StyleSelector {
        StyleSelector::new("badge")
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn refining_rule_receives_prior_output() {
    let mut rules = RuleSet::new();
    rules.register(RenderRule::new(
        BADGE_TAG,
        |_node, _projection, chain, _prior, renderer| {
            chain.add_selector(StyleSelector::new("badge"));
            let id = renderer.pool_mut().acquire("rect");
            renderer.pool_mut().node_mut(id).set_attribute("width", "8");
            Ok(Some(id))
        },
    ));
    let got_prior = Rc::new(Cell::new(false));
    let witness = Rc::clone(&got_prior);
    rules.register(RenderRule::new(
        FANCY_BADGE_TAG,
        move |_node, _projection, _chain, prior, renderer| {
            let Some(prior) = prior else {
                return Ok(None);
            };
            witness.set(true);
            renderer
                .pool_mut()
                .node_mut(prior)
                .set_attribute("data-role", "fancy");
            Ok(None)
        },
    ));
    let mut renderer = Renderer::new(rules, StyleSheet::new(), RenderOptions::default());

    let item: Rc<dyn GraphicItem> = Rc::new(FancyBadge);
    let node = PresentationNode::project(&item, &Matrix3::IDENTITY);
    let mut chain = SelectorChain::new();
    let result = renderer.render_node(&node, &mut chain).unwrap().unwrap();

    // The base rule's node survived as the running output, refined in place.
    assert!(got_prior.get());
    let element = renderer.pool().node(result);
    assert_eq!(element.kind(), "rect");
    assert_eq!(element.attribute("width"), Some("8"));
    assert_eq!(element.attribute("data-role"), Some("fancy"));
}

#[test]
fn button_control_layers_on_group_output() {
    let pressed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&pressed);

    let mut button = ButtonControl::new(move || flag.set(true));
    button.append_child(Rc::new(TwoPointRectangle::new(
        Vector2::new(0.0, 0.0),
        Vector2::new(10.0, 4.0),
    )));
    let button = Rc::new(button);
    let item: Rc<dyn GraphicItem> = Rc::clone(&button) as Rc<dyn GraphicItem>;

    let mut renderer = renderer_with(RenderOptions::empty());
    let node = PresentationNode::project(&item, &Matrix3::IDENTITY);
    let mut chain = SelectorChain::new();
    let result = renderer.render_node(&node, &mut chain).unwrap().unwrap();

    // The group rule created the element; the control rules refined it.
    let element = renderer.pool().node(result);
    assert_eq!(element.kind(), "g");
    assert_eq!(element.children().len(), 1);
    assert_eq!(element.handles().len(), 2);

    // The activation handle and the press handle both respond to clicks.
    for handle in element.handles() {
        handle.click();
    }
    assert!(pressed.get());
    assert!(button.is_active());
}

#[test]
fn sibling_selector_chains_stay_isolated() {
    let mut sheet = StyleSheet::new();
    sheet.add("marked", fill("red"));

    let mut group = Group::new();
    group.append_child(Rc::new(
        Line::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)).with_selector("marked"),
    ));
    group.append_child(Rc::new(Line::new(
        Vector2::new(0.0, 1.0),
        Vector2::new(1.0, 1.0),
    )));
    let group: Rc<dyn GraphicItem> = Rc::new(group);

    let mut renderer = default_renderer(sheet, RenderOptions::empty());
    let node = PresentationNode::project(&group, &Matrix3::IDENTITY);
    let mut chain = SelectorChain::new();
    let result = renderer.render_node(&node, &mut chain).unwrap().unwrap();

    let children = renderer.pool().node(result).children().to_vec();
    assert_eq!(children.len(), 2);

    // Only the marked sibling resolves the fill; the selector it added must
    // not leak into its sibling or its parent.
    assert_eq!(renderer.pool().node(children[0]).attribute("fill"), Some("red"));
    assert_eq!(renderer.pool().node(children[1]).attribute("fill"), None);
    assert_eq!(renderer.pool().node(result).attribute("fill"), None);
}

fn group_of_three_lines() -> Rc<dyn GraphicItem> {
    let mut group = Group::new();
    for i in 0..3 {
        group.append_child(Rc::new(Line::new(
            Vector2::new(i as f64, 0.0),
            Vector2::new(i as f64, 1.0),
        )));
    }
    Rc::new(group)
}

#[test]
fn group_without_flattening_keeps_wrapper() {
    let mut renderer = renderer_with(RenderOptions::empty());
    let target = renderer.pool_mut().acquire("svg");

    let group = group_of_three_lines();
    let node = PresentationNode::project(&group, &Matrix3::IDENTITY);
    let mut chain = SelectorChain::new();
    let result = renderer.render_node(&node, &mut chain).unwrap();
    renderer.attach(target, result);

    let children = renderer.pool().node(target).children().to_vec();
    assert_eq!(children.len(), 1);
    let wrapper = renderer.pool().node(children[0]);
    assert_eq!(wrapper.kind(), "g");
    assert_eq!(wrapper.children().len(), 3);
    for (i, &child) in wrapper.children().iter().enumerate() {
        assert_eq!(
            renderer.pool().node(child).attribute("x1"),
            Some(i.to_string().as_str())
        );
    }
}

#[test]
fn pristine_group_flattens_into_parent() {
    let mut renderer = renderer_with(RenderOptions::FLATTEN_GROUPS);
    let target = renderer.pool_mut().acquire("svg");

    let group = group_of_three_lines();
    let node = PresentationNode::project(&group, &Matrix3::IDENTITY);
    let mut chain = SelectorChain::new();
    let result = renderer.render_node(&node, &mut chain).unwrap();
    renderer.attach(target, result);

    // The three lines hang off the target directly, in source order, and the
    // wrapper went back to the pool exactly once.
    let children = renderer.pool().node(target).children().to_vec();
    assert_eq!(children.len(), 3);
    for (i, &child) in children.iter().enumerate() {
        let line = renderer.pool().node(child);
        assert_eq!(line.kind(), "line");
        assert_eq!(line.attribute("x1"), Some(i.to_string().as_str()));
    }
    assert_eq!(renderer.pool().pooled_count_of("g"), 1);
}

#[test]
fn styled_group_is_not_flattened() {
    let mut sheet = StyleSheet::new();
    sheet.add("group", fill("gray"));

    let mut renderer = default_renderer(sheet, RenderOptions::FLATTEN_GROUPS);
    let target = renderer.pool_mut().acquire("svg");

    let group = group_of_three_lines();
    let node = PresentationNode::project(&group, &Matrix3::IDENTITY);
    let mut chain = SelectorChain::new();
    let result = renderer.render_node(&node, &mut chain).unwrap();
    renderer.attach(target, result);

    // The style made the wrapper meaningful, so it must survive.
    let children = renderer.pool().node(target).children().to_vec();
    assert_eq!(children.len(), 1);
    assert_eq!(renderer.pool().node(children[0]).kind(), "g");
    assert_eq!(renderer.pool().node(children[0]).attribute("fill"), Some("gray"));
}

fn mounted_view(item: Rc<dyn GraphicItem>) -> Rc<View> {
    let mut view = View::new();
    view.mount(item);
    Rc::new(view)
}

#[test]
fn repeated_passes_do_not_grow_the_tree() {
    let mut renderer = renderer_with(RenderOptions::default());
    let target = renderer.pool_mut().acquire("svg");
    let view = mounted_view(group_of_three_lines());

    renderer.render(&view, target).unwrap();
    let live_after_first = renderer.pool().live_count();
    let attached_after_first = renderer.pool().node(target).children().len();

    renderer.render(&view, target).unwrap();
    assert_eq!(renderer.pool().live_count(), live_after_first);
    assert_eq!(
        renderer.pool().node(target).children().len(),
        attached_after_first
    );

    // A third pass for good measure; the pool absorbs all churn.
    renderer.render(&view, target).unwrap();
    assert_eq!(renderer.pool().live_count(), live_after_first);
}

#[test]
fn render_replaces_previous_output() {
    let mut renderer = renderer_with(RenderOptions::default());
    let target = renderer.pool_mut().acquire("svg");

    renderer
        .render(
            &mounted_view(Rc::new(Line::new(
                Vector2::new(0.0, 0.0),
                Vector2::new(1.0, 0.0),
            ))),
            target,
        )
        .unwrap();
    renderer
        .render(
            &mounted_view(Rc::new(TwoPointRectangle::new(
                Vector2::new(0.0, 0.0),
                Vector2::new(2.0, 2.0),
            ))),
            target,
        )
        .unwrap();

    let children = renderer.pool().node(target).children().to_vec();
    assert_eq!(children.len(), 1);
    assert_eq!(renderer.pool().node(children[0]).kind(), "rect");
}

#[test]
fn line_end_to_end() {
    let mut renderer = renderer_with(RenderOptions::default());
    let target = renderer.pool_mut().acquire("svg");
    let view = mounted_view(Rc::new(Line::new(
        Vector2::new(1.0, 2.0),
        Vector2::new(3.0, 4.0),
    )));

    renderer.render(&view, target).unwrap();

    let line = find_kind(&renderer, target, "line").expect("line rendered");
    let element = renderer.pool().node(line);
    assert_eq!(element.attribute("x1"), Some("1"));
    assert_eq!(element.attribute("y1"), Some("2"));
    assert_eq!(element.attribute("x2"), Some("3"));
    assert_eq!(element.attribute("y2"), Some("4"));
}

#[test]
fn rectangle_end_to_end() {
    let mut renderer = renderer_with(RenderOptions::default());
    let target = renderer.pool_mut().acquire("svg");
    let view = mounted_view(Rc::new(TwoPointRectangle::new(
        Vector2::new(1.0, 2.0),
        Vector2::new(4.0, 6.0),
    )));

    renderer.render(&view, target).unwrap();

    let rect = find_kind(&renderer, target, "rect").expect("rect rendered");
    let element = renderer.pool().node(rect);
    assert_eq!(element.attribute("x"), Some("1"));
    assert_eq!(element.attribute("y"), Some("2"));
    assert_eq!(element.attribute("width"), Some("3"));
    assert_eq!(element.attribute("height"), Some("4"));
}

#[test]
fn inline_style_overrides_stylesheet() {
    let mut sheet = StyleSheet::new();
    sheet.add("line", fill("red"));

    let mut renderer = default_renderer(sheet, RenderOptions::default());
    let target = renderer.pool_mut().acquire("svg");
    let view = mounted_view(Rc::new(
        Line::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)).with_style(fill("green")),
    ));

    renderer.render(&view, target).unwrap();

    let line = find_kind(&renderer, target, "line").unwrap();
    assert_eq!(renderer.pool().node(line).attribute("fill"), Some("green"));
}

#[test]
fn native_transforms_emit_attributes() {
    let mut renderer = renderer_with(RenderOptions::NATIVE_TRANSFORMS);
    let target = renderer.pool_mut().acquire("svg");

    let mut group = Group::new();
    group.set_transform(Matrix3::translate(5.0, 6.0));
    group.append_child(Rc::new(Line::new(
        Vector2::new(1.0, 2.0),
        Vector2::new(3.0, 4.0),
    )));
    let view = mounted_view(Rc::new(group));

    renderer.render(&view, target).unwrap();

    let wrapper = find_kind(&renderer, target, "g").expect("group rendered");
    assert_eq!(
        renderer.pool().node(wrapper).attribute("transform"),
        Some("matrix(1,0,0,1,5,6)")
    );

    // Geometry stays in item coordinates; the attribute carries the offset.
    let line = find_kind(&renderer, target, "line").unwrap();
    assert_eq!(renderer.pool().node(line).attribute("x1"), Some("1"));
}

#[test]
fn class_mode_emits_classes_instead_of_attributes() {
    let mut sheet = StyleSheet::new();
    sheet.add("line", fill("red"));

    let mut renderer = default_renderer(
        sheet,
        RenderOptions::FLATTEN_GROUPS | RenderOptions::STYLE_CLASSES,
    );
    let target = renderer.pool_mut().acquire("svg");
    let view = mounted_view(Rc::new(Line::new(
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
    )));

    renderer.render(&view, target).unwrap();

    let line = find_kind(&renderer, target, "line").unwrap();
    assert_eq!(renderer.pool().node(line).attribute("class"), Some("line"));
    assert_eq!(renderer.pool().node(line).attribute("fill"), None);

    // The matching document stylesheet carries the declarations.
    assert!(renderer.style_sheet().to_css().contains("fill: red;"));
}

#[test]
fn mask_definition_and_reference() {
    let mut mask = Mask::new("fade");
    mask.append_child(Rc::new(TwoPointRectangle::new(
        Vector2::new(0.0, 0.0),
        Vector2::new(10.0, 10.0),
    )));
    let reference = mask.reference();

    let mut group = Group::new();
    group.append_child(Rc::new(mask));
    group.append_child(Rc::new(
        TwoPointCircle::new(Vector2::new(5.0, 5.0), Vector2::new(9.0, 5.0)).with_style(
            GraphicStyle {
                mask: Some(reference),
                ..GraphicStyle::new()
            },
        ),
    ));
    let view = mounted_view(Rc::new(group));

    let mut renderer = renderer_with(RenderOptions::default());
    let target = renderer.pool_mut().acquire("svg");
    renderer.render(&view, target).unwrap();

    let mask_node = find_kind(&renderer, target, "mask").expect("mask rendered");
    assert_eq!(renderer.pool().node(mask_node).attribute("id"), Some("fade"));
    assert_eq!(renderer.pool().node(mask_node).children().len(), 1);

    let circle = find_kind(&renderer, target, "circle").unwrap();
    assert_eq!(
        renderer.pool().node(circle).attribute("mask"),
        Some("url(#fade)")
    );
}

#[test]
fn control_point_drag_moves_shared_anchor() {
    let anchor = Rc::new(RefCell::new(Vector2::new(2.0, 2.0)));
    let point: Rc<dyn GraphicItem> =
        Rc::new(ControlPoint::new(Rc::clone(&anchor), 5.0));
    let view = mounted_view(point);

    let mut renderer = renderer_with(RenderOptions::default());
    let target = renderer.pool_mut().acquire("svg");
    renderer.render(&view, target).unwrap();

    // The circle rule rendered the marker and the control rule attached the
    // drag behavior.
    let circle = find_kind(&renderer, target, "circle").expect("marker rendered");
    assert_eq!(renderer.pool().node(circle).attribute("cx"), Some("2"));
    let handles = renderer.pool().node(circle).handles();
    assert_eq!(handles.len(), 1);

    handles[0].drag(Vector2::new(3.0, -1.0));
    assert_eq!(*anchor.borrow(), Vector2::new(5.0, 1.0));

    // The next pass reflects the moved anchor.
    renderer.render(&view, target).unwrap();
    let circle = find_kind(&renderer, target, "circle").unwrap();
    assert_eq!(renderer.pool().node(circle).attribute("cx"), Some("5"));
    assert_eq!(renderer.pool().node(circle).attribute("cy"), Some("1"));
}

#[test]
fn malformed_geometry_fails_the_pass() {
    let mut group = Group::new();
    group.append_child(Rc::new(QuadraticCurve::new(vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 1.0),
    ])));
    let view = mounted_view(Rc::new(group));

    let mut renderer = renderer_with(RenderOptions::default());
    let target = renderer.pool_mut().acquire("svg");
    let result = renderer.render(&view, target);
    assert!(matches!(
        result,
        Err(RenderError::TooFewCurvePoints { count: 2 })
    ));
}

#[test]
fn svg_context_document_roundtrip() {
    let mut sheet = StyleSheet::new();
    sheet.add("line", fill("black"));

    let mut renderer = default_renderer(sheet, RenderOptions::default());
    let context = SvgContext::new(&mut renderer);
    context.set_size(&mut renderer, Vector2::new(100.0, 100.0));

    let view = mounted_view(Rc::new(Line::new(
        Vector2::new(1.0, 2.0),
        Vector2::new(3.0, 4.0),
    )));
    renderer.render(&view, context.node()).unwrap();

    let svg = context.to_svg(&renderer);
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains("viewBox=\"0,0,100,100\""));
    assert!(svg.contains("<line "));
    assert!(svg.contains("fill=\"black\""));
}
