//! Simulate the interactive flow: click a control object to activate it,
//! show draggable markers for its anchor points, drag one and re-render.
//!
//! ```bash
//! cargo run --example interactive
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use sagoma::prelude::*;
use sagoma::pool::NodeId;

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

fn main() {
    env_logger::init();

    let anchor = Rc::new(RefCell::new(Vector2::new(30.0, 30.0)));

    let mut object = ControlObject::new();
    object.add_point(Rc::clone(&anchor));
    object.append_child(Rc::new(TwoPointRectangle::new(
        Vector2::new(10.0, 10.0),
        Vector2::new(60.0, 60.0),
    )));
    let object = Rc::new(object);

    let mut scene = Group::new();
    scene.append_child(Rc::clone(&object) as Rc<dyn GraphicItem>);
    let scene = Rc::new(scene);

    let mut view = View::new();
    view.mount(Rc::clone(&scene) as Rc<dyn GraphicItem>);
    let view = Rc::new(view);

    let mut renderer = default_renderer(StyleSheet::new(), RenderOptions::default());
    let context = SvgContext::new(&mut renderer);
    context.set_size(&mut renderer, Vector2::new(100.0, 100.0));

    renderer.render(&view, context.node()).expect("first pass");
    println!("before activation:\n{}\n", context.to_svg(&renderer));

    // A click on the object's element makes it the active editing target.
    let element = find_kind(&renderer, context.node(), "g").expect("object rendered");
    for handle in renderer.pool().node(element).handles() {
        handle.click();
    }
    assert!(object.is_active());

    // An editor would now overlay markers for the active object's points.
    let mut overlay = Group::new();
    overlay.append_child(Rc::clone(&scene) as Rc<dyn GraphicItem>);
    for point in object.points() {
        overlay.append_child(Rc::new(ControlPoint::new(Rc::clone(point), 4.0)));
    }
    let mut editing_view = View::new();
    editing_view.mount(Rc::new(overlay));
    let editing_view = Rc::new(editing_view);

    renderer
        .render(&editing_view, context.node())
        .expect("editing pass");

    // Drag the marker; the shared anchor moves with it.
    let marker = find_kind(&renderer, context.node(), "circle").expect("marker rendered");
    renderer.pool().node(marker).handles()[0].drag(Vector2::new(15.0, 5.0));
    println!("anchor after drag: {:?}", *anchor.borrow());

    renderer
        .render(&editing_view, context.node())
        .expect("final pass");
    println!("\nafter drag:\n{}", context.to_svg(&renderer));
}
