//! Build a small static scene and print the rendered SVG document.
//!
//! ```bash
//! cargo run --example drawing
//! ```

use std::rc::Rc;

use sagoma::prelude::*;

fn main() {
    env_logger::init();

    let mut sheet = StyleSheet::new();
    sheet.add(
        "frame",
        GraphicStyle {
            fill: Some("none".to_string()),
            stroke: Some("#333333".to_string()),
            stroke_width: Some(2.0),
            ..GraphicStyle::new()
        },
    );
    sheet.add(
        "dot",
        GraphicStyle {
            fill: Some("#c0392b".to_string()),
            ..GraphicStyle::new()
        },
    );
    sheet.add(
        "label",
        GraphicStyle {
            font_family: Some("sans-serif".to_string()),
            fill: Some("#222222".to_string()),
            ..GraphicStyle::new()
        },
    );

    let mut scene = Group::new();
    scene.append_child(Rc::new(
        TwoPointRectangle::new(Vector2::new(10.0, 10.0), Vector2::new(190.0, 110.0))
            .with_selector("frame"),
    ));
    scene.append_child(Rc::new(
        TwoPointCircle::new(Vector2::new(60.0, 60.0), Vector2::new(80.0, 60.0))
            .with_selector("dot"),
    ));
    scene.append_child(Rc::new(QuadraticCurve::new(vec![
        Vector2::new(100.0, 100.0),
        Vector2::new(140.0, 20.0),
        Vector2::new(180.0, 100.0),
    ])));
    scene.append_child(Rc::new(
        ScalableText::new(Vector2::new(100.0, 40.0), "sagoma", 14.0)
            .with_text_anchor(TextAnchor::Middle)
            .with_selector("label"),
    ));

    let mut view = View::new();
    view.mount(Rc::new(scene));
    let view = Rc::new(view);

    let mut renderer = default_renderer(sheet, RenderOptions::default());
    let context = SvgContext::new(&mut renderer);
    context.set_size(&mut renderer, Vector2::new(200.0, 120.0));

    renderer
        .render(&view, context.node())
        .expect("scene renders");

    println!("{}", context.to_svg(&renderer));
}
