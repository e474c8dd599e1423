use std::rc::Rc;

use crate::interaction::Handle;
use crate::render::RenderRule;
use crate::scene::GraphicItem;
use crate::shapes::{ButtonControl, ControlObject, ControlPoint};

/// Refines the node the group rule produced for a control object: attaches a
/// click handle that makes the object the active editing target.
///
/// Returns no node of its own; the prior output stays the running output,
/// which is why this rule must be registered after the group rule.
pub fn control_object_rule() -> RenderRule {
    RenderRule::new(
        ControlObject::TAG,
        |node, _projection, _chain, prior, renderer| {
            let Some(prior) = prior else {
                return Ok(None);
            };
            let Some(item) = node.source() else {
                return Ok(None);
            };
            if item.as_control().is_none() {
                return Ok(None);
            }

            let target = Rc::clone(item);
            let handle = Handle::new().on_click(move || {
                if let Some(control) = target.as_control() {
                    control.activate();
                }
            });
            renderer.pool_mut().node_mut(prior).add_handle(handle);
            Ok(None)
        },
    )
}

/// Refines the circle node rendered for a control point: attaches a drag
/// handle that moves the shared anchor.
pub fn control_point_rule() -> RenderRule {
    RenderRule::new(
        ControlPoint::TAG,
        |node, _projection, _chain, prior, renderer| {
            let Some(prior) = prior else {
                return Ok(None);
            };
            let Some(item) = node.source() else {
                return Ok(None);
            };
            if item.as_any().downcast_ref::<ControlPoint>().is_none() {
                return Ok(None);
            }

            let target = Rc::clone(item);
            let handle = Handle::new().on_drag(move |delta| {
                if let Some(point) = target.as_any().downcast_ref::<ControlPoint>() {
                    point.drag(delta);
                }
            });
            renderer.pool_mut().node_mut(prior).add_handle(handle);
            Ok(None)
        },
    )
}

/// Refines the node rendered for a button: attaches a click handle that runs
/// the button's action.
pub fn button_control_rule() -> RenderRule {
    RenderRule::new(
        ButtonControl::TAG,
        |node, _projection, _chain, prior, renderer| {
            let Some(prior) = prior else {
                return Ok(None);
            };
            let Some(item) = node.source() else {
                return Ok(None);
            };
            if item.as_any().downcast_ref::<ButtonControl>().is_none() {
                return Ok(None);
            }

            let target = Rc::clone(item);
            let handle = Handle::new().on_click(move || {
                if let Some(button) = target.as_any().downcast_ref::<ButtonControl>() {
                    button.press();
                }
            });
            renderer.pool_mut().node_mut(prior).add_handle(handle);
            Ok(None)
        },
    )
}
