use crate::style::StyleSheet;

use super::rules::{
    button_control_rule, clip_path_rule, control_object_rule, control_point_rule,
    fixed_radius_circle_rule, group_rule, image_rule, line_rule, mask_rule, pattern_rule,
    polygon_rule, polyline_rule, quadratic_curve_rule, rectangle_rule, scalable_text_rule,
    symbol_rule, text_rule, two_point_circle_rule, use_element_rule, view_rule,
};
use super::{RenderOptions, Renderer, RuleSet};

/// Build the stock rule set in its canonical order.
///
/// The order matters where type chains overlap: the group rule creates the
/// node the control rules refine, and the circle rule creates the node the
/// control point rule refines, so the creating rules come first.
pub fn default_rule_set() -> RuleSet {
    let mut rules = RuleSet::new();
    rules.register(line_rule());
    rules.register(rectangle_rule());
    rules.register(polygon_rule());
    rules.register(polyline_rule());
    rules.register(two_point_circle_rule());
    rules.register(fixed_radius_circle_rule());
    rules.register(quadratic_curve_rule());
    rules.register(text_rule());
    rules.register(scalable_text_rule());
    rules.register(image_rule());
    rules.register(pattern_rule());
    rules.register(use_element_rule());
    rules.register(mask_rule());
    rules.register(clip_path_rule());
    rules.register(symbol_rule());
    rules.register(group_rule());
    rules.register(view_rule());
    rules.register(control_object_rule());
    rules.register(control_point_rule());
    rules.register(button_control_rule());
    rules
}

/// Build a renderer with the stock rules.
pub fn default_renderer(style_sheet: StyleSheet, options: RenderOptions) -> Renderer {
    Renderer::new(default_rule_set(), style_sheet, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_rule_count() {
        assert_eq!(default_rule_set().len(), 20);
    }
}
