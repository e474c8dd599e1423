/// A resolved record of presentation properties for one output node.
///
/// Every field is optional; unset fields leave the corresponding attribute
/// off the node. Records merge field-wise, the overriding record winning
/// wherever it has a value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphicStyle {
    // Paint
    pub fill: Option<String>,
    pub fill_opacity: Option<f64>,
    pub fill_rule: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub stroke_opacity: Option<f64>,
    pub stroke_linecap: Option<String>,
    pub stroke_linejoin: Option<String>,
    pub stroke_miterlimit: Option<f64>,
    pub stroke_dasharray: Option<String>,
    pub stroke_dashoffset: Option<f64>,
    pub vector_effect: Option<String>,

    // Visibility
    pub display: Option<String>,
    pub visibility: Option<String>,
    pub opacity: Option<f64>,

    // Typography
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub font_style: Option<String>,
    pub font_variant: Option<String>,
    pub font_weight: Option<String>,
    pub font_stretch: Option<String>,
    pub letter_spacing: Option<String>,
    pub word_spacing: Option<String>,
    pub text_decoration: Option<String>,

    // Interaction hints
    pub pointer_events: Option<String>,
    pub cursor: Option<String>,

    // References
    pub mask: Option<String>,
    pub clip_path: Option<String>,
    pub paint_order: Option<String>,
}

impl GraphicStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite every field that `other` has a value for.
    pub fn merge(&mut self, other: &GraphicStyle) {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field.clone();
                    }
                )*
            };
        }
        take!(
            fill,
            fill_opacity,
            fill_rule,
            stroke,
            stroke_width,
            stroke_opacity,
            stroke_linecap,
            stroke_linejoin,
            stroke_miterlimit,
            stroke_dasharray,
            stroke_dashoffset,
            vector_effect,
            display,
            visibility,
            opacity,
            font_family,
            font_size,
            font_style,
            font_variant,
            font_weight,
            font_stretch,
            letter_spacing,
            word_spacing,
            text_decoration,
            pointer_events,
            cursor,
            mask,
            clip_path,
            paint_order,
        );
    }

    /// List the style as (attribute name, value) pairs in a stable order.
    ///
    /// This is the inventory of presentation attributes the renderer writes
    /// onto output nodes, and the declaration list `StyleSheet::to_css`
    /// serializes.
    pub fn attribute_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        macro_rules! push_str {
            ($field:ident, $name:expr) => {
                if let Some(ref value) = self.$field {
                    pairs.push(($name, value.clone()));
                }
            };
        }
        macro_rules! push_num {
            ($field:ident, $name:expr) => {
                if let Some(value) = self.$field {
                    pairs.push(($name, value.to_string()));
                }
            };
        }

        push_str!(fill, "fill");
        push_num!(fill_opacity, "fill-opacity");
        push_str!(fill_rule, "fill-rule");
        push_str!(stroke, "stroke");
        push_num!(stroke_width, "stroke-width");
        push_num!(stroke_opacity, "stroke-opacity");
        push_str!(stroke_linecap, "stroke-linecap");
        push_str!(stroke_linejoin, "stroke-linejoin");
        push_num!(stroke_miterlimit, "stroke-miterlimit");
        push_str!(stroke_dasharray, "stroke-dasharray");
        push_num!(stroke_dashoffset, "stroke-dashoffset");
        push_str!(vector_effect, "vector-effect");
        push_str!(display, "display");
        push_str!(visibility, "visibility");
        push_num!(opacity, "opacity");
        push_str!(font_family, "font-family");
        push_str!(font_size, "font-size");
        push_str!(font_style, "font-style");
        push_str!(font_variant, "font-variant");
        push_str!(font_weight, "font-weight");
        push_str!(font_stretch, "font-stretch");
        push_str!(letter_spacing, "letter-spacing");
        push_str!(word_spacing, "word-spacing");
        push_str!(text_decoration, "text-decoration");
        push_str!(pointer_events, "pointer-events");
        push_str!(cursor, "cursor");
        push_str!(mask, "mask");
        push_str!(clip_path, "clip-path");
        push_str!(paint_order, "paint-order");

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_set_fields_only() {
        let mut base = GraphicStyle {
            fill: Some("black".to_string()),
            stroke: Some("red".to_string()),
            ..GraphicStyle::new()
        };
        let over = GraphicStyle {
            fill: Some("blue".to_string()),
            opacity: Some(0.5),
            ..GraphicStyle::new()
        };

        base.merge(&over);
        assert_eq!(base.fill.as_deref(), Some("blue"));
        assert_eq!(base.stroke.as_deref(), Some("red"));
        assert_eq!(base.opacity, Some(0.5));
    }

    #[test]
    fn test_attribute_pairs() {
        let style = GraphicStyle {
            fill: Some("none".to_string()),
            stroke_width: Some(2.0),
            ..GraphicStyle::new()
        };
        let pairs = style.attribute_pairs();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&("fill", "none".to_string())));
        assert!(pairs.contains(&("stroke-width", "2".to_string())));
    }
}
