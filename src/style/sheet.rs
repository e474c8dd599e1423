use super::{GraphicStyle, SelectorChain, StyleSelector};

/// One stylesheet rule: a selector sequence pattern and its declarations.
///
/// A pattern of several selectors works like a CSS descendant selector:
/// `["menu", "line"]` styles lines somewhere below a `menu`-selected item.
#[derive(Debug, Clone)]
pub struct StyleRule {
    pub selectors: Vec<StyleSelector>,
    pub declarations: GraphicStyle,
}

impl StyleRule {
    pub fn new(selectors: Vec<StyleSelector>, declarations: GraphicStyle) -> Self {
        Self {
            selectors,
            declarations,
        }
    }

    /// Whether this rule applies to a chain: the pattern must be an in-order
    /// subsequence of the chain and its last selector must match the chain's
    /// last selector.
    fn matches(&self, chain: &[StyleSelector]) -> bool {
        let Some(last) = self.selectors.last() else {
            return false;
        };
        let Some(chain_last) = chain.last() else {
            return false;
        };
        if last != chain_last {
            return false;
        }

        // The remaining pattern selectors must appear in order among the
        // chain's ancestors.
        let mut pattern = self.selectors[..self.selectors.len() - 1].iter();
        let mut current = pattern.next();
        for selector in &chain[..chain.len() - 1] {
            match current {
                Some(wanted) if wanted == selector => current = pattern.next(),
                _ => {}
            }
        }
        current.is_none()
    }
}

/// An ordered list of style rules resolved against selector chains.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    rules: Vec<StyleRule>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rule(&mut self, rule: StyleRule) {
        self.rules.push(rule);
    }

    /// Convenience for single-selector rules.
    pub fn add(&mut self, selector: impl Into<StyleSelector>, declarations: GraphicStyle) {
        self.add_rule(StyleRule::new(vec![selector.into()], declarations));
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Resolve the style for a node described by `chain`.
    ///
    /// The chain is walked prefix by prefix from the root, so declarations
    /// matched at an ancestor cascade down to the node unless a deeper or
    /// more specific match overrides them. Within one prefix, matching rules
    /// merge ordered by (pattern length, sheet position). The per-item
    /// `element_style` merges last and wins over everything from the sheet.
    pub fn resolve(
        &self,
        chain: &SelectorChain,
        element_style: Option<&GraphicStyle>,
    ) -> GraphicStyle {
        let selectors = chain.selectors();
        let mut result = GraphicStyle::new();

        for depth in 1..=selectors.len() {
            let prefix = &selectors[..depth];

            let mut matching: Vec<(usize, &StyleRule)> = self
                .rules
                .iter()
                .enumerate()
                .filter(|(_, rule)| rule.matches(prefix))
                .collect();
            matching.sort_by_key(|(index, rule)| (rule.selectors.len(), *index));

            for (_, rule) in matching {
                result.merge(&rule.declarations);
            }
        }

        if let Some(style) = element_style {
            result.merge(style);
        }

        result
    }

    /// Serialize the sheet as CSS text for documents rendered in class mode.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for rule in &self.rules {
            let selector = rule
                .selectors
                .iter()
                .map(|s| format!(".{}", s.name()))
                .collect::<Vec<_>>()
                .join(" ");
            css.push_str(&selector);
            css.push_str(" {\n");
            for (name, value) in rule.declarations.attribute_pairs() {
                css.push_str(&format!("  {}: {};\n", name, value));
            }
            css.push_str("}\n");
        }
        css
    }
}
