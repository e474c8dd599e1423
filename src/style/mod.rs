//! Style selectors, selector chains and the cascading stylesheet.
//!
//! The renderer threads a [`SelectorChain`] down its recursion: every rule
//! adds its item's selector before recursing, and each child recursion gets a
//! clone so sibling subtrees never observe each other's selectors. Once a
//! node produced output, the chain is resolved against the engine's
//! [`StyleSheet`] into a single [`GraphicStyle`] record.

pub mod chain;
pub mod graphic_style;
pub mod selector;
pub mod sheet;

pub use chain::SelectorChain;
pub use graphic_style::GraphicStyle;
pub use selector::StyleSelector;
pub use sheet::{StyleRule, StyleSheet};
