use bitflags::bitflags;

bitflags! {
    /// Engine-wide rendering options, fixed at construction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct RenderOptions: u8 {
        /// When attaching a pristine group wrapper that has children, attach
        /// the children directly to the wrapper's parent instead and release
        /// the wrapper. Removes the nesting recursive grouping produces when
        /// a group contributes no attributes of its own.
        const FLATTEN_GROUPS = 0b001;

        /// Emit each item's local transform as a `transform` attribute and
        /// keep geometry in item coordinates, instead of baking the composed
        /// projection into every coordinate.
        const NATIVE_TRANSFORMS = 0b010;

        /// Emit the item's selector as a `class` attribute and leave
        /// presentation attributes to a document stylesheet
        /// (see `StyleSheet::to_css`), instead of writing resolved style
        /// attributes inline.
        const STYLE_CLASSES = 0b100;
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::FLATTEN_GROUPS
    }
}
