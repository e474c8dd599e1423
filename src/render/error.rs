/// Fatal failures of a render pass.
///
/// A pass is atomic from the caller's perspective: on error the target
/// container is left in an undefined partial state and the caller must fix
/// its inputs and render from scratch. Items matching no rule are not an
/// error; they are silently skipped.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RenderError {
    #[error("{kind} has a non-finite coordinate after projection")]
    NonFiniteGeometry { kind: &'static str },

    #[error("quadratic curve needs at least 3 control points, got {count}")]
    TooFewCurvePoints { count: usize },
}
