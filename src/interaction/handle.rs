use crate::math::Vector2;

/// A bundle of gesture callbacks registered on an output node.
///
/// Rules for interactive items attach handles to the nodes they refine; the
/// host application routes pointer gestures on the real DOM element back
/// through [`Handle::click`] and [`Handle::drag`]. A node can carry several
/// handles, one per rule that registered behavior.
#[derive(Default)]
pub struct Handle {
    on_begin: Option<Box<dyn Fn() -> bool>>,
    on_click: Option<Box<dyn Fn()>>,
    on_drag: Option<Box<dyn Fn(Vector2)>>,
}

impl Handle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate callback run at gesture start. Returning false ignores the
    /// gesture entirely.
    pub fn on_begin(mut self, callback: impl Fn() -> bool + 'static) -> Self {
        self.on_begin = Some(Box::new(callback));
        self
    }

    pub fn on_click(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn on_drag(mut self, callback: impl Fn(Vector2) + 'static) -> Self {
        self.on_drag = Some(Box::new(callback));
        self
    }

    fn begin(&self) -> bool {
        match &self.on_begin {
            Some(callback) => callback(),
            None => true,
        }
    }

    /// Dispatch a completed click gesture.
    pub fn click(&self) {
        if !self.begin() {
            return;
        }
        if let Some(callback) = &self.on_click {
            callback();
        }
    }

    /// Dispatch a drag gesture that moved by `delta` since its start.
    pub fn drag(&self, delta: Vector2) {
        if !self.begin() {
            return;
        }
        if let Some(callback) = &self.on_drag {
            callback(delta);
        }
    }
}

impl std::fmt::Debug for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handle")
            .field("on_begin", &self.on_begin.is_some())
            .field("on_click", &self.on_click.is_some())
            .field("on_drag", &self.on_drag.is_some())
            .finish()
    }
}
