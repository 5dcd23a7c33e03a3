// Pointer drag tracking for camera panning.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Last pointer position in screen pixels while a drag is active.
    last: Option<(f64, f64)>,
}

impl DragState {
    pub fn begin(&mut self, screen_x: f64, screen_y: f64) {
        self.last = Some((screen_x, screen_y));
    }

    pub fn end(&mut self) {
        self.last = None;
    }

    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        self.last
    }
}
