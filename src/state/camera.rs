// Camera abstraction plus the orthographic camera the campus map renders with.

/// Smallest zoom factor the camera accepts; the maximum is configurable.
pub const MIN_ZOOM: f64 = 0.5;
pub const DEFAULT_MAX_ZOOM: f64 = 2.0;

/// What the interaction controller needs from a camera: a mutable position
/// and zoom, and a way to turn screen pixels into world coordinates.
pub trait CameraView {
    fn position(&self) -> (f64, f64);
    fn set_position(&mut self, x: f64, y: f64);
    fn zoom(&self) -> f64;
    fn set_zoom(&mut self, zoom: f64);
    /// Screen pixel (origin top-left, y down) to world units (y up).
    fn unproject(&self, screen_x: f64, screen_y: f64) -> (f64, f64);
}

/// Orthographic camera looking at `(x, y)`, which sits at the viewport centre.
/// One screen pixel spans `zoom` world units.
#[derive(Debug, Clone)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
        }
    }
}

impl Camera {
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width.max(1.0);
        self.viewport_height = height.max(1.0);
    }

    pub fn center_on(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// World units to screen pixels; inverse of [`CameraView::unproject`].
    pub fn project(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        (
            (world_x - self.x) / self.zoom + self.viewport_width * 0.5,
            self.viewport_height * 0.5 - (world_y - self.y) / self.zoom,
        )
    }

    /// Visible world rectangle as `(min_x, min_y, max_x, max_y)`.
    pub fn visible_bounds(&self) -> (f64, f64, f64, f64) {
        let (left, top) = self.unproject(0.0, 0.0);
        let (right, bottom) = self.unproject(self.viewport_width, self.viewport_height);
        (left, bottom, right, top)
    }
}

impl CameraView for Camera {
    fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
    }

    fn unproject(&self, screen_x: f64, screen_y: f64) -> (f64, f64) {
        (
            self.x + (screen_x - self.viewport_width * 0.5) * self.zoom,
            self.y + (self.viewport_height * 0.5 - screen_y) * self.zoom,
        )
    }
}
