pub mod camera;
pub mod drag;

pub use camera::{Camera, CameraView, DEFAULT_MAX_ZOOM, MIN_ZOOM};
pub use drag::DragState;
