// Pointer and wheel handling for the campus map. Handlers return whether the
// event was consumed.

use serde::{Deserialize, Serialize};
use yew::Callback;

use crate::state::{CameraView, DragState, MIN_ZOOM};

/// Zoom change per wheel notch.
pub const ZOOM_SPEED: f64 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    #[default]
    FreeCamera,
    PlacingBuilding,
}

/// What happens to placement mode once a building has been placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementPolicy {
    /// Back to free camera after every placement.
    #[default]
    SingleShot,
    /// Keep placing until explicitly cancelled.
    Sticky,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl MouseButton {
    /// Decode a DOM `MouseEvent.button` value.
    pub fn from_dom(code: i16) -> Self {
        match code {
            0 => MouseButton::Primary,
            1 => MouseButton::Auxiliary,
            2 => MouseButton::Secondary,
            other => MouseButton::Other(other),
        }
    }
}

/// Convert a DOM wheel delta into notches (positive = zoom out).
///
/// `delta_mode` follows `WheelEvent.deltaMode`: 0 pixels, 1 lines, 2 pages.
pub fn scroll_amount(delta_y: f64, delta_mode: u32) -> f64 {
    match delta_mode {
        0 => delta_y / 100.0,
        1 => delta_y,
        _ => delta_y * 3.0,
    }
}

/// Client coordinates relative to an element's top-left corner. The result is
/// outside `0..width`/`0..height` when the pointer has left the element.
pub fn element_point(client_x: f64, client_y: f64, left: f64, top: f64) -> (f64, f64) {
    (client_x - left, client_y - top)
}

pub fn point_within((x, y): (f64, f64), width: f64, height: f64) -> bool {
    (0.0..width).contains(&x) && (0.0..height).contains(&y)
}

pub struct InteractionController<C: CameraView> {
    camera: C,
    max_zoom: f64,
    mode: InteractionMode,
    policy: PlacementPolicy,
    drag: DragState,
    on_place: Callback<(f64, f64)>,
}

impl<C: CameraView> InteractionController<C> {
    /// `max_zoom` below [`MIN_ZOOM`] is raised to it so the zoom range is never empty.
    pub fn new(
        mut camera: C,
        max_zoom: f64,
        policy: PlacementPolicy,
        on_place: Callback<(f64, f64)>,
    ) -> Self {
        let max_zoom = max_zoom.max(MIN_ZOOM);
        camera.set_zoom(camera.zoom().clamp(MIN_ZOOM, max_zoom));
        Self {
            camera,
            max_zoom,
            mode: InteractionMode::FreeCamera,
            policy,
            drag: DragState::default(),
            on_place,
        }
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    pub fn is_placing_building(&self) -> bool {
        self.mode == InteractionMode::PlacingBuilding
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Does not touch an in-progress drag; moves are ignored while placing.
    pub fn set_placing_building(&mut self, placing: bool) {
        self.mode = if placing {
            InteractionMode::PlacingBuilding
        } else {
            InteractionMode::FreeCamera
        };
        log::debug!("interaction mode -> {:?}", self.mode);
    }

    pub fn on_press(&mut self, button: MouseButton, screen_x: f64, screen_y: f64) -> bool {
        if button != MouseButton::Primary {
            return true;
        }
        match self.mode {
            InteractionMode::PlacingBuilding => {
                let (world_x, world_y) = self.camera.unproject(screen_x, screen_y);
                log::debug!(
                    "placement click at screen ({screen_x}, {screen_y}) -> world ({world_x:.1}, {world_y:.1})"
                );
                self.on_place.emit((world_x, world_y));
                if self.policy == PlacementPolicy::SingleShot {
                    self.set_placing_building(false);
                }
            }
            InteractionMode::FreeCamera => {
                self.drag.begin(screen_x, screen_y);
            }
        }
        true
    }

    pub fn on_release(&mut self, button: MouseButton) -> bool {
        if button == MouseButton::Primary {
            self.drag.end();
        }
        true
    }

    pub fn on_pointer_move(&mut self, screen_x: f64, screen_y: f64) -> bool {
        if self.is_placing_building() {
            return false;
        }
        let Some((last_x, last_y)) = self.drag.last() else {
            return false;
        };
        let zoom = self.camera.zoom();
        let (x, y) = self.camera.position();
        self.camera.set_position(
            x + (last_x - screen_x) * zoom,
            y + (screen_y - last_y) * zoom,
        );
        self.drag.begin(screen_x, screen_y);
        true
    }

    pub fn on_scroll(&mut self, amount: f64) -> bool {
        let requested = self.camera.zoom() + amount * ZOOM_SPEED;
        if !requested.is_finite() {
            return true;
        }
        self.camera.set_zoom(requested.clamp(MIN_ZOOM, self.max_zoom));
        true
    }
}
