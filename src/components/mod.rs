pub mod app;
pub mod camera_controls;
pub mod campus_view;
pub mod inventory_panel;
pub mod placement_banner;

pub use app::App;
