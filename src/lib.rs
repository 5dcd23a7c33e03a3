// Input and placement core for a campus-building game, plus the yew shell
// that hosts it in the browser.

pub mod components;
pub mod config;
pub mod error;
pub mod input;
pub mod inventory;
pub mod model;
pub mod state;
pub mod util;
