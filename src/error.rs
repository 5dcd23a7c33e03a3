use thiserror::Error;

use crate::model::BuildingType;

/// A building name that is not part of the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown building type `{0}`")]
pub struct UnknownBuildingType(pub String);

/// Problems with persisted settings. None of these are fatal: the app falls
/// back to defaults and logs the reason.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("max zoom {0} must be finite and at least {}", crate::state::camera::MIN_ZOOM)]
    InvalidMaxZoom(f64),
    #[error("at least one building type must be enabled")]
    EmptyBuildingSet,
    #[error("building type {0} is listed more than once")]
    DuplicateBuildingType(BuildingType),
    #[error("local storage unavailable: {0}")]
    Storage(String),
}
