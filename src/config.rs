// Startup settings, persisted as JSON in browser local storage.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::ConfigError;
use crate::input::PlacementPolicy;
use crate::model::BuildingType;
use crate::state::{DEFAULT_MAX_ZOOM, MIN_ZOOM};

pub const SETTINGS_KEY: &str = "unisim_settings";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub max_zoom: f64,
    pub placement: PlacementPolicy,
    pub building_types: Vec<BuildingType>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_zoom: DEFAULT_MAX_ZOOM,
            placement: PlacementPolicy::default(),
            building_types: BuildingType::ALL.to_vec(),
        }
    }
}

impl Settings {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_zoom.is_finite() || self.max_zoom < MIN_ZOOM {
            return Err(ConfigError::InvalidMaxZoom(self.max_zoom));
        }
        if self.building_types.is_empty() {
            return Err(ConfigError::EmptyBuildingSet);
        }
        let mut seen = BTreeSet::new();
        for &kind in &self.building_types {
            if !seen.insert(kind) {
                return Err(ConfigError::DuplicateBuildingType(kind));
            }
        }
        Ok(())
    }

    /// Read settings from local storage, falling back to defaults when they
    /// are missing or invalid. Missing settings are seeded with the defaults
    /// so the stored entry can be edited by hand.
    pub fn load() -> Self {
        let raw = match storage().and_then(|store| {
            store
                .get_item(SETTINGS_KEY)
                .map_err(|e| ConfigError::Storage(format!("{e:?}")))
        }) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                let defaults = Self::default();
                if let Err(e) = defaults.save() {
                    log::warn!("could not store default settings: {e}");
                }
                return defaults;
            }
            Err(e) => {
                log::warn!("using default settings: {e}");
                return Self::default();
            }
        };
        Self::from_json(&raw).unwrap_or_else(|e| {
            log::warn!("ignoring stored settings: {e}");
            Self::default()
        })
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let raw = self.to_json()?;
        storage()?
            .set_item(SETTINGS_KEY, &raw)
            .map_err(|e| ConfigError::Storage(format!("{e:?}")))
    }
}

fn storage() -> Result<web_sys::Storage, ConfigError> {
    web_sys::window()
        .ok_or_else(|| ConfigError::Storage("no window".into()))?
        .local_storage()
        .map_err(|e| ConfigError::Storage(format!("{e:?}")))?
        .ok_or_else(|| ConfigError::Storage("local storage disabled".into()))
}
