// Building catalogue, placed buildings and the campus reducer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use yew::Reducible;

use crate::error::UnknownBuildingType;
use crate::input::PlacementPolicy;

/// Footprint of a placed building, in world units.
pub const BUILDING_SIZE: f64 = 48.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum BuildingType {
    Accommodation,
    Learning,
    Dining,
    Recreation,
}

impl BuildingType {
    /// Every building type, in inventory display order.
    pub const ALL: [BuildingType; 4] = [
        BuildingType::Accommodation,
        BuildingType::Learning,
        BuildingType::Dining,
        BuildingType::Recreation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuildingType::Accommodation => "Accommodation",
            BuildingType::Learning => "Learning",
            BuildingType::Dining => "Dining",
            BuildingType::Recreation => "Recreation",
        }
    }

    /// Lowercase identifier, used for icon names and element ids.
    pub fn slug(self) -> &'static str {
        match self {
            BuildingType::Accommodation => "accommodation",
            BuildingType::Learning => "learning",
            BuildingType::Dining => "dining",
            BuildingType::Recreation => "recreation",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            BuildingType::Accommodation => "#58a6ff",
            BuildingType::Learning => "#2ea043",
            BuildingType::Dining => "#f0883e",
            BuildingType::Recreation => "#d2a8ff",
        }
    }

    /// Fixed attributes every newly selected building of this type carries.
    pub fn template(self) -> BuildingTemplate {
        match self {
            BuildingType::Accommodation => STANDARD_TEMPLATE,
            BuildingType::Learning => STANDARD_TEMPLATE,
            BuildingType::Dining => STANDARD_TEMPLATE,
            BuildingType::Recreation => STANDARD_TEMPLATE,
        }
    }
}

impl fmt::Display for BuildingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuildingType {
    type Err = UnknownBuildingType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BuildingType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownBuildingType(s.to_string()))
    }
}

impl TryFrom<String> for BuildingType {
    type Error = UnknownBuildingType;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingTemplate {
    /// Money spent to build one.
    pub cost: u64,
    /// Satisfaction the building adds once placed.
    pub satisfaction: u32,
    /// Recurring running cost.
    pub upkeep: u64,
}

const STANDARD_TEMPLATE: BuildingTemplate = BuildingTemplate {
    cost: 50_000,
    satisfaction: 10,
    upkeep: 5_000,
};

/// A fully-formed building description, handed to the game layer when the
/// player picks a type from the inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub kind: BuildingType,
    pub cost: u64,
    pub satisfaction: u32,
    pub upkeep: u64,
}

impl Building {
    pub fn from_template(kind: BuildingType) -> Self {
        let t = kind.template();
        Self {
            kind,
            cost: t.cost,
            satisfaction: t.satisfaction,
            upkeep: t.upkeep,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedBuilding {
    pub kind: BuildingType,
    /// World position of the building's centre.
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CampusState {
    pub policy: PlacementPolicy,
    /// Building waiting to be placed by the next map click.
    pub selected: Option<Building>,
    pub placed: Vec<PlacedBuilding>,
    /// Short status line for the placement banner.
    pub feedback: Option<String>,
}

impl CampusState {
    pub fn new(policy: PlacementPolicy) -> Self {
        Self {
            policy,
            selected: None,
            placed: Vec::new(),
            feedback: None,
        }
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum CampusAction {
    Select(Building),
    PlaceAt { x: f64, y: f64 },
    CancelSelection,
}

impl Reducible for CampusState {
    type Action = CampusAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use CampusAction::*;
        let mut new = (*self).clone();
        match action {
            Select(building) => {
                log::info!("selected {} (cost {})", building.kind, building.cost);
                new.feedback = Some(format!("Click the map to place {}", building.kind));
                new.selected = Some(building);
            }
            PlaceAt { x, y } => {
                let Some(building) = new.selected else {
                    log::warn!("placement at ({x:.1}, {y:.1}) with no building selected");
                    new.feedback = Some("Pick a building first".into());
                    return Rc::new(new);
                };
                log::info!("placed {} at ({x:.1}, {y:.1})", building.kind);
                new.placed.push(PlacedBuilding {
                    kind: building.kind,
                    x,
                    y,
                });
                new.feedback = Some(format!("{} placed", building.kind));
                if new.policy == PlacementPolicy::SingleShot {
                    new.selected = None;
                }
            }
            CancelSelection => {
                if new.selected.take().is_some() {
                    new.feedback = Some("Placement cancelled".into());
                }
            }
        }
        Rc::new(new)
    }
}
