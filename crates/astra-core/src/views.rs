//! Serialization views.
//!
//! Scientists, planets, and missions reference each other in both directions,
//! so serializing an entity naively would recurse forever. Each view below is
//! one fixed projection with the back-references already cut. Field order is
//! declaration order, which is the order clients see.
//!
//! ```text
//! ScientistView               scientist, no missions
//! ScientistWithMissionsView   scientist -> missions -> planet
//! MissionView                 mission -> scientist, planet (neither with missions)
//! PlanetWithMissionsView      planet -> missions -> scientist
//! ```

use schemars::JsonSchema;
use serde::Serialize;

use crate::entities::{Mission, Planet, Scientist};

/// Default scientist shape: `{id, name, field_of_study}`.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ScientistView {
    pub id: i64,
    pub name: String,
    pub field_of_study: String,
}

impl From<&Scientist> for ScientistView {
    fn from(scientist: &Scientist) -> Self {
        Self {
            id: scientist.id,
            name: scientist.name.clone(),
            field_of_study: scientist.field_of_study.clone(),
        }
    }
}

impl From<Scientist> for ScientistView {
    fn from(scientist: Scientist) -> Self {
        Self {
            id: scientist.id,
            name: scientist.name,
            field_of_study: scientist.field_of_study,
        }
    }
}

/// Planet without its missions. Missing columns serialize as `null`.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct PlanetView {
    pub id: i64,
    pub name: Option<String>,
    pub distance_from_earth: Option<i64>,
    pub nearest_star: Option<String>,
}

impl From<Planet> for PlanetView {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            distance_from_earth: planet.distance_from_earth,
            nearest_star: planet.nearest_star,
        }
    }
}

/// A mission nested under its scientist: the planet is included, the
/// scientist back-reference is not.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct MissionWithPlanetView {
    pub id: i64,
    pub name: String,
    pub scientist_id: i64,
    pub planet_id: i64,
    pub planet: PlanetView,
}

impl MissionWithPlanetView {
    #[must_use]
    pub fn new(mission: Mission, planet: Planet) -> Self {
        Self {
            id: mission.id,
            name: mission.name,
            scientist_id: mission.scientist_id,
            planet_id: mission.planet_id,
            planet: planet.into(),
        }
    }
}

/// Scientist detail shape returned by `GET /scientists/{id}`.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ScientistWithMissionsView {
    pub id: i64,
    pub name: String,
    pub field_of_study: String,
    pub missions: Vec<MissionWithPlanetView>,
}

impl ScientistWithMissionsView {
    /// Build from a scientist and its missions paired with their planets,
    /// keeping the given mission order.
    #[must_use]
    pub fn new(scientist: Scientist, missions: Vec<(Mission, Planet)>) -> Self {
        Self {
            id: scientist.id,
            name: scientist.name,
            field_of_study: scientist.field_of_study,
            missions: missions
                .into_iter()
                .map(|(mission, planet)| MissionWithPlanetView::new(mission, planet))
                .collect(),
        }
    }
}

/// Default mission shape: both parents included, neither with its missions.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct MissionView {
    pub id: i64,
    pub name: String,
    pub scientist_id: i64,
    pub planet_id: i64,
    pub scientist: ScientistView,
    pub planet: PlanetView,
}

impl MissionView {
    #[must_use]
    pub fn new(mission: Mission, scientist: Scientist, planet: Planet) -> Self {
        Self {
            id: mission.id,
            name: mission.name,
            scientist_id: mission.scientist_id,
            planet_id: mission.planet_id,
            scientist: scientist.into(),
            planet: planet.into(),
        }
    }
}

/// A mission nested under its planet: the scientist is included, the planet
/// back-reference is not.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct MissionWithScientistView {
    pub id: i64,
    pub name: String,
    pub scientist_id: i64,
    pub planet_id: i64,
    pub scientist: ScientistView,
}

/// Default planet shape: its missions, each with the scientist attached.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct PlanetWithMissionsView {
    pub id: i64,
    pub name: Option<String>,
    pub distance_from_earth: Option<i64>,
    pub nearest_star: Option<String>,
    pub missions: Vec<MissionWithScientistView>,
}

impl PlanetWithMissionsView {
    #[must_use]
    pub fn new(planet: Planet, missions: Vec<(Mission, Scientist)>) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            distance_from_earth: planet.distance_from_earth,
            nearest_star: planet.nearest_star,
            missions: missions
                .into_iter()
                .map(|(mission, scientist)| MissionWithScientistView {
                    id: mission.id,
                    name: mission.name,
                    scientist_id: mission.scientist_id,
                    planet_id: mission.planet_id,
                    scientist: scientist.into(),
                })
                .collect(),
        }
    }
}
