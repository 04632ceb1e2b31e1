use schemars::JsonSchema;
use serde::Serialize;

/// A persisted planet. Every descriptive column is nullable.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct Planet {
    pub id: i64,
    pub name: Option<String>,
    pub distance_from_earth: Option<i64>,
    pub nearest_star: Option<String>,
}

/// A planet that has not been inserted yet. No field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: Option<String>,
    pub distance_from_earth: Option<i64>,
    pub nearest_star: Option<String>,
}

impl NewPlanet {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        distance_from_earth: i64,
        nearest_star: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            distance_from_earth: Some(distance_from_earth),
            nearest_star: Some(nearest_star.into()),
        }
    }

    /// Attach the id assigned by storage.
    #[must_use]
    pub fn into_planet(self, id: i64) -> Planet {
        Planet {
            id,
            name: self.name,
            distance_from_earth: self.distance_from_earth,
            nearest_star: self.nearest_star,
        }
    }
}
