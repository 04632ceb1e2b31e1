use schemars::JsonSchema;
use serde::Serialize;

use super::{require_id, require_text};
use crate::errors::CoreError;

const NAME_REQUIRED: &str = "Name must be provided.";
const SCIENTIST_REQUIRED: &str = "Scientist must be provided.";
const PLANET_REQUIRED: &str = "Planet must be provided.";

/// A persisted mission: the join between one scientist and one planet,
/// carrying its own name.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct Mission {
    pub id: i64,
    pub name: String,
    pub scientist_id: i64,
    pub planet_id: i64,
}

/// A mission that has not been inserted yet.
///
/// The name is non-empty and both foreign keys are non-zero. Whether they
/// reference existing rows is left to the store's foreign keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMission {
    name: String,
    scientist_id: i64,
    planet_id: i64,
}

impl NewMission {
    /// Validate and build a draft.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for an empty name or a zero id,
    /// checked in field order.
    pub fn new(
        name: impl Into<String>,
        scientist_id: i64,
        planet_id: i64,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        require_text("name", &name, NAME_REQUIRED)?;
        require_id("scientist_id", scientist_id, SCIENTIST_REQUIRED)?;
        require_id("planet_id", planet_id, PLANET_REQUIRED)?;
        Ok(Self {
            name,
            scientist_id,
            planet_id,
        })
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `name` is empty.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), CoreError> {
        let name = name.into();
        require_text("name", &name, NAME_REQUIRED)?;
        self.name = name;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `scientist_id` is zero.
    pub fn set_scientist_id(&mut self, scientist_id: i64) -> Result<(), CoreError> {
        require_id("scientist_id", scientist_id, SCIENTIST_REQUIRED)?;
        self.scientist_id = scientist_id;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `planet_id` is zero.
    pub fn set_planet_id(&mut self, planet_id: i64) -> Result<(), CoreError> {
        require_id("planet_id", planet_id, PLANET_REQUIRED)?;
        self.planet_id = planet_id;
        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn scientist_id(&self) -> i64 {
        self.scientist_id
    }

    #[must_use]
    pub const fn planet_id(&self) -> i64 {
        self.planet_id
    }

    /// Attach the id assigned by storage.
    #[must_use]
    pub fn into_mission(self, id: i64) -> Mission {
        Mission {
            id,
            name: self.name,
            scientist_id: self.scientist_id,
            planet_id: self.planet_id,
        }
    }
}
