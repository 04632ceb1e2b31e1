use schemars::JsonSchema;
use serde::Serialize;

use super::require_text;
use crate::errors::CoreError;

const NAME_REQUIRED: &str = "Name must be provided.";
const FIELD_OF_STUDY_REQUIRED: &str = "Field of Study must be provided.";

/// A persisted scientist. Missions are reached through the store, not held here.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct Scientist {
    pub id: i64,
    pub name: String,
    pub field_of_study: String,
}

/// A scientist that has not been inserted yet.
///
/// Both fields are guaranteed non-empty for the lifetime of the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScientist {
    name: String,
    field_of_study: String,
}

impl NewScientist {
    /// Validate and build a draft.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first empty field
    /// (`name` is checked before `field_of_study`).
    pub fn new(
        name: impl Into<String>,
        field_of_study: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        let field_of_study = field_of_study.into();
        require_text("name", &name, NAME_REQUIRED)?;
        require_text("field_of_study", &field_of_study, FIELD_OF_STUDY_REQUIRED)?;
        Ok(Self {
            name,
            field_of_study,
        })
    }

    /// Replace the name. The draft is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `name` is empty.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), CoreError> {
        let name = name.into();
        require_text("name", &name, NAME_REQUIRED)?;
        self.name = name;
        Ok(())
    }

    /// Replace the field of study. The draft is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `field_of_study` is empty.
    pub fn set_field_of_study(
        &mut self,
        field_of_study: impl Into<String>,
    ) -> Result<(), CoreError> {
        let field_of_study = field_of_study.into();
        require_text("field_of_study", &field_of_study, FIELD_OF_STUDY_REQUIRED)?;
        self.field_of_study = field_of_study;
        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn field_of_study(&self) -> &str {
        &self.field_of_study
    }

    /// Attach the id assigned by storage.
    #[must_use]
    pub fn into_scientist(self, id: i64) -> Scientist {
        Scientist {
            id,
            name: self.name,
            field_of_study: self.field_of_study,
        }
    }
}
