//! Entity structs for the Astra domain objects, plus their unsaved drafts.
//!
//! Each entity maps to a table in the libSQL database (`scientists`,
//! `planets`, `missions`). Drafts (`NewScientist`, `NewPlanet`, `NewMission`)
//! hold the caller-supplied fields before storage assigns an id; their setters
//! run validation before the field is touched.

mod mission;
mod planet;
mod scientist;

pub use mission::{Mission, NewMission};
pub use planet::{NewPlanet, Planet};
pub use scientist::{NewScientist, Scientist};

use crate::errors::CoreError;

/// Reject empty text. Whitespace counts as content.
fn require_text(field: &'static str, value: &str, message: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::validation(field, message));
    }
    Ok(())
}

/// Reject a zero (unset) foreign key.
fn require_id(field: &'static str, value: i64, message: &str) -> Result<(), CoreError> {
    if value == 0 {
        return Err(CoreError::validation(field, message));
    }
    Ok(())
}
