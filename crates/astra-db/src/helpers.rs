//! Row-to-entity parsing helpers.
//!
//! `libsql::Row` is column-indexed. Nullable columns must be read as
//! `Option<T>`: `row.get::<String>(idx)` on a NULL column is an error, not `""`.

use astra_core::entities::{Mission, Planet, Scientist};

use crate::error::DatabaseError;

/// Column list matching [`row_to_scientist`], for a table aliased `s`.
pub const SCIENTIST_COLUMNS: &str = "s.id, s.name, s.field_of_study";

/// Column list matching [`row_to_planet`], for a table aliased `p`.
pub const PLANET_COLUMNS: &str = "p.id, p.name, p.distance_from_earth, p.nearest_star";

/// Column list matching [`row_to_mission`], for a table aliased `m`.
pub const MISSION_COLUMNS: &str = "m.id, m.name, m.scientist_id, m.planet_id";

/// Read a nullable TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    Ok(row.get::<Option<String>>(idx)?)
}

/// Read a nullable INTEGER column.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_i64(row: &libsql::Row, idx: i32) -> Result<Option<i64>, DatabaseError> {
    Ok(row.get::<Option<i64>>(idx)?)
}

/// Parse a scientist starting at column `offset`.
///
/// # Errors
///
/// Returns `DatabaseError` if a column is missing or has the wrong type.
pub fn row_to_scientist(row: &libsql::Row, offset: i32) -> Result<Scientist, DatabaseError> {
    Ok(Scientist {
        id: row.get::<i64>(offset)?,
        name: row.get::<String>(offset + 1)?,
        field_of_study: row.get::<String>(offset + 2)?,
    })
}

/// Parse a planet starting at column `offset`.
///
/// # Errors
///
/// Returns `DatabaseError` if a column is missing or has the wrong type.
pub fn row_to_planet(row: &libsql::Row, offset: i32) -> Result<Planet, DatabaseError> {
    Ok(Planet {
        id: row.get::<i64>(offset)?,
        name: get_opt_string(row, offset + 1)?,
        distance_from_earth: get_opt_i64(row, offset + 2)?,
        nearest_star: get_opt_string(row, offset + 3)?,
    })
}

/// Parse a mission starting at column `offset`.
///
/// # Errors
///
/// Returns `DatabaseError` if a column is missing or has the wrong type.
pub fn row_to_mission(row: &libsql::Row, offset: i32) -> Result<Mission, DatabaseError> {
    Ok(Mission {
        id: row.get::<i64>(offset)?,
        name: row.get::<String>(offset + 1)?,
        scientist_id: row.get::<i64>(offset + 2)?,
        planet_id: row.get::<i64>(offset + 3)?,
    })
}
