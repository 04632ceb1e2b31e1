//! Scientist repository: create, list, get, and traversal to missions/planets.

use astra_core::entities::{Mission, NewScientist, Planet, Scientist};

use crate::error::DatabaseError;
use crate::helpers::{
    MISSION_COLUMNS, PLANET_COLUMNS, SCIENTIST_COLUMNS, row_to_mission, row_to_planet,
    row_to_scientist,
};
use crate::service::AstraService;

impl AstraService {
    /// Insert a validated scientist draft and return it with its new id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails. Nothing is written in
    /// that case.
    pub async fn create_scientist(&self, draft: NewScientist) -> Result<Scientist, DatabaseError> {
        let id = self
            .db()
            .insert(
                "INSERT INTO scientists (name, field_of_study) VALUES (?1, ?2)",
                libsql::params![draft.name(), draft.field_of_study()],
            )
            .await?;

        tracing::debug!(id, name = draft.name(), "created scientist");
        Ok(draft.into_scientist(id))
    }

    /// All scientists in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_scientists(&self) -> Result<Vec<Scientist>, DatabaseError> {
        let sql = format!("SELECT {SCIENTIST_COLUMNS} FROM scientists s ORDER BY s.id");
        let conn = self.db().reader().await;
        let mut rows = conn.query(&sql, ()).await?;

        let mut scientists = Vec::new();
        while let Some(row) = rows.next().await? {
            scientists.push(row_to_scientist(&row, 0)?);
        }
        Ok(scientists)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no scientist has this id.
    pub async fn get_scientist(&self, id: i64) -> Result<Scientist, DatabaseError> {
        let sql = format!("SELECT {SCIENTIST_COLUMNS} FROM scientists s WHERE s.id = ?1");
        let conn = self.db().reader().await;
        let mut rows = conn.query(&sql, libsql::params![id]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_scientist(&row, 0)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_scientists(&self) -> Result<i64, DatabaseError> {
        let conn = self.db().reader().await;
        let mut rows = conn.query("SELECT COUNT(*) FROM scientists", ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }

    /// The scientist's missions, each paired with its planet, in mission order.
    ///
    /// Returns an empty list for an unknown scientist id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn missions_with_planets(
        &self,
        scientist_id: i64,
    ) -> Result<Vec<(Mission, Planet)>, DatabaseError> {
        let sql = format!(
            "SELECT {MISSION_COLUMNS}, {PLANET_COLUMNS}
             FROM missions m
             JOIN planets p ON p.id = m.planet_id
             WHERE m.scientist_id = ?1
             ORDER BY m.id"
        );
        let conn = self.db().reader().await;
        let mut rows = conn.query(&sql, libsql::params![scientist_id]).await?;

        let mut missions = Vec::new();
        while let Some(row) = rows.next().await? {
            missions.push((row_to_mission(&row, 0)?, row_to_planet(&row, 4)?));
        }
        Ok(missions)
    }

    /// Planets the scientist reaches through missions, one per mission.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn planets_for_scientist(
        &self,
        scientist_id: i64,
    ) -> Result<Vec<Planet>, DatabaseError> {
        Ok(self
            .missions_with_planets(scientist_id)
            .await?
            .into_iter()
            .map(|(_, planet)| planet)
            .collect())
    }
}
