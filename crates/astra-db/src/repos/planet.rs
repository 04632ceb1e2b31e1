//! Planet repository. Not exposed over HTTP; used for seeding and traversal.

use astra_core::entities::{Mission, NewPlanet, Planet, Scientist};

use crate::error::DatabaseError;
use crate::helpers::{
    MISSION_COLUMNS, PLANET_COLUMNS, SCIENTIST_COLUMNS, row_to_mission, row_to_planet,
    row_to_scientist,
};
use crate::service::AstraService;

impl AstraService {
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails.
    pub async fn create_planet(&self, draft: NewPlanet) -> Result<Planet, DatabaseError> {
        let id = self
            .db()
            .insert(
                "INSERT INTO planets (name, distance_from_earth, nearest_star) VALUES (?1, ?2, ?3)",
                libsql::params![
                    draft.name.as_deref(),
                    draft.distance_from_earth,
                    draft.nearest_star.as_deref()
                ],
            )
            .await?;

        tracing::debug!(id, "created planet");
        Ok(draft.into_planet(id))
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no planet has this id.
    pub async fn get_planet(&self, id: i64) -> Result<Planet, DatabaseError> {
        let sql = format!("SELECT {PLANET_COLUMNS} FROM planets p WHERE p.id = ?1");
        let conn = self.db().reader().await;
        let mut rows = conn.query(&sql, libsql::params![id]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_planet(&row, 0)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_planets(&self) -> Result<Vec<Planet>, DatabaseError> {
        let sql = format!("SELECT {PLANET_COLUMNS} FROM planets p ORDER BY p.id");
        let conn = self.db().reader().await;
        let mut rows = conn.query(&sql, ()).await?;

        let mut planets = Vec::new();
        while let Some(row) = rows.next().await? {
            planets.push(row_to_planet(&row, 0)?);
        }
        Ok(planets)
    }

    /// The planet's missions, each paired with its scientist, in mission order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn missions_with_scientists(
        &self,
        planet_id: i64,
    ) -> Result<Vec<(Mission, Scientist)>, DatabaseError> {
        let sql = format!(
            "SELECT {MISSION_COLUMNS}, {SCIENTIST_COLUMNS}
             FROM missions m
             JOIN scientists s ON s.id = m.scientist_id
             WHERE m.planet_id = ?1
             ORDER BY m.id"
        );
        let conn = self.db().reader().await;
        let mut rows = conn.query(&sql, libsql::params![planet_id]).await?;

        let mut missions = Vec::new();
        while let Some(row) = rows.next().await? {
            missions.push((row_to_mission(&row, 0)?, row_to_scientist(&row, 4)?));
        }
        Ok(missions)
    }

    /// Scientists who reach this planet through missions, one per mission.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn scientists_for_planet(
        &self,
        planet_id: i64,
    ) -> Result<Vec<Scientist>, DatabaseError> {
        Ok(self
            .missions_with_scientists(planet_id)
            .await?
            .into_iter()
            .map(|(_, scientist)| scientist)
            .collect())
    }
}
