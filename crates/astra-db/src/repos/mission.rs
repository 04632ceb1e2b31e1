//! Mission repository. Missions join one scientist to one planet.

use astra_core::entities::{Mission, NewMission, Planet, Scientist};

use crate::error::DatabaseError;
use crate::helpers::{
    MISSION_COLUMNS, PLANET_COLUMNS, SCIENTIST_COLUMNS, row_to_mission, row_to_planet,
    row_to_scientist,
};
use crate::service::AstraService;

impl AstraService {
    /// Insert a validated mission draft.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the scientist or planet does not
    /// exist (foreign key violation). Nothing is written in that case.
    pub async fn create_mission(&self, draft: NewMission) -> Result<Mission, DatabaseError> {
        let id = self
            .db()
            .insert(
                "INSERT INTO missions (name, scientist_id, planet_id) VALUES (?1, ?2, ?3)",
                libsql::params![draft.name(), draft.scientist_id(), draft.planet_id()],
            )
            .await?;

        tracing::debug!(
            id,
            scientist_id = draft.scientist_id(),
            planet_id = draft.planet_id(),
            "created mission"
        );
        Ok(draft.into_mission(id))
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no mission has this id.
    pub async fn get_mission(&self, id: i64) -> Result<Mission, DatabaseError> {
        let sql = format!("SELECT {MISSION_COLUMNS} FROM missions m WHERE m.id = ?1");
        let conn = self.db().reader().await;
        let mut rows = conn.query(&sql, libsql::params![id]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_mission(&row, 0)
    }

    /// A mission together with its scientist and planet.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no mission has this id.
    pub async fn get_mission_with_parents(
        &self,
        id: i64,
    ) -> Result<(Mission, Scientist, Planet), DatabaseError> {
        let sql = format!(
            "SELECT {MISSION_COLUMNS}, {SCIENTIST_COLUMNS}, {PLANET_COLUMNS}
             FROM missions m
             JOIN scientists s ON s.id = m.scientist_id
             JOIN planets p ON p.id = m.planet_id
             WHERE m.id = ?1"
        );
        let conn = self.db().reader().await;
        let mut rows = conn.query(&sql, libsql::params![id]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok((
            row_to_mission(&row, 0)?,
            row_to_scientist(&row, 4)?,
            row_to_planet(&row, 7)?,
        ))
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_missions(&self) -> Result<Vec<Mission>, DatabaseError> {
        let sql = format!("SELECT {MISSION_COLUMNS} FROM missions m ORDER BY m.id");
        let conn = self.db().reader().await;
        let mut rows = conn.query(&sql, ()).await?;

        let mut missions = Vec::new();
        while let Some(row) = rows.next().await? {
            missions.push(row_to_mission(&row, 0)?);
        }
        Ok(missions)
    }
}
