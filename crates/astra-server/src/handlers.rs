//! Endpoint handlers.
//!
//! Every failure is converted to `ApiError` here, so clients only ever see
//! the documented 404/422 shapes (or a 500 for storage faults).

use astra_core::CoreError;
use astra_core::entities::NewScientist;
use astra_core::views::{ScientistView, ScientistWithMissionsView};
use astra_db::error::DatabaseError;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `POST /scientists`. Unknown fields are ignored; missing fields
/// are validated like empty ones.
#[derive(Debug, Deserialize)]
pub struct CreateScientistRequest {
    pub name: Option<String>,
    pub field_of_study: Option<String>,
}

pub async fn home() {}

pub async fn list_scientists(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScientistView>>, ApiError> {
    let scientists = state.service.list_scientists().await?;
    Ok(Json(scientists.into_iter().map(ScientistView::from).collect()))
}

pub async fn create_scientist(
    State(state): State<AppState>,
    payload: Result<Json<CreateScientistRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ScientistView>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(%rejection, "rejected scientist payload");
        ApiError::Validation(vec![rejection.body_text()])
    })?;

    let draft = NewScientist::new(
        request.name.unwrap_or_default(),
        request.field_of_study.unwrap_or_default(),
    )
    .inspect_err(|error| tracing::warn!(%error, "invalid scientist"))?;

    let scientist = state.service.create_scientist(draft).await?;
    tracing::info!(id = scientist.id, "scientist created");
    Ok((StatusCode::CREATED, Json(scientist.into())))
}

pub async fn get_scientist(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ScientistWithMissionsView>, ApiError> {
    // A non-numeric id cannot name any row.
    let Ok(id) = raw_id.parse::<i64>() else {
        return Err(scientist_not_found(raw_id));
    };

    let scientist = match state.service.get_scientist(id).await {
        Ok(scientist) => scientist,
        Err(DatabaseError::NoResult) => return Err(scientist_not_found(raw_id)),
        Err(error) => return Err(error.into()),
    };
    let missions = state.service.missions_with_planets(id).await?;

    Ok(Json(ScientistWithMissionsView::new(scientist, missions)))
}

fn scientist_not_found(id: String) -> ApiError {
    CoreError::NotFound {
        entity_type: "Scientist".into(),
        id,
    }
    .into()
}
