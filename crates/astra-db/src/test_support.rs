//! Shared test utilities for astra-db unit tests.

use astra_core::entities::{NewMission, NewPlanet, NewScientist, Planet, Scientist};

use crate::service::AstraService;

/// Create an in-memory service.
pub async fn test_service() -> AstraService {
    AstraService::new_local(":memory:").await.unwrap()
}

pub async fn seed_scientist(svc: &AstraService, name: &str, field: &str) -> Scientist {
    svc.create_scientist(NewScientist::new(name, field).unwrap())
        .await
        .unwrap()
}

pub async fn seed_planet(svc: &AstraService, name: &str, distance: i64, star: &str) -> Planet {
    svc.create_planet(NewPlanet::new(name, distance, star))
        .await
        .unwrap()
}

pub async fn seed_mission(svc: &AstraService, name: &str, scientist_id: i64, planet_id: i64) {
    svc.create_mission(NewMission::new(name, scientist_id, planet_id).unwrap())
        .await
        .unwrap();
}
