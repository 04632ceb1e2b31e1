//! Router tests: every endpoint driven through `tower::ServiceExt::oneshot`
//! against an in-memory database.

use astra_core::entities::{NewMission, NewPlanet, NewScientist};
use astra_db::service::AstraService;
use astra_server::{AppState, create_router};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt; // for oneshot

async fn test_app() -> (Router, AppState) {
    let service = AstraService::new_local(":memory:").await.unwrap();
    let state = AppState::new(service);
    (create_router(state.clone()), state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    (status, body.to_vec())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).expect("Failed to parse JSON"))
}

fn parse(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).expect("Failed to parse JSON")
}

async fn scientist_count(app: &Router) -> usize {
    let (_, body) = get(app, "/scientists").await;
    parse(&body).as_array().unwrap().len()
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_is_empty_ok() {
    let (app, _) = test_app().await;
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

// ---------------------------------------------------------------------------
// GET /scientists
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_scientists_empty() {
    let (app, _) = test_app().await;
    let (status, body) = get(&app, "/scientists").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body), json!([]));
}

#[tokio::test]
async fn list_scientists_uses_default_shape() {
    let (app, state) = test_app().await;
    let scientist = state
        .service
        .create_scientist(NewScientist::new("Vera Rubin", "Astronomy").unwrap())
        .await
        .unwrap();
    let planet = state
        .service
        .create_planet(NewPlanet::new("Andromeda IV", 2_500_000, "Alpheratz"))
        .await
        .unwrap();
    state
        .service
        .create_mission(NewMission::new("Rotation Curves", scientist.id, planet.id).unwrap())
        .await
        .unwrap();

    let (_, body) = get(&app, "/scientists").await;
    assert_eq!(
        String::from_utf8(body).unwrap(),
        format!(
            r#"[{{"id":{},"name":"Vera Rubin","field_of_study":"Astronomy"}}]"#,
            scientist.id
        )
    );
}

// ---------------------------------------------------------------------------
// POST /scientists
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_scientist_returns_201_and_is_listed() {
    let (app, _) = test_app().await;

    let (status, created) = post_json(
        &app,
        "/scientists",
        r#"{"name": "Mae Jemison", "field_of_study": "Astronautics", "extra": true}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Mae Jemison");
    assert_eq!(created["field_of_study"], "Astronautics");
    assert!(created["id"].as_i64().unwrap() > 0);
    assert!(created.get("extra").is_none());
    assert!(created.get("missions").is_none());

    let (_, second) = post_json(
        &app,
        "/scientists",
        r#"{"name": "Carl Sagan", "field_of_study": "Astronomy"}"#,
    )
    .await;
    assert_ne!(second["id"], created["id"]);

    let (_, body) = get(&app, "/scientists").await;
    assert_eq!(parse(&body), json!([created, second]));
}

#[rstest]
#[case::empty_name(r#"{"name": "", "field_of_study": "Astronomy"}"#, "Name must be provided.")]
#[case::empty_field(
    r#"{"name": "Carl Sagan", "field_of_study": ""}"#,
    "Field of Study must be provided."
)]
#[case::missing_name(r#"{"field_of_study": "Astronomy"}"#, "Name must be provided.")]
#[case::missing_field(r#"{"name": "Carl Sagan"}"#, "Field of Study must be provided.")]
#[case::null_name(r#"{"name": null, "field_of_study": "Astronomy"}"#, "Name must be provided.")]
#[case::empty_object("{}", "Name must be provided.")]
#[tokio::test]
async fn create_scientist_validation_errors(#[case] body: &str, #[case] message: &str) {
    let (app, _) = test_app().await;

    let (status, response) = post_json(&app, "/scientists", body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response, json!({ "errors": [message] }));
    assert_eq!(scientist_count(&app).await, 0);
}

#[rstest]
#[case::not_json("name=Carl")]
#[case::wrong_type(r#"{"name": 42, "field_of_study": "Astronomy"}"#)]
#[case::array("[]")]
#[tokio::test]
async fn create_scientist_malformed_body_is_422(#[case] body: &str) {
    let (app, _) = test_app().await;

    let (status, response) = post_json(&app, "/scientists", body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = response["errors"].as_array().expect("errors array");
    assert!(!errors.is_empty());
    assert_eq!(scientist_count(&app).await, 0);
}

#[tokio::test]
async fn create_scientist_without_content_type_is_422() {
    let (app, _) = test_app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/scientists")
        .body(Body::from(r#"{"name": "Carl Sagan", "field_of_study": "Astronomy"}"#))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(parse(&body)["errors"].is_array());
    assert_eq!(scientist_count(&app).await, 0);
}

// ---------------------------------------------------------------------------
// GET /scientists/:id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_scientist_not_found() {
    let (app, _) = test_app().await;
    let (status, body) = get(&app, "/scientists/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        r#"{"error":"Scientist not found"}"#
    );
}

#[rstest]
#[case::word("abc")]
#[case::decimal("1.5")]
#[case::overflow("99999999999999999999")]
#[tokio::test]
async fn get_scientist_non_integer_id_is_not_found(#[case] id: &str) {
    let (app, _) = test_app().await;
    let (status, body) = get(&app, &format!("/scientists/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse(&body), json!({ "error": "Scientist not found" }));
}

#[tokio::test]
async fn get_scientist_without_missions() {
    let (app, state) = test_app().await;
    let scientist = state
        .service
        .create_scientist(NewScientist::new("Jill Tarter", "SETI").unwrap())
        .await
        .unwrap();

    let (status, body) = get(&app, &format!("/scientists/{}", scientist.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        parse(&body),
        json!({
            "id": scientist.id,
            "name": "Jill Tarter",
            "field_of_study": "SETI",
            "missions": [],
        })
    );
}

#[tokio::test]
async fn get_scientist_nests_missions_and_planets() {
    let (app, state) = test_app().await;
    let svc = &state.service;
    let sagan = svc
        .create_scientist(NewScientist::new("Carl Sagan", "Astronomy").unwrap())
        .await
        .unwrap();
    let other = svc
        .create_scientist(NewScientist::new("Vera Rubin", "Astronomy").unwrap())
        .await
        .unwrap();
    let mars = svc
        .create_planet(NewPlanet::new("Mars", 225, "Sun"))
        .await
        .unwrap();
    let titan = svc
        .create_planet(NewPlanet::new("Titan", 1_400, "Sun"))
        .await
        .unwrap();
    let viking = svc
        .create_mission(NewMission::new("Viking", sagan.id, mars.id).unwrap())
        .await
        .unwrap();
    svc.create_mission(NewMission::new("Cassini", sagan.id, titan.id).unwrap())
        .await
        .unwrap();
    svc.create_mission(NewMission::new("Elsewhere", other.id, mars.id).unwrap())
        .await
        .unwrap();

    let (status, body) = get(&app, &format!("/scientists/{}", sagan.id)).await;
    assert_eq!(status, StatusCode::OK);

    let detail = parse(&body);
    let missions = detail["missions"].as_array().unwrap();
    assert_eq!(missions.len(), 2);
    for mission in missions {
        assert!(mission["planet"].is_object());
        assert!(mission.get("scientist").is_none());
        assert_eq!(mission["scientist_id"], sagan.id);
    }
    assert_eq!(
        missions[0],
        json!({
            "id": viking.id,
            "name": "Viking",
            "scientist_id": sagan.id,
            "planet_id": mars.id,
            "planet": {
                "id": mars.id,
                "name": "Mars",
                "distance_from_earth": 225,
                "nearest_star": "Sun",
            },
        })
    );
    assert_eq!(missions[1]["planet"]["name"], "Titan");
}

#[tokio::test]
async fn get_scientist_is_idempotent() {
    let (app, state) = test_app().await;
    let scientist = state
        .service
        .create_scientist(NewScientist::new("Carl Sagan", "Astronomy").unwrap())
        .await
        .unwrap();
    let planet = state
        .service
        .create_planet(NewPlanet::new("Venus", 261, "Sun"))
        .await
        .unwrap();
    state
        .service
        .create_mission(NewMission::new("Venera", scientist.id, planet.id).unwrap())
        .await
        .unwrap();

    let uri = format!("/scientists/{}", scientist.id);
    let (_, first) = get(&app, &uri).await;
    let (_, second) = get(&app, &uri).await;
    assert_eq!(first, second);
}
