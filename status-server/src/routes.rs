use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use status_core::{Incident, Service, StatusStore, StoreError};
use std::sync::MutexGuard;

#[derive(Debug, Deserialize)]
pub struct ServicePayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct IncidentPayload {
    pub service_id: String,
    pub title: String,
    pub description: String,
    pub status: String,
}

type ApiError = (StatusCode, Json<serde_json::Value>);

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/services", get(list_services).post(create_service))
        .route("/services/:id", get(get_service).put(update_service))
        .route("/incidents", get(list_incidents).post(create_incident))
        .route("/incidents/:id", get(get_incident))
        .with_state(state)
}

async fn list_services(State(state): State<AppState>) -> Result<Json<Vec<Service>>, ApiError> {
    let store = lock(&state)?;
    Ok(Json(store.services.list()))
}

async fn create_service(
    State(state): State<AppState>,
    Json(payload): Json<ServicePayload>,
) -> Result<(StatusCode, Json<Service>), ApiError> {
    let mut store = lock(&state)?;
    let service = store
        .services
        .create(payload.name, payload.description, payload.status)
        .map_err(reject)?;

    tracing::info!(id = %service.id, name = %service.name, "service created");
    Ok((StatusCode::CREATED, Json(service)))
}

async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Service>, ApiError> {
    let store = lock(&state)?;
    let service = store.services.get(&id).map_err(reject)?;
    Ok(Json(service.clone()))
}

async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ServicePayload>,
) -> Result<Json<Service>, ApiError> {
    let mut store = lock(&state)?;
    let service = store
        .services
        .update(&id, payload.name, payload.description, payload.status)
        .map_err(reject)?;

    tracing::info!(id = %service.id, status = %service.status, "service updated");
    Ok(Json(service))
}

async fn list_incidents(State(state): State<AppState>) -> Result<Json<Vec<Incident>>, ApiError> {
    let store = lock(&state)?;
    Ok(Json(store.incidents.list()))
}

async fn create_incident(
    State(state): State<AppState>,
    Json(payload): Json<IncidentPayload>,
) -> Result<Json<Incident>, ApiError> {
    let mut guard = lock(&state)?;
    let store = &mut *guard;
    let incident = store
        .incidents
        .create(
            &mut store.services,
            payload.service_id,
            payload.title,
            payload.description,
            payload.status,
        )
        .map_err(reject)?;

    tracing::info!(
        id = %incident.id,
        service_id = %incident.service_id,
        status = %incident.status,
        "incident created"
    );
    Ok(Json(incident))
}

async fn get_incident(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Incident>, ApiError> {
    let store = lock(&state)?;
    let incident = store.incidents.get(&id).map_err(reject)?;
    Ok(Json(incident.clone()))
}

fn lock(state: &AppState) -> Result<MutexGuard<'_, StatusStore>, ApiError> {
    state.store.lock().map_err(|_| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "detail": "store lock poisoned" })),
        )
    })
}

fn reject(err: StoreError) -> ApiError {
    let code = match err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::Conflict(_) => StatusCode::BAD_REQUEST,
    };
    (code, Json(serde_json::json!({ "detail": err.to_string() })))
}
