//! # Routes
//!
//! The snack CRUD surface plus liveness probe. Missing records surface as
//! a 404 with a structured error body.

use std::sync::Arc;

use axum::{
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    error::AppError,
    snacks::{Snack, SnackInput},
    state::State,
};

pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "SnackyNerds Backend is running 🍿"
    }))
}

pub async fn root_handler() -> impl IntoResponse {
    "🍿 SnackyNerds Backend - Grab some snacks!"
}

pub async fn list_snacks_handler(AxumState(state): AxumState<Arc<State>>) -> Json<Vec<Snack>> {
    Json(state.snacks.list().await)
}

pub async fn get_snack_handler(
    AxumState(state): AxumState<Arc<State>>,
    Path(id): Path<u32>,
) -> Result<Json<Snack>, AppError> {
    state
        .snacks
        .get(id)
        .await
        .map(Json)
        .ok_or(AppError::SnackNotFound)
}

pub async fn create_snack_handler(
    AxumState(state): AxumState<Arc<State>>,
    Json(input): Json<SnackInput>,
) -> impl IntoResponse {
    let snack = state.snacks.create(input).await;

    (StatusCode::CREATED, Json(snack))
}

pub async fn update_snack_handler(
    AxumState(state): AxumState<Arc<State>>,
    Path(id): Path<u32>,
    Json(input): Json<SnackInput>,
) -> Result<Json<Snack>, AppError> {
    state
        .snacks
        .update(id, input)
        .await
        .map(Json)
        .ok_or(AppError::SnackNotFound)
}

pub async fn delete_snack_handler(
    AxumState(state): AxumState<Arc<State>>,
    Path(id): Path<u32>,
) -> Result<Json<serde_json::Value>, AppError> {
    if state.snacks.delete(id).await {
        Ok(Json(json!({ "message": "Snack deleted" })))
    } else {
        Err(AppError::SnackNotFound)
    }
}
