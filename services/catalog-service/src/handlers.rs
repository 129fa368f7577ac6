use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use common::{CatalogError, GameRecord, GameSummary};

use crate::error::ApiError;
use crate::query::SearchFilters;
use crate::service::CatalogService;
use crate::types::{Ack, CreateGameRequest, UpdateGameRequest};

pub async fn list_games(
    State(service): State<CatalogService>,
) -> Result<Json<Vec<GameRecord>>, ApiError> {
    Ok(Json(service.list_games().await?))
}

pub async fn create_game(
    State(service): State<CatalogService>,
    Json(request): Json<CreateGameRequest>,
) -> Result<(StatusCode, Json<GameRecord>), ApiError> {
    let game = service.create_game(request).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

pub async fn get_game(
    State(service): State<CatalogService>,
    Path(id): Path<String>,
) -> Result<Json<GameRecord>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(service.get_game(id).await?))
}

pub async fn update_game(
    State(service): State<CatalogService>,
    Path(id): Path<String>,
    Json(request): Json<UpdateGameRequest>,
) -> Result<Json<Ack>, ApiError> {
    let id = parse_id(&id)?;
    service.update_game(id, request).await?;
    Ok(Json(Ack { message: "game updated".to_string() }))
}

pub async fn delete_game(
    State(service): State<CatalogService>,
    Path(id): Path<String>,
) -> Result<Json<Ack>, ApiError> {
    let id = parse_id(&id)?;
    service.delete_game(id).await?;
    Ok(Json(Ack { message: "game deleted".to_string() }))
}

pub async fn search_games(
    State(service): State<CatalogService>,
    Query(filters): Query<SearchFilters>,
) -> Result<Json<Vec<GameRecord>>, ApiError> {
    Ok(Json(service.search_games(filters).await?))
}

pub async fn latest_games(
    State(service): State<CatalogService>,
) -> Result<Json<Vec<GameSummary>>, ApiError> {
    Ok(Json(service.latest_available().await?))
}

// A malformed id can never name a record.
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError(CatalogError::NotFound(format!("game {}", raw))))
}
