use axum::{
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;

use crate::handlers::{
    create_game, delete_game, get_game, latest_games, list_games, search_games, update_game,
};
use crate::service::CatalogService;

pub fn create_routes(service: CatalogService) -> Router {
    Router::new()
        .route("/api/games", get(list_games).post(create_game))
        .route("/api/games/latest", get(latest_games))
        .route("/api/games/search", get(search_games))
        .route("/api/games/{id}", get(get_game).put(update_game).delete(delete_game))
        .layer(CorsLayer::permissive())
        .with_state(service)
}
