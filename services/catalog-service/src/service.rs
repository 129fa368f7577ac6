use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use common::{CatalogError, GameRecord, GameSummary};

use crate::db::GameStore;
use crate::query::{self, SearchFilters};
use crate::types::{CreateGameRequest, UpdateGameRequest};
use crate::validation;

/// The catalog's boundary operations, bound to an explicitly passed-in
/// store handle. Validation always runs before a write reaches the
/// store; a failing record is never partially applied.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn GameStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        CatalogService { store }
    }

    pub async fn create_game(&self, req: CreateGameRequest) -> Result<GameRecord, CatalogError> {
        validation::validate_create(&req)?;
        let release_date = req
            .release_date
            .ok_or_else(|| CatalogError::validation("releaseDate", "a release date is required"))?;
        let requirements = req.requirements.ok_or_else(|| {
            CatalogError::validation("requirements", "system requirements are required")
        })?;

        let now = Utc::now();
        let game = GameRecord {
            id: Uuid::new_v4(),
            title: req.title.trim().to_string(),
            description: req.description,
            platforms: req.platforms,
            genres: req.genres,
            platform_prices: req.platform_prices,
            discount: req.discount,
            rating: req.rating,
            stock: req.stock as u32,
            is_available: req.is_available,
            image: req.image,
            images: req.images,
            trailer: req.trailer,
            developer: req.developer,
            publisher: req.publisher,
            release_date,
            requirements,
            created_at: now,
            updated_at: now,
        };

        let game = self.store.insert(game).await?;
        tracing::info!(id = %game.id, title = %game.title, "game created");
        Ok(game)
    }

    pub async fn get_game(&self, id: Uuid) -> Result<GameRecord, CatalogError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("game {}", id)))
    }

    /// Merge the partial payload over the stored record, re-validate the
    /// merged document and replace it in one write. A missing record is
    /// a `NotFound`, reported before any validation outcome.
    pub async fn update_game(&self, id: Uuid, req: UpdateGameRequest) -> Result<(), CatalogError> {
        let mut merged = self.get_game(id).await?;

        if let Some(title) = req.title {
            merged.title = title.trim().to_string();
        }
        if let Some(description) = req.description {
            merged.description = description;
        }
        if let Some(developer) = req.developer {
            merged.developer = developer;
        }
        if let Some(publisher) = req.publisher {
            merged.publisher = publisher;
        }
        if let Some(release_date) = req.release_date {
            merged.release_date = release_date;
        }
        if let Some(platforms) = req.platforms {
            merged.platforms = platforms;
        }
        if let Some(genres) = req.genres {
            merged.genres = genres;
        }
        if let Some(platform_prices) = req.platform_prices {
            merged.platform_prices = platform_prices;
        }
        if let Some(discount) = req.discount {
            merged.discount = discount;
        }
        if let Some(rating) = req.rating {
            merged.rating = rating;
        }
        if let Some(stock) = req.stock {
            validation::validate_stock(stock)?;
            merged.stock = stock as u32;
        }
        if let Some(is_available) = req.is_available {
            merged.is_available = is_available;
        }
        if let Some(image) = req.image {
            merged.image = Some(image);
        }
        if let Some(images) = req.images {
            merged.images = images;
        }
        if let Some(trailer) = req.trailer {
            merged.trailer = Some(trailer);
        }
        if let Some(requirements) = req.requirements {
            merged.requirements = requirements;
        }

        validation::validate_record(&merged)?;
        merged.updated_at = Utc::now();
        self.store.replace(merged).await?;
        tracing::info!(%id, "game updated");
        Ok(())
    }

    pub async fn delete_game(&self, id: Uuid) -> Result<(), CatalogError> {
        self.store.delete(id).await?;
        tracing::info!(%id, "game deleted");
        Ok(())
    }

    pub async fn list_games(&self) -> Result<Vec<GameRecord>, CatalogError> {
        self.store.all().await
    }

    pub async fn search_games(&self, filters: SearchFilters) -> Result<Vec<GameRecord>, CatalogError> {
        Ok(query::resolve(self.store.all().await?, &filters))
    }

    /// Available records, newest creation first, projected to the
    /// summary shape. Zero qualifying records is a `NotFound`, never an
    /// empty success.
    pub async fn latest_available(&self) -> Result<Vec<GameSummary>, CatalogError> {
        let mut games: Vec<GameRecord> = self
            .store
            .all()
            .await?
            .into_iter()
            .filter(|g| g.is_available)
            .collect();
        if games.is_empty() {
            return Err(CatalogError::NotFound("no available games".to_string()));
        }
        games.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(games.iter().map(GameSummary::from).collect())
    }
}
