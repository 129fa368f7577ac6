use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use common::{CatalogError, GameRecord};

/// The document store the catalog runs against. Every write is a single
/// atomic document operation; title uniqueness is the store's invariant,
/// the way a unique index on the title field would enforce it.
#[async_trait]
pub trait GameStore: Send + Sync {
    async fn insert(&self, game: GameRecord) -> Result<GameRecord, CatalogError>;
    async fn get(&self, id: Uuid) -> Result<Option<GameRecord>, CatalogError>;
    async fn all(&self) -> Result<Vec<GameRecord>, CatalogError>;
    /// Replace the record with the same id. `NotFound` if the id has no
    /// record, `Conflict` if another record holds the new title.
    async fn replace(&self, game: GameRecord) -> Result<(), CatalogError>;
    async fn delete(&self, id: Uuid) -> Result<(), CatalogError>;
}

/// In-memory store, insertion-ordered like a collection scan.
#[derive(Default)]
pub struct MemoryStore {
    games: RwLock<Vec<GameRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<GameRecord>>, CatalogError> {
        self.games
            .read()
            .map_err(|_| CatalogError::Store("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<GameRecord>>, CatalogError> {
        self.games
            .write()
            .map_err(|_| CatalogError::Store("store lock poisoned".to_string()))
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn insert(&self, game: GameRecord) -> Result<GameRecord, CatalogError> {
        let mut games = self.write()?;
        if games.iter().any(|g| g.title == game.title) {
            return Err(CatalogError::Conflict(game.title));
        }
        games.push(game.clone());
        Ok(game)
    }

    async fn get(&self, id: Uuid) -> Result<Option<GameRecord>, CatalogError> {
        Ok(self.read()?.iter().find(|g| g.id == id).cloned())
    }

    async fn all(&self) -> Result<Vec<GameRecord>, CatalogError> {
        Ok(self.read()?.clone())
    }

    async fn replace(&self, game: GameRecord) -> Result<(), CatalogError> {
        let mut games = self.write()?;
        if games.iter().any(|g| g.id != game.id && g.title == game.title) {
            return Err(CatalogError::Conflict(game.title));
        }
        match games.iter_mut().find(|g| g.id == game.id) {
            Some(slot) => {
                *slot = game;
                Ok(())
            }
            None => Err(CatalogError::NotFound(format!("game {}", game.id))),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), CatalogError> {
        let mut games = self.write()?;
        let before = games.len();
        games.retain(|g| g.id != id);
        if games.len() == before {
            return Err(CatalogError::NotFound(format!("game {}", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use common::{Platform, PricePair, Requirements};
    use std::collections::BTreeMap;

    fn game(title: &str) -> GameRecord {
        GameRecord {
            id: Uuid::new_v4(),
            title: title.into(),
            description: "desc".into(),
            platforms: vec![Platform::Pc],
            genres: vec!["rpg".into()],
            platform_prices: BTreeMap::from([(
                Platform::Pc,
                PricePair { standard: 30.0, premium: 50.0 },
            )]),
            discount: 0.0,
            rating: 0.0,
            stock: 1,
            is_available: true,
            image: None,
            images: vec![],
            trailer: None,
            developer: "Dev".into(),
            publisher: "Pub".into(),
            release_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            requirements: Requirements::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn duplicate_title_on_insert_is_a_conflict() {
        let store = MemoryStore::new();
        store.insert(game("Hades")).await.unwrap();
        let err = store.insert(game("Hades")).await.unwrap_err();
        assert!(matches!(err, CatalogError::Conflict(_)));
    }

    #[tokio::test]
    async fn replace_missing_record_is_not_found() {
        let store = MemoryStore::new();
        let err = store.replace(game("Ghost")).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn replace_cannot_steal_another_records_title() {
        let store = MemoryStore::new();
        store.insert(game("Hades")).await.unwrap();
        let other = store.insert(game("Celeste")).await.unwrap();

        let mut renamed = other.clone();
        renamed.title = "Hades".into();
        let err = store.replace(renamed).await.unwrap_err();
        assert!(matches!(err, CatalogError::Conflict(_)));
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let store = MemoryStore::new();
        let kept = store.insert(game("Hades")).await.unwrap();
        let gone = store.insert(game("Celeste")).await.unwrap();

        store.delete(gone.id).await.unwrap();
        assert!(store.get(gone.id).await.unwrap().is_none());
        assert!(store.get(kept.id).await.unwrap().is_some());

        let err = store.delete(gone.id).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }
}
