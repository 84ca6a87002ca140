// src/db/memory.rs
// DOCUMENTATION: In-memory place store
// PURPOSE: PlaceStore backend for tests and local runs without PostgreSQL

use crate::db::PlaceStore;
use crate::errors::PlacesError;
use crate::models::Place;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

struct Rows {
    places: BTreeMap<i32, Place>,
    next_id: i32,
}

impl Rows {
    fn allocate_id(&mut self) -> Result<i32, PlacesError> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or_else(|| {
            log::error!("Place id space exhausted");
            PlacesError::InternalError
        })?;
        Ok(id)
    }
}

/// Thread-safe map of places keyed by id
/// DOCUMENTATION: Ids start at 1 and are never reused, like an identity column
pub struct InMemoryPlaceStore {
    rows: RwLock<Rows>,
}

impl InMemoryPlaceStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Rows {
                places: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPlaceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaceStore for InMemoryPlaceStore {
    async fn save(&self, place: Place) -> Result<Place, PlacesError> {
        let mut place = place.normalized()?;
        let mut rows = self.rows.write().await;

        let id = match place.id {
            Some(id) if rows.places.contains_key(&id) => id,
            _ => rows.allocate_id()?,
        };
        place.id = Some(id);

        rows.places.insert(id, place.clone());
        log::debug!("Saved place {} in memory", id);
        Ok(place)
    }

    async fn find_all(&self) -> Result<Vec<Place>, PlacesError> {
        let rows = self.rows.read().await;
        Ok(rows.places.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Place>, PlacesError> {
        let rows = self.rows.read().await;
        Ok(rows.places.get(&id).cloned())
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Place>, PlacesError> {
        let rows = self.rows.read().await;
        Ok(rows
            .places
            .values()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), PlacesError> {
        let mut rows = self.rows.write().await;
        rows.places.remove(&id);
        Ok(())
    }
}
