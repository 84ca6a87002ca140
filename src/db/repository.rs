// src/db/repository.rs
// DOCUMENTATION: Database access layer - all SQL queries
// PURPOSE: Abstract database operations from business logic

use crate::errors::PlacesError;
use crate::models::Place;
use async_trait::async_trait;
use sqlx::PgPool;

/// Persistence contract for places
/// DOCUMENTATION: The store alone assigns identifiers and owns durability.
/// Each call is atomic on its own; nothing spans several calls.
#[async_trait]
pub trait PlaceStore: Send + Sync {
    /// Insert when `place.id` is None, otherwise overwrite the row with that id.
    /// Returns the persisted record with its id populated.
    async fn save(&self, place: Place) -> Result<Place, PlacesError>;

    /// All places, ordered by id
    async fn find_all(&self) -> Result<Vec<Place>, PlacesError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Place>, PlacesError>;

    /// Exact, case-sensitive match on category, ordered by id
    async fn find_by_category(&self, category: &str) -> Result<Vec<Place>, PlacesError>;

    /// Remove the row; absent ids are not an error
    async fn delete_by_id(&self, id: i32) -> Result<(), PlacesError>;
}

/// PlaceRepository: PostgreSQL implementation of PlaceStore
/// DOCUMENTATION: Uses query_as for type-safe mapping onto Place
#[derive(Clone)]
pub struct PgPlaceRepository {
    pool: PgPool,
}

impl PgPlaceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, place: &Place) -> Result<Place, PlacesError> {
        let created = sqlx::query_as::<_, Place>(
            r#"
            INSERT INTO places (
                name, description, category, latitude, longitude,
                image_url, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&place.name) // $1
        .bind(&place.description) // $2
        .bind(&place.category) // $3
        .bind(place.latitude) // $4
        .bind(place.longitude) // $5
        .bind(&place.image_url) // $6
        .bind(place.created_at) // $7
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create place: {}", e);
            PlacesError::DatabaseError(e.to_string())
        })?;

        log::info!("Created place with id: {:?}", created.id);
        Ok(created)
    }

    async fn update(&self, id: i32, place: &Place) -> Result<Option<Place>, PlacesError> {
        let updated = sqlx::query_as::<_, Place>(
            r#"
            UPDATE places
            SET name = $1,
                description = $2,
                category = $3,
                latitude = $4,
                longitude = $5,
                image_url = $6,
                created_at = $7
            WHERE id = $8
            RETURNING *
            "#,
        )
        .bind(&place.name)
        .bind(&place.description)
        .bind(&place.category)
        .bind(place.latitude)
        .bind(place.longitude)
        .bind(&place.image_url)
        .bind(place.created_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for place {}: {}", id, e);
            PlacesError::DatabaseError(e.to_string())
        })?;

        if updated.is_some() {
            log::info!("Updated place: {}", id);
        }
        Ok(updated)
    }
}

#[async_trait]
impl PlaceStore for PgPlaceRepository {
    async fn save(&self, place: Place) -> Result<Place, PlacesError> {
        match place.id {
            None => self.insert(&place).await,
            Some(id) => match self.update(id, &place).await? {
                Some(updated) => Ok(updated),
                None => {
                    // Unknown id: persist as a new row with a generated id
                    log::warn!("No place with id {} to overwrite, inserting", id);
                    self.insert(&place).await
                }
            },
        }
    }

    async fn find_all(&self) -> Result<Vec<Place>, PlacesError> {
        let places = sqlx::query_as::<_, Place>("SELECT * FROM places ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Failed to list places: {}", e);
                PlacesError::DatabaseError(e.to_string())
            })?;

        log::debug!("Fetched {} places", places.len());
        Ok(places)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Place>, PlacesError> {
        let place = sqlx::query_as::<_, Place>("SELECT * FROM places WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Database error fetching place {}: {}", id, e);
                PlacesError::DatabaseError(e.to_string())
            })?;

        if place.is_none() {
            log::debug!("Place not found: {}", id);
        }
        Ok(place)
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Place>, PlacesError> {
        let places = sqlx::query_as::<_, Place>(
            r#"
            SELECT * FROM places
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch places for category {}: {}", category, e);
            PlacesError::DatabaseError(e.to_string())
        })?;

        Ok(places)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), PlacesError> {
        let rows = sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for place {}: {}", id, e);
                PlacesError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            log::debug!("Delete of place {} matched no rows", id);
        } else {
            log::info!("Deleted place: {}", id);
        }
        Ok(())
    }
}
