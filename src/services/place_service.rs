// src/services/place_service.rs
// DOCUMENTATION: Business logic for places
// PURPOSE: Intermediary between handlers and the place store

use crate::db::PlaceStore;
use crate::errors::PlacesError;
use crate::models::Place;
use std::sync::Arc;

#[derive(Clone)]
pub struct PlaceService {
    store: Arc<dyn PlaceStore>,
}

impl PlaceService {
    pub fn new(store: Arc<dyn PlaceStore>) -> Self {
        Self { store }
    }

    /// Create a new place
    pub async fn create_place(&self, place: Place) -> Result<Place, PlacesError> {
        self.store.save(place).await
    }

    /// List every place
    pub async fn get_all_places(&self) -> Result<Vec<Place>, PlacesError> {
        self.store.find_all().await
    }

    /// List places of one category
    /// DOCUMENTATION: Callers route an empty category to get_all_places
    pub async fn get_places_by_category(&self, category: &str) -> Result<Vec<Place>, PlacesError> {
        self.store.find_by_category(category).await
    }

    pub async fn get_place_by_id(&self, id: i32) -> Result<Option<Place>, PlacesError> {
        self.store.find_by_id(id).await
    }

    /// Update an existing place
    /// DOCUMENTATION: Merges the incoming fields onto the stored record,
    /// keeping its id and created_at. Last write wins.
    pub async fn update_place(&self, id: i32, incoming: Place) -> Result<Place, PlacesError> {
        let existing = self.store.find_by_id(id).await?.ok_or_else(|| {
            log::warn!("Update requested for missing place: {}", id);
            PlacesError::NotFound(id)
        })?;

        self.store.save(existing.merged_with(incoming)).await
    }

    /// Delete a place; missing ids succeed as well
    pub async fn delete_place(&self, id: i32) -> Result<(), PlacesError> {
        self.store.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryPlaceStore;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn service() -> PlaceService {
        PlaceService::new(Arc::new(InMemoryPlaceStore::new()))
    }

    fn cafe_centrale() -> Place {
        Place::new("Cafe Centrale", "cafe").with_coordinates(
            Decimal::from_str("44.8176").unwrap(),
            Decimal::from_str("20.4633").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_keeps_fields() {
        let service = service();
        let input = cafe_centrale();

        let created = service.create_place(input.clone()).await.unwrap();

        assert_eq!(created.id, Some(1));
        assert_eq!(Place { id: None, ..created }, input);
    }

    #[tokio::test]
    async fn test_get_by_id_returns_latest_state() {
        let service = service();
        let created = service.create_place(cafe_centrale()).await.unwrap();
        let id = created.id.unwrap();

        let mut incoming = cafe_centrale();
        incoming.description = Some("Terrace seating".to_string());
        service.update_place(id, incoming).await.unwrap();

        let found = service.get_place_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.description.as_deref(), Some("Terrace seating"));
        assert!(service.get_place_by_id(id + 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_preserves_id_and_created_at() {
        let service = service();
        let created = service.create_place(cafe_centrale()).await.unwrap();

        let mut incoming = Place::new("Centrale", "restaurant");
        incoming.id = Some(500);
        let updated = service
            .update_place(created.id.unwrap(), incoming)
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.category, "restaurant");
        assert_eq!(updated.latitude, None);
        assert_eq!(service.get_all_places().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_place_is_not_found_without_mutation() {
        let service = service();
        service.create_place(cafe_centrale()).await.unwrap();
        let before = service.get_all_places().await.unwrap();

        let result = service.update_place(9, Place::new("x", "y")).await;

        assert!(matches!(result, Err(PlacesError::NotFound(9))));
        assert_eq!(service.get_all_places().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let service = service();
        let created = service.create_place(cafe_centrale()).await.unwrap();
        let id = created.id.unwrap();

        service.delete_place(id).await.unwrap();
        service.delete_place(id).await.unwrap();

        assert!(service.get_place_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_category_filter_returns_exact_subset() {
        let service = service();
        service.create_place(cafe_centrale()).await.unwrap();
        service
            .create_place(Place::new("Hotel Moskva", "hotel"))
            .await
            .unwrap();

        let cafes = service.get_places_by_category("cafe").await.unwrap();
        assert_eq!(cafes.len(), 1);
        assert_eq!(cafes[0].name, "Cafe Centrale");
        assert!(service
            .get_places_by_category("museum")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        assert!(service().get_all_places().await.unwrap().is_empty());
    }
}
