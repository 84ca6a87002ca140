// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for place operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::PlacesError;
use crate::models::Place;
use crate::services::PlaceService;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

/// Query string for GET /api/places
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// POST /api/places
/// Create a new place
pub async fn create_place(
    service: web::Data<PlaceService>,
    req: web::Json<Place>,
) -> Result<impl Responder, PlacesError> {
    let mut place = req.into_inner();
    // POST always creates
    place.id = None;

    let created = service.create_place(place).await?;
    Ok(HttpResponse::Created().json(created))
}

/// GET /api/places?category=
/// List places, filtered when a non-empty category is given
pub async fn list_places(
    service: web::Data<PlaceService>,
    query: web::Query<CategoryQuery>,
) -> Result<impl Responder, PlacesError> {
    let places = match query.category.as_deref() {
        Some(category) if !category.is_empty() => {
            service.get_places_by_category(category).await?
        }
        _ => service.get_all_places().await?,
    };
    Ok(HttpResponse::Ok().json(places))
}

/// GET /api/places/{id}
pub async fn get_place(
    service: web::Data<PlaceService>,
    path: web::Path<i32>,
) -> Result<impl Responder, PlacesError> {
    let response = match service.get_place_by_id(path.into_inner()).await? {
        Some(place) => HttpResponse::Ok().json(place),
        None => HttpResponse::NotFound().finish(),
    };
    Ok(response)
}

/// PUT /api/places/{id}
/// Update a place; 404 with empty body when it does not exist
pub async fn update_place(
    service: web::Data<PlaceService>,
    path: web::Path<i32>,
    req: web::Json<Place>,
) -> Result<impl Responder, PlacesError> {
    let place = service
        .update_place(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(place))
}

/// DELETE /api/places/{id}
pub async fn delete_place(
    service: web::Data<PlaceService>,
    path: web::Path<i32>,
) -> Result<impl Responder, PlacesError> {
    service.delete_place(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for place routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/places")
            .route("", web::post().to(create_place))
            .route("", web::get().to(list_places))
            .route("/{id}", web::get().to(get_place))
            .route("/{id}", web::put().to(update_place))
            .route("/{id}", web::delete().to(delete_place)),
    );
}
