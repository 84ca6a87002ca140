// src/models/place.rs
// DOCUMENTATION: Core data structure for places
// PURPOSE: Defines the Place record shared by the API and the database

use crate::errors::PlacesError;
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Number of fractional digits kept for latitude/longitude (NUMERIC(10, 6))
pub const COORDINATE_SCALE: u32 = 6;

/// Total digits of the coordinate columns
pub const COORDINATE_PRECISION: u32 = 10;

/// Represents a place record
/// DOCUMENTATION: Maps directly to the places table in PostgreSQL
/// and is also the JSON body accepted and returned by /api/places
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Identifier assigned by the store on first save
    #[serde(default)]
    pub id: Option<i32>,

    /// Place name - required, may be empty
    pub name: String,

    /// Optional free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Category used for equality filtering (cafe, restaurant, hotel, ...)
    pub category: String,

    /// Latitude in decimal degrees
    #[serde(default)]
    pub latitude: Option<Decimal>,

    /// Longitude in decimal degrees
    #[serde(default)]
    pub longitude: Option<Decimal>,

    /// URL or reference of the place image
    #[serde(default)]
    pub image_url: Option<String>,

    /// When the record was constructed
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Place {
    /// Apply an update onto a stored place
    /// DOCUMENTATION: Copies name, description, category, latitude, longitude
    /// and image_url from `incoming`. The stored id and created_at are kept
    /// whatever `incoming` carries.
    pub fn merged_with(self, incoming: Place) -> Place {
        Place {
            id: self.id,
            name: incoming.name,
            description: incoming.description,
            category: incoming.category,
            latitude: incoming.latitude,
            longitude: incoming.longitude,
            image_url: incoming.image_url,
            created_at: self.created_at,
        }
    }

    /// Fit coordinates to NUMERIC(10, 6)
    /// DOCUMENTATION: Rounds half away from zero and pads to six fractional
    /// digits, the way PostgreSQL stores them. Values needing more than four
    /// integer digits overflow the column and are rejected.
    pub fn normalized(mut self) -> Result<Self, PlacesError> {
        self.latitude = self.latitude.map(fit_coordinate).transpose()?;
        self.longitude = self.longitude.map(fit_coordinate).transpose()?;
        Ok(self)
    }
}

fn fit_coordinate(value: Decimal) -> Result<Decimal, PlacesError> {
    let mut fitted =
        value.round_dp_with_strategy(COORDINATE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    let limit = Decimal::from(10_i64.pow(COORDINATE_PRECISION - COORDINATE_SCALE));
    if fitted.abs() >= limit {
        log::error!("Coordinate {} overflows NUMERIC(10, 6)", value);
        return Err(PlacesError::DatabaseError(format!(
            "numeric field overflow: {}",
            value
        )));
    }
    fitted.rescale(COORDINATE_SCALE);
    Ok(fitted)
}

#[cfg(test)]
impl Place {
    /// Unsaved place stamped with the current time
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Place {
            id: None,
            name: name.into(),
            description: None,
            category: category.into(),
            latitude: None,
            longitude: None,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_coordinates(mut self, latitude: Decimal, longitude: Decimal) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn stored() -> Place {
        Place {
            id: Some(7),
            name: "Cafe Centrale".to_string(),
            description: Some("Old town espresso bar".to_string()),
            category: "cafe".to_string(),
            latitude: Some(dec("44.8176")),
            longitude: Some(dec("20.4633")),
            image_url: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_merge_overwrites_mutable_fields() {
        let incoming = Place {
            id: Some(99),
            name: "Centrale".to_string(),
            description: None,
            category: "restaurant".to_string(),
            latitude: Some(dec("45.0")),
            longitude: None,
            image_url: Some("https://img.example/centrale.jpg".to_string()),
            created_at: Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
        };

        let merged = stored().merged_with(incoming);

        assert_eq!(merged.name, "Centrale");
        assert_eq!(merged.description, None);
        assert_eq!(merged.category, "restaurant");
        assert_eq!(merged.latitude, Some(dec("45.0")));
        assert_eq!(merged.longitude, None);
        assert_eq!(
            merged.image_url.as_deref(),
            Some("https://img.example/centrale.jpg")
        );
    }

    #[test]
    fn test_merge_preserves_id_and_created_at() {
        let original = stored();
        let mut incoming = Place::new("Other", "bar");
        incoming.id = Some(1);

        let merged = original.clone().merged_with(incoming);

        assert_eq!(merged.id, Some(7));
        assert_eq!(merged.created_at, original.created_at);
    }

    #[test]
    fn test_deserialize_minimal_payload() {
        let before = Utc::now();
        let place: Place =
            serde_json::from_str(r#"{"name":"Kalemegdan","category":"park"}"#).unwrap();

        assert_eq!(place.id, None);
        assert_eq!(place.name, "Kalemegdan");
        assert_eq!(place.category, "park");
        assert!(place.latitude.is_none());
        assert!(place.created_at >= before);
    }

    #[test]
    fn test_deserialize_coordinates_from_numbers_and_strings() {
        let place: Place = serde_json::from_str(
            r#"{"name":"a","category":"b","latitude":44.8176,"longitude":"20.4633"}"#,
        )
        .unwrap();

        assert_eq!(place.latitude, Some(dec("44.8176")));
        assert_eq!(place.longitude, Some(dec("20.4633")));
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let mut place = stored();
        place.image_url = Some("x.png".to_string());
        let value = serde_json::to_value(&place).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["imageUrl"], "x.png");
        assert!(value["createdAt"].is_string());
        assert!(value.get("image_url").is_none());
    }

    #[test]
    fn test_normalized_rounds_and_pads_to_column_scale() {
        let place = Place::new("a", "b")
            .with_coordinates(dec("44.81761250"), dec("20.4633"))
            .normalized()
            .unwrap();

        assert_eq!(place.latitude.unwrap().to_string(), "44.817613");
        assert_eq!(place.longitude.unwrap().to_string(), "20.463300");
    }

    #[test]
    fn test_normalized_accepts_four_integer_digits() {
        let place = Place::new("a", "b")
            .with_coordinates(dec("-9999.999999"), dec("0"))
            .normalized()
            .unwrap();

        assert_eq!(place.latitude.unwrap().to_string(), "-9999.999999");
        assert_eq!(place.longitude.unwrap().to_string(), "0.000000");
    }

    #[test]
    fn test_normalized_rejects_column_overflow() {
        let result = Place::new("a", "b")
            .with_coordinates(dec("123456.1234567"), dec("20.4633"))
            .normalized();
        assert!(matches!(result, Err(PlacesError::DatabaseError(_))));

        // rounding up to 10000 also overflows
        let result = Place::new("a", "b")
            .with_coordinates(dec("44.8176"), dec("9999.9999996"))
            .normalized();
        assert!(matches!(result, Err(PlacesError::DatabaseError(_))));
    }
}
