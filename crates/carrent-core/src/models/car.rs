//! Car domain model.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use garde::Validate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::{CarRentError, CarRentResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: Uuid,
    /// `None` once the listing has been logically deleted.
    pub owner: Option<Uuid>,
    pub brand: String,
    pub model: String,
    pub year: u32,
    pub price_per_day: f64,
    pub category: String,
    pub transmission: String,
    pub fuel_type: String,
    pub seating_capacity: u32,
    pub location: String,
    pub description: String,
    pub image: String,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing details as submitted by an owner, before the image is
/// uploaded and ownership is attached. Every field is optional on the
/// wire so that a missing one surfaces as a validation error rather
/// than a deserialization failure.
///
/// Numeric fields also accept their decimal text, as HTML number inputs
/// submit it; an empty string counts as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CarDraft {
    #[garde(required, length(min = 1))]
    pub brand: Option<String>,
    #[garde(required, length(min = 1))]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "number_or_text")]
    #[garde(required, range(min = 1900))]
    pub year: Option<u32>,
    #[serde(default, deserialize_with = "number_or_text")]
    #[garde(required, range(min = 0.0))]
    pub price_per_day: Option<f64>,
    #[garde(required, length(min = 1))]
    pub category: Option<String>,
    #[garde(required, length(min = 1))]
    pub transmission: Option<String>,
    #[serde(alias = "fuel_type")]
    #[garde(required, length(min = 1))]
    pub fuel_type: Option<String>,
    #[serde(alias = "seating_capacity", default, deserialize_with = "number_or_text")]
    #[garde(required, range(min = 1))]
    pub seating_capacity: Option<u32>,
    #[garde(required, length(min = 1))]
    pub location: Option<String>,
    #[garde(required, length(min = 1))]
    pub description: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

fn number_or_text<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<NumberOrText<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse()
                .map(Some)
                .map_err(|e| D::Error::custom(format!("invalid number {text:?}: {e}")))
        }
    }
}

/// A draft that passed validation; all fields are present.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidCarDraft {
    pub brand: String,
    pub model: String,
    pub year: u32,
    pub price_per_day: f64,
    pub category: String,
    pub transmission: String,
    pub fuel_type: String,
    pub seating_capacity: u32,
    pub location: String,
    pub description: String,
}

impl CarDraft {
    pub fn validated(self) -> CarRentResult<ValidCarDraft> {
        self.validate()?;

        let CarDraft {
            brand: Some(brand),
            model: Some(model),
            year: Some(year),
            price_per_day: Some(price_per_day),
            category: Some(category),
            transmission: Some(transmission),
            fuel_type: Some(fuel_type),
            seating_capacity: Some(seating_capacity),
            location: Some(location),
            description: Some(description),
        } = self
        else {
            return Err(CarRentError::Validation {
                message: "car details are incomplete".into(),
            });
        };

        Ok(ValidCarDraft {
            brand,
            model,
            year,
            price_per_day,
            category,
            transmission,
            fuel_type,
            seating_capacity,
            location,
            description,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateCar {
    pub owner: Uuid,
    pub details: ValidCarDraft,
    /// Derived (optimized) image URL.
    pub image: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCar {
    /// `Some(None)` detaches the car from its owner.
    pub owner: Option<Option<Uuid>>,
    pub is_available: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> CarDraft {
        CarDraft {
            brand: Some("Toyota".into()),
            model: Some("Corolla".into()),
            year: Some(2021),
            price_per_day: Some(45.0),
            category: Some("Sedan".into()),
            transmission: Some("Automatic".into()),
            fuel_type: Some("Petrol".into()),
            seating_capacity: Some(5),
            location: Some("Chicago".into()),
            description: Some("Clean and reliable".into()),
        }
    }

    #[test]
    fn complete_draft_validates() {
        let valid = full_draft().validated().unwrap();
        assert_eq!(valid.brand, "Toyota");
        assert_eq!(valid.seating_capacity, 5);
    }

    #[test]
    fn missing_brand_is_rejected() {
        let draft = CarDraft {
            brand: None,
            ..full_draft()
        };
        let err = draft.validated().unwrap_err();
        assert!(matches!(err, CarRentError::Validation { .. }));
        assert!(err.to_string().contains("brand"));
    }

    #[test]
    fn empty_strings_are_rejected() {
        let draft = CarDraft {
            location: Some(String::new()),
            ..full_draft()
        };
        assert!(matches!(
            draft.validated(),
            Err(CarRentError::Validation { .. })
        ));
    }

    #[test]
    fn draft_accepts_snake_case_aliases_from_owner_ui() {
        let json = serde_json::json!({
            "brand": "BMW",
            "model": "X5",
            "year": 2020,
            "pricePerDay": 120,
            "category": "SUV",
            "transmission": "Automatic",
            "fuel_type": "Diesel",
            "seating_capacity": 7,
            "location": "Houston",
            "description": "Roomy"
        });
        let draft: CarDraft = serde_json::from_value(json).unwrap();
        let valid = draft.validated().unwrap();
        assert_eq!(valid.fuel_type, "Diesel");
        assert_eq!(valid.seating_capacity, 7);
        assert_eq!(valid.price_per_day, 120.0);
    }

    #[test]
    fn numeric_fields_accept_form_text() {
        let json = serde_json::json!({
            "brand": "BMW",
            "model": "X5",
            "year": "2020",
            "pricePerDay": "120.5",
            "category": "SUV",
            "transmission": "Automatic",
            "fuel_type": "Diesel",
            "seating_capacity": "7",
            "location": "Houston",
            "description": "Roomy"
        });
        let draft: CarDraft = serde_json::from_value(json).unwrap();
        let valid = draft.validated().unwrap();
        assert_eq!(valid.year, 2020);
        assert_eq!(valid.price_per_day, 120.5);
        assert_eq!(valid.seating_capacity, 7);
    }

    #[test]
    fn empty_numeric_text_counts_as_missing() {
        let json = serde_json::json!({ "brand": "BMW", "year": "", "seating_capacity": " " });
        let draft: CarDraft = serde_json::from_value(json).unwrap();
        assert_eq!(draft.year, None);
        assert_eq!(draft.seating_capacity, None);

        let err = draft.validated().unwrap_err();
        assert!(err.to_string().contains("year"), "{err}");
    }

    #[test]
    fn malformed_numeric_text_is_rejected() {
        let json = serde_json::json!({ "year": "twenty twenty" });
        let err = serde_json::from_value::<CarDraft>(json).unwrap_err();
        assert!(err.to_string().contains("invalid number"), "{err}");
    }

    #[test]
    fn untouched_form_defaults_fail_validation() {
        let json = serde_json::json!({
            "brand": "",
            "model": "",
            "year": 0,
            "pricePerDay": 0,
            "category": "",
            "transmission": "",
            "fuel_type": "",
            "seating_capacity": 0,
            "location": "",
            "description": ""
        });
        let draft: CarDraft = serde_json::from_value(json).unwrap();
        assert!(matches!(
            draft.validated(),
            Err(CarRentError::Validation { .. })
        ));
    }
}
