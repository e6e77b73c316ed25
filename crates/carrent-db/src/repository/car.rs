//! SurrealDB implementation of [`CarRepository`].
//!
//! Deletion is logical: the repository only ever nulls `owner` through
//! [`UpdateCar`], so records stay retrievable by id.

use carrent_core::error::CarRentResult;
use carrent_core::models::car::{Car, CreateCar, UpdateCar};
use carrent_core::repository::CarRepository;
use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::{DbError, parse_uuid};

#[derive(Debug, SurrealValue)]
struct CarRow {
    owner: Option<String>,
    brand: String,
    model: String,
    year: u32,
    price_per_day: f64,
    category: String,
    transmission: String,
    fuel_type: String,
    seating_capacity: u32,
    location: String,
    description: String,
    image: String,
    is_available: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, SurrealValue)]
struct CarRowWithId {
    record_id: String,
    owner: Option<String>,
    brand: String,
    model: String,
    year: u32,
    price_per_day: f64,
    category: String,
    transmission: String,
    fuel_type: String,
    seating_capacity: u32,
    location: String,
    description: String,
    image: String,
    is_available: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CarRow {
    fn into_car(self, id: Uuid) -> Result<Car, DbError> {
        let owner = self
            .owner
            .as_deref()
            .map(|o| parse_uuid("owner", o))
            .transpose()?;
        Ok(Car {
            id,
            owner,
            brand: self.brand,
            model: self.model,
            year: self.year,
            price_per_day: self.price_per_day,
            category: self.category,
            transmission: self.transmission,
            fuel_type: self.fuel_type,
            seating_capacity: self.seating_capacity,
            location: self.location,
            description: self.description,
            image: self.image,
            is_available: self.is_available,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl CarRowWithId {
    fn try_into_car(self) -> Result<Car, DbError> {
        let id = parse_uuid("car", &self.record_id)?;
        CarRow {
            owner: self.owner,
            brand: self.brand,
            model: self.model,
            year: self.year,
            price_per_day: self.price_per_day,
            category: self.category,
            transmission: self.transmission,
            fuel_type: self.fuel_type,
            seating_capacity: self.seating_capacity,
            location: self.location,
            description: self.description,
            image: self.image,
            is_available: self.is_available,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
        .into_car(id)
    }
}

/// SurrealDB implementation of the Car repository.
#[derive(Clone)]
pub struct SurrealCarRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealCarRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> CarRepository for SurrealCarRepository<C> {
    async fn create(&self, input: CreateCar) -> CarRentResult<Car> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();
        let details = input.details;

        let result = self
            .db
            .query(
                "CREATE type::record('car', $id) SET \
                 owner = $owner, brand = $brand, model = $model, \
                 year = $year, price_per_day = $price_per_day, \
                 category = $category, transmission = $transmission, \
                 fuel_type = $fuel_type, seating_capacity = $seating_capacity, \
                 location = $location, description = $description, \
                 image = $image, is_available = true",
            )
            .bind(("id", id_str.clone()))
            .bind(("owner", input.owner.to_string()))
            .bind(("brand", details.brand))
            .bind(("model", details.model))
            .bind(("year", details.year))
            .bind(("price_per_day", details.price_per_day))
            .bind(("category", details.category))
            .bind(("transmission", details.transmission))
            .bind(("fuel_type", details.fuel_type))
            .bind(("seating_capacity", details.seating_capacity))
            .bind(("location", details.location))
            .bind(("description", details.description))
            .bind(("image", input.image))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<CarRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "car".into(),
            id: id_str,
        })?;

        Ok(row.into_car(id)?)
    }

    async fn get_by_id(&self, id: Uuid) -> CarRentResult<Car> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('car', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<CarRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "car".into(),
            id: id_str,
        })?;

        Ok(row.into_car(id)?)
    }

    async fn list_by_owner(&self, owner: Uuid) -> CarRentResult<Vec<Car>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM car \
                 WHERE owner = $owner \
                 ORDER BY created_at ASC",
            )
            .bind(("owner", owner.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<CarRowWithId> = result.take(0).map_err(DbError::from)?;

        let cars = rows
            .into_iter()
            .map(CarRowWithId::try_into_car)
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(cars)
    }

    async fn update(&self, id: Uuid, input: UpdateCar) -> CarRentResult<Car> {
        let id_str = id.to_string();

        let mut sets = Vec::new();
        if input.owner.is_some() {
            sets.push("owner = $owner");
        }
        if input.is_available.is_some() {
            sets.push("is_available = $is_available");
        }
        sets.push("updated_at = time::now()");

        let query = format!("UPDATE type::record('car', $id) SET {}", sets.join(", "));

        let mut builder = self.db.query(&query).bind(("id", id_str.clone()));

        if let Some(owner) = input.owner {
            builder = builder.bind(("owner", owner.map(|o| o.to_string())));
        }
        if let Some(is_available) = input.is_available {
            builder = builder.bind(("is_available", is_available));
        }

        let result = builder.await.map_err(DbError::from)?;
        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<CarRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "car".into(),
            id: id_str,
        })?;

        Ok(row.into_car(id)?)
    }
}
