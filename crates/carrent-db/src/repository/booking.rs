//! SurrealDB implementation of [`BookingRepository`].

use carrent_core::error::CarRentResult;
use carrent_core::models::booking::{Booking, BookingStatus, CreateBooking};
use carrent_core::repository::BookingRepository;
use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::{DbError, parse_uuid};

#[derive(Debug, SurrealValue)]
struct BookingRow {
    car: String,
    owner: String,
    status: String,
    price: f64,
    created_at: DateTime<Utc>,
}

#[derive(Debug, SurrealValue)]
struct BookingRowWithId {
    record_id: String,
    car: String,
    owner: String,
    status: String,
    price: f64,
    created_at: DateTime<Utc>,
}

fn parse_status(s: &str) -> Result<BookingStatus, DbError> {
    match s {
        "pending" => Ok(BookingStatus::Pending),
        "confirmed" => Ok(BookingStatus::Confirmed),
        "cancelled" => Ok(BookingStatus::Cancelled),
        other => Err(DbError::Decode(format!("unknown booking status: {other}"))),
    }
}

fn status_to_string(s: BookingStatus) -> &'static str {
    match s {
        BookingStatus::Pending => "pending",
        BookingStatus::Confirmed => "confirmed",
        BookingStatus::Cancelled => "cancelled",
    }
}

fn row_to_booking(row: BookingRow, id: Uuid) -> Result<Booking, DbError> {
    Ok(Booking {
        id,
        car: parse_uuid("car", &row.car)?,
        owner: parse_uuid("owner", &row.owner)?,
        status: parse_status(&row.status)?,
        price: row.price,
        created_at: row.created_at,
    })
}

impl BookingRowWithId {
    fn try_into_booking(self) -> Result<Booking, DbError> {
        let id = parse_uuid("booking", &self.record_id)?;
        row_to_booking(
            BookingRow {
                car: self.car,
                owner: self.owner,
                status: self.status,
                price: self.price,
                created_at: self.created_at,
            },
            id,
        )
    }
}

/// SurrealDB implementation of the Booking repository.
#[derive(Clone)]
pub struct SurrealBookingRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealBookingRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> BookingRepository for SurrealBookingRepository<C> {
    async fn create(&self, input: CreateBooking) -> CarRentResult<Booking> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let mut sets = vec![
            "car = $car",
            "owner = $owner",
            "status = $status",
            "price = $price",
        ];
        if input.created_at.is_some() {
            sets.push("created_at = $created_at");
        }

        let query = format!(
            "CREATE type::record('booking', $id) SET {}",
            sets.join(", ")
        );

        let mut builder = self
            .db
            .query(&query)
            .bind(("id", id_str.clone()))
            .bind(("car", input.car.to_string()))
            .bind(("owner", input.owner.to_string()))
            .bind(("status", status_to_string(input.status).to_string()))
            .bind(("price", input.price));

        if let Some(created_at) = input.created_at {
            builder = builder.bind(("created_at", created_at));
        }

        let result = builder.await.map_err(DbError::from)?;
        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<BookingRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "booking".into(),
            id: id_str,
        })?;

        row_to_booking(row, id).map_err(Into::into)
    }

    async fn get_by_id(&self, id: Uuid) -> CarRentResult<Booking> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('booking', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<BookingRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "booking".into(),
            id: id_str,
        })?;

        row_to_booking(row, id).map_err(Into::into)
    }

    async fn list_by_owner(&self, owner: Uuid) -> CarRentResult<Vec<Booking>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM booking \
                 WHERE owner = $owner \
                 ORDER BY created_at DESC",
            )
            .bind(("owner", owner.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<BookingRowWithId> = result.take(0).map_err(DbError::from)?;

        let bookings = rows
            .into_iter()
            .map(BookingRowWithId::try_into_booking)
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(bookings)
    }
}
