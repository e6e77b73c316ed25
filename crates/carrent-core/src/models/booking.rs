//! Booking domain model.
//!
//! Bookings are created and transitioned by the booking flow; the
//! owner-facing features only read them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub car: Uuid,
    pub owner: Uuid,
    pub status: BookingStatus,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateBooking {
    pub car: Uuid,
    pub owner: Uuid,
    pub status: BookingStatus,
    pub price: f64,
    /// Defaults to the time of insertion.
    pub created_at: Option<DateTime<Utc>>,
}
