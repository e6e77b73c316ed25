//! Owner dashboard read models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::booking::{Booking, BookingStatus};
use super::car::Car;

/// A booking with its car reference resolved. `car` is `None` when the
/// referenced record no longer exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithCar {
    pub id: Uuid,
    pub car_id: Uuid,
    pub car: Option<Car>,
    pub owner: Uuid,
    pub status: BookingStatus,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl BookingWithCar {
    pub fn new(booking: Booking, car: Option<Car>) -> Self {
        Self {
            id: booking.id,
            car_id: booking.car,
            car,
            owner: booking.owner,
            status: booking.status,
            price: booking.price,
            created_at: booking.created_at,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_cars: u64,
    pub total_bookings: u64,
    pub pending_bookings: u64,
    pub completed_bookings: u64,
    /// Up to three bookings, most recently created first.
    pub recent_bookings: Vec<BookingWithCar>,
    /// Sum of prices over every confirmed booking, all time.
    pub monthly_revenue: f64,
}
