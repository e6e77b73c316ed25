//! Summary statistics over an owner's cars and bookings, for the owner
//! dashboard.

use std::collections::HashMap;

use carrent_core::error::{CarRentError, CarRentResult};
use carrent_core::models::booking::{Booking, BookingStatus};
use carrent_core::models::car::Car;
use carrent_core::models::dashboard::{BookingWithCar, DashboardSummary};
use carrent_core::models::principal::Principal;
use carrent_core::repository::{BookingRepository, CarRepository};
use tracing::{debug, warn};
use uuid::Uuid;

/// Number of bookings surfaced in `recent_bookings`.
pub const RECENT_BOOKINGS: usize = 3;

pub struct DashboardService<C: CarRepository, B: BookingRepository> {
    cars: C,
    bookings: B,
}

impl<C: CarRepository, B: BookingRepository> DashboardService<C, B> {
    pub fn new(cars: C, bookings: B) -> Self {
        Self { cars, bookings }
    }

    /// Compute the dashboard of `principal`, who must hold the owner role.
    pub async fn compute_dashboard(&self, principal: Principal) -> CarRentResult<DashboardSummary> {
        if !principal.is_owner() {
            warn!(principal_id = %principal.id, "Dashboard requested by a non-owner");
            return Err(CarRentError::unauthorized());
        }

        let cars = self.cars.list_by_owner(principal.id).await?;
        let total_cars = cars.len();
        let bookings = self.bookings.list_by_owner(principal.id).await?;

        let joined = self.join_cars(cars, bookings).await?;
        let summary = summarize(total_cars, joined);

        debug!(
            owner_id = %principal.id,
            total_cars = summary.total_cars,
            total_bookings = summary.total_bookings,
            "Dashboard computed"
        );
        Ok(summary)
    }

    /// Resolve each booking's car. Cars the owner still lists are reused;
    /// others (e.g. logically deleted ones) are fetched once each.
    async fn join_cars(
        &self,
        owned: Vec<Car>,
        bookings: Vec<Booking>,
    ) -> CarRentResult<Vec<BookingWithCar>> {
        let mut known: HashMap<Uuid, Option<Car>> =
            owned.into_iter().map(|car| (car.id, Some(car))).collect();

        let mut joined = Vec::with_capacity(bookings.len());
        for booking in bookings {
            if !known.contains_key(&booking.car) {
                let car = match self.cars.get_by_id(booking.car).await {
                    Ok(car) => Some(car),
                    Err(CarRentError::NotFound { .. }) => None,
                    Err(e) => return Err(e),
                };
                known.insert(booking.car, car);
            }
            let car = known.get(&booking.car).cloned().flatten();
            joined.push(BookingWithCar::new(booking, car));
        }
        Ok(joined)
    }
}

/// Aggregate an owner's bookings, which must already be ordered most
/// recent first.
///
/// `monthly_revenue` sums every confirmed booking regardless of when it
/// was made.
pub fn summarize(total_cars: usize, bookings: Vec<BookingWithCar>) -> DashboardSummary {
    let count = |status: BookingStatus| bookings.iter().filter(|b| b.status == status).count();

    let pending_bookings = count(BookingStatus::Pending) as u64;
    let completed_bookings = count(BookingStatus::Confirmed) as u64;
    let monthly_revenue = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed)
        .map(|b| b.price)
        .sum();
    let total_bookings = bookings.len() as u64;

    let mut recent_bookings = bookings;
    recent_bookings.truncate(RECENT_BOOKINGS);

    DashboardSummary {
        total_cars: total_cars as u64,
        total_bookings,
        pending_bookings,
        completed_bookings,
        recent_bookings,
        monthly_revenue,
    }
}
