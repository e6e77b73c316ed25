//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Owner scoping is expressed by
//! the `owner` parameter of the list operations; mutation authorization
//! is the caller's job (see [`crate::ownership`]).

use uuid::Uuid;

use crate::error::CarRentResult;
use crate::models::{
    booking::{Booking, CreateBooking},
    car::{Car, CreateCar, UpdateCar},
    user::{CreateUser, UpdateUser, User},
};

pub trait UserRepository: Send + Sync {
    fn create(&self, input: CreateUser) -> impl Future<Output = CarRentResult<User>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = CarRentResult<User>> + Send;
    fn update(
        &self,
        id: Uuid,
        input: UpdateUser,
    ) -> impl Future<Output = CarRentResult<User>> + Send;
}

pub trait CarRepository: Send + Sync {
    /// Persists a new listing; it starts out available.
    fn create(&self, input: CreateCar) -> impl Future<Output = CarRentResult<Car>> + Send;
    /// Looks a car up regardless of ownership, including detached ones.
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = CarRentResult<Car>> + Send;
    /// All cars of `owner`, oldest listing first.
    fn list_by_owner(&self, owner: Uuid) -> impl Future<Output = CarRentResult<Vec<Car>>> + Send;
    fn update(&self, id: Uuid, input: UpdateCar)
    -> impl Future<Output = CarRentResult<Car>> + Send;
}

pub trait BookingRepository: Send + Sync {
    fn create(&self, input: CreateBooking)
    -> impl Future<Output = CarRentResult<Booking>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = CarRentResult<Booking>> + Send;
    /// All bookings of `owner`, most recently created first.
    fn list_by_owner(
        &self,
        owner: Uuid,
    ) -> impl Future<Output = CarRentResult<Vec<Booking>>> + Send;
}
