//! SurrealDB repository implementations.

mod booking;
mod car;
mod user;

pub use booking::SurrealBookingRepository;
pub use car::SurrealCarRepository;
pub use user::SurrealUserRepository;
