//! Shared application state handed to every handler.

use std::sync::Arc;

use carrent_auth::AuthConfig;
use carrent_db::repository::{
    SurrealBookingRepository, SurrealCarRepository, SurrealUserRepository,
};
use carrent_imagekit::ImageKitClient;
use carrent_owner::{CarListingService, DashboardService, ImagePolicies, ProfileService};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

pub type UserRepo = SurrealUserRepository<Any>;
pub type CarRepo = SurrealCarRepository<Any>;
pub type BookingRepo = SurrealBookingRepository<Any>;

pub type Listing = CarListingService<CarRepo, ImageKitClient>;
pub type Dashboard = DashboardService<CarRepo, BookingRepo>;
pub type Profile = ProfileService<UserRepo, ImageKitClient>;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<Services>,
}

struct Services {
    auth: AuthConfig,
    users: UserRepo,
    listing: Listing,
    dashboard: Dashboard,
    profile: Profile,
}

impl AppState {
    pub fn new(
        db: Surreal<Any>,
        images: ImageKitClient,
        auth: AuthConfig,
        policies: ImagePolicies,
    ) -> Self {
        let users = SurrealUserRepository::new(db.clone());
        let cars = SurrealCarRepository::new(db.clone());
        let bookings = SurrealBookingRepository::new(db);

        let services = Services {
            auth,
            listing: CarListingService::new(cars.clone(), images.clone(), policies.cars),
            dashboard: DashboardService::new(cars, bookings),
            profile: ProfileService::new(users.clone(), images, policies.users),
            users,
        };
        Self {
            inner: Arc::new(services),
        }
    }

    pub fn auth(&self) -> &AuthConfig {
        &self.inner.auth
    }

    pub fn users(&self) -> &UserRepo {
        &self.inner.users
    }

    pub fn listing(&self) -> &Listing {
        &self.inner.listing
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.inner.dashboard
    }

    pub fn profile(&self) -> &Profile {
        &self.inner.profile
    }
}
