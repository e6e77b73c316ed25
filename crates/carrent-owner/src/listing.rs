//! Owner-scoped car listings: create, list, toggle and delete.

use carrent_core::error::CarRentResult;
use carrent_core::image::{ImageFile, ImageStore};
use carrent_core::models::car::{Car, CarDraft, CreateCar, UpdateCar};
use carrent_core::ownership::OwnedResource;
use carrent_core::repository::CarRepository;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ImagePolicy;
use crate::upload::{discard, upload_optimized};

pub struct CarListingService<C: CarRepository, I: ImageStore> {
    cars: C,
    images: I,
    policy: ImagePolicy,
}

impl<C: CarRepository, I: ImageStore> CarListingService<C, I> {
    pub fn new(cars: C, images: I, policy: ImagePolicy) -> Self {
        Self {
            cars,
            images,
            policy,
        }
    }

    /// List a new car for `owner_id`.
    ///
    /// The draft is validated before anything is uploaded, so a
    /// rejected draft never reaches the image store. If the car cannot
    /// be saved after a successful upload, the upload is removed again
    /// on a best-effort basis.
    pub async fn add_car(
        &self,
        owner_id: Uuid,
        draft: CarDraft,
        image: ImageFile,
    ) -> CarRentResult<Car> {
        let details = draft.validated()?;

        let (uploaded, image_url) = upload_optimized(&self.images, image, &self.policy).await?;

        let created = self
            .cars
            .create(CreateCar {
                owner: owner_id,
                details,
                image: image_url,
            })
            .await;

        match created {
            Ok(car) => {
                info!(car_id = %car.id, owner_id = %owner_id, "Car listed");
                Ok(car)
            }
            Err(e) => {
                discard(&self.images, &uploaded).await;
                Err(e)
            }
        }
    }

    pub async fn list_owner_cars(&self, owner_id: Uuid) -> CarRentResult<Vec<Car>> {
        self.cars.list_by_owner(owner_id).await
    }

    /// Flip the availability of one of the principal's cars.
    pub async fn toggle_availability(
        &self,
        principal_id: Uuid,
        car_id: Uuid,
    ) -> CarRentResult<Car> {
        let car = self.owned_car(principal_id, car_id).await?;

        let updated = self
            .cars
            .update(
                car_id,
                UpdateCar {
                    is_available: Some(!car.is_available),
                    ..Default::default()
                },
            )
            .await?;

        info!(
            car_id = %car_id,
            is_available = updated.is_available,
            "Car availability toggled"
        );
        Ok(updated)
    }

    /// Logically delete one of the principal's cars: the record stays
    /// readable by id but loses its owner and its availability, which
    /// also puts it beyond the reach of any further owner-scoped call.
    pub async fn delete_car(&self, principal_id: Uuid, car_id: Uuid) -> CarRentResult<()> {
        self.owned_car(principal_id, car_id).await?;

        self.cars
            .update(
                car_id,
                UpdateCar {
                    owner: Some(None),
                    is_available: Some(false),
                },
            )
            .await?;

        info!(car_id = %car_id, "Car removed");
        Ok(())
    }

    async fn owned_car(&self, principal_id: Uuid, car_id: Uuid) -> CarRentResult<Car> {
        let car = self.cars.get_by_id(car_id).await?;
        if let Err(e) = car.ensure_owned_by(principal_id) {
            warn!(
                car_id = %car_id,
                principal_id = %principal_id,
                "Rejected mutation of a car not owned by the caller"
            );
            return Err(e);
        }
        Ok(car)
    }
}
