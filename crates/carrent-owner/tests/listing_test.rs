//! Integration tests for the car listing service over in-memory SurrealDB.

mod common;

use carrent_core::error::{CarRentError, CarRentResult};
use carrent_core::models::car::{Car, CreateCar, UpdateCar};
use carrent_core::repository::CarRepository;
use carrent_db::repository::SurrealCarRepository;
use carrent_owner::{CarListingService, ImagePolicies};
use common::{RecordingImageStore, complete_draft, image, memory_db};
use surrealdb::engine::local::Db;
use uuid::Uuid;

type Service = CarListingService<SurrealCarRepository<Db>, RecordingImageStore>;

async fn setup() -> (Service, RecordingImageStore) {
    let cars = SurrealCarRepository::new(memory_db().await);
    let images = RecordingImageStore::default();
    let service = CarListingService::new(cars, images.clone(), ImagePolicies::default().cars);
    (service, images)
}

#[tokio::test]
async fn add_car_uploads_and_persists_listing() {
    let (service, images) = setup().await;
    let owner = Uuid::new_v4();

    let car = service
        .add_car(owner, complete_draft("Toyota"), image("corolla.jpg"))
        .await
        .unwrap();

    assert_eq!(car.owner, Some(owner));
    assert_eq!(car.brand, "Toyota");
    assert_eq!(car.fuel_type, "Petrol");
    assert_eq!(car.seating_capacity, 5);
    assert!(car.is_available);
    assert_eq!(
        car.image,
        "https://ik.test/tr:w-1280,q-auto,f-webp/cars/corolla.jpg"
    );
    assert_eq!(
        images.uploads(),
        vec![("/cars".to_string(), "corolla.jpg".to_string())]
    );
}

#[tokio::test]
async fn add_car_with_missing_field_uploads_nothing() {
    let (service, images) = setup().await;
    let owner = Uuid::new_v4();

    let mut draft = complete_draft("Toyota");
    draft.brand = None;

    let err = service
        .add_car(owner, draft, image("corolla.jpg"))
        .await
        .unwrap_err();

    assert!(matches!(err, CarRentError::Validation { .. }));
    assert!(images.uploads().is_empty());
    assert!(service.list_owner_cars(owner).await.unwrap().is_empty());
}

#[tokio::test]
async fn add_car_fails_when_upload_fails() {
    let cars = SurrealCarRepository::new(memory_db().await);
    let service = CarListingService::new(
        cars,
        RecordingImageStore::failing_uploads(),
        ImagePolicies::default().cars,
    );
    let owner = Uuid::new_v4();

    let err = service
        .add_car(owner, complete_draft("Toyota"), image("corolla.jpg"))
        .await
        .unwrap_err();

    assert!(matches!(err, CarRentError::Upload(_)));
    assert!(service.list_owner_cars(owner).await.unwrap().is_empty());
}

/// Car repository whose inserts always fail.
struct RejectingCars;

impl CarRepository for RejectingCars {
    async fn create(&self, _input: CreateCar) -> CarRentResult<Car> {
        Err(CarRentError::Database("write rejected".into()))
    }

    async fn get_by_id(&self, id: Uuid) -> CarRentResult<Car> {
        Err(CarRentError::not_found("car", id))
    }

    async fn list_by_owner(&self, _owner: Uuid) -> CarRentResult<Vec<Car>> {
        Ok(Vec::new())
    }

    async fn update(&self, id: Uuid, _input: UpdateCar) -> CarRentResult<Car> {
        Err(CarRentError::not_found("car", id))
    }
}

#[tokio::test]
async fn failed_persist_removes_uploaded_image() {
    let images = RecordingImageStore::default();
    let service =
        CarListingService::new(RejectingCars, images.clone(), ImagePolicies::default().cars);

    let err = service
        .add_car(Uuid::new_v4(), complete_draft("Toyota"), image("corolla.jpg"))
        .await
        .unwrap_err();

    assert!(matches!(err, CarRentError::Database(_)));
    assert_eq!(images.deletes(), vec!["file_1".to_string()]);
}

#[tokio::test]
async fn failed_cleanup_still_reports_persist_error() {
    let images = RecordingImageStore::default().failing_deletes();
    let service =
        CarListingService::new(RejectingCars, images.clone(), ImagePolicies::default().cars);

    let err = service
        .add_car(Uuid::new_v4(), complete_draft("Toyota"), image("corolla.jpg"))
        .await
        .unwrap_err();

    assert!(matches!(err, CarRentError::Database(_)));
    assert_eq!(images.deletes().len(), 1);
}

#[tokio::test]
async fn list_owner_cars_only_returns_own_cars() {
    let (service, _) = setup().await;
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let first = service
        .add_car(alice, complete_draft("Audi"), image("a.jpg"))
        .await
        .unwrap();
    service
        .add_car(bob, complete_draft("BMW"), image("b.jpg"))
        .await
        .unwrap();
    let second = service
        .add_car(alice, complete_draft("Citroen"), image("c.jpg"))
        .await
        .unwrap();

    let ids: Vec<Uuid> = service
        .list_owner_cars(alice)
        .await
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);

    assert!(service.list_owner_cars(Uuid::new_v4()).await.unwrap().is_empty());
}

#[tokio::test]
async fn toggle_twice_restores_availability() {
    let (service, _) = setup().await;
    let owner = Uuid::new_v4();
    let car = service
        .add_car(owner, complete_draft("Kia"), image("k.jpg"))
        .await
        .unwrap();

    let toggled = service.toggle_availability(owner, car.id).await.unwrap();
    assert!(!toggled.is_available);

    let restored = service.toggle_availability(owner, car.id).await.unwrap();
    assert!(restored.is_available);
}

#[tokio::test]
async fn toggle_by_non_owner_is_rejected_and_leaves_car_unchanged() {
    let (service, _) = setup().await;
    let owner = Uuid::new_v4();
    let car = service
        .add_car(owner, complete_draft("Kia"), image("k.jpg"))
        .await
        .unwrap();

    let err = service
        .toggle_availability(Uuid::new_v4(), car.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CarRentError::AuthorizationDenied { ref reason } if reason == "Unauthorized"
    ));

    let cars = service.list_owner_cars(owner).await.unwrap();
    assert!(cars[0].is_available);
}

#[tokio::test]
async fn toggle_unknown_car_is_not_found() {
    let (service, _) = setup().await;

    let err = service
        .toggle_availability(Uuid::new_v4(), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, CarRentError::NotFound { .. }));
}

#[tokio::test]
async fn delete_detaches_car_and_blocks_further_mutation() {
    let (service, _) = setup().await;
    let owner = Uuid::new_v4();
    let car = service
        .add_car(owner, complete_draft("Mazda"), image("m.jpg"))
        .await
        .unwrap();

    service.delete_car(owner, car.id).await.unwrap();
    assert!(service.list_owner_cars(owner).await.unwrap().is_empty());

    let err = service.toggle_availability(owner, car.id).await.unwrap_err();
    assert!(matches!(err, CarRentError::AuthorizationDenied { .. }));

    let err = service.delete_car(owner, car.id).await.unwrap_err();
    assert!(matches!(err, CarRentError::AuthorizationDenied { .. }));
}

#[tokio::test]
async fn delete_by_non_owner_keeps_car_listed() {
    let (service, _) = setup().await;
    let owner = Uuid::new_v4();
    let car = service
        .add_car(owner, complete_draft("Mazda"), image("m.jpg"))
        .await
        .unwrap();

    let err = service.delete_car(Uuid::new_v4(), car.id).await.unwrap_err();
    assert!(matches!(err, CarRentError::AuthorizationDenied { .. }));
    assert_eq!(service.list_owner_cars(owner).await.unwrap().len(), 1);
}
