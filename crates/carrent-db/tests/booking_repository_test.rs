//! Integration tests for the Booking repository using in-memory SurrealDB.

use carrent_core::error::CarRentError;
use carrent_core::models::booking::{BookingStatus, CreateBooking};
use carrent_core::repository::BookingRepository;
use carrent_db::repository::SurrealBookingRepository;
use chrono::{Duration, Utc};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};
use uuid::Uuid;

async fn setup() -> SurrealBookingRepository<Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    carrent_db::run_migrations(&db).await.unwrap();
    SurrealBookingRepository::new(db)
}

#[tokio::test]
async fn create_and_get_booking() {
    let repo = setup().await;
    let car = Uuid::new_v4();
    let owner = Uuid::new_v4();

    let booking = repo
        .create(CreateBooking {
            car,
            owner,
            status: BookingStatus::Confirmed,
            price: 240.0,
            created_at: None,
        })
        .await
        .unwrap();
    assert_eq!(booking.car, car);
    assert_eq!(booking.owner, owner);
    assert_eq!(booking.status, BookingStatus::Confirmed);

    let fetched = repo.get_by_id(booking.id).await.unwrap();
    assert_eq!(fetched.price, 240.0);
    assert_eq!(fetched.status, BookingStatus::Confirmed);
}

#[tokio::test]
async fn list_by_owner_is_newest_first() {
    let repo = setup().await;
    let owner = Uuid::new_v4();
    let now = Utc::now();

    let mut expected = Vec::new();
    for (minutes_ago, status) in [
        (30, BookingStatus::Pending),
        (10, BookingStatus::Confirmed),
        (20, BookingStatus::Cancelled),
    ] {
        let b = repo
            .create(CreateBooking {
                car: Uuid::new_v4(),
                owner,
                status,
                price: 50.0,
                created_at: Some(now - Duration::minutes(minutes_ago)),
            })
            .await
            .unwrap();
        expected.push((minutes_ago, b.id));
    }
    repo.create(CreateBooking {
        car: Uuid::new_v4(),
        owner: Uuid::new_v4(),
        status: BookingStatus::Pending,
        price: 10.0,
        created_at: None,
    })
    .await
    .unwrap();

    expected.sort_by_key(|(minutes_ago, _)| *minutes_ago);
    let expected_ids: Vec<Uuid> = expected.into_iter().map(|(_, id)| id).collect();

    let listed = repo.list_by_owner(owner).await.unwrap();
    let ids: Vec<Uuid> = listed.iter().map(|b| b.id).collect();
    assert_eq!(ids, expected_ids);
}

#[tokio::test]
async fn missing_booking_is_not_found() {
    let repo = setup().await;
    assert!(matches!(
        repo.get_by_id(Uuid::new_v4()).await,
        Err(CarRentError::NotFound { .. })
    ));
}
