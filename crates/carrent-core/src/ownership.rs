//! Ownership guard for owner-scoped resources.

use uuid::Uuid;

use crate::error::{CarRentError, CarRentResult};
use crate::models::car::Car;

/// Returns `true` iff the resource is owned by `principal_id`.
///
/// A resource with no owner can never be authorized.
pub fn authorize(principal_id: Uuid, resource_owner: Option<Uuid>) -> bool {
    resource_owner == Some(principal_id)
}

/// Resources whose mutation is reserved to a single owning user.
pub trait OwnedResource {
    fn owner_id(&self) -> Option<Uuid>;

    fn is_owned_by(&self, principal_id: Uuid) -> bool {
        authorize(principal_id, self.owner_id())
    }

    /// Fails with the generic `Unauthorized` rejection when the
    /// principal is not the owner.
    fn ensure_owned_by(&self, principal_id: Uuid) -> CarRentResult<()> {
        if self.is_owned_by(principal_id) {
            Ok(())
        } else {
            Err(CarRentError::unauthorized())
        }
    }
}

impl OwnedResource for Car {
    fn owner_id(&self) -> Option<Uuid> {
        self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_owner_is_authorized() {
        let id = Uuid::new_v4();
        assert!(authorize(id, Some(id)));
    }

    #[test]
    fn different_owner_is_rejected() {
        assert!(!authorize(Uuid::new_v4(), Some(Uuid::new_v4())));
    }

    #[test]
    fn ownerless_resource_is_never_authorized() {
        assert!(!authorize(Uuid::new_v4(), None));
        assert!(!authorize(Uuid::nil(), None));
    }

    fn car(owner: Option<Uuid>) -> Car {
        let now = chrono::Utc::now();
        Car {
            id: Uuid::new_v4(),
            owner,
            brand: "Toyota".into(),
            model: "Corolla".into(),
            year: 2021,
            price_per_day: 45.0,
            category: "Sedan".into(),
            transmission: "Automatic".into(),
            fuel_type: "Petrol".into(),
            seating_capacity: 5,
            location: "Chicago".into(),
            description: "Clean".into(),
            image: "https://ik.test/cars/corolla.jpg".into(),
            is_available: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn ensure_owned_by_uses_generic_message() {
        let owner = Uuid::new_v4();
        let listed = car(Some(owner));
        let err = listed.ensure_owned_by(Uuid::new_v4()).unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized");
        assert!(listed.ensure_owned_by(owner).is_ok());
    }

    #[test]
    fn detached_car_rejects_its_former_owner() {
        let owner = Uuid::new_v4();
        let detached = car(None);
        assert!(!detached.is_owned_by(owner));
        assert!(matches!(
            detached.ensure_owned_by(owner),
            Err(CarRentError::AuthorizationDenied { .. })
        ));
    }
}
