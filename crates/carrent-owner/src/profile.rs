//! Profile updates for the signed-in user: picture and role.

use carrent_core::error::CarRentResult;
use carrent_core::image::{ImageFile, ImageStore};
use carrent_core::models::user::{Role, UpdateUser, User};
use carrent_core::repository::UserRepository;
use tracing::info;
use uuid::Uuid;

use crate::config::ImagePolicy;
use crate::upload::{discard, upload_optimized};

pub struct ProfileService<U: UserRepository, I: ImageStore> {
    users: U,
    images: I,
    policy: ImagePolicy,
}

impl<U: UserRepository, I: ImageStore> ProfileService<U, I> {
    pub fn new(users: U, images: I, policy: ImagePolicy) -> Self {
        Self {
            users,
            images,
            policy,
        }
    }

    pub async fn get_user(&self, user_id: Uuid) -> CarRentResult<User> {
        self.users.get_by_id(user_id).await
    }

    /// Replace the profile picture of `user_id` and return its new URL.
    pub async fn update_user_image(
        &self,
        user_id: Uuid,
        image: ImageFile,
    ) -> CarRentResult<String> {
        let (uploaded, image_url) = upload_optimized(&self.images, image, &self.policy).await?;

        let updated = self
            .users
            .update(
                user_id,
                UpdateUser {
                    image: Some(Some(image_url.clone())),
                    ..Default::default()
                },
            )
            .await;

        if let Err(e) = updated {
            discard(&self.images, &uploaded).await;
            return Err(e);
        }

        info!(user_id = %user_id, "Profile image updated");
        Ok(image_url)
    }

    /// Grant the owner role, which unlocks car listing. Idempotent.
    pub async fn become_owner(&self, user_id: Uuid) -> CarRentResult<User> {
        let user = self
            .users
            .update(
                user_id,
                UpdateUser {
                    role: Some(Role::Owner),
                    ..Default::default()
                },
            )
            .await?;

        info!(user_id = %user_id, "User switched to owner role");
        Ok(user)
    }
}
