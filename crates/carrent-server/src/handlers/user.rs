//! Current-user and health handlers.

use carrent_core::models::user::User;
use serde::Serialize;

use crate::extractor::CurrentUser;
use crate::response::{ApiResponse, ApiResult};

#[derive(Debug, Serialize)]
pub struct UserData {
    pub user: User,
}

pub async fn get_user_data(current: CurrentUser) -> ApiResult<UserData> {
    Ok(ApiResponse::ok(UserData { user: current.user }))
}

pub async fn health() -> &'static str {
    "Server is running"
}
