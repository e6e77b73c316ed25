//! Resolves the caller of a request from its bearer token.

use axum::RequestPartsExt;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use carrent_auth::{AuthError, decode_access_token};
use carrent_core::error::CarRentError;
use carrent_core::models::principal::Principal;
use carrent_core::models::user::User;
use carrent_core::repository::UserRepository;
use tracing::debug;

use crate::response::ApiError;
use crate::state::AppState;

/// The caller of a request, resolved from its bearer token to a stored
/// user.
pub struct CurrentUser {
    pub user: User,
}

impl CurrentUser {
    pub fn principal(&self) -> Principal {
        Principal::from(&self.user)
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AuthError::MissingToken)?;

        let claims = decode_access_token(bearer.token(), state.auth())?;
        let user_id = claims.user_id()?;

        let user = state.users().get_by_id(user_id).await.map_err(|e| match e {
            CarRentError::NotFound { .. } => {
                debug!(user_id = %user_id, "Token subject has no user record");
                CarRentError::AuthenticationFailed {
                    reason: "unknown user".into(),
                }
            }
            other => other,
        })?;

        Ok(Self { user })
    }
}
