//! Owner-facing handlers: car listings, dashboard, role and profile image.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use carrent_core::error::CarRentError;
use carrent_core::image::ImageFile;
use carrent_core::models::car::{Car, CarDraft};
use carrent_core::models::dashboard::DashboardSummary;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::extractor::CurrentUser;
use crate::response::{
    ApiError, ApiResponse, ApiResult, invalid_json, invalid_multipart, multipart_error,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarIdRequest {
    pub car_id: String,
}

impl CarIdRequest {
    /// An id that is not a UUID cannot name any stored car.
    fn car_id(&self) -> Result<Uuid, ApiError> {
        Uuid::parse_str(&self.car_id)
            .map_err(|_| ApiError(CarRentError::not_found("car", &self.car_id)))
    }
}

#[derive(Debug, Serialize)]
pub struct CarBody {
    pub car: Car,
}

#[derive(Debug, Serialize)]
pub struct CarsBody {
    pub cars: Vec<Car>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardBody {
    pub dashboard_data: DashboardSummary,
}

#[derive(Debug, Serialize)]
pub struct ImageBody {
    pub image: String,
}

/// Fields of an owner multipart form.
#[derive(Default)]
struct UploadForm {
    image: Option<ImageFile>,
    car_data: Option<String>,
}

async fn read_form(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<UploadForm, ApiError> {
    let mut multipart = multipart.map_err(invalid_multipart)?;
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                form.image = Some(ImageFile::new(file_name, bytes));
            }
            "carData" => {
                form.car_data = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }
    Ok(form)
}

fn require_image(image: Option<ImageFile>) -> Result<ImageFile, ApiError> {
    image.ok_or_else(|| {
        ApiError(CarRentError::Validation {
            message: "image file is required".into(),
        })
    })
}

pub async fn change_role(State(state): State<AppState>, current: CurrentUser) -> ApiResult {
    state.profile().become_owner(current.user.id).await?;
    Ok(ApiResponse::message("Now you can list cars"))
}

pub async fn add_car(
    State(state): State<AppState>,
    current: CurrentUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<CarBody> {
    let form = read_form(multipart).await?;

    let raw = form.car_data.unwrap_or_default();
    let draft: CarDraft = serde_json::from_str(&raw).map_err(|e| {
        ApiError(CarRentError::Validation {
            message: format!("invalid carData: {e}"),
        })
    })?;
    let image = require_image(form.image)?;

    let car = state.listing().add_car(current.user.id, draft, image).await?;
    Ok(ApiResponse::ok(CarBody { car }).with_message("Car added successfully"))
}

pub async fn list_owner_cars(
    State(state): State<AppState>,
    current: CurrentUser,
) -> ApiResult<CarsBody> {
    let cars = state.listing().list_owner_cars(current.user.id).await?;
    Ok(ApiResponse::ok(CarsBody { cars }))
}

pub async fn toggle_car(
    State(state): State<AppState>,
    current: CurrentUser,
    body: Result<Json<CarIdRequest>, JsonRejection>,
) -> ApiResult<CarBody> {
    let Json(req) = body.map_err(invalid_json)?;

    let car = state
        .listing()
        .toggle_availability(current.user.id, req.car_id()?)
        .await?;
    Ok(ApiResponse::ok(CarBody { car }).with_message("Car availability toggled"))
}

pub async fn delete_car(
    State(state): State<AppState>,
    current: CurrentUser,
    body: Result<Json<CarIdRequest>, JsonRejection>,
) -> ApiResult {
    let Json(req) = body.map_err(invalid_json)?;

    state
        .listing()
        .delete_car(current.user.id, req.car_id()?)
        .await?;
    Ok(ApiResponse::message("Car Removed"))
}

pub async fn dashboard(
    State(state): State<AppState>,
    current: CurrentUser,
) -> ApiResult<DashboardBody> {
    let dashboard_data = state
        .dashboard()
        .compute_dashboard(current.principal())
        .await?;
    Ok(ApiResponse::ok(DashboardBody { dashboard_data }))
}

pub async fn update_user_image(
    State(state): State<AppState>,
    current: CurrentUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<ImageBody> {
    let form = read_form(multipart).await?;
    let image = require_image(form.image)?;

    let image = state
        .profile()
        .update_user_image(current.user.id, image)
        .await?;
    Ok(ApiResponse::ok(ImageBody { image }).with_message("Image updated successfully"))
}
