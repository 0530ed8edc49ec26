use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        hospital::{
            CreateHospitalDto, HospitalDto, HospitalListDto, HospitalQueryDto, UpdateHospitalDto,
        },
    },
    server::{
        error::AppError,
        model::hospital::{CreateHospitalParams, HospitalFilter, UpdateHospitalParams},
        service::hospital::HospitalService,
        state::AppState,
    },
};

/// Tag for grouping hospital endpoints in OpenAPI documentation
pub static HOSPITAL_TAG: &str = "hospitals";

/// List hospitals.
///
/// Supports equality filters on region, province and district, multi-key sorting and
/// page-based pagination. Public endpoint.
///
/// # Returns
/// - `200 OK` - One page of hospitals with next/prev page links
/// - `400 Bad Request` - Invalid paging values or unknown sort field
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/hospitals",
    tag = HOSPITAL_TAG,
    params(HospitalQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved hospitals", body = HospitalListDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hospitals(
    State(state): State<AppState>,
    Query(query): Query<HospitalQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = HospitalService::new(&state.db);

    let filter = HospitalFilter::from_query(query)?;
    let page = service.get_paginated(filter).await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Get a single hospital.
#[utoipa::path(
    get,
    path = "/api/v1/hospitals/{id}",
    tag = HOSPITAL_TAG,
    params(
        ("id" = i32, Path, description = "Hospital ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved hospital", body = DataDto<HospitalDto>),
        (status = 404, description = "Hospital not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hospital(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = HospitalService::new(&state.db);

    let hospital = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(DataDto::new(hospital.into_dto()))))
}

/// Create a hospital.
///
/// # Returns
/// - `201 Created` - The created hospital
/// - `400 Bad Request` - Missing or invalid field, or the name is already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/hospitals",
    tag = HOSPITAL_TAG,
    request_body = CreateHospitalDto,
    responses(
        (status = 201, description = "Successfully created hospital", body = DataDto<HospitalDto>),
        (status = 400, description = "Invalid hospital data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hospital(
    State(state): State<AppState>,
    Json(payload): Json<CreateHospitalDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = HospitalService::new(&state.db);

    let params = CreateHospitalParams::from_dto(payload)?;
    let hospital = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(hospital.into_dto()))))
}

/// Update a hospital.
///
/// Partial update; absent fields keep their values and an empty body returns the
/// current record. The route table binds both `PUT` and `DELETE` on
/// `/api/v1/hospitals/{id}` to this handler, so a `DELETE` never removes anything.
///
/// # Returns
/// - `200 OK` - The hospital after the update
/// - `400 Bad Request` - Malformed JSON, invalid field, or the new name is taken
/// - `404 Not Found` - No hospital with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    method(put, delete),
    path = "/api/v1/hospitals/{id}",
    tag = HOSPITAL_TAG,
    params(
        ("id" = i32, Path, description = "Hospital ID")
    ),
    request_body(content = UpdateHospitalDto, description = "Fields to change; may be omitted"),
    responses(
        (status = 200, description = "Successfully updated hospital", body = DataDto<HospitalDto>),
        (status = 400, description = "Invalid hospital data", body = ErrorDto),
        (status = 404, description = "Hospital not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_hospital(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let service = HospitalService::new(&state.db);

    let payload = if body.iter().all(u8::is_ascii_whitespace) {
        UpdateHospitalDto::default()
    } else {
        serde_json::from_slice::<UpdateHospitalDto>(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?
    };

    let params = UpdateHospitalParams::from_dto(payload)?;
    let hospital = service.update(id, params).await?;

    Ok((StatusCode::OK, Json(DataDto::new(hospital.into_dto()))))
}
