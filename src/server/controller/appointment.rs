use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DataDto, EmptyDto, ErrorDto, ListDto},
        appointment::{
            AppointmentDto, AppointmentQueryDto, CreateAppointmentDto, UpdateAppointmentDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::appointment::{Appointment, CreateAppointmentParams},
        service::appointment::AppointmentService,
        state::AppState,
    },
};

/// Tag for grouping appointment endpoints in OpenAPI documentation
pub static APPOINTMENT_TAG: &str = "appointments";

/// List appointments.
///
/// Users get their own appointments; admins get every appointment and may narrow the
/// listing to one hospital. Sorted by appointment date.
///
/// # Access Control
/// - Logged-in user
///
/// # Returns
/// - `200 OK` - Appointments with embedded hospital summaries
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/appointments",
    tag = APPOINTMENT_TAG,
    params(AppointmentQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved appointments", body = ListDto<AppointmentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointments(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AppointmentQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = AppointmentService::new(&state.db);
    let appointments = service.list(&user, query.hospital_id).await?;

    let data = appointments.into_iter().map(Appointment::into_dto).collect();

    Ok((StatusCode::OK, Json(ListDto::new(data))))
}

/// Get a single appointment.
///
/// # Access Control
/// - Owner of the appointment or admin
#[utoipa::path(
    get,
    path = "/api/v1/appointments/{id}",
    tag = APPOINTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved appointment", body = DataDto<AppointmentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner of the appointment", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = AppointmentService::new(&state.db);
    let appointment = service.get_by_id(&user, id).await?;

    Ok((StatusCode::OK, Json(DataDto::new(appointment.into_dto()))))
}

/// Book an appointment for the logged-in user.
///
/// # Returns
/// - `201 Created` - The booked appointment
/// - `400 Bad Request` - The user already holds the maximum number of appointments
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Unknown hospital
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/appointments",
    tag = APPOINTMENT_TAG,
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Successfully booked appointment", body = DataDto<AppointmentDto>),
        (status = 400, description = "Appointment limit reached", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Hospital not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = AppointmentService::new(&state.db);
    let params = CreateAppointmentParams::from_dto(user.id, payload);
    let appointment = service.create(&user, params).await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(appointment.into_dto()))))
}

/// Move an appointment to another date or hospital.
///
/// # Access Control
/// - Owner of the appointment or admin
#[utoipa::path(
    put,
    path = "/api/v1/appointments/{id}",
    tag = APPOINTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    request_body = UpdateAppointmentDto,
    responses(
        (status = 200, description = "Successfully updated appointment", body = DataDto<AppointmentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner of the appointment", body = ErrorDto),
        (status = 404, description = "Appointment or hospital not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = AppointmentService::new(&state.db);
    let appointment = service.update(&user, id, payload.into()).await?;

    Ok((StatusCode::OK, Json(DataDto::new(appointment.into_dto()))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/appointments/{id}",
    tag = APPOINTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted appointment", body = DataDto<EmptyDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner of the appointment", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = AppointmentService::new(&state.db);
    service.delete(&user, id).await?;

    Ok((StatusCode::OK, Json(DataDto::new(EmptyDto::default()))))
}
