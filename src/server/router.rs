use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        appointment::{
            self, create_appointment, delete_appointment, get_appointment, get_appointments,
            update_appointment,
        },
        auth::{self, get_me, login, logout, register},
        hospital::{self, create_hospital, get_hospital, get_hospitals, update_hospital},
    },
    error::handle_panic,
    middleware::security::SecurityPipeline,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Hospital Booking API", description = "Hospitals, accounts and appointment booking"),
    paths(
        hospital::get_hospitals,
        hospital::get_hospital,
        hospital::create_hospital,
        hospital::update_hospital,
        auth::register,
        auth::login,
        auth::get_me,
        auth::logout,
        appointment::get_appointments,
        appointment::get_appointment,
        appointment::create_appointment,
        appointment::update_appointment,
        appointment::delete_appointment,
    ),
    tags(
        (name = "hospitals", description = "Hospital directory"),
        (name = "auth", description = "Registration and session login"),
        (name = "appointments", description = "Appointment booking")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/hospitals", get(get_hospitals).post(create_hospital))
        .route(
            "/api/v1/hospitals/{id}",
            get(get_hospital)
                .put(update_hospital)
                .delete(update_hospital),
        )
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/me", get(get_me))
        .route("/api/v1/auth/logout", get(logout))
        .route(
            "/api/v1/appointments",
            get(get_appointments).post(create_appointment),
        )
        .route(
            "/api/v1/appointments/{id}",
            get(get_appointment)
                .put(update_appointment)
                .delete(delete_appointment),
        )
}

/// Assembles the complete application.
///
/// The session layer wraps the API routes only; the API documentation sits beside
/// them, and both are wrapped by [`with_middleware`].
pub fn build_app(
    state: AppState,
    session: SessionManagerLayer<SqliteStore>,
    config: &Config,
) -> Router {
    let mut app = router().layer(session).with_state(state);

    if config.api_docs {
        app = app.merge(
            SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    with_middleware(app, config)
}

/// Wraps `app` in the request-wide layers.
///
/// Outermost first: tracing, panic isolation, then the security pipeline.
pub fn with_middleware(app: Router, config: &Config) -> Router {
    let pipeline = SecurityPipeline::from_config(&config.security);
    tracing::debug!("Security pipeline: {}", pipeline.stage_names().join(" -> "));

    pipeline
        .apply(app)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}
