use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::hospital::HospitalSummaryDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AppointmentDto {
    pub id: i32,
    pub appt_date: DateTime<Utc>,
    pub user_id: i32,
    pub hospital: HospitalSummaryDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAppointmentDto {
    pub hospital_id: i32,
    /// RFC 3339 timestamp, e.g. `2026-11-02T09:30:00Z`
    pub appt_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct UpdateAppointmentDto {
    pub hospital_id: Option<i32>,
    pub appt_date: Option<DateTime<Utc>>,
}

/// Query string accepted by the appointment listing endpoint.
#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AppointmentQueryDto {
    /// Restrict an admin listing to a single hospital
    pub hospital_id: Option<i32>,
}
