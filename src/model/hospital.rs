use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HospitalDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub district: String,
    pub province: String,
    pub postalcode: String,
    pub tel: Option<String>,
    pub region: String,
    pub created_at: DateTime<Utc>,
}

/// Trimmed-down hospital embedded in appointment responses.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HospitalSummaryDto {
    pub id: i32,
    pub name: String,
    pub province: String,
    pub tel: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateHospitalDto {
    pub name: String,
    pub address: String,
    pub district: String,
    pub province: String,
    pub postalcode: String,
    #[serde(default)]
    pub tel: Option<String>,
    pub region: String,
}

/// Partial update; omitted fields keep their stored value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct UpdateHospitalDto {
    pub name: Option<String>,
    pub address: Option<String>,
    pub district: Option<String>,
    pub province: Option<String>,
    pub postalcode: Option<String>,
    pub tel: Option<String>,
    pub region: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PageRefDto {
    pub page: u64,
    pub limit: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct PaginationDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageRefDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageRefDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HospitalListDto {
    pub success: bool,
    pub count: usize,
    pub total: u64,
    pub pagination: PaginationDto,
    pub data: Vec<HospitalDto>,
}

/// Query string accepted by the hospital listing endpoint.
#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HospitalQueryDto {
    /// Page number starting at 1 (default: 1)
    pub page: Option<u64>,
    /// Items per page, 1 to 100 (default: 25)
    pub limit: Option<u64>,
    /// Comma separated sort keys, `-` prefix for descending (default: `name`)
    pub sort: Option<String>,
    pub region: Option<String>,
    pub province: Option<String>,
    pub district: Option<String>,
}
