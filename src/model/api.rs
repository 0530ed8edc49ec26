use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Success envelope wrapping a single payload.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct DataDto<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataDto<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Success envelope wrapping a list payload.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ListDto<T> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> ListDto<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Empty payload returned by delete and logout endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct EmptyDto {}
