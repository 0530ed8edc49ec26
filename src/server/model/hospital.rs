//! Hospital domain models, validated parameters and listing options.

use chrono::{DateTime, Utc};

use crate::{
    model::hospital::{
        CreateHospitalDto, HospitalDto, HospitalListDto, HospitalQueryDto, HospitalSummaryDto,
        PageRefDto, PaginationDto, UpdateHospitalDto,
    },
    server::{error::AppError, model::required},
};

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_POSTALCODE_LEN: usize = 5;
pub const DEFAULT_PAGE_LIMIT: u64 = 25;
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Hospital domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Hospital {
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

impl Hospital {
    /// Converts an entity model to the hospital domain model.
    pub fn from_entity(entity: entity::hospital::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            district: entity.district,
            province: entity.province,
            postalcode: entity.postalcode,
            tel: entity.tel,
            region: entity.region,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> HospitalDto {
        HospitalDto {
            id: self.id,
            name: self.name,
            address: self.address,
            district: self.district,
            province: self.province,
            postalcode: self.postalcode,
            tel: self.tel,
            region: self.region,
            created_at: self.created_at,
        }
    }

    pub fn into_summary_dto(self) -> HospitalSummaryDto {
        HospitalSummaryDto {
            id: self.id,
            name: self.name,
            province: self.province,
            tel: self.tel,
        }
    }
}

fn name(value: String) -> Result<String, AppError> {
    let value = required("name", value)?;
    if value.chars().count() > MAX_NAME_LEN {
        return Err(AppError::BadRequest(format!(
            "Name can not be more than {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(value)
}

fn postalcode(value: String) -> Result<String, AppError> {
    let value = required("postal code", value)?;
    if value.chars().count() > MAX_POSTALCODE_LEN {
        return Err(AppError::BadRequest(format!(
            "Postal Code can not be more than {} digits",
            MAX_POSTALCODE_LEN
        )));
    }
    Ok(value)
}

/// Blank telephone numbers are stored as absent.
fn tel(value: Option<String>) -> Option<String> {
    value
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Validated parameters for creating a hospital.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateHospitalParams {
    pub name: String,
    pub address: String,
    pub district: String,
    pub province: String,
    pub postalcode: String,
    pub tel: Option<String>,
    pub region: String,
}

impl CreateHospitalParams {
    /// Validates and trims the request payload.
    ///
    /// # Returns
    /// - `Ok(CreateHospitalParams)` - All required fields present and within limits
    /// - `Err(AppError::BadRequest)` - Blank required field or length limit exceeded
    pub fn from_dto(dto: CreateHospitalDto) -> Result<Self, AppError> {
        Ok(Self {
            name: name(dto.name)?,
            address: required("address", dto.address)?,
            district: required("district", dto.district)?,
            province: required("province", dto.province)?,
            postalcode: postalcode(dto.postalcode)?,
            tel: tel(dto.tel),
            region: required("region", dto.region)?,
        })
    }
}

/// Validated partial update for a hospital. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateHospitalParams {
    pub name: Option<String>,
    pub address: Option<String>,
    pub district: Option<String>,
    pub province: Option<String>,
    pub postalcode: Option<String>,
    pub tel: Option<String>,
    pub region: Option<String>,
}

impl UpdateHospitalParams {
    /// Validates the fields present in the payload with the same rules as creation.
    pub fn from_dto(dto: UpdateHospitalDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto.name.map(name).transpose()?,
            address: dto.address.map(|v| required("address", v)).transpose()?,
            district: dto.district.map(|v| required("district", v)).transpose()?,
            province: dto.province.map(|v| required("province", v)).transpose()?,
            postalcode: dto.postalcode.map(postalcode).transpose()?,
            tel: tel(dto.tel),
            region: dto.region.map(|v| required("region", v)).transpose()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HospitalSortField {
    Name,
    Province,
    District,
    Region,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HospitalSort {
    pub field: HospitalSortField,
    pub order: SortOrder,
}

/// Parses a sort expression such as `region,-name`.
///
/// Empty segments are ignored; an expression with no keys sorts by name.
pub fn parse_sort(expr: &str) -> Result<Vec<HospitalSort>, AppError> {
    let mut keys = Vec::new();

    for segment in expr.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (order, field) = match segment.strip_prefix('-') {
            Some(rest) => (SortOrder::Desc, rest),
            None => (SortOrder::Asc, segment),
        };

        let field = match field {
            "name" => HospitalSortField::Name,
            "province" => HospitalSortField::Province,
            "district" => HospitalSortField::District,
            "region" => HospitalSortField::Region,
            "created_at" | "createdAt" => HospitalSortField::CreatedAt,
            other => {
                return Err(AppError::BadRequest(format!(
                    "Cannot sort hospitals by '{}'",
                    other
                )))
            }
        };

        keys.push(HospitalSort { field, order });
    }

    if keys.is_empty() {
        keys.push(HospitalSort {
            field: HospitalSortField::Name,
            order: SortOrder::Asc,
        });
    }

    Ok(keys)
}

/// Filtering, ordering and paging options for listing hospitals.
#[derive(Debug, Clone, PartialEq)]
pub struct HospitalFilter {
    pub region: Option<String>,
    pub province: Option<String>,
    pub district: Option<String>,
    pub sort: Vec<HospitalSort>,
    /// 1-based page number
    pub page: u64,
    pub limit: u64,
}

impl HospitalFilter {
    /// Builds listing options from the query string.
    ///
    /// # Returns
    /// - `Ok(HospitalFilter)` - Options with defaults applied
    /// - `Err(AppError::BadRequest)` - Page or limit out of range, or unknown sort key
    pub fn from_query(query: HospitalQueryDto) -> Result<Self, AppError> {
        let page = query.page.unwrap_or(1);
        if page == 0 {
            return Err(AppError::BadRequest("Page must be at least 1".to_string()));
        }

        let limit = query.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        if limit == 0 || limit > MAX_PAGE_LIMIT {
            return Err(AppError::BadRequest(format!(
                "Limit must be between 1 and {}",
                MAX_PAGE_LIMIT
            )));
        }

        // The row offset must fit the database's signed 64-bit OFFSET.
        let in_range = (page - 1)
            .checked_mul(limit)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !in_range {
            return Err(AppError::BadRequest("Page is out of range".to_string()));
        }

        Ok(Self {
            region: query.region,
            province: query.province,
            district: query.district,
            sort: parse_sort(query.sort.as_deref().unwrap_or(""))?,
            page,
            limit,
        })
    }
}

/// One page of hospitals together with the total match count.
#[derive(Debug, Clone)]
pub struct PaginatedHospitals {
    pub hospitals: Vec<Hospital>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl PaginatedHospitals {
    /// Converts the page into the listing DTO with next/prev page links.
    pub fn into_dto(self) -> HospitalListDto {
        let mut pagination = PaginationDto::default();

        if self.page.saturating_mul(self.limit) < self.total {
            pagination.next = Some(PageRefDto {
                page: self.page.saturating_add(1),
                limit: self.limit,
            });
        }
        if self.page > 1 {
            pagination.prev = Some(PageRefDto {
                page: self.page - 1,
                limit: self.limit,
            });
        }

        let data: Vec<HospitalDto> = self.hospitals.into_iter().map(Hospital::into_dto).collect();

        HospitalListDto {
            success: true,
            count: data.len(),
            total: self.total,
            pagination,
            data,
        }
    }
}
