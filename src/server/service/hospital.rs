use sea_orm::DatabaseConnection;

use crate::server::{
    data::hospital::HospitalRepository,
    error::AppError,
    model::hospital::{
        CreateHospitalParams, Hospital, HospitalFilter, PaginatedHospitals, UpdateHospitalParams,
    },
};

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("No hospital with the id of {}", id))
}

fn duplicate_name(name: &str) -> AppError {
    AppError::BadRequest(format!("A hospital named '{}' already exists", name))
}

pub struct HospitalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HospitalService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of hospitals with the total match count
    pub async fn get_paginated(
        &self,
        filter: HospitalFilter,
    ) -> Result<PaginatedHospitals, AppError> {
        let repo = HospitalRepository::new(self.db);

        let (hospitals, total) = repo.get_paginated(&filter).await?;

        Ok(PaginatedHospitals {
            hospitals,
            total,
            page: filter.page,
            limit: filter.limit,
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Hospital, AppError> {
        let repo = HospitalRepository::new(self.db);

        repo.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Creates a hospital, rejecting names already in use
    pub async fn create(&self, params: CreateHospitalParams) -> Result<Hospital, AppError> {
        let repo = HospitalRepository::new(self.db);

        if repo.name_taken(&params.name, None).await? {
            return Err(duplicate_name(&params.name));
        }

        let hospital = repo.create(params).await?;

        tracing::info!("Created hospital {} ({})", hospital.id, hospital.name);

        Ok(hospital)
    }

    /// Applies a partial update; renaming onto another hospital's name is rejected
    pub async fn update(
        &self,
        id: i32,
        params: UpdateHospitalParams,
    ) -> Result<Hospital, AppError> {
        let repo = HospitalRepository::new(self.db);

        if let Some(name) = &params.name {
            if repo.name_taken(name, Some(id)).await? {
                return Err(duplicate_name(name));
            }
        }

        repo.update(id, params).await?.ok_or_else(|| not_found(id))
    }
}
