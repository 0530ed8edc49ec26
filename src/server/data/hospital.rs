//! Hospital data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::hospital::{
    CreateHospitalParams, Hospital, HospitalFilter, HospitalSortField, SortOrder,
    UpdateHospitalParams,
};

pub struct HospitalRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HospitalRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new hospital.
    pub async fn create(&self, params: CreateHospitalParams) -> Result<Hospital, DbErr> {
        let hospital = entity::hospital::ActiveModel {
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            district: ActiveValue::Set(params.district),
            province: ActiveValue::Set(params.province),
            postalcode: ActiveValue::Set(params.postalcode),
            tel: ActiveValue::Set(params.tel),
            region: ActiveValue::Set(params.region),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Hospital::from_entity(hospital))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Hospital>, DbErr> {
        let hospital = entity::prelude::Hospital::find_by_id(id).one(self.db).await?;

        Ok(hospital.map(Hospital::from_entity))
    }

    /// Checks whether another hospital already uses `name`.
    ///
    /// # Arguments
    /// - `name` - Hospital name to look up
    /// - `exclude_id` - Hospital to ignore, used when renaming an existing hospital
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Hospital::find()
            .filter(entity::hospital::Column::Name.eq(name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::hospital::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets one page of hospitals matching the filter, plus the total match count.
    ///
    /// Rows are ordered by the filter's sort keys, then by id so that pages are stable.
    pub async fn get_paginated(
        &self,
        filter: &HospitalFilter,
    ) -> Result<(Vec<Hospital>, u64), DbErr> {
        let mut query = entity::prelude::Hospital::find();

        if let Some(region) = &filter.region {
            query = query.filter(entity::hospital::Column::Region.eq(region.clone()));
        }
        if let Some(province) = &filter.province {
            query = query.filter(entity::hospital::Column::Province.eq(province.clone()));
        }
        if let Some(district) = &filter.district {
            query = query.filter(entity::hospital::Column::District.eq(district.clone()));
        }

        for key in &filter.sort {
            let column = match key.field {
                HospitalSortField::Name => entity::hospital::Column::Name,
                HospitalSortField::Province => entity::hospital::Column::Province,
                HospitalSortField::District => entity::hospital::Column::District,
                HospitalSortField::Region => entity::hospital::Column::Region,
                HospitalSortField::CreatedAt => entity::hospital::Column::CreatedAt,
            };
            query = match key.order {
                SortOrder::Asc => query.order_by_asc(column),
                SortOrder::Desc => query.order_by_desc(column),
            };
        }
        query = query.order_by_asc(entity::hospital::Column::Id);

        let paginator = query.paginate(self.db, filter.limit);
        let total = paginator.num_items().await?;
        let hospitals = paginator.fetch_page(filter.page.saturating_sub(1)).await?;

        Ok((
            hospitals.into_iter().map(Hospital::from_entity).collect(),
            total,
        ))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Hospital))` - The hospital after the update
    /// - `Ok(None)` - No hospital with this id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateHospitalParams,
    ) -> Result<Option<Hospital>, DbErr> {
        let Some(hospital) = entity::prelude::Hospital::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if params.is_empty() {
            return Ok(Some(Hospital::from_entity(hospital)));
        }

        let mut active: entity::hospital::ActiveModel = hospital.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(address) = params.address {
            active.address = ActiveValue::Set(address);
        }
        if let Some(district) = params.district {
            active.district = ActiveValue::Set(district);
        }
        if let Some(province) = params.province {
            active.province = ActiveValue::Set(province);
        }
        if let Some(postalcode) = params.postalcode {
            active.postalcode = ActiveValue::Set(postalcode);
        }
        if let Some(tel) = params.tel {
            active.tel = ActiveValue::Set(Some(tel));
        }
        if let Some(region) = params.region {
            active.region = ActiveValue::Set(region);
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Hospital::from_entity(updated)))
    }
}
