//! Hospital factory for creating test hospital entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hospitals with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::hospital::HospitalFactory;
///
/// let hospital = HospitalFactory::new(&db)
///     .name("Chulalongkorn Hospital")
///     .region("Bangkok")
///     .build()
///     .await?;
/// ```
pub struct HospitalFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
    district: String,
    province: String,
    postalcode: String,
    tel: Option<String>,
    region: String,
}

impl<'a> HospitalFactory<'a> {
    /// Creates a new HospitalFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hospital {id}"`
    /// - address: `"{id} Rama IV Road"`
    /// - district: `"Pathum Wan"`
    /// - province: `"Bangkok"`
    /// - postalcode: `"10330"`
    /// - tel: `None`
    /// - region: `"Central"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hospital {}", id),
            address: format!("{} Rama IV Road", id),
            district: "Pathum Wan".to_string(),
            province: "Bangkok".to_string(),
            postalcode: "10330".to_string(),
            tel: None,
            region: "Central".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn district(mut self, district: impl Into<String>) -> Self {
        self.district = district.into();
        self
    }

    pub fn province(mut self, province: impl Into<String>) -> Self {
        self.province = province.into();
        self
    }

    pub fn tel(mut self, tel: Option<String>) -> Self {
        self.tel = tel;
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Builds and inserts the hospital entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::hospital::Model)` - Created hospital entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::hospital::Model, DbErr> {
        entity::hospital::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            district: ActiveValue::Set(self.district),
            province: ActiveValue::Set(self.province),
            postalcode: ActiveValue::Set(self.postalcode),
            tel: ActiveValue::Set(self.tel),
            region: ActiveValue::Set(self.region),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hospital with default values.
pub async fn create_hospital(db: &DatabaseConnection) -> Result<entity::hospital::Model, DbErr> {
    HospitalFactory::new(db).build().await
}
