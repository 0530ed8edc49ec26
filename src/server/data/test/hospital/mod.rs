use crate::server::{
    data::hospital::HospitalRepository,
    model::hospital::{
        CreateHospitalParams, HospitalFilter, HospitalSort, HospitalSortField, SortOrder,
        UpdateHospitalParams,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update;

fn create_params(name: &str) -> CreateHospitalParams {
    CreateHospitalParams {
        name: name.to_string(),
        address: "2 Wang Lang Road".to_string(),
        district: "Bangkok Noi".to_string(),
        province: "Bangkok".to_string(),
        postalcode: "10700".to_string(),
        tel: Some("02-419-7000".to_string()),
        region: "Central".to_string(),
    }
}

fn filter() -> HospitalFilter {
    HospitalFilter {
        region: None,
        province: None,
        district: None,
        sort: vec![HospitalSort {
            field: HospitalSortField::Name,
            order: SortOrder::Asc,
        }],
        page: 1,
        limit: 25,
    }
}
