use super::*;

/// Tests paging through hospitals.
///
/// Verifies that the total counts every match while each page only holds `limit` rows.
///
/// Expected: Ok with 2 + 1 hospitals across two pages and total 3
#[tokio::test]
async fn pages_through_hospitals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["C Hospital", "A Hospital", "B Hospital"] {
        factory::hospital::HospitalFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = HospitalRepository::new(db);

    let mut page_filter = filter();
    page_filter.limit = 2;
    let (first, total) = repo.get_paginated(&page_filter).await?;
    assert_eq!(total, 3);
    assert_eq!(
        first.iter().map(|h| h.name.as_str()).collect::<Vec<_>>(),
        vec!["A Hospital", "B Hospital"]
    );

    page_filter.page = 2;
    let (second, total) = repo.get_paginated(&page_filter).await?;
    assert_eq!(total, 3);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "C Hospital");

    Ok(())
}

/// Tests equality filters on region, province and district.
///
/// Expected: Ok with only the matching hospitals
#[tokio::test]
async fn filters_by_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::hospital::HospitalFactory::new(db)
        .name("Maharaj Nakorn Chiang Mai")
        .region("North")
        .province("Chiang Mai")
        .district("Mueang")
        .build()
        .await?;
    factory::hospital::HospitalFactory::new(db)
        .name("Chiangrai Prachanukroh")
        .region("North")
        .province("Chiang Rai")
        .build()
        .await?;
    factory::hospital::create_hospital(db).await?;

    let repo = HospitalRepository::new(db);

    let mut north = filter();
    north.region = Some("North".to_string());
    let (hospitals, total) = repo.get_paginated(&north).await?;
    assert_eq!(total, 2);
    assert!(hospitals.iter().all(|h| h.region == "North"));

    north.province = Some("Chiang Mai".to_string());
    let (hospitals, total) = repo.get_paginated(&north).await?;
    assert_eq!(total, 1);
    assert_eq!(hospitals[0].name, "Maharaj Nakorn Chiang Mai");

    north.district = Some("Hang Dong".to_string());
    let (hospitals, total) = repo.get_paginated(&north).await?;
    assert_eq!(total, 0);
    assert!(hospitals.is_empty());

    Ok(())
}

/// Tests multi-key sorting with a descending key.
///
/// Expected: Ok with hospitals ordered by region, then name descending
#[tokio::test]
async fn sorts_by_multiple_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (name, region) in [
        ("Alpha", "South"),
        ("Bravo", "North"),
        ("Charlie", "North"),
    ] {
        factory::hospital::HospitalFactory::new(db)
            .name(name)
            .region(region)
            .build()
            .await?;
    }

    let mut sorted = filter();
    sorted.sort = vec![
        HospitalSort {
            field: HospitalSortField::Region,
            order: SortOrder::Asc,
        },
        HospitalSort {
            field: HospitalSortField::Name,
            order: SortOrder::Desc,
        },
    ];

    let repo = HospitalRepository::new(db);
    let (hospitals, _) = repo.get_paginated(&sorted).await?;

    assert_eq!(
        hospitals.iter().map(|h| h.name.as_str()).collect::<Vec<_>>(),
        vec!["Charlie", "Bravo", "Alpha"]
    );

    Ok(())
}
