use super::*;

#[tokio::test]
async fn finds_user_by_id_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("niran@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let by_id = repo.find_by_id(user.id).await?;
    assert_eq!(by_id.map(|u| u.email), Some("niran@example.com".to_string()));

    let by_email = repo.find_by_email("niran@example.com").await?;
    assert_eq!(by_email.map(|u| u.id), Some(user.id));

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_id(99999).await?.is_none());
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
