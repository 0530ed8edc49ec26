use super::*;

/// Tests creating a user.
///
/// Expected: Ok(Model) with the role stored by name
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Malee".to_string(),
            email: "malee@example.com".to_string(),
            role: Role::Admin,
            password_hash: "hash".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.role, "admin");
    assert_eq!(user.password_hash, "hash");

    Ok(())
}

/// Tests the unique constraint on e-mail addresses.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            name: "Second".to_string(),
            email: "taken@example.com".to_string(),
            role: Role::User,
            password_hash: "hash".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
