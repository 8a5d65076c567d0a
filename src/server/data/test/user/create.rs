use super::*;

/// Tests account creation.
///
/// Verifies that new accounts get the `user` role, `active` status and the supplied
/// hash rather than the raw password.
///
/// Expected: Ok with role User and status Active
#[tokio::test]
async fn creates_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(
            RegisterParams {
                username: "mei".to_string(),
                email: "mei@example.com".to_string(),
                password: "correct horse".to_string(),
                first_name: Some("Mei".to_string()),
                last_name: None,
            },
            "$argon2id$stub".to_string(),
        )
        .await?;

    assert_eq!(user.role, UserRole::User);
    assert_eq!(user.status, UserStatus::Active);
    assert_eq!(user.password_hash, "$argon2id$stub");
    assert_eq!(user.first_name.as_deref(), Some("Mei"));

    Ok(())
}
