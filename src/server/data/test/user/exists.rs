use super::*;

/// Tests username and email existence checks.
///
/// Expected: Ok(true) for taken values, Ok(false) otherwise
#[tokio::test]
async fn detects_taken_identifiers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("taken")
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.username_exists("taken").await?);
    assert!(!repo.username_exists("free").await?);
    assert!(repo.email_exists("taken@example.com").await?);
    assert!(!repo.email_exists("free@example.com").await?);

    Ok(())
}
