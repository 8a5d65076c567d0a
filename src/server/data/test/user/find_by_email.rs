use super::*;

/// Tests email lookup.
///
/// Expected: Ok(Some) for a known email, Ok(None) for an unknown one
#[tokio::test]
async fn finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("editor@example.com")
        .role(UserRole::Editor)
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(
        repo.find_by_email("editor@example.com").await?.map(|u| u.id),
        Some(user.id)
    );
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
