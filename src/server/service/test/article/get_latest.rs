use super::*;

/// Tests the latest listing's default limit.
///
/// Expected: Ok with 3 articles out of 4 published
#[tokio::test]
async fn applies_default_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let user = factory::create_user(db).await?;
    for title in ["One", "Two", "Three", "Four"] {
        factory::article::ArticleFactory::new(db, user.id)
            .published()
            .translation("en", title)
            .build()
            .await?;
    }

    let service = ArticleService::new(db);

    assert_eq!(service.get_latest(None, None).await?.len(), 3);
    assert_eq!(service.get_latest(None, Some(10)).await?.len(), 4);
    assert_eq!(service.get_latest(None, Some(0)).await?.len(), 3);

    Ok(())
}
