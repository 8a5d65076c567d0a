use super::*;

/// Tests fetching a created tag back through its slug.
///
/// Verifies that each translation's slug resolves to the created tag in its own language
/// and that an omitted language falls back to the default language.
///
/// Expected: Ok with the created tag's id for every lookup
#[tokio::test]
async fn resolves_created_tag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    factory::create_language(db, "zh-TW").await?;

    let service = TagService::new(db);
    let created = service
        .create(vec![
            translation("en", "Renewable Energy", ""),
            translation("zh-TW", "再生能源", "zai-sheng"),
        ])
        .await?;

    let en = service
        .get_by_slug("renewable-energy", Some("en".to_string()))
        .await?;
    let zh = service
        .get_by_slug("zai-sheng", Some("zh-TW".to_string()))
        .await?;
    let fallback = service.get_by_slug("renewable-energy", None).await?;

    assert_eq!(en.tag.id, created.tag.id);
    assert_eq!(zh.tag.id, created.tag.id);
    assert_eq!(zh.translations[0].name, "再生能源");
    assert_eq!(fallback.tag.id, created.tag.id);

    Ok(())
}

/// Tests slug lookups that must miss.
///
/// Verifies that a slug from another language and a deleted tag's slug are not found.
///
/// Expected: Err(AppError::NotFound) for both
#[tokio::test]
async fn misses_foreign_and_deleted_slugs() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    factory::create_language(db, "zh-TW").await?;

    let service = TagService::new(db);
    let created = service.create(vec![translation("en", "Drought", "")]).await?;

    let foreign = service
        .get_by_slug("drought", Some("zh-TW".to_string()))
        .await;
    assert!(matches!(foreign, Err(AppError::NotFound(_))));

    service.delete(created.tag.id).await?;
    let deleted = service.get_by_slug("drought", None).await;
    assert!(matches!(deleted, Err(AppError::NotFound(_))));

    Ok(())
}
