use super::*;

/// Tests key lookup with translations attached.
///
/// Expected: Ok(Some) with the "zh-TW" translation loaded
#[tokio::test]
async fn loads_translations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    factory::create_language(db, "zh-TW").await?;

    let repo = SettingRepository::new(db);
    let created = repo.create(&setting("site_title", "general", true)).await?;
    repo.create_translation(
        created.id,
        &SettingTranslationParams {
            language_code: "zh-TW".to_string(),
            value: "網站".to_string(),
        },
    )
    .await?;

    let found = repo.get_by_key("site_title").await?.unwrap();

    assert_eq!(found.setting.id, created.id);
    assert_eq!(found.translations.len(), 1);
    assert_eq!(found.translations[0].value, "網站");

    Ok(())
}

/// Tests that a tombstoned key is no longer found.
///
/// Expected: Ok(None)
#[tokio::test]
async fn hides_tombstoned_setting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);
    let created = repo.create(&setting("footer", "general", false)).await?;
    repo.tombstone(created.id).await?;

    assert!(repo.get_by_key("footer").await?.is_none());

    Ok(())
}
