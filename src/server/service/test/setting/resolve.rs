use super::*;

/// Tests value resolution for a translatable setting.
///
/// Verifies that a language with a translation gets the translated value and a
/// language without one falls back to the base value.
///
/// Expected: translated value for "zh-TW", base value for "ja" and for no language
#[tokio::test]
async fn prefers_translation_then_base() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    factory::create_language(db, "zh-TW").await?;

    let service = SettingService::new(db);
    service
        .create(site_title(), vec![translation("zh-TW", "巴別")])
        .await?;

    let zh = service.get_by_key("site_title").await?.resolve(Some("zh-TW"));
    let ja = service.get_by_key("site_title").await?.resolve(Some("ja"));
    let base = service.get_by_key("site_title").await?.resolve(None);

    assert_eq!(zh.value, "巴別");
    assert_eq!(zh.language_code.as_deref(), Some("zh-TW"));
    assert_eq!(ja.value, "Babelpress");
    assert!(ja.language_code.is_none());
    assert_eq!(base.value, "Babelpress");

    Ok(())
}

/// Tests that translations are ignored for non-translatable settings.
///
/// Expected: the base value even when a translation exists
#[tokio::test]
async fn ignores_translations_when_not_translatable() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    factory::create_language(db, "zh-TW").await?;

    let service = SettingService::new(db);
    service
        .create(
            CreateSettingParams {
                is_translatable: false,
                ..site_title()
            },
            vec![translation("zh-TW", "巴別")],
        )
        .await?;

    let resolved = service.get_by_key("site_title").await?.resolve(Some("zh-TW"));

    assert_eq!(resolved.value, "Babelpress");

    Ok(())
}

/// Tests looking up a missing key.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SettingService::new(db).get_by_key("missing").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
