use super::*;

/// Tests seeding an empty registry.
///
/// Verifies that English becomes the default, Traditional Chinese follows, and a
/// second run adds nothing.
///
/// Expected: Ok with ["en", "zh-TW"] after two runs
#[tokio::test]
async fn seeds_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LanguageService::new(db);
    service.seed_defaults().await?;
    service.seed_defaults().await?;

    let languages = service.get_all(false).await?;
    let codes: Vec<&str> = languages.iter().map(|l| l.code.as_str()).collect();

    assert_eq!(codes, vec!["en", "zh-TW"]);
    assert!(languages[0].is_default);

    Ok(())
}
