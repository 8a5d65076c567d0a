use super::*;

/// Tests slug lookup in one language.
///
/// Verifies that the tag is found through its slug in the given language and that only
/// that language's translation is loaded.
///
/// Expected: Ok(Some) with the zh-TW translation only
#[tokio::test]
async fn loads_only_matching_language() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    factory::create_language(db, "zh-TW").await?;
    let tag = factory::tag::TagFactory::new(db)
        .translation("en", "Energy")
        .translation("zh-TW", "能源")
        .build()
        .await?;

    let found = TagRepository::new(db)
        .find_by_slug("能源", "zh-TW")
        .await?
        .unwrap();

    assert_eq!(found.tag.id, tag.id);
    assert_eq!(found.translations.len(), 1);
    assert_eq!(found.translations[0].name, "能源");

    Ok(())
}

/// Tests that a slug does not resolve in another language or for a tombstoned tag.
///
/// Expected: Ok(None) in both cases
#[tokio::test]
async fn misses_other_language_and_tombstoned_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    factory::create_language(db, "zh-TW").await?;
    let tag = factory::tag::TagFactory::new(db)
        .translation("en", "Energy")
        .build()
        .await?;

    let repo = TagRepository::new(db);
    assert!(repo.find_by_slug("energy", "zh-TW").await?.is_none());

    repo.tombstone(tag.id).await?;
    assert!(repo.find_by_slug("energy", "en").await?.is_none());

    Ok(())
}
