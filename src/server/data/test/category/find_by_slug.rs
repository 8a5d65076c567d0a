use super::*;

/// Tests slug lookup of a child category.
///
/// Verifies that the category is resolved through its slug in the language and that its
/// parent is embedded with the translation in that language.
///
/// Expected: Ok(Some) with the child's id and the parent's "en" name
#[tokio::test]
async fn embeds_parent_in_language() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    factory::create_language(db, "zh-TW").await?;
    let parent = factory::category::CategoryFactory::new(db)
        .translation("en", "Science")
        .translation("zh-TW", "科學")
        .build()
        .await?;
    let child = factory::category::CategoryFactory::new(db)
        .parent(parent.id)
        .translation("en", "Space Travel")
        .build()
        .await?;

    let found = CategoryRepository::new(db)
        .find_by_slug("space-travel", "en")
        .await?
        .unwrap();

    assert_eq!(found.category.id, child.id);
    let embedded = found.parent.unwrap();
    assert_eq!(embedded.category.id, parent.id);
    assert_eq!(embedded.translations.len(), 1);
    assert_eq!(embedded.translations[0].name, "Science");

    Ok(())
}

/// Tests that tombstoned categories are not found by slug.
///
/// Expected: Ok(None)
#[tokio::test]
async fn hides_tombstoned_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let category = factory::category::CategoryFactory::new(db)
        .translation("en", "Archive")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    repo.tombstone(category.id).await?;

    assert!(repo.find_by_slug("archive", "en").await?.is_none());

    Ok(())
}
