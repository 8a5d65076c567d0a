use super::*;

/// Tests that a single category lookup embeds its parent.
///
/// Expected: Ok(Some) with the parent and its translation attached
#[tokio::test]
async fn embeds_parent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let parent = factory::category::CategoryFactory::new(db)
        .translation("en", "Science")
        .build()
        .await?;
    let child = factory::category::CategoryFactory::new(db)
        .parent(parent.id)
        .translation("en", "Physics")
        .build()
        .await?;

    let found = CategoryRepository::new(db)
        .get_by_id(child.id)
        .await?
        .unwrap();

    let embedded = found.parent.unwrap();
    assert_eq!(embedded.category.id, parent.id);
    assert_eq!(embedded.translations[0].name, "Science");

    Ok(())
}

/// Tests that tombstoned categories are not found.
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
    let category = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    repo.tombstone(category.id).await?;

    assert!(repo.get_by_id(category.id).await?.is_none());

    Ok(())
}
