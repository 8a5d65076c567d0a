use super::*;

/// Tests slug ownership lookup within one language.
///
/// Verifies that a slug is owned only within its language: the same slug in another
/// language has no owner.
///
/// Expected: Ok(Some(tag.id)) for "en", Ok(None) for "zh-TW"
#[tokio::test]
async fn scopes_slugs_by_language() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    factory::create_language(db, "zh-TW").await?;
    let tag = factory::tag::TagFactory::new(db)
        .translation("en", "Climate")
        .build()
        .await?;

    let repo = TagRepository::new(db);

    assert_eq!(repo.slug_owner("en", "climate").await?, Some(tag.id));
    assert_eq!(repo.slug_owner("zh-TW", "climate").await?, None);

    Ok(())
}
