use super::*;

/// Tests title suggestions.
///
/// Verifies that only published titles containing the fragment are suggested, in
/// alphabetical order.
///
/// Expected: Ok(["Solar farms", "Solar storms"])
#[tokio::test]
async fn suggests_published_titles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let user = factory::create_user(db).await?;
    for title in ["Solar storms", "Solar farms"] {
        factory::article::ArticleFactory::new(db, user.id)
            .published()
            .translation("en", title)
            .build()
            .await?;
    }
    factory::article::ArticleFactory::new(db, user.id)
        .translation("en", "Solar draft")
        .build()
        .await?;

    let titles = SearchRepository::new(db).suggest_titles("Solar").await?;

    assert_eq!(titles, vec!["Solar farms", "Solar storms"]);

    Ok(())
}
