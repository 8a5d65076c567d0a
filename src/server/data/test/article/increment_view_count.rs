use super::*;

/// Tests that each call adds exactly one view.
///
/// Expected: Ok with view_count 2 after two increments
#[tokio::test]
async fn adds_one_per_call() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let user = factory::create_user(db).await?;
    let article = factory::create_article(db, user.id).await?;

    let repo = ArticleRepository::new(db);
    repo.increment_view_count(article.id).await?;
    repo.increment_view_count(article.id).await?;

    let reloaded = repo.find_live(article.id).await?.unwrap();
    assert_eq!(reloaded.view_count, 2);

    Ok(())
}
