use super::*;

/// Tests that a tag still linked to an article cannot be deleted.
///
/// Expected: Err(Conflict) and the tag still readable
#[tokio::test]
async fn refuses_linked_tag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let user = factory::create_user(db).await?;
    let article = factory::create_article(db, user.id).await?;
    let tag = factory::create_tag(db).await?;
    factory::helpers::link_tag(db, article.id, tag.id).await?;

    let service = TagService::new(db);
    let result = service.delete(tag.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(service.get_by_id(tag.id).await.is_ok());

    Ok(())
}

/// Tests deleting an unlinked tag.
///
/// Expected: Ok, then NotFound on lookup and on a second delete
#[tokio::test]
async fn tombstones_unlinked_tag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let tag = factory::create_tag(db).await?;

    let service = TagService::new(db);
    service.delete(tag.id).await?;

    assert!(matches!(
        service.get_by_id(tag.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(tag.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
