use super::*;

/// Tests that a category with children cannot be deleted.
///
/// Verifies that the refused delete leaves the parent, its translations and the child's
/// parent link in place.
///
/// Expected: Err(Conflict) and both categories unchanged
#[tokio::test]
async fn refuses_category_with_children() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let parent = factory::create_category(db).await?;
    let child = factory::category::CategoryFactory::new(db)
        .parent(parent.id)
        .translation("en", "Child")
        .build()
        .await?;

    let service = CategoryService::new(db);
    let result = service.delete(parent.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    let kept = service.get_by_id(parent.id).await?;
    assert_eq!(kept.translations.len(), 1);
    let child = service.get_by_id(child.id).await?;
    assert_eq!(child.category.parent_id, Some(parent.id));

    Ok(())
}

/// Tests that a category linked to an article cannot be deleted.
///
/// Verifies that the refused delete keeps the category, its translations and the
/// article link.
///
/// Expected: Err(Conflict) with the category and link still present
#[tokio::test]
async fn refuses_linked_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let user = factory::create_user(db).await?;
    let article = factory::create_article(db, user.id).await?;
    let category = factory::create_category(db).await?;
    factory::helpers::link_category(db, article.id, category.id).await?;

    let service = CategoryService::new(db);
    let result = service.delete(category.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    let kept = service.get_by_id(category.id).await?;
    assert_eq!(kept.translations.len(), 1);
    assert!(CategoryRepository::new(db).is_linked(category.id).await?);

    Ok(())
}

/// Tests deleting a leaf category.
///
/// Expected: Ok, then NotFound on lookup
#[tokio::test]
async fn tombstones_leaf_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let category = factory::create_category(db).await?;

    let service = CategoryService::new(db);
    service.delete(category.id).await?;

    assert!(matches!(
        service.get_by_id(category.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
