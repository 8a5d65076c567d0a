use super::*;

/// Tests that a category cannot become its own parent.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_self_parent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let category = factory::create_category(db).await?;

    let result = CategoryService::new(db)
        .update(
            category.id,
            CategoryParams {
                parent_id: Some(category.id),
            },
            Vec::new(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that a category cannot move under its own descendant.
///
/// Expected: Err(Conflict) and the hierarchy unchanged
#[tokio::test]
async fn rejects_cycle_through_descendant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let root = factory::create_category(db).await?;
    let child = factory::category::CategoryFactory::new(db)
        .parent(root.id)
        .translation("en", "Child")
        .build()
        .await?;
    let grandchild = factory::category::CategoryFactory::new(db)
        .parent(child.id)
        .translation("en", "Grandchild")
        .build()
        .await?;

    let service = CategoryService::new(db);
    let result = service
        .update(
            root.id,
            CategoryParams {
                parent_id: Some(grandchild.id),
            },
            Vec::new(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.get_by_id(root.id).await?.category.parent_id, None);

    Ok(())
}

/// Tests moving a category to the top level.
///
/// Expected: Ok with no parent
#[tokio::test]
async fn detaches_from_parent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let root = factory::create_category(db).await?;
    let child = factory::category::CategoryFactory::new(db)
        .parent(root.id)
        .translation("en", "Child")
        .build()
        .await?;

    let updated = CategoryService::new(db)
        .update(child.id, CategoryParams { parent_id: None }, Vec::new())
        .await?;

    assert_eq!(updated.category.parent_id, None);
    assert!(updated.parent.is_none());

    Ok(())
}
