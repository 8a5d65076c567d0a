use super::*;

fn upload_root() -> PathBuf {
    std::env::temp_dir().join(format!("babelpress-images-{}", Uuid::new_v4()))
}

/// Counts regular files below `root`, descending into the dated directories.
fn count_files(root: &Path) -> usize {
    let Ok(entries) = std::fs::read_dir(root) else {
        return 0;
    };

    entries
        .flatten()
        .map(|entry| {
            let path = entry.path();
            if path.is_dir() {
                count_files(&path)
            } else {
                1
            }
        })
        .sum()
}

/// Tests storing and registering an uploaded file.
///
/// Expected: Ok with the image owned by the uploader and the file kept on disk
#[tokio::test]
async fn registers_stored_file() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let root = upload_root();
    let store = LocalUploadStore::new(&root, 1024);

    let user = factory::create_user(db).await?;

    let image = ImageService::new(db)
        .upload(
            &store,
            user.id,
            "harbor.jpg",
            b"jpeg-bytes",
            UploadMetadata {
                alt: Some("Harbor at dawn".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(image.user_id, user.id);
    assert_eq!(image.content_type, "image/jpeg");
    assert_eq!(image.alt.as_deref(), Some("Harbor at dawn"));
    assert!(root.join(&image.file_path).exists());

    std::fs::remove_dir_all(&root).unwrap();

    Ok(())
}

/// Tests that a failed registration does not leave the stored file behind.
///
/// Verifies that when the image row cannot be inserted (no image table) the file the
/// store wrote is removed again.
///
/// Expected: Err(AppError::DbErr) and no files below the upload root
#[tokio::test]
async fn removes_file_when_registration_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let root = upload_root();
    let store = LocalUploadStore::new(&root, 1024);

    let user = factory::create_user(db).await?;

    let result = ImageService::new(db)
        .upload(
            &store,
            user.id,
            "harbor.png",
            b"png-bytes",
            UploadMetadata::default(),
        )
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(count_files(&root), 0);

    let _ = std::fs::remove_dir_all(&root);

    Ok(())
}
