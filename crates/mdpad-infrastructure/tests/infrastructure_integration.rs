use mdpad_core::{DocumentStorage, Environment, FileFilter};
use mdpad_infrastructure::{ConfigService, FsDocumentStorage, RecentDocuments, SystemEnvironment};
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_storage_behind_trait_object() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.md");
    let storage: Arc<dyn DocumentStorage> = Arc::new(FsDocumentStorage::new());

    storage.write(&path, "# Café\n").await.unwrap();
    assert_eq!(storage.read(&path).await.unwrap(), "# Café\n");

    storage.write(&path, "").await.unwrap();
    assert_eq!(storage.read(&path).await.unwrap(), "");
}

#[test]
fn test_partial_config_keeps_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        "app_name = \"Notes\"\n\n[document]\nname = \"Text\"\nextensions = [\"md\", \"txt\"]\n",
    )
    .unwrap();

    let config = ConfigService::with_path(&path).get_config();

    assert_eq!(config.app_name, "Notes");
    assert_eq!(config.document, FileFilter::new("Text", &["md", "txt"]));
    assert_eq!(config.export, FileFilter::html());
    assert_eq!(config.max_recent_documents, 10);
}

#[tokio::test]
async fn test_environment_records_recent_documents() {
    let temp_dir = TempDir::new().unwrap();
    let recent = Arc::new(RecentDocuments::new(temp_dir.path().join("recent.toml"), 2));
    let environment: Arc<dyn Environment> = Arc::new(SystemEnvironment::new(recent.clone()));

    let a = temp_dir.path().join("a.md");
    let b = temp_dir.path().join("b.md");
    let c = temp_dir.path().join("c.md");
    for path in [&a, &b, &a, &c] {
        environment.add_recent_document(path).await.unwrap();
    }

    let listed: Vec<_> = recent.list().unwrap().into_iter().map(|d| d.path).collect();
    assert_eq!(listed, vec![c, a]);
}
