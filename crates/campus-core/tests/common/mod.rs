use campus_core::{Activity, ActivityStatus, ActivityType, Catalog, CatalogBuilder};
use jiff::civil::date;
use tempfile::TempDir;

/// Helper function to create a test catalog
pub async fn create_test_catalog() -> (TempDir, Catalog) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let catalog = CatalogBuilder::new()
        .with_database_path(&db_path)
        .build()
        .await
        .expect("Failed to create catalog");
    (temp_dir, catalog)
}

/// A valid, unsaved activity
pub fn sample_activity(title: &str) -> Activity {
    Activity {
        id: String::new(),
        title: title.to_string(),
        description: "An activity used by the integration tests".to_string(),
        kind: ActivityType::Course,
        status: ActivityStatus::Pending,
        start_date: date(2025, 2, 10),
        end_date: date(2025, 6, 20),
        location: "Building A".to_string(),
        coordinator: "Prof. Almeida".to_string(),
        participants: 30,
        tags: vec!["undergraduate".to_string()],
        image_url: None,
    }
}
