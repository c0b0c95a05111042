mod common;

use campus_core::{
    Activity, ActivityForm, ActivityType, CampusError, DeleteActivity, Field, FieldErrorKind,
    FormReport, Id, ListActivities, OperationStatus, Submission,
};
use common::{create_test_catalog, sample_activity};

#[tokio::test]
async fn test_create_flow_through_form() {
    let (_temp_dir, catalog) = create_test_catalog().await;

    let mut form = ActivityForm::new();
    form.set_field(Field::Title, "Intro to Robotics").unwrap();
    form.set_field(Field::Description, "Build and program a small robot")
        .unwrap();
    form.set_field(Field::Type, ActivityType::Workshop).unwrap();
    form.set_field(Field::StartDate, "2025-08-04").unwrap();
    form.set_field(Field::EndDate, "2025-08-08").unwrap();
    form.set_field(Field::Location, "Maker Space").unwrap();
    form.set_field(Field::Coordinator, "Prof. Nunes").unwrap();
    form.set_field(Field::Participants, "18").unwrap();
    form.set_tag_draft("robotics");
    assert!(form.commit_tag_draft());

    let mut accepted: Option<Activity> = None;
    let outcome = form.submit(&mut |activity: Activity| accepted = Some(activity));
    assert_eq!(outcome, Submission::Accepted);

    let record = accepted.expect("Handler should receive the record");
    assert!(record.is_new());

    let saved = catalog
        .save_activity(record)
        .await
        .expect("Failed to save activity");
    assert!(OperationStatus::created(&saved)
        .to_string()
        .contains("Intro to Robotics"));

    let listed = catalog
        .find_activities(&ListActivities::default())
        .await
        .expect("Failed to list activities");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], saved);
    assert!(listed.to_string().contains("## 🛠️ Intro to Robotics"));
}

#[tokio::test]
async fn test_rejected_form_never_reaches_catalog() {
    let (_temp_dir, catalog) = create_test_catalog().await;

    let mut form = ActivityForm::new();
    form.set_field(Field::Title, "AI").unwrap();

    let mut calls = 0;
    let outcome = form.submit(&mut |_: Activity| calls += 1);
    assert_eq!(calls, 0);

    let Submission::Rejected(errors) = outcome else {
        panic!("Expected a rejected submission");
    };
    assert_eq!(errors.kind(Field::Title), Some(FieldErrorKind::TooShort));
    assert!(FormReport(&form)
        .to_string()
        .contains("Title must be at least 3 characters"));

    let listed = catalog
        .find_activities(&ListActivities::default())
        .await
        .expect("Failed to list activities");
    assert!(listed.is_empty());
    assert_eq!(listed.to_string(), "No activities found.\n");
}

#[tokio::test]
async fn test_edit_flow_keeps_identity() {
    let (_temp_dir, catalog) = create_test_catalog().await;
    let saved = catalog
        .save_activity(sample_activity("Linear Algebra"))
        .await
        .expect("Failed to save activity");

    let mut form = catalog
        .edit_form(&Id::new(saved.id.as_str()))
        .await
        .expect("Failed to load form")
        .expect("Activity should exist");
    assert_eq!(form.submit_label(), "Save Changes");

    form.set_field(Field::Title, "Linear Algebra II").unwrap();
    form.remove_tag("undergraduate");
    form.add_tag("math");

    let mut accepted: Option<Activity> = None;
    form.submit(&mut |activity: Activity| accepted = Some(activity));
    let record = accepted.expect("Handler should receive the record");

    let updated = catalog
        .save_activity(record)
        .await
        .expect("Failed to save activity");
    assert_eq!(updated.id, saved.id);

    let loaded = catalog
        .get_activity(&Id::new(saved.id.as_str()))
        .await
        .expect("Failed to get activity")
        .expect("Activity should exist");
    assert_eq!(loaded.title, "Linear Algebra II");
    assert_eq!(loaded.tags, vec!["math".to_string()]);
}

#[tokio::test]
async fn test_catalog_source_feeds_form_load() {
    let (_temp_dir, catalog) = create_test_catalog().await;
    let saved = catalog
        .save_activity(sample_activity("Thermodynamics"))
        .await
        .expect("Failed to save activity");

    let db = campus_core::Database::new(catalog.database_path()).expect("Failed to open db");
    let form = ActivityForm::load(&db, &saved.id)
        .expect("Lookup failed")
        .expect("Activity should exist");
    assert_eq!(form.values().title, "Thermodynamics");

    assert!(ActivityForm::load(&db, "12345")
        .expect("Lookup failed")
        .is_none());
}

#[tokio::test]
async fn test_delete_flow() {
    let (_temp_dir, catalog) = create_test_catalog().await;
    let saved = catalog
        .save_activity(sample_activity("Old Seminar"))
        .await
        .expect("Failed to save activity");

    let unconfirmed = catalog
        .delete_activity(&DeleteActivity {
            id: saved.id.clone(),
            confirmed: false,
        })
        .await;
    assert!(matches!(unconfirmed, Err(CampusError::InvalidInput { .. })));

    let deleted = catalog
        .delete_activity(&DeleteActivity {
            id: saved.id.clone(),
            confirmed: true,
        })
        .await
        .expect("Failed to delete activity");
    assert!(OperationStatus::deleted(&deleted)
        .to_string()
        .contains("Old Seminar"));

    let missing = catalog
        .edit_form(&Id::new(saved.id.as_str()))
        .await
        .expect("Lookup failed");
    assert!(missing.is_none());
}
