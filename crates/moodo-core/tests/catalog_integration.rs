//! Integration tests for template catalog seeding and CRUD.

use moodo_core::{Database, NewTemplate, TaskCategory, TemplateCatalog, TemplateUpdate};

#[test]
fn seeding_is_idempotent() {
    let db = Database::open_memory().unwrap();
    let catalog = TemplateCatalog::new(&db);

    let seeded = catalog.seed_builtins().unwrap();
    assert_eq!(seeded, 20);
    assert_eq!(catalog.seed_builtins().unwrap(), 0);
    assert_eq!(catalog.list_all().unwrap().len(), 20);
}

#[test]
fn seeding_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moodo.db");

    {
        let db = Database::open_at(&path).unwrap();
        let catalog = TemplateCatalog::new(&db);
        assert_eq!(catalog.seed_builtins().unwrap(), 20);
    }

    let db = Database::open_at(&path).unwrap();
    let catalog = TemplateCatalog::new(&db);
    assert_eq!(catalog.seed_builtins().unwrap(), 0);
    assert_eq!(catalog.list_all().unwrap().len(), 20);
}

#[test]
fn create_validates_fields() {
    let db = Database::open_memory().unwrap();
    let catalog = TemplateCatalog::new(&db);

    let empty_title = catalog.create(NewTemplate {
        title: "   ".to_string(),
        difficulty: 2,
        ..NewTemplate::default()
    });
    assert!(empty_title.is_err());

    let bad_difficulty = catalog.create(NewTemplate {
        title: "Stretch".to_string(),
        difficulty: 6,
        ..NewTemplate::default()
    });
    assert!(bad_difficulty.is_err());

    let created = catalog
        .create(NewTemplate {
            title: "Stretch".to_string(),
            description: "Five minutes of stretching".to_string(),
            category: Some(TaskCategory::Exercise),
            difficulty: 1,
            estimated_minutes: 5,
            mood_range: Some("1-6".to_string()),
            default_labels: vec!["Quick".to_string()],
        })
        .unwrap();
    assert!(!created.built_in);

    // Duplicate titles are rejected case-insensitively.
    let duplicate = catalog.create(NewTemplate {
        title: "STRETCH".to_string(),
        difficulty: 1,
        ..NewTemplate::default()
    });
    assert!(duplicate.is_err());
}

#[test]
fn builtins_are_immutable_and_protected() {
    let db = Database::open_memory().unwrap();
    let catalog = TemplateCatalog::new(&db);
    catalog.seed_builtins().unwrap();

    let builtin = catalog
        .list_all()
        .unwrap()
        .into_iter()
        .find(|t| t.built_in)
        .unwrap();

    let update = catalog.update(
        &builtin.id,
        TemplateUpdate {
            title: Some("Renamed".to_string()),
            ..TemplateUpdate::default()
        },
    );
    assert!(update.is_err());
    assert!(catalog.delete(&builtin.id).is_err());

    // Still present and unchanged.
    let again = catalog.get(&builtin.id).unwrap().unwrap();
    assert_eq!(again.title, builtin.title);
}

#[test]
fn user_template_lifecycle() {
    let db = Database::open_memory().unwrap();
    let catalog = TemplateCatalog::new(&db);

    let created = catalog
        .create(NewTemplate {
            title: "Sketching".to_string(),
            category: Some(TaskCategory::Creative),
            difficulty: 2,
            estimated_minutes: 40,
            mood_range: Some("5-9".to_string()),
            ..NewTemplate::default()
        })
        .unwrap();

    let updated = catalog
        .update(
            &created.id,
            TemplateUpdate {
                difficulty: Some(3),
                mood_range: Some(Some("4-9".to_string())),
                ..TemplateUpdate::default()
            },
        )
        .unwrap();
    assert_eq!(updated.difficulty, 3);
    assert_eq!(updated.mood_range.as_deref(), Some("4-9"));

    catalog.delete(&created.id).unwrap();
    assert!(catalog.get(&created.id).unwrap().is_none());
    assert!(catalog.delete(&created.id).is_err());
}

#[test]
fn list_by_category_filters() {
    let db = Database::open_memory().unwrap();
    let catalog = TemplateCatalog::new(&db);
    catalog.seed_builtins().unwrap();

    let exercise = catalog.list_by_category(TaskCategory::Exercise).unwrap();
    assert!(!exercise.is_empty());
    assert!(exercise
        .iter()
        .all(|t| t.category == Some(TaskCategory::Exercise)));

    // Titles come back sorted.
    let titles: Vec<&str> = exercise.iter().map(|t| t.title.as_str()).collect();
    let mut sorted = titles.clone();
    sorted.sort();
    assert_eq!(titles, sorted);
}
