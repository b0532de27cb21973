//! End-to-end: Category entities through the in-memory repository.

use std::sync::Arc;

use catalog_category::{Category, CategoryCreateCommand, CategoryProps};
use catalog_core::{DomainError, EntityId};
use catalog_infra::{CategoryInMemoryRepository, IdOf, Repository};
use tokio::sync::Mutex;

fn category(id: &str, name: &str) -> Category {
    Category::new(CategoryProps {
        category_id: Some(EntityId::parse(id).unwrap()),
        name: name.to_string(),
        ..Default::default()
    })
    .unwrap()
}

const U1: &str = "11111111-1111-4111-8111-111111111111";
const U2: &str = "22222222-2222-4222-8222-222222222222";

#[tokio::test]
async fn insert_find_all_delete_scenario() {
    catalog_observability::init();

    let mut repo = CategoryInMemoryRepository::new();
    let a = category(U1, "Movies");
    let b = category(U2, "Series");

    repo.insert(a.clone()).await.unwrap();
    repo.insert(b.clone()).await.unwrap();
    assert_eq!(repo.find_all().await.unwrap(), vec![a, b.clone()]);

    let u1: IdOf<CategoryInMemoryRepository> = U1.parse().unwrap();
    repo.delete(&u1).await.unwrap();
    assert_eq!(repo.find_all().await.unwrap(), vec![b]);

    let err = repo.find_by_id(&u1).await.unwrap_err();
    assert_eq!(err.to_string(), format!("Category with id(s) {U1} not found"));
}

#[tokio::test]
async fn mutated_category_is_persisted_by_update() {
    let mut repo = CategoryInMemoryRepository::new();
    let original = Category::create(CategoryCreateCommand {
        name: "Documentaries".to_string(),
        description: None,
        is_active: Some(true),
    })
    .unwrap();
    repo.insert(original.clone()).await.unwrap();

    let mut changed = repo.find_by_id(original.category_id()).await.unwrap();
    changed.change_name("Nature Documentaries").unwrap();
    changed.change_description(Some("Wildlife and oceans".to_string())).unwrap();
    changed.deactivate().unwrap();
    repo.update(changed).await.unwrap();

    let stored = repo.find_by_id(original.category_id()).await.unwrap();
    assert_eq!(repo.len(), 1);
    assert_eq!(stored.name(), "Nature Documentaries");
    assert_eq!(stored.description(), Some("Wildlife and oceans"));
    assert!(!stored.is_active());
    assert_eq!(stored.created_at(), original.created_at());
    assert_eq!(stored.to_json().category_id, original.category_id().to_string());
}

#[tokio::test]
async fn invalid_untyped_payload_is_rejected_before_storage() {
    let repo = CategoryInMemoryRepository::new();
    let payload = serde_json::json!({ "name": "Movie", "description": 123 });

    let err = Category::create_from_json(&payload).unwrap_err();
    match err {
        DomainError::Validation(errors) => {
            assert!(errors.contains("description", "description must be a string"));
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn shared_repository_behind_external_lock() {
    let repo = Arc::new(Mutex::new(CategoryInMemoryRepository::new()));

    let mut handles = Vec::new();
    for name in ["Action", "Comedy", "Drama"] {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            let category = Category::create(CategoryCreateCommand {
                name: name.to_string(),
                ..Default::default()
            })
            .unwrap();
            repo.lock().await.insert(category).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(repo.lock().await.find_all().await.unwrap().len(), 3);
}
