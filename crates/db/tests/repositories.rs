//! Repository behaviour against the in-process store: identity and
//! timestamp assignment, ordering, partial updates, deletes.

use std::time::Duration;

use folio_core::patch::Patch;
use folio_core::MAX_LIST_RESULTS;
use folio_core::types::{self, RecordId};
use folio_db::models::contact::CreateContact;
use folio_db::models::project::{CreateProject, UpdateProject};
use folio_db::models::status_check::CreateStatusCheck;
use folio_db::repositories::{ContactRepo, ProjectRepo, StatusCheckRepo};
use folio_db::MemoryStore;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_contact(name: &str) -> CreateContact {
    CreateContact {
        name: name.to_string(),
        email: "jane@example.com".to_string(),
        subject: "Project inquiry".to_string(),
        message: "I would like to talk about a project.".to_string(),
    }
}

fn new_project(title: &str, category: &str) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        description: "A personal site".to_string(),
        technologies: vec!["React".to_string(), "FastAPI".to_string()],
        category: category.to_string(),
        bg_color: "bg-blue-100".to_string(),
        text_color: "text-blue-900".to_string(),
        github_url: Some("https://github.com/example/site".to_string()),
        live_url: None,
        featured: true,
    }
}

async fn tick() {
    tokio::time::sleep(Duration::from_millis(5)).await;
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn contact_create_assigns_server_fields() {
    let store = MemoryStore::new();
    let before = types::now();

    let contact = ContactRepo::create(&store, &new_contact("Jane Doe"))
        .await
        .unwrap();

    assert_eq!(contact.status, "new");
    assert!(contact.created_at >= before);
    assert_eq!(contact.name, "Jane Doe");
    assert_eq!(store.count("contacts").await, 1);

    let found = ContactRepo::find_by_id(&store, contact.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, contact);
}

#[tokio::test]
async fn contact_list_is_newest_first() {
    let store = MemoryStore::new();
    ContactRepo::create(&store, &new_contact("First")).await.unwrap();
    tick().await;
    ContactRepo::create(&store, &new_contact("Second")).await.unwrap();

    let contacts = ContactRepo::list(&store).await.unwrap();
    let names: Vec<&str> = contacts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Second", "First"]);
}

#[tokio::test]
async fn contact_list_stops_at_the_cap() {
    let store = MemoryStore::new();
    for i in 0..=MAX_LIST_RESULTS {
        ContactRepo::create(&store, &new_contact(&format!("Sender {i}")))
            .await
            .unwrap();
    }
    assert_eq!(store.count("contacts").await, 1001);

    let contacts = ContactRepo::list(&store).await.unwrap();
    assert_eq!(contacts.len(), 1000);
}

#[tokio::test]
async fn contact_lookup_miss_is_none() {
    let store = MemoryStore::new();
    let found = ContactRepo::find_by_id(&store, RecordId::new()).await.unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn project_create_sets_matching_timestamps() {
    let store = MemoryStore::new();
    let project = ProjectRepo::create(&store, &new_project("Portfolio Site", "web"))
        .await
        .unwrap();

    assert_eq!(project.created_at, project.updated_at);
    assert_eq!(project.technologies, vec!["React", "FastAPI"]);
    assert!(project.featured);
}

#[tokio::test]
async fn project_update_applies_only_supplied_fields() {
    let store = MemoryStore::new();
    let original = ProjectRepo::create(&store, &new_project("Portfolio Site", "web"))
        .await
        .unwrap();
    tick().await;

    let input = UpdateProject {
        featured: Patch::Present(false),
        github_url: Patch::Present(None),
        ..UpdateProject::default()
    };
    let updated = ProjectRepo::update(&store, original.id, &input)
        .await
        .unwrap()
        .unwrap();

    assert!(!updated.featured);
    assert_eq!(updated.github_url, None);
    assert_eq!(updated.title, original.title);
    assert_eq!(updated.technologies, original.technologies);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);
}

#[tokio::test]
async fn project_empty_update_only_refreshes_timestamp() {
    let store = MemoryStore::new();
    let original = ProjectRepo::create(&store, &new_project("Portfolio Site", "web"))
        .await
        .unwrap();
    tick().await;

    let updated = ProjectRepo::update(&store, original.id, &UpdateProject::default())
        .await
        .unwrap()
        .unwrap();

    assert!(updated.updated_at > original.updated_at);
    let mut expected = original.clone();
    expected.updated_at = updated.updated_at;
    assert_eq!(updated, expected);
}

#[tokio::test]
async fn project_update_unknown_id_is_none() {
    let store = MemoryStore::new();
    let result = ProjectRepo::update(&store, RecordId::new(), &UpdateProject::default())
        .await
        .unwrap();
    assert!(result.is_none());
    assert_eq!(store.count("projects").await, 0);
}

#[tokio::test]
async fn project_delete_then_lookup_misses() {
    let store = MemoryStore::new();
    let project = ProjectRepo::create(&store, &new_project("Portfolio Site", "web"))
        .await
        .unwrap();

    assert!(ProjectRepo::delete(&store, project.id).await.unwrap());
    assert!(ProjectRepo::find_by_id(&store, project.id)
        .await
        .unwrap()
        .is_none());
    assert!(!ProjectRepo::delete(&store, project.id).await.unwrap());
}

#[tokio::test]
async fn project_category_filter_is_exact() {
    let store = MemoryStore::new();
    ProjectRepo::create(&store, &new_project("Web One", "web")).await.unwrap();
    tick().await;
    ProjectRepo::create(&store, &new_project("Web Two", "web")).await.unwrap();
    ProjectRepo::create(&store, &new_project("Tooling", "cli")).await.unwrap();

    let web = ProjectRepo::list_by_category(&store, "web").await.unwrap();
    let titles: Vec<&str> = web.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Web Two", "Web One"]);

    let none = ProjectRepo::list_by_category(&store, "nonexistent-category")
        .await
        .unwrap();
    assert!(none.is_empty());
}

// ---------------------------------------------------------------------------
// Status checks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn status_check_create_and_list() {
    let store = MemoryStore::new();
    let created = StatusCheckRepo::create(
        &store,
        &CreateStatusCheck {
            client_name: "uptime-bot".to_string(),
        },
    )
    .await
    .unwrap();

    let all = StatusCheckRepo::list(&store).await.unwrap();
    assert_eq!(all, vec![created]);
}

#[tokio::test]
async fn status_check_list_stops_at_the_cap() {
    let store = MemoryStore::new();
    for i in 0..=MAX_LIST_RESULTS {
        StatusCheckRepo::create(
            &store,
            &CreateStatusCheck {
                client_name: format!("client-{i}"),
            },
        )
        .await
        .unwrap();
    }

    let all = StatusCheckRepo::list(&store).await.unwrap();
    assert_eq!(all.len(), 1000);
}
