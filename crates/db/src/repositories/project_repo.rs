//! Repository for the `projects` collection.

use folio_core::patch::Patch;
use folio_core::types::{self, RecordId};

use crate::document::{from_document, set_field, to_document};
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::store::{Document, DocumentStore, FindOptions, Sort};
use crate::StoreError;

pub const COLLECTION: &str = "projects";

const CREATED_AT: &str = "createdAt";

pub struct ProjectRepo;

impl ProjectRepo {
    /// Persist a new project. `createdAt` and `updatedAt` share one instant.
    pub async fn create(
        store: &dyn DocumentStore,
        input: &CreateProject,
    ) -> Result<Project, StoreError> {
        let now = types::now();
        let project = Project {
            id: RecordId::new(),
            title: input.title.clone(),
            description: input.description.clone(),
            technologies: input.technologies.clone(),
            category: input.category.clone(),
            bg_color: input.bg_color.clone(),
            text_color: input.text_color.clone(),
            github_url: input.github_url.clone(),
            live_url: input.live_url.clone(),
            featured: input.featured,
            created_at: now,
            updated_at: now,
        };

        let inserted = store
            .insert_one(COLLECTION, project.id.into(), to_document(&project)?)
            .await?;

        Self::find_by_id(store, project.id)
            .await?
            .ok_or_else(|| StoreError::MissingAfterWrite {
                collection: COLLECTION.to_string(),
                id: inserted.inserted_id,
            })
    }

    /// All projects, newest first, capped at the list limit.
    pub async fn list(store: &dyn DocumentStore) -> Result<Vec<Project>, StoreError> {
        Self::find_many(store, FindOptions::new()).await
    }

    /// Projects whose category equals `category` exactly. An unknown
    /// category yields an empty list.
    pub async fn list_by_category(
        store: &dyn DocumentStore,
        category: &str,
    ) -> Result<Vec<Project>, StoreError> {
        Self::find_many(store, FindOptions::new().where_eq("category", category)).await
    }

    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: RecordId,
    ) -> Result<Option<Project>, StoreError> {
        store
            .find_one(COLLECTION, id.into())
            .await?
            .map(from_document)
            .transpose()
    }

    /// Apply the supplied fields of `input` and refresh `updatedAt`.
    ///
    /// Returns `None` if no project has this id, including when it is
    /// deleted between the write and the refetch.
    pub async fn update(
        store: &dyn DocumentStore,
        id: RecordId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, StoreError> {
        let set = Self::update_set(input)?;
        let result = store.update_one(COLLECTION, id.into(), set).await?;
        if result.matched_count == 0 {
            return Ok(None);
        }
        Self::find_by_id(store, id).await
    }

    /// Hard-delete a project. Returns `true` if a document was removed.
    pub async fn delete(store: &dyn DocumentStore, id: RecordId) -> Result<bool, StoreError> {
        let result = store.delete_one(COLLECTION, id.into()).await?;
        Ok(result.deleted_count > 0)
    }

    async fn find_many(
        store: &dyn DocumentStore,
        options: FindOptions,
    ) -> Result<Vec<Project>, StoreError> {
        let options = options.sort(Sort::NewestFirst(CREATED_AT));
        store
            .find_many(COLLECTION, &options)
            .await?
            .into_iter()
            .map(from_document)
            .collect()
    }

    /// Build the partial `$set` document: supplied fields plus `updatedAt`.
    fn update_set(input: &UpdateProject) -> Result<Document, StoreError> {
        let mut set = Document::new();
        put(&mut set, "title", &input.title)?;
        put(&mut set, "description", &input.description)?;
        put(&mut set, "technologies", &input.technologies)?;
        put(&mut set, "category", &input.category)?;
        put(&mut set, "bgColor", &input.bg_color)?;
        put(&mut set, "textColor", &input.text_color)?;
        put(&mut set, "githubUrl", &input.github_url)?;
        put(&mut set, "liveUrl", &input.live_url)?;
        put(&mut set, "featured", &input.featured)?;
        set_field(&mut set, "updatedAt", &types::now())?;
        Ok(set)
    }
}

fn put<T: serde::Serialize>(
    set: &mut Document,
    key: &str,
    patch: &Patch<T>,
) -> Result<(), StoreError> {
    match patch {
        Patch::Present(value) => set_field(set, key, value),
        Patch::Absent => Ok(()),
    }
}
