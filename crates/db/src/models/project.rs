//! Showcase project model and DTOs.

use folio_core::error::CoreError;
use folio_core::patch::Patch;
use folio_core::project;
use folio_core::types::{RecordId, Timestamp};
use folio_core::validation::FieldErrors;
use serde::{Deserialize, Serialize};

/// A stored showcase project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: String,
    pub bg_color: String,
    pub text_color: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project. Colors and `featured` have defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: String,
    #[serde(default = "project::default_bg_color")]
    pub bg_color: String,
    #[serde(default = "project::default_text_color")]
    pub text_color: String,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl CreateProject {
    pub fn validate(&self) -> Result<(), CoreError> {
        project::validate_new(
            &self.title,
            &self.description,
            &self.technologies,
            &self.category,
        )
    }
}

/// DTO for partially updating a project.
///
/// Only keys present in the request body are applied. `githubUrl` and
/// `liveUrl` may be cleared by sending `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub technologies: Patch<Vec<String>>,
    #[serde(default)]
    pub category: Patch<String>,
    #[serde(default)]
    pub bg_color: Patch<String>,
    #[serde(default)]
    pub text_color: Patch<String>,
    #[serde(default)]
    pub github_url: Patch<Option<String>>,
    #[serde(default)]
    pub live_url: Patch<Option<String>>,
    #[serde(default)]
    pub featured: Patch<bool>,
}

impl UpdateProject {
    /// Apply the creation bounds to every supplied field.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = FieldErrors::new();
        if let Patch::Present(title) = &self.title {
            project::check_title(&mut errors, title);
        }
        if let Patch::Present(description) = &self.description {
            project::check_description(&mut errors, description);
        }
        if let Patch::Present(technologies) = &self.technologies {
            project::check_technologies(&mut errors, technologies);
        }
        if let Patch::Present(category) = &self.category {
            project::check_category(&mut errors, category);
        }
        errors.finish()
    }

    /// Names of the fields this update carries, for logging.
    pub fn supplied_fields(&self) -> Vec<&'static str> {
        [
            ("title", self.title.is_present()),
            ("description", self.description.is_present()),
            ("technologies", self.technologies.is_present()),
            ("category", self.category.is_present()),
            ("bgColor", self.bg_color.is_present()),
            ("textColor", self.text_color.is_present()),
            ("githubUrl", self.github_url.is_present()),
            ("liveUrl", self.live_url.is_present()),
            ("featured", self.featured.is_present()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}
