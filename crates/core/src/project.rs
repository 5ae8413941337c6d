//! Showcase project rules.
//!
//! The `check_*` functions validate one attribute each so that creation
//! (all attributes) and partial updates (supplied attributes only) apply
//! the same bounds.

use crate::error::CoreError;
use crate::validation::FieldErrors;

pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 100;
pub const DESCRIPTION_MIN_LEN: usize = 10;
pub const DESCRIPTION_MAX_LEN: usize = 500;
pub const CATEGORY_MIN_LEN: usize = 3;
pub const CATEGORY_MAX_LEN: usize = 50;

pub const DEFAULT_BG_COLOR: &str = "bg-blue-100";
pub const DEFAULT_TEXT_COLOR: &str = "text-blue-900";

pub fn check_title(errors: &mut FieldErrors, title: &str) {
    errors.check_length("title", title, TITLE_MIN_LEN, TITLE_MAX_LEN);
}

pub fn check_description(errors: &mut FieldErrors, description: &str) {
    errors.check_length(
        "description",
        description,
        DESCRIPTION_MIN_LEN,
        DESCRIPTION_MAX_LEN,
    );
}

pub fn check_technologies(errors: &mut FieldErrors, technologies: &[String]) {
    errors.check_not_empty("technologies", technologies);
}

pub fn check_category(errors: &mut FieldErrors, category: &str) {
    errors.check_length("category", category, CATEGORY_MIN_LEN, CATEGORY_MAX_LEN);
}

/// Validate the constrained fields of a new project.
pub fn validate_new(
    title: &str,
    description: &str,
    technologies: &[String],
    category: &str,
) -> Result<(), CoreError> {
    let mut errors = FieldErrors::new();
    check_title(&mut errors, title);
    check_description(&mut errors, description);
    check_technologies(&mut errors, technologies);
    check_category(&mut errors, category);
    errors.finish()
}

pub fn default_bg_color() -> String {
    DEFAULT_BG_COLOR.to_string()
}

pub fn default_text_color() -> String {
    DEFAULT_TEXT_COLOR.to_string()
}
