//! Field-level validation helpers shared by the contact and project rules.
//!
//! Checks accumulate into a [`FieldErrors`] so one response can report every
//! offending field at once.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Collected `field: problem` messages for a single request.
#[derive(Debug, Default)]
pub struct FieldErrors {
    messages: Vec<String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an arbitrary problem with `field`.
    pub fn push(&mut self, field: &str, problem: impl AsRef<str>) {
        self.messages.push(format!("{field}: {}", problem.as_ref()));
    }

    /// Require `value` to be `min..=max` characters long.
    ///
    /// Length is counted in Unicode scalar values, not bytes.
    pub fn check_length(&mut self, field: &str, value: &str, min: usize, max: usize) {
        let len = value.chars().count();
        if len < min || len > max {
            self.push(
                field,
                format!("must be between {min} and {max} characters (got {len})"),
            );
        }
    }

    pub fn check_email(&mut self, field: &str, value: &str) {
        if !value.validate_email() {
            self.push(field, "must be a valid email address");
        }
    }

    pub fn check_not_empty<T>(&mut self, field: &str, items: &[T]) {
        if items.is_empty() {
            self.push(field, "must contain at least one item");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// `Ok(())` if nothing was recorded, otherwise a [`CoreError::Validation`]
    /// carrying all messages joined with `; `.
    pub fn finish(self) -> Result<(), CoreError> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(self.messages.join("; ")))
        }
    }
}
