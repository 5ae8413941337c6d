//! Contact-form submission rules.

use crate::error::CoreError;
use crate::validation::FieldErrors;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 100;
pub const SUBJECT_MIN_LEN: usize = 5;
pub const SUBJECT_MAX_LEN: usize = 200;
pub const MESSAGE_MIN_LEN: usize = 10;
pub const MESSAGE_MAX_LEN: usize = 2000;

/// Status assigned to every new submission.
pub const STATUS_NEW: &str = "new";

/// Validate the client-supplied fields of a new contact submission.
pub fn validate_new(
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> Result<(), CoreError> {
    let mut errors = FieldErrors::new();
    errors.check_length("name", name, NAME_MIN_LEN, NAME_MAX_LEN);
    errors.check_email("email", email);
    errors.check_length("subject", subject, SUBJECT_MIN_LEN, SUBJECT_MAX_LEN);
    errors.check_length("message", message, MESSAGE_MIN_LEN, MESSAGE_MAX_LEN);
    errors.finish()
}
