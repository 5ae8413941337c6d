//! Typed repositories over the document store.
//!
//! Each repository is a unit struct with async associated functions taking
//! the shared store. Identity and timestamps are assigned here, never by
//! callers.

pub mod contact_repo;
pub mod project_repo;
pub mod status_check_repo;

pub use contact_repo::ContactRepo;
pub use project_repo::ProjectRepo;
pub use status_check_repo::StatusCheckRepo;
