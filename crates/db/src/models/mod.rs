pub mod contact;
pub mod project;
pub mod status_check;
