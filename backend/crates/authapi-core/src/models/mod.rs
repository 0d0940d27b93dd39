pub mod identity_handle;
pub mod person_name;
pub mod profile_document;
pub mod registration;
pub mod user;
pub mod user_profile;
