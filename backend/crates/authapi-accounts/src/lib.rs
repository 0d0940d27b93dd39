//! Account workflows: registration across the identity provider and the
//! local store, and profile reads and writes for an authenticated user.

pub(crate) mod error;
pub(crate) mod profile_service;
pub(crate) mod registration_service;

pub use error::{AccountError, Result as AccountErrorResult};
pub use profile_service::ProfileService;
pub use registration_service::RegistrationService;
