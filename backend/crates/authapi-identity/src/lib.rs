//! Identity provider access.
//!
//! [`IdentityProvider`] is the seam the account workflows program against;
//! [`KeycloakClient`] implements it over the Keycloak admin REST API.

pub(crate) mod error;
pub(crate) mod keycloak_client;
pub(crate) mod provider;

pub use error::{IdentityError, Result as IdentityErrorResult};
pub use keycloak_client::KeycloakClient;
pub use provider::{IdentityProvider, IdentityRecord, NewIdentity};
