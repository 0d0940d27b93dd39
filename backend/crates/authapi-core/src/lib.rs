pub mod error;
pub mod models;


pub use error::{CoreError, Result};
pub use models::identity_handle::IdentityHandle;
pub use models::person_name::PersonName;
pub use models::profile_document::{JsonObject, ProfileDocument, decode_blob, encode_blob};
pub use models::registration::Registration;
pub use models::user::{NewUser, User, UserView};
pub use models::user_profile::{EMPTY_BLOB, UserProfile};
