use authapi_core::JsonObject;

use serde::Deserialize;

/// PUT /api/users/profile body. A missing blob is stored as `{}`;
/// any `userId` sent along is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub profile_data: JsonObject,
    #[serde(default)]
    pub settings: JsonObject,
}
