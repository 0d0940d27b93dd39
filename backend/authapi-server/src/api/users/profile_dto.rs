use authapi_core::{JsonObject, ProfileDocument};

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub user_id: i64,
    pub profile_data: JsonObject,
    pub settings: JsonObject,
}

impl From<ProfileDocument> for ProfileDto {
    fn from(doc: ProfileDocument) -> Self {
        Self {
            user_id: doc.user_id,
            profile_data: doc.profile_data,
            settings: doc.settings,
        }
    }
}
