//! Profile blobs and their text codec.
//!
//! Blobs are schemaless JSON objects. Anything else found in storage
//! (arrays, scalars, `null`, malformed text) is corruption.

use crate::{CoreError, Result as CoreErrorResult, UserProfile};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type JsonObject = Map<String, Value>;

/// Decoded profile of a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDocument {
    pub user_id: i64,
    pub profile_data: JsonObject,
    pub settings: JsonObject,
}

impl ProfileDocument {
    #[track_caller]
    pub fn decode(profile: &UserProfile) -> CoreErrorResult<Self> {
        Ok(Self {
            user_id: profile.user_id,
            profile_data: decode_blob("profile_data", &profile.profile_data)?,
            settings: decode_blob("settings", &profile.settings)?,
        })
    }
}

#[track_caller]
pub fn decode_blob(field: &'static str, text: &str) -> CoreErrorResult<JsonObject> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(CoreError::DataCorruption {
            field,
            message: format!("expected object, found {}", json_kind(&other)),
            location: ErrorLocation::from(Location::caller()),
        }),
        Err(e) => Err(CoreError::DataCorruption {
            field,
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

#[track_caller]
pub fn encode_blob(field: &'static str, object: &JsonObject) -> CoreErrorResult<String> {
    serde_json::to_string(object).map_err(|e| CoreError::DataCorruption {
        field,
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
