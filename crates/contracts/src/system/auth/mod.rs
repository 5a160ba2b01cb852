use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata key under which the favorites list lives in the user profile.
pub const FAVORITES_KEY: &str = "favorites";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMetadataRequest {
    pub unsafe_metadata: Value,
}

/// Signed-in user as the identity provider reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    /// Freeform bag owned by the client application.
    #[serde(default)]
    pub unsafe_metadata: Value,
}

impl UserProfile {
    pub fn greeting_name(&self) -> &str {
        self.first_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(Some(self.username.as_str()).filter(|n| !n.is_empty()))
            .unwrap_or("there")
    }

    /// Favorited country codes; anything that is not a string array reads as empty.
    pub fn favorites(&self) -> Vec<String> {
        self.unsafe_metadata
            .get(FAVORITES_KEY)
            .and_then(Value::as_array)
            .map(|codes| {
                codes
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Metadata with the favorites list replaced and every other key kept.
    pub fn metadata_with_favorites(&self, codes: &[String]) -> Value {
        let mut bag = match &self.unsafe_metadata {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };
        bag.insert(
            FAVORITES_KEY.to_string(),
            Value::Array(codes.iter().cloned().map(Value::String).collect()),
        );
        Value::Object(bag)
    }
}
