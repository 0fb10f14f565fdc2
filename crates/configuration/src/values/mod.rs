mod pool_settings;
mod secret;

pub use pool_settings::PoolSettings;
pub use secret::Secret;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The key clients must send in the `x-api-key` header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ApiKey(pub Secret);

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

/// Connection string for a SQLite database.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ConnectionUri(pub Secret);

impl From<String> for ConnectionUri {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for ConnectionUri {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}
