//! Configuration for the service.

use std::fmt;

use query_engine_metadata::metadata;

use crate::values::PoolSettings;

/// The 'Configuration' type collects all the information necessary to serve queries at runtime.
///
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration', which resolves secrets from the environment
/// and validates identifiers.
#[derive(Clone)]
pub struct Configuration {
    pub api_key: String,
    pub connection_uri: String,
    pub pool_settings: PoolSettings,
    pub seed_database: bool,
    pub metadata: metadata::Metadata,
}

// Secrets stay out of logs.
impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("api_key", &"<redacted>")
            .field("connection_uri", &"<redacted>")
            .field("pool_settings", &self.pool_settings)
            .field("seed_database", &self.seed_database)
            .field("metadata", &self.metadata)
            .finish()
    }
}
