//! Convert a parsed configuration into the runtime configuration.

use std::borrow::Cow;
use std::path::PathBuf;

use crate::configuration::Configuration;
use crate::environment::Environment;
use crate::error::MakeRuntimeConfigurationError;
use crate::values::{ApiKey, ConnectionUri, Secret};
use crate::version1::{ParsedConfiguration, CONFIGURATION_FILENAME};

/// Resolve secrets from the environment and validate the identifiers that
/// generated SQL will contain.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
    environment: impl Environment,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let ApiKey(api_key) = &parsed_config.api_key;
    let api_key = resolve_secret(api_key, &environment)?.into_owned();
    if api_key.is_empty() {
        return Err(MakeRuntimeConfigurationError::EmptyApiKey {
            file_path: PathBuf::from(CONFIGURATION_FILENAME),
        });
    }

    let ConnectionUri(connection_uri) = &parsed_config.connection_settings.connection_uri;
    let connection_uri = resolve_secret(connection_uri, &environment)?.into_owned();

    for identifier in parsed_config.metadata.table.identifiers() {
        if !is_identifier(identifier) {
            return Err(MakeRuntimeConfigurationError::InvalidIdentifier {
                identifier: identifier.to_string(),
            });
        }
    }

    Ok(Configuration {
        api_key,
        connection_uri,
        pool_settings: parsed_config.connection_settings.pool_settings,
        seed_database: parsed_config.seed_database,
        metadata: parsed_config.metadata,
    })
}

fn resolve_secret<'a>(
    secret: &'a Secret,
    environment: &impl Environment,
) -> Result<Cow<'a, str>, MakeRuntimeConfigurationError> {
    match secret {
        Secret::Plain(value) => Ok(Cow::Borrowed(value.as_str())),
        Secret::FromEnvironment { variable } => environment
            .read(variable)
            .map(Cow::Owned)
            .map_err(|error| MakeRuntimeConfigurationError::MissingEnvironmentVariable {
                file_path: PathBuf::from(CONFIGURATION_FILENAME),
                message: error.to_string(),
            }),
    }
}

/// A bare SQL identifier: a letter or underscore, then letters, digits or underscores.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
