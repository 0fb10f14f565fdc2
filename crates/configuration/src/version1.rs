//! The version 1 configuration file format.

use std::path::{Path, PathBuf};

use query_engine_metadata::metadata;
use schemars::{schema::RootSchema, JsonSchema};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::connection_settings::DatabaseConnectionSettings;
use crate::error::{ParseConfigurationError, WriteParsedConfigurationError};
use crate::values::{ApiKey, Secret};

pub const CURRENT_VERSION: u32 = 1;
pub const CONFIGURATION_FILENAME: &str = "configuration.json";
pub const CONFIGURATION_JSONSCHEMA_FILENAME: &str = "schema.json";
pub const DEFAULT_API_KEY_VARIABLE: &str = "SALES_QUERY_API_KEY";

/// The configuration as written by users, with secrets still unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfiguration {
    /// Editor hint pointing at the JSON schema of this file.
    #[serde(rename = "$schema")]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Which version of the configuration format are we using
    pub version: u32,
    /// The key clients must present in the `x-api-key` header.
    pub api_key: ApiKey,
    pub connection_settings: DatabaseConnectionSettings,
    /// Create the orders table and insert the sample orders on startup.
    #[serde(default = "seed_database_default")]
    pub seed_database: bool,
    /// Names of the table and columns generated SQL refers to.
    #[serde(default)]
    pub metadata: metadata::Metadata,
}

fn seed_database_default() -> bool {
    true
}

impl ParsedConfiguration {
    pub fn initial() -> Self {
        ParsedConfiguration {
            schema: Some(CONFIGURATION_JSONSCHEMA_FILENAME.to_string()),
            version: CURRENT_VERSION,
            api_key: ApiKey(Secret::FromEnvironment {
                variable: DEFAULT_API_KEY_VARIABLE.into(),
            }),
            connection_settings: DatabaseConnectionSettings::empty(),
            seed_database: seed_database_default(),
            metadata: metadata::Metadata::sales_table(),
        }
    }
}

/// The JSON schema of the configuration file.
pub fn json_schema() -> RootSchema {
    schemars::schema_for!(ParsedConfiguration)
}

/// Read `configuration.json` from the configuration directory.
pub async fn parse_configuration(
    configuration_dir: impl AsRef<Path>,
) -> Result<ParsedConfiguration, ParseConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);
    let contents = fs::read_to_string(&configuration_file).await?;

    let value: serde_json::Value = serde_json::from_str(&contents)
        .map_err(|error| parse_error(&configuration_file, &error))?;
    match value.get("version").map(serde_json::Value::as_u64) {
        Some(Some(version)) if version == u64::from(CURRENT_VERSION) => Ok(()),
        Some(Some(version)) => Err(ParseConfigurationError::UnsupportedVersion {
            file_path: configuration_file.clone(),
            version,
        }),
        Some(None) | None => Err(ParseConfigurationError::DidNotFindExpectedVersionTag(
            configuration_file.clone(),
        )),
    }?;

    // parse again from the text so errors carry a location
    let parsed_configuration: ParsedConfiguration = serde_json::from_str(&contents)
        .map_err(|error| parse_error(&configuration_file, &error))?;

    if let ApiKey(Secret::Plain(api_key)) = &parsed_configuration.api_key {
        if api_key.is_empty() {
            return Err(ParseConfigurationError::EmptyApiKey {
                file_path: configuration_file,
            });
        }
    }

    tracing::debug!(file = %configuration_file.display(), "parsed configuration");
    Ok(parsed_configuration)
}

fn parse_error(file_path: &Path, error: &serde_json::Error) -> ParseConfigurationError {
    ParseConfigurationError::ParseError {
        file_path: file_path.to_path_buf(),
        line: error.line(),
        column: error.column(),
        message: error.to_string(),
    }
}

/// Write the parsed configuration and its JSON schema into a directory.
pub async fn write_parsed_configuration(
    parsed_config: &ParsedConfiguration,
    out_dir: impl AsRef<Path>,
) -> Result<(), WriteParsedConfigurationError> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir).await?;

    let configuration_file: PathBuf = out_dir.join(CONFIGURATION_FILENAME);
    let mut configuration_json = serde_json::to_string_pretty(parsed_config)?;
    configuration_json.push('\n');
    fs::write(&configuration_file, configuration_json).await?;

    let schema_file = out_dir.join(CONFIGURATION_JSONSCHEMA_FILENAME);
    let mut schema_json = serde_json::to_string_pretty(&json_schema())?;
    schema_json.push('\n');
    fs::write(&schema_file, schema_json).await?;

    Ok(())
}
