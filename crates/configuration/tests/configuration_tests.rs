//! Tests for reading, writing and resolving configuration.

use std::collections::HashMap;

use query_engine_metadata::metadata::{ColumnsInfo, Metadata, TableInfo};
use sales_query_configuration::environment::{FixedEnvironment, Variable};
use sales_query_configuration::error::{MakeRuntimeConfigurationError, ParseConfigurationError};
use sales_query_configuration::{
    connection_settings, make_runtime_configuration, parse_configuration, version1,
    write_parsed_configuration, ApiKey, ParsedConfiguration, Secret, CONFIGURATION_FILENAME,
};

fn test_environment() -> FixedEnvironment {
    FixedEnvironment::from([
        (
            version1::DEFAULT_API_KEY_VARIABLE.into(),
            "the-api-key".to_string(),
        ),
        (
            connection_settings::DEFAULT_CONNECTION_URI_VARIABLE.into(),
            "sqlite::memory:".to_string(),
        ),
    ])
}

async fn write_raw(contents: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    tokio::fs::write(dir.path().join(CONFIGURATION_FILENAME), contents)
        .await
        .unwrap();
    dir
}

#[tokio::test]
async fn initial_configuration_round_trips_through_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let initial = ParsedConfiguration::initial();

    write_parsed_configuration(&initial, dir.path()).await.unwrap();
    let parsed = parse_configuration(dir.path()).await.unwrap();

    assert_eq!(parsed, initial);
}

#[tokio::test]
async fn written_configuration_satisfies_its_schema() {
    let dir = tempfile::tempdir().unwrap();
    write_parsed_configuration(&ParsedConfiguration::initial(), dir.path())
        .await
        .unwrap();

    let read_json = |name: &str| -> serde_json::Value {
        let contents = std::fs::read_to_string(dir.path().join(name)).unwrap();
        serde_json::from_str(&contents).unwrap()
    };
    let schema = read_json(version1::CONFIGURATION_JSONSCHEMA_FILENAME);
    let configuration = read_json(CONFIGURATION_FILENAME);

    let compiled = jsonschema::JSONSchema::compile(&schema).unwrap();
    assert!(compiled.is_valid(&configuration));
}

#[tokio::test]
async fn minimal_configuration_uses_defaults() {
    let dir = write_raw(
        r#"{
            "version": 1,
            "apiKey": "secret-api",
            "connectionSettings": { "connectionUri": "sqlite://sales.db?mode=rwc" }
        }"#,
    )
    .await;

    let parsed = parse_configuration(dir.path()).await.unwrap();
    assert_eq!(parsed.api_key, ApiKey::from("secret-api"));
    assert!(parsed.seed_database);
    assert_eq!(parsed.metadata, Metadata::sales_table());
    assert!(parsed.connection_settings.pool_settings.is_default());
}

#[tokio::test]
async fn missing_version_is_reported() {
    let dir = write_raw(r#"{ "apiKey": "secret-api" }"#).await;
    let error = parse_configuration(dir.path()).await.unwrap_err();
    assert!(
        matches!(error, ParseConfigurationError::DidNotFindExpectedVersionTag(_)),
        "{error}"
    );
}

#[tokio::test]
async fn unknown_version_is_reported() {
    let dir = write_raw(r#"{ "version": 7 }"#).await;
    let error = parse_configuration(dir.path()).await.unwrap_err();
    assert!(
        matches!(
            error,
            ParseConfigurationError::UnsupportedVersion { version: 7, .. }
        ),
        "{error}"
    );
}

#[tokio::test]
async fn syntax_errors_carry_a_location() {
    let dir = write_raw("{\n  \"version\": 1,\n  \"apiKey\": \n}").await;
    let error = parse_configuration(dir.path()).await.unwrap_err();
    match error {
        ParseConfigurationError::ParseError { line, .. } => assert_eq!(line, 4),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn empty_api_key_is_rejected() {
    let dir = write_raw(
        r#"{
            "version": 1,
            "apiKey": "",
            "connectionSettings": { "connectionUri": "sqlite::memory:" }
        }"#,
    )
    .await;
    let error = parse_configuration(dir.path()).await.unwrap_err();
    assert!(
        matches!(error, ParseConfigurationError::EmptyApiKey { .. }),
        "{error}"
    );
}

#[tokio::test]
async fn missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = parse_configuration(dir.path().join("nowhere"))
        .await
        .unwrap_err();
    assert!(matches!(error, ParseConfigurationError::IoError(_)));
}

#[test]
fn secrets_are_resolved_from_the_environment() {
    let configuration =
        make_runtime_configuration(ParsedConfiguration::initial(), test_environment()).unwrap();
    assert_eq!(configuration.api_key, "the-api-key");
    assert_eq!(configuration.connection_uri, "sqlite::memory:");
    assert!(configuration.seed_database);
}

#[test]
fn plain_secrets_need_no_environment() {
    let mut parsed = ParsedConfiguration::initial();
    parsed.api_key = ApiKey(Secret::Plain("inline-key".to_string()));
    parsed.connection_settings.connection_uri = "sqlite::memory:".into();

    let configuration =
        make_runtime_configuration(parsed, HashMap::<Variable, String>::new()).unwrap();
    assert_eq!(configuration.api_key, "inline-key");
}

#[test]
fn missing_environment_variable_is_reported() {
    let error = make_runtime_configuration(
        ParsedConfiguration::initial(),
        FixedEnvironment::default(),
    )
    .unwrap_err();
    match error {
        MakeRuntimeConfigurationError::MissingEnvironmentVariable { message, .. } => {
            assert!(message.contains(version1::DEFAULT_API_KEY_VARIABLE), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_api_key_from_the_environment_is_rejected() {
    let environment = FixedEnvironment::from([
        (version1::DEFAULT_API_KEY_VARIABLE.into(), String::new()),
        (
            connection_settings::DEFAULT_CONNECTION_URI_VARIABLE.into(),
            "sqlite::memory:".to_string(),
        ),
    ]);
    let error =
        make_runtime_configuration(ParsedConfiguration::initial(), environment).unwrap_err();
    assert!(
        matches!(error, MakeRuntimeConfigurationError::EmptyApiKey { .. }),
        "{error}"
    );
}

#[test]
fn invalid_identifiers_are_rejected() {
    let mut parsed = ParsedConfiguration::initial();
    parsed.metadata = Metadata {
        table: TableInfo {
            table_name: "sales_table; DROP TABLE users".to_string(),
            columns: ColumnsInfo::default(),
        },
    };
    let error = make_runtime_configuration(parsed, test_environment()).unwrap_err();
    assert!(
        matches!(error, MakeRuntimeConfigurationError::InvalidIdentifier { .. }),
        "{error}"
    );
}

#[test]
fn debug_output_hides_secrets() {
    let configuration =
        make_runtime_configuration(ParsedConfiguration::initial(), test_environment()).unwrap();
    let debug = format!("{configuration:?}");
    assert!(!debug.contains("the-api-key"));
    assert!(!debug.contains("sqlite::memory:"));
}
