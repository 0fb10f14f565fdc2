//! Errors that can be thrown when processing configuration.

use std::path::PathBuf;

use thiserror::Error;

/// The errors that can be thrown when parsing a configuration directory.
#[derive(Debug, Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {file_path}:{line}:{column}: {message}")]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
    #[error("empty API key in {file_path}")]
    EmptyApiKey { file_path: PathBuf },
    #[error("did not find the expected version tag in {0}")]
    DidNotFindExpectedVersionTag(PathBuf),
    #[error("unsupported configuration version {version} in {file_path}")]
    UnsupportedVersion { file_path: PathBuf, version: u64 },
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// The errors that can be thrown when writing a configuration directory.
#[derive(Debug, Error)]
pub enum WriteParsedConfigurationError {
    #[error("unable to serialize configuration: {0}")]
    SerializeError(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// The errors that can be thrown when resolving a parsed configuration.
#[derive(Debug, Error)]
pub enum MakeRuntimeConfigurationError {
    #[error("invalid configuration in {file_path}: {message}")]
    MissingEnvironmentVariable { file_path: PathBuf, message: String },
    #[error("the API key in {file_path} resolved to an empty value")]
    EmptyApiKey { file_path: PathBuf },
    #[error("'{identifier}' is not a valid SQL identifier")]
    InvalidIdentifier { identifier: String },
}
