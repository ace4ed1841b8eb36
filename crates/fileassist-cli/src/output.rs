//! Output format of the CLI.

use fileassist::{ImportOutcome, StoredFile};
use serde::Serialize;

/// The JSON envelope every invocation prints exactly once.
#[derive(Debug, Serialize)]
pub struct CliOutput {
    pub status: Status,
    pub message: String,
    pub result: OutputResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DataKind>,
}

impl CliOutput {
    pub fn finished(message: impl Into<String>, data: DataKind) -> Self {
        Self {
            status: Status::Finished,
            message: message.into(),
            result: OutputResult::ExecutedCommand,
            data: Some(data),
        }
    }

    pub fn error(message: String, kind: Kind, trace: Vec<String>) -> Self {
        Self {
            status: Status::Finished,
            message,
            result: OutputResult::Error,
            data: Some(DataKind::Error { kind, trace }),
        }
    }

    pub fn crashed(message: String) -> Self {
        Self {
            status: Status::Crashed,
            message,
            result: OutputResult::Error,
            data: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// The command ran to the end, successfully or not
    Finished,
    /// The command panicked
    Crashed,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputResult {
    ExecutedCommand,
    Error,
}

/// The payload of the envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataKind {
    CreatedResource(ImportOutcome),
    PrivateFiles(Vec<StoredFile>),
    Error { kind: Kind, trace: Vec<String> },
}

/// The broad category of an error, for programmatic consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    /// Something that does not fit the other categories
    Generic,
    /// The request was malformed
    InvalidInput,
    /// The requester lacks a capability
    Unauthorized,
    /// No matching file in the private file area
    NotFound,
    /// Staging or registering the resource failed
    ImportFailure,
}
