#![deny(clippy::print_stdout, clippy::print_stderr, clippy::unwrap_used)]

//! CLI for importing private files into courses.

pub mod app;
pub mod output;

use crate::{
    app::{Cli, Command},
    output::{CliOutput, DataKind, Kind},
};
use anyhow::{Context, Result};
use fileassist::{host::FileStorage, AssistError, ImportRequest, Requester};
use fileassist_store::{Campus, CampusSettings, DirCourseRegistry, DirFileStore};

/// Runs the command and returns the output to print. A failed run comes back
/// as a ready-to-print error envelope.
pub fn run(cli: Cli) -> Result<CliOutput, Box<CliOutput>> {
    match run_app(cli) {
        Ok(output) => Ok(output),
        Err(e) => {
            log::debug!("command failed: {e:?}");
            let causes: Vec<String> = e.chain().map(|e| format!("Caused by: {e}")).collect();
            let kind = solve_error_kind(&e);
            Err(Box::new(CliOutput::error(format!("{e:#}"), kind, causes)))
        }
    }
}

fn run_app(cli: Cli) -> Result<CliOutput> {
    let campus = Campus::open(&cli.campus_root).context("Failed to open the campus root")?;
    let settings = CampusSettings::load(&campus).context("Failed to load the campus settings")?;
    let storage = DirFileStore::new(campus.clone());
    let requester = Requester {
        id: cli.user_id,
        display_name: cli
            .user_name
            .unwrap_or_else(|| format!("user {}", cli.user_id)),
    };

    match cli.command {
        Command::CreateFileResource {
            file_name,
            file_path,
            course_id,
            section_number,
            display_name,
        } => {
            let registry = DirCourseRegistry::new(campus);
            let request = ImportRequest {
                requester,
                file_name,
                file_path,
                course_id,
                section_number,
                display_name,
            };
            let outcome =
                fileassist::create_file_resource(&storage, &settings, &registry, &settings, request)
                    .context("Failed to create the file resource")?;
            Ok(CliOutput::finished(
                outcome.message.clone(),
                DataKind::CreatedResource(outcome),
            ))
        }

        Command::ListPrivateFiles => {
            let files = storage
                .list_private_files(requester.id)
                .context("Failed to list the private file area")?;
            let message = format!(
                "{} files in {}'s private file area",
                files.len(),
                requester.display_name
            );
            Ok(CliOutput::finished(message, DataKind::PrivateFiles(files)))
        }
    }
}

/// Goes through the error chain and picks the category of the first import
/// error found.
fn solve_error_kind(e: &anyhow::Error) -> Kind {
    for cause in e.chain() {
        if let Some(assist_error) = cause.downcast_ref::<AssistError>() {
            return match assist_error {
                AssistError::MissingFileName
                | AssistError::FileNameWithSeparator(_)
                | AssistError::InvalidFilePath(_)
                | AssistError::InvalidCourseId
                | AssistError::InvalidSectionNumber => Kind::InvalidInput,
                AssistError::MissingCapability { .. } => Kind::Unauthorized,
                AssistError::FileNotFound { .. } => Kind::NotFound,
                AssistError::MissingModuleDefaults(_)
                | AssistError::Stage { .. }
                | AssistError::Register(..)
                | AssistError::Storage(_) => Kind::ImportFailure,
            };
        }
    }
    Kind::Generic
}
