//! Create clap app

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(
    name = env!("CARGO_PKG_NAME"),
    version,
    about,
    subcommand_required(true),
    arg_required_else_help(true)
)]
pub struct Cli {
    /// Pretty-prints all output
    #[clap(long, short)]
    pub pretty: bool,
    /// Path to the campus root directory.
    #[clap(long)]
    pub campus_root: PathBuf,
    /// Id of the user making the request.
    #[clap(long)]
    pub user_id: u32,
    /// Display name of the user making the request, used in confirmations.
    #[clap(long)]
    pub user_name: Option<String>,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Parser)]
pub enum Command {
    /// Copies a file from the user's private file area into a course section as a resource module
    CreateFileResource {
        /// Name of the file in the private file area.
        #[clap(long)]
        file_name: String,
        /// Logical directory of the file, e.g. '/assignment/'. Defaults to the root.
        #[clap(long)]
        file_path: Option<String>,
        /// Id of the target course.
        #[clap(long)]
        course_id: u32,
        /// Section of the course page the resource is placed in, starting from 1.
        #[clap(long)]
        section_number: u32,
        /// Name shown on the course page. Defaults to the file name.
        #[clap(long)]
        display_name: Option<String>,
    },

    /// Lists the files in the user's private file area
    ListPrivateFiles,
}
