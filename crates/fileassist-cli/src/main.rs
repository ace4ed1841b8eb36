//! CLI for importing private files into courses.

use anyhow::{Context, Result};
use clap::Parser;
use fileassist_cli::{app::Cli, output::CliOutput};
use std::{any::Any, process::ExitCode};

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}

fn run() -> Result<(), ()> {
    let cli = Cli::parse();
    let pretty = cli.pretty;
    match std::panic::catch_unwind(|| fileassist_cli::run(cli)) {
        Ok(Ok(output)) => {
            print_output(&output, pretty).map_err(|_| ())?;
            Ok(())
        }
        Ok(Err(printable)) => {
            print_output(&printable, pretty).map_err(|_| ())?;
            Err(())
        }
        Err(err) => {
            print_panic(err, pretty);
            Err(())
        }
    }
}

fn print_panic(err: Box<dyn Any + Send>, pretty: bool) {
    // currently only prints a message if the panic is called with str or String; this should be good enough
    let error_message = if let Some(string) = err.downcast_ref::<&str>() {
        format!("Process panicked unexpectedly with message: {string}")
    } else if let Some(string) = err.downcast_ref::<String>() {
        format!("Process panicked unexpectedly with message: {string}")
    } else {
        "Process panicked unexpectedly without an error message".to_string()
    };
    let output = CliOutput::crashed(error_message);
    print_output(&output, pretty).expect("should never fail");
}

fn print_output(output: &CliOutput, pretty: bool) -> Result<()> {
    let result = if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .with_context(|| format!("Failed to convert {output:?} to JSON"))?;
    println!("{result}");
    Ok(())
}
