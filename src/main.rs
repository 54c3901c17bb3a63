use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use i18nsort::cmd::walk::{self, RunOptions};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Parser)]
#[command(
    name = "i18nsort",
    version,
    about = "Sort the top-level keys of per-language JSON translation files in place"
)]
struct Cli {
    /// Directory holding one subdirectory per language.
    /// Defaults to `i18n` next to the executable.
    base_dir: Option<PathBuf>,
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    let options = match cli.base_dir {
        Some(base_dir) => RunOptions::new(base_dir),
        None => match RunOptions::from_install_location() {
            Ok(options) => options,
            Err(error) => {
                emit_error(
                    "internal_error",
                    format!("failed to resolve install location: {error}"),
                    json!({"dir_name": walk::I18N_DIR_NAME}),
                    1,
                );
                return 1;
            }
        },
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();
    walk::run(&options, &mut output);
    0
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"kind": "cli_parse_error"}),
                3,
            );
            3
        }
    }
}

fn emit_error(error: &'static str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
