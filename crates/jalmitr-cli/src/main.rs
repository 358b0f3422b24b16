#![forbid(unsafe_code)]

use std::process::ExitCode;

fn main() -> ExitCode {
    jalmitr_cli::main_entry()
}
