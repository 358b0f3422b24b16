use jalmitr_ingest::PincodeDirectory;
use std::env;
use std::path::Path;
use std::process::{Command, ExitCode};

const CHECKS: &[&str] = &[
    "cargo fmt --all -- --check",
    "cargo clippy --workspace --all-targets -- -D warnings",
    "cargo test --workspace",
];

fn run(root: &Path, cmd: &str) -> Result<(), String> {
    let status = Command::new("sh")
        .arg("-lc")
        .arg(cmd)
        .current_dir(root)
        .status()
        .map_err(|e| format!("failed to run `{cmd}`: {e}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("command failed: {cmd}"))
    }
}

fn check_data(root: &Path) -> Result<(), String> {
    let path = root.join("data").join("pincode.csv");
    let directory = PincodeDirectory::load(&path).map_err(|e| e.to_string())?;
    if directory.is_empty() {
        return Err(format!("{} has no usable rows", path.display()));
    }
    println!(
        "{}: {} pincodes from {} rows ({} skipped)",
        path.display(),
        directory.len(),
        directory.rows(),
        directory.skipped()
    );
    Ok(())
}

fn main() -> ExitCode {
    let arg = env::args().nth(1).unwrap_or_else(|| "help".to_string());
    let Some(root) = Path::new(env!("CARGO_MANIFEST_DIR")).parent() else {
        eprintln!("failed to resolve workspace root");
        return ExitCode::FAILURE;
    };

    let result = match arg.as_str() {
        "ci" => CHECKS
            .iter()
            .try_for_each(|cmd| run(root, cmd))
            .and_then(|()| check_data(root)),
        "bench" => run(root, "cargo bench -p jalmitr-policies"),
        "check-data" => check_data(root),
        "help" | "--help" | "-h" => {
            eprintln!("xtask commands:");
            eprintln!("  ci          fmt, clippy, tests and data check");
            eprintln!("  bench       report evaluation benchmarks");
            eprintln!("  check-data  validate data/pincode.csv");
            Ok(())
        }
        _ => Err(format!(
            "unknown xtask command: {arg} (try `cargo run -p xtask -- help`)"
        )),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
