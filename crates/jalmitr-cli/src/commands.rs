// SPDX-License-Identifier: Apache-2.0

use crate::config::Settings;
use crate::helpers::emit_ok;
use crate::render::{location_block, report_text, table};
use crate::{CliError, OutputMode};
use jalmitr_core::{resolve_config_path, ConfigPathScope};
use jalmitr_ingest::{
    parse_value_arg, read_measurements_file, write_report_csv, MeasurementFileError,
    PincodeDirectory,
};
use jalmitr_model::{FormSession, Language, Measurements, Pincode, SampleType};
use jalmitr_policies::{
    build_report, messages, min_filled, parameter_set, Catalog, ReportError, Submission,
    SubmissionError, COMPULSORY_DRINKING_WATER_PARAMETER,
};
use serde_json::json;
use std::path::{Path, PathBuf};

pub(crate) struct AssessRequest {
    pub pincode: String,
    pub sample_type: SampleType,
    pub values: Vec<String>,
    pub input: Option<PathBuf>,
    pub export: Option<PathBuf>,
    pub pincode_csv: Option<PathBuf>,
}

fn parse_pincode(raw: &str, language: Language) -> Result<Pincode, CliError> {
    Pincode::parse(raw).map_err(|_| submission_error(&SubmissionError::MissingPincode, language))
}

fn load_directory(path: &Path) -> Result<PincodeDirectory, CliError> {
    PincodeDirectory::load(path).map_err(|e| CliError::dependency("pincode_directory_unavailable", e.0))
}

fn gather_measurements(
    input: Option<&Path>,
    values: &[String],
    catalog: &Catalog,
) -> Result<Measurements, CliError> {
    let mut measurements = match input {
        Some(path) => read_measurements_file(path, catalog).map_err(|e| match e {
            MeasurementFileError::Unreadable(e) => CliError::dependency("input_unreadable", e.0),
            MeasurementFileError::Invalid(e) => CliError::validation("invalid_input", &e.0)
                .with_detail("path", &path.display().to_string()),
            other => CliError::internal(other.to_string()),
        })?,
        None => Measurements::new(),
    };
    for arg in values {
        let (name, value) = parse_value_arg(arg, catalog)
            .map_err(|e| CliError::validation("invalid_value", &e.0).with_detail("argument", arg))?;
        measurements.set(name, value);
    }
    Ok(measurements)
}

fn submission_error(err: &SubmissionError, language: Language) -> CliError {
    let mut error = CliError::validation(err.code(), &err.localized(language));
    match err {
        SubmissionError::UnknownParameter { parameter, .. }
        | SubmissionError::InvalidValue { parameter, .. } => {
            error = error
                .with_detail("parameter", parameter)
                .with_detail("reason", &err.to_string());
        }
        SubmissionError::CompulsoryMissing { parameter } => {
            error = error.with_detail("parameter", parameter);
        }
        SubmissionError::TooFewParameters { required, filled } => {
            error = error
                .with_detail("required", &required.to_string())
                .with_detail("filled", &filled.to_string());
        }
        _ => {}
    }
    error
}

pub(crate) fn run_assess(
    request: AssessRequest,
    settings: &Settings,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let language = settings.language;
    let catalog = Catalog::builtin();
    let measurements = gather_measurements(request.input.as_deref(), &request.values, catalog)?;

    let mut form = FormSession::new(request.sample_type);
    if let Ok(pincode) = Pincode::parse(&request.pincode) {
        form.set_pincode(pincode);
    }
    for (name, value) in measurements.iter() {
        form.set_value(name.clone(), value);
    }
    let submission = Submission::from_form(&form, language)
        .map_err(|e| submission_error(&e, language))?;

    let csv_path = request
        .pincode_csv
        .unwrap_or_else(|| settings.pincode_csv.clone());
    let directory = load_directory(&csv_path)?;
    let location = directory.lookup(&submission.pincode).cloned();
    if location.is_none() {
        tracing::info!(pincode = %submission.pincode, "pincode not in directory");
    }

    let report = match build_report(&submission, location, catalog) {
        Ok(report) => report,
        Err(ReportError::Submission(err)) => {
            tracing::info!(code = err.code(), "submission rejected");
            return Err(submission_error(&err, language));
        }
        Err(err) => return Err(CliError::internal(err.to_string())),
    };
    tracing::info!(
        sample_type = report.sample_type.as_str(),
        verdict = report.verdict.as_str(),
        passing = report.verdict.is_passing(),
        failed = report.failed.len(),
        "submission evaluated"
    );

    let m = messages(language);
    if let Some(path) = &request.export {
        write_report_csv(path, &report, m)
            .map_err(|e| CliError::dependency("export_failed", e.0))?;
    }

    if output_mode.json {
        let payload = json!({
            "command": "assess",
            "report": report,
            "export": request.export,
        });
        return emit_ok(output_mode, &payload).map_err(CliError::internal);
    }
    print!("{}", report_text(&report, m));
    if let Some(path) = &request.export {
        println!("\nReport exported to {}", path.display());
    }
    Ok(())
}

pub(crate) fn run_lookup(
    raw_pincode: &str,
    pincode_csv: Option<PathBuf>,
    settings: &Settings,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let pincode = parse_pincode(raw_pincode, settings.language)?;
    let csv_path = pincode_csv.unwrap_or_else(|| settings.pincode_csv.clone());
    let directory = load_directory(&csv_path)?;
    let location = directory.lookup(&pincode);
    let m = messages(settings.language);
    if output_mode.json {
        let payload = json!({
            "command": "lookup",
            "pincode": pincode,
            "found": location.is_some(),
            "location": location,
            "notice": location.is_none().then_some(m.pincode_not_found),
            "directory_sha256": directory.source_sha256(),
        });
        return emit_ok(output_mode, &payload).map_err(CliError::internal);
    }
    print!("{}", location_block(pincode.as_str(), location, m));
    Ok(())
}

pub(crate) fn run_catalog(
    sample_type: Option<SampleType>,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let catalog = Catalog::builtin();
    let definitions: Vec<_> = match sample_type {
        Some(st) => parameter_set(st)
            .iter()
            .map(|name| catalog.definition_or_default(name).into_owned())
            .collect(),
        None => catalog.iter().cloned().collect(),
    };

    if output_mode.json {
        let parameters: Vec<_> = definitions
            .iter()
            .map(|d| {
                json!({
                    "name": d.name,
                    "kind": d.kind,
                    "input_range": d.input_range,
                    "standard": d.standard,
                    "standard_text": d.standard_text(),
                })
            })
            .collect();
        let payload = json!({
            "command": "catalog",
            "sample_type": sample_type,
            "min_filled": sample_type.map(min_filled),
            "compulsory": sample_type
                .filter(|st| !st.is_effluent())
                .map(|_| COMPULSORY_DRINKING_WATER_PARAMETER),
            "parameters": parameters,
        });
        return emit_ok(output_mode, &payload).map_err(CliError::internal);
    }

    let rows: Vec<Vec<String>> = definitions
        .iter()
        .map(|d| {
            vec![
                d.name.to_string(),
                d.standard_text(),
                format!(
                    "{}..{}",
                    d.format_value(d.input_range.min),
                    d.format_value(d.input_range.max)
                ),
                d.kind.as_str().to_string(),
            ]
        })
        .collect();
    if let Some(st) = sample_type {
        println!("{st}: at least {} parameters", min_filled(st));
    }
    print!("{}", table(&["Parameter", "Standard", "Input range", "Kind"], &rows));
    Ok(())
}

pub(crate) fn run_messages(language: Language, output_mode: OutputMode) -> Result<(), CliError> {
    let entries = serde_json::to_value(messages(language))
        .map_err(|e| CliError::internal(e.to_string()))?;
    if output_mode.json {
        let payload = json!({
            "command": "messages",
            "language": language,
            "messages": entries,
        });
        return emit_ok(output_mode, &payload).map_err(CliError::internal);
    }
    println!("{} ({})", language.label(), language.code());
    if let Some(map) = entries.as_object() {
        for (key, value) in map {
            println!("{key}: {}", value.as_str().unwrap_or_default());
        }
    }
    Ok(())
}

pub(crate) fn run_config(settings: &Settings, output_mode: OutputMode) -> Result<(), CliError> {
    let payload = json!({
        "command": "config",
        "user_config": resolve_config_path(ConfigPathScope::User),
        "workspace_config": resolve_config_path(ConfigPathScope::Workspace),
        "sources": settings.sources,
        "settings": {
            "pincode_csv": settings.pincode_csv,
            "language": settings.language,
            "log_json": settings.log_json,
        },
    });
    emit_ok(output_mode, &payload).map_err(CliError::internal)
}

pub(crate) fn run_version(output_mode: OutputMode) -> Result<(), CliError> {
    if output_mode.json {
        let payload = json!({
            "name": "jalmitr",
            "version": env!("CARGO_PKG_VERSION"),
        });
        return emit_ok(output_mode, &payload).map_err(CliError::internal);
    }
    println!("jalmitr {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
