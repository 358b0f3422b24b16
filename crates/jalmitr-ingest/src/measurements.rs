// SPDX-License-Identifier: Apache-2.0

use crate::IngestError;
use jalmitr_model::{Measurements, ParameterName};
use jalmitr_policies::Catalog;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(IngestError(format!(
                "unsupported measurement file {}: expected .json or .toml",
                path.display()
            ))),
        }
    }
}

/// A measurement file either could not be read from disk or was read and
/// its contents rejected.
#[derive(Debug)]
#[non_exhaustive]
pub enum MeasurementFileError {
    Unreadable(IngestError),
    Invalid(IngestError),
}

impl Display for MeasurementFileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreadable(e) | Self::Invalid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for MeasurementFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable(e) | Self::Invalid(e) => Some(e),
        }
    }
}

/// Catalog spelling when the name is known; otherwise the trimmed input, so
/// evaluation can report it as an unknown parameter.
fn normalize_name(raw: &str, catalog: &Catalog) -> Result<ParameterName, IngestError> {
    if let Some(name) = catalog.resolve_name(raw) {
        return Ok(name.clone());
    }
    ParameterName::parse(raw).map_err(|e| IngestError(e.to_string()))
}

fn parse_number(name: &str, raw: &str) -> Result<f64, IngestError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| IngestError(format!("value for {name} is not a number: `{raw}`")))?;
    if !value.is_finite() {
        return Err(IngestError(format!("value for {name} must be finite")));
    }
    Ok(value)
}

/// Parses one `NAME=VALUE` argument.
pub fn parse_value_arg(arg: &str, catalog: &Catalog) -> Result<(ParameterName, f64), IngestError> {
    let Some((name, value)) = arg.split_once('=') else {
        return Err(IngestError(format!("expected NAME=VALUE, got `{arg}`")));
    };
    let name = normalize_name(name, catalog)?;
    let value = parse_number(name.as_str(), value)?;
    Ok((name, value))
}

pub fn decode_measurements(
    text: &str,
    format: InputFormat,
    catalog: &Catalog,
) -> Result<Measurements, IngestError> {
    let raw: BTreeMap<String, f64> = match format {
        InputFormat::Json => serde_json::from_str(text)
            .map_err(|e| IngestError(format!("invalid measurement JSON: {e}")))?,
        InputFormat::Toml => {
            toml::from_str(text).map_err(|e| IngestError(format!("invalid measurement TOML: {e}")))?
        }
    };
    let mut out = Measurements::new();
    for (name, value) in raw {
        let name = normalize_name(&name, catalog)?;
        if !value.is_finite() {
            return Err(IngestError(format!("value for {name} must be finite")));
        }
        if out.set(name.clone(), value).is_some() {
            return Err(IngestError(format!(
                "parameter {name} is given more than once"
            )));
        }
    }
    Ok(out)
}

pub fn read_measurements_file(
    path: &Path,
    catalog: &Catalog,
) -> Result<Measurements, MeasurementFileError> {
    let format = InputFormat::from_path(path).map_err(MeasurementFileError::Invalid)?;
    let text = fs::read_to_string(path).map_err(|e| {
        MeasurementFileError::Unreadable(IngestError(format!(
            "failed to read measurement file {}: {e}",
            path.display()
        )))
    })?;
    let values = decode_measurements(&text, format, catalog).map_err(|e| {
        MeasurementFileError::Invalid(IngestError(format!("{}: {}", path.display(), e.0)))
    })?;
    tracing::debug!(path = %path.display(), filled = values.filled_count(), "measurement file decoded");
    Ok(values)
}
