// SPDX-License-Identifier: Apache-2.0

use crate::csv::escape_field;
use crate::IngestError;
use jalmitr_model::Report;
use jalmitr_policies::Messages;
use std::fs;
use std::path::Path;

pub const EXPORT_HEADER: &str = "Parameter,Your Value,Standard,Status,Advice";

/// One CSV line per report row; status uses the localized label.
#[must_use]
pub fn render_report_csv(report: &Report, messages: &Messages) -> String {
    let mut out = String::with_capacity(64 * (report.rows.len() + 1));
    out.push_str(EXPORT_HEADER);
    out.push('\n');
    for row in &report.rows {
        let cells = [
            row.parameter.as_str(),
            row.value_text.as_str(),
            row.standard_text.as_str(),
            messages.status_label(row.status),
            row.advice.as_deref().unwrap_or(""),
        ];
        let line: Vec<String> = cells.iter().map(|c| escape_field(c)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

pub fn write_report_csv(path: &Path, report: &Report, messages: &Messages) -> Result<(), IngestError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| IngestError(e.to_string()))?;
    }
    fs::write(path, render_report_csv(report, messages)).map_err(|e| {
        IngestError(format!("failed to write report export {}: {e}", path.display()))
    })?;
    tracing::info!(path = %path.display(), rows = report.rows.len(), "report export written");
    Ok(())
}
