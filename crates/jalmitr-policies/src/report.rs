// SPDX-License-Identifier: Apache-2.0

use crate::advice::{advice_for, advice_lines, EFFLUENT_CLOSING_NOTE};
use crate::catalog::{parameter_set, Catalog};
use crate::evaluation::evaluate;
use crate::messages::messages;
use crate::validate::{validate_submission, Submission, SubmissionError};
use jalmitr_core::canonical::stable_json_hash_hex;
use jalmitr_model::{Location, ParameterName, Report, ReportRow, Status, Verdict};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ReportError {
    Submission(SubmissionError),
    Encoding(String),
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Submission(e) => write!(f, "{e}"),
            Self::Encoding(e) => write!(f, "report encoding failed: {e}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Submission(e) => Some(e),
            Self::Encoding(_) => None,
        }
    }
}

impl From<SubmissionError> for ReportError {
    fn from(value: SubmissionError) -> Self {
        Self::Submission(value)
    }
}

/// Validates and evaluates `submission`. `location` is `None` when the
/// pincode is missing from the directory; that adds a notice but does not
/// block the report.
pub fn build_report(
    submission: &Submission,
    location: Option<Location>,
    catalog: &Catalog,
) -> Result<Report, ReportError> {
    let sample_type = submission.sample_type;
    validate_submission(sample_type, &submission.measurements, catalog)?;

    let set = parameter_set(sample_type);
    let mut evaluation = evaluate(&submission.measurements, set, catalog);
    for row in &mut evaluation.rows {
        if row.status == Status::Fail {
            row.advice = advice_for(sample_type, row.parameter.as_str()).map(str::to_string);
        }
    }

    let m = messages(submission.language);
    let failed = evaluation.failed;
    let joined = join_names(&failed);
    let effluent = sample_type.is_effluent();
    let (verdict, summary) = match (effluent, failed.is_empty()) {
        (true, true) => (Verdict::Compliant, m.stp_success.to_string()),
        (true, false) => (Verdict::NonCompliant, format!("{}{joined}", m.stp_problem)),
        (false, true) => (Verdict::Safe, m.safe.to_string()),
        (false, false) => (Verdict::Unsafe, format!("{} {joined}", m.unsafe_water)),
    };
    let closing_note = (effluent && !failed.is_empty()).then(|| EFFLUENT_CLOSING_NOTE.to_string());
    let notices = if location.is_none() {
        vec![m.pincode_not_found.to_string()]
    } else {
        Vec::new()
    };
    let rows_sha256 = rows_digest(&evaluation.rows)?;

    Ok(Report {
        sample_type,
        language: submission.language,
        pincode: submission.pincode.clone(),
        location,
        advice: advice_lines(sample_type, &failed),
        rows: evaluation.rows,
        failed,
        verdict,
        summary,
        closing_note,
        notices,
        rows_sha256,
    })
}

fn join_names(names: &[ParameterName]) -> String {
    names
        .iter()
        .map(ParameterName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn rows_digest(rows: &[ReportRow]) -> Result<String, ReportError> {
    stable_json_hash_hex(&rows).map_err(|e| ReportError::Encoding(e.to_string()))
}
