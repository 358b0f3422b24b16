#![forbid(unsafe_code)]

mod advice;
mod catalog;
mod evaluation;
mod limits;
mod messages;
mod report;
mod validate;

pub use advice::{advice_for, advice_lines, EFFLUENT_CLOSING_NOTE};
pub use catalog::{default_definition, parameter_set, Catalog, DRINKING_WATER_PARAMETERS, EFFLUENT_PARAMETERS};
pub use evaluation::{classify, evaluate, Evaluation};
pub use limits::{
    COMPULSORY_DRINKING_WATER_PARAMETER, FALLBACK_INPUT_MAX, FALLBACK_INPUT_MIN, FALLBACK_LIMIT,
    MIN_FILLED_DRINKING_WATER, MIN_FILLED_EFFLUENT, NOT_ENTERED_TEXT,
};
pub use messages::{messages, Messages};
pub use report::{build_report, ReportError};
pub use validate::{min_filled, validate_submission, Submission, SubmissionError};

pub const CRATE_NAME: &str = "jalmitr-policies";
