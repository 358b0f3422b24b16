// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{parameter_set, Catalog};
use crate::limits::{
    COMPULSORY_DRINKING_WATER_PARAMETER, MIN_FILLED_DRINKING_WATER, MIN_FILLED_EFFLUENT,
};
use crate::messages::messages;
use jalmitr_model::{FormSession, Language, Measurements, Pincode, SampleType};
use std::fmt::{Display, Formatter};

/// A form ready for evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub pincode: Pincode,
    pub sample_type: SampleType,
    pub language: Language,
    pub measurements: Measurements,
}

impl Submission {
    pub fn from_form(form: &FormSession, language: Language) -> Result<Self, SubmissionError> {
        let pincode = form
            .pincode()
            .cloned()
            .ok_or(SubmissionError::MissingPincode)?;
        Ok(Self {
            pincode,
            sample_type: form.sample_type(),
            language,
            measurements: form.values().clone(),
        })
    }
}

/// Reasons a submission is sent back to the user instead of evaluated.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SubmissionError {
    MissingPincode,
    UnknownParameter {
        parameter: String,
        sample_type: SampleType,
    },
    InvalidValue {
        parameter: String,
        reason: String,
    },
    CompulsoryMissing {
        parameter: &'static str,
    },
    TooFewParameters {
        required: usize,
        filled: usize,
    },
}

impl SubmissionError {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingPincode => "pincode_required",
            Self::UnknownParameter { .. } => "unknown_parameter",
            Self::InvalidValue { .. } => "invalid_value",
            Self::CompulsoryMissing { .. } => "compulsory_parameter_missing",
            Self::TooFewParameters { .. } => "too_few_parameters",
        }
    }

    /// Message in the user's language where the dictionary has one.
    #[must_use]
    pub fn localized(&self, language: Language) -> String {
        let m = messages(language);
        match self {
            Self::MissingPincode => m.pincode_label.to_string(),
            Self::CompulsoryMissing { .. } => m.tds_required.to_string(),
            Self::TooFewParameters { required, .. } => m.fill_more(*required),
            Self::UnknownParameter { .. } | Self::InvalidValue { .. } => self.to_string(),
        }
    }
}

impl Display for SubmissionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPincode => f.write_str("pincode is required"),
            Self::UnknownParameter {
                parameter,
                sample_type,
            } => write!(f, "parameter `{parameter}` is not measured for {sample_type}"),
            Self::InvalidValue { reason, .. } => f.write_str(reason),
            Self::CompulsoryMissing { parameter } => {
                write!(f, "{parameter} value is compulsory")
            }
            Self::TooFewParameters { required, filled } => write!(
                f,
                "at least {required} parameters are required for prediction, {filled} filled"
            ),
        }
    }
}

impl std::error::Error for SubmissionError {}

#[must_use]
pub const fn min_filled(sample_type: SampleType) -> usize {
    if sample_type.is_effluent() {
        MIN_FILLED_EFFLUENT
    } else {
        MIN_FILLED_DRINKING_WATER
    }
}

/// Checks run before evaluation: every value must belong to the active
/// parameter set and lie in its input range; then effluent samples need
/// enough values, and drinking-water samples need TDS before the count check.
pub fn validate_submission(
    sample_type: SampleType,
    measurements: &Measurements,
    catalog: &Catalog,
) -> Result<(), SubmissionError> {
    let active = parameter_set(sample_type);
    for (name, value) in measurements.iter() {
        if !active.contains(name) {
            return Err(SubmissionError::UnknownParameter {
                parameter: name.to_string(),
                sample_type,
            });
        }
        catalog
            .definition_or_default(name)
            .check_input(value)
            .map_err(|e| SubmissionError::InvalidValue {
                parameter: name.to_string(),
                reason: e.to_string(),
            })?;
    }

    let required = min_filled(sample_type);
    let filled = measurements.filled_count();
    if !sample_type.is_effluent() && !measurements.contains(COMPULSORY_DRINKING_WATER_PARAMETER) {
        return Err(SubmissionError::CompulsoryMissing {
            parameter: COMPULSORY_DRINKING_WATER_PARAMETER,
        });
    }
    if filled < required {
        return Err(SubmissionError::TooFewParameters { required, filled });
    }
    Ok(())
}
