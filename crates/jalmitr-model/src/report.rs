// SPDX-License-Identifier: Apache-2.0

use crate::language::Language;
use crate::location::{Location, Pincode};
use crate::parameter::ParameterName;
use crate::sample::SampleType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Status {
    Pass,
    Fail,
    NotEntered,
}

impl Status {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::NotEntered => "not_entered",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportRow {
    pub parameter: ParameterName,
    pub value: Option<f64>,
    /// `--` when not entered.
    pub value_text: String,
    pub standard_text: String,
    pub status: Status,
    pub advice: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Verdict {
    /// Drinking-water sample with no failures.
    Safe,
    Unsafe,
    /// Effluent sample within discharge limits.
    Compliant,
    NonCompliant,
}

impl Verdict {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Unsafe => "unsafe",
            Self::Compliant => "compliant",
            Self::NonCompliant => "non_compliant",
        }
    }

    #[must_use]
    pub const fn is_passing(self) -> bool {
        matches!(self, Self::Safe | Self::Compliant)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Report {
    pub sample_type: SampleType,
    pub language: Language,
    pub pincode: Pincode,
    pub location: Option<Location>,
    /// Exactly one row per parameter in the active set, in set order.
    pub rows: Vec<ReportRow>,
    /// Failed parameters in row order.
    pub failed: Vec<ParameterName>,
    pub verdict: Verdict,
    pub summary: String,
    pub advice: Vec<String>,
    pub closing_note: Option<String>,
    pub notices: Vec<String>,
    pub rows_sha256: String,
}

impl Report {
    #[must_use]
    pub fn row(&self, parameter: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.parameter.as_str() == parameter)
    }

    #[must_use]
    pub fn status_of(&self, parameter: &str) -> Option<Status> {
        self.row(parameter).map(|r| r.status)
    }
}
