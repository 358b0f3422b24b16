// SPDX-License-Identifier: Apache-2.0

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{Display, Formatter};

pub const PARAMETER_NAME_MAX_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct ParameterName(String);

impl ParameterName {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError(
                "parameter name must not be empty".to_string(),
            ));
        }
        if s.len() > PARAMETER_NAME_MAX_LEN {
            return Err(ValidationError(format!(
                "parameter name exceeds max length {PARAMETER_NAME_MAX_LEN}"
            )));
        }
        if s.chars().any(char::is_control) {
            return Err(ValidationError(
                "parameter name must not contain control characters".to_string(),
            ));
        }
        Ok(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ParameterName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for ParameterName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// How a parameter is entered and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ValueKind {
    /// Whole numbers only (counts, mg/L totals measured in steps of 1).
    Integer,
    Decimal,
}

impl ValueKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Decimal => "decimal",
        }
    }

    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Integer => format!("{value:.0}"),
            Self::Decimal => format_decimal(value),
        }
    }
}

/// Formats a decimal so whole values keep one fractional digit (`10.0`),
/// everything else uses the shortest round-trip form (`0.01`).
#[must_use]
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Compliance standard for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Standard {
    /// Compliant iff `value <= limit`.
    AtMost { limit: f64 },
    /// Compliant iff `low <= value <= high` (pH).
    Band { low: f64, high: f64 },
}

impl Standard {
    #[must_use]
    pub fn is_met(self, value: f64) -> bool {
        match self {
            Self::AtMost { limit } => value <= limit,
            Self::Band { low, high } => low <= value && value <= high,
        }
    }

    #[must_use]
    pub fn display_text(self, kind: ValueKind) -> String {
        match self {
            Self::AtMost { limit } => format!("≤ {}", kind.format(limit)),
            Self::Band { low, high } => {
                format!("{}–{}", format_decimal(low), format_decimal(high))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
}

impl InputRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// NaN is never contained.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterDefinition {
    pub name: ParameterName,
    pub input_range: InputRange,
    pub standard: Standard,
    pub kind: ValueKind,
}

impl ParameterDefinition {
    #[must_use]
    pub fn new(
        name: ParameterName,
        input_range: InputRange,
        standard: Standard,
        kind: ValueKind,
    ) -> Self {
        Self {
            name,
            input_range,
            standard,
            kind,
        }
    }

    #[must_use]
    pub fn standard_text(&self) -> String {
        self.standard.display_text(self.kind)
    }

    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        self.kind.format(value)
    }

    /// Checks that `value` is something the entry form would have accepted.
    pub fn check_input(&self, value: f64) -> Result<(), ValidationError> {
        if !self.input_range.contains(value) {
            return Err(ValidationError(format!(
                "{} must be between {} and {}, got {}",
                self.name,
                self.kind.format(self.input_range.min),
                self.kind.format(self.input_range.max),
                value
            )));
        }
        if self.kind == ValueKind::Integer && value.fract() != 0.0 {
            return Err(ValidationError(format!(
                "{} must be a whole number, got {}",
                self.name, value
            )));
        }
        Ok(())
    }
}
