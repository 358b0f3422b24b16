// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::fmt;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExitCode {
    Success = 0,
    Usage = 2,
    Validation = 3,
    DependencyFailure = 4,
    Internal = 10,
}

impl ExitCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Usage => "usage",
            Self::Validation => "validation",
            Self::DependencyFailure => "dependency_failure",
            Self::Internal => "internal",
        }
    }
}

/// Error payload written to stderr in `--json` mode.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineError {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: BTreeMap<String, String>,
}

impl MachineError {
    #[must_use]
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_detail(mut self, key: &str, value: &str) -> Self {
        self.details.insert(key.to_string(), value.to_string());
        self
    }
}

impl fmt::Display for MachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for MachineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_keep_their_numeric_contract() {
        assert_eq!(ExitCode::Success as u8, 0);
        assert_eq!(ExitCode::Usage as u8, 2);
        assert_eq!(ExitCode::Validation as u8, 3);
        assert_eq!(ExitCode::DependencyFailure as u8, 4);
        assert_eq!(ExitCode::Internal as u8, 10);
        assert_eq!(ExitCode::Validation.as_str(), "validation");
    }

    #[test]
    fn machine_error_details_serialize_sorted() {
        let err = MachineError::new("validation_error", "TDS value is compulsory!")
            .with_detail("sample_type", "TAP WATER")
            .with_detail("parameter", "TDS");
        let text = serde_json::to_string(&err).expect("encode");
        assert_eq!(
            text,
            r#"{"code":"validation_error","message":"TDS value is compulsory!","details":{"parameter":"TDS","sample_type":"TAP WATER"}}"#
        );
        assert_eq!(err.to_string(), "validation_error: TDS value is compulsory!");
    }

    #[test]
    fn machine_error_rejects_unknown_fields() {
        let raw = r#"{"code":"x","message":"y","extra":1}"#;
        assert!(serde_json::from_str::<MachineError>(raw).is_err());
    }
}
