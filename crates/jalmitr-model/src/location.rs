// SPDX-License-Identifier: Apache-2.0

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Postal code as typed by the user, trimmed. Any non-empty text is kept;
/// whether it names a real post office is up to the directory lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct Pincode(String);

impl Pincode {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError("pincode must not be empty".to_string()));
        }
        Ok(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Pincode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Location {
    pub pincode: Pincode,
    pub district: String,
    pub state: String,
    pub office: String,
}

impl Location {
    #[must_use]
    pub fn new(pincode: Pincode, district: String, state: String, office: String) -> Self {
        Self {
            pincode,
            district,
            state,
            office,
        }
    }
}
