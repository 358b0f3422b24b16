// SPDX-License-Identifier: Apache-2.0

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum SampleType {
    GroundWater,
    RiverWater,
    TapWater,
    RoWater,
    /// Sewage / effluent treatment plant outlet.
    StpEtp,
}

impl SampleType {
    pub const ALL: [Self; 5] = [
        Self::GroundWater,
        Self::RiverWater,
        Self::TapWater,
        Self::RoWater,
        Self::StpEtp,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GroundWater => "GROUND WATER",
            Self::RiverWater => "RIVER WATER",
            Self::TapWater => "TAP WATER",
            Self::RoWater => "RO WATER",
            Self::StpEtp => "STP/ETP",
        }
    }

    #[must_use]
    pub const fn is_effluent(self) -> bool {
        matches!(self, Self::StpEtp)
    }

    /// Accepts the display label (`TAP WATER`) or a slug (`tap-water`,
    /// `tap_water`, `stp`).
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let key: String = input
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' | '/' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();
        match key.as_str() {
            "ground_water" | "ground" => Ok(Self::GroundWater),
            "river_water" | "river" => Ok(Self::RiverWater),
            "tap_water" | "tap" => Ok(Self::TapWater),
            "ro_water" | "ro" => Ok(Self::RoWater),
            "stp_etp" | "stp" | "etp" => Ok(Self::StpEtp),
            _ => Err(ValidationError(format!(
                "unknown sample type `{}` (expected one of: {})",
                input.trim(),
                Self::ALL
                    .iter()
                    .map(|t| t.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

impl Display for SampleType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_labels_and_slugs() {
        for t in SampleType::ALL {
            assert_eq!(SampleType::parse(t.as_str()).expect("label"), t);
        }
        assert_eq!(
            SampleType::parse("stp-etp").expect("slug"),
            SampleType::StpEtp
        );
        assert_eq!(
            SampleType::parse("  ro_water ").expect("slug"),
            SampleType::RoWater
        );
        assert!(SampleType::parse("sea water").is_err());
    }

    #[test]
    fn only_stp_etp_is_effluent() {
        let effluent: Vec<_> = SampleType::ALL
            .into_iter()
            .filter(|t| t.is_effluent())
            .collect();
        assert_eq!(effluent, vec![SampleType::StpEtp]);
    }
}
