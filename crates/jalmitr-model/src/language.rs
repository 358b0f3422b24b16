// SPDX-License-Identifier: Apache-2.0

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Language {
    #[default]
    En,
    Hi,
    /// Hinglish: Hindi in mixed Latin/Devanagari script.
    HiEn,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::En, Self::Hi, Self::HiEn];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::HiEn => "hi_en",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "हिंदी",
            Self::HiEn => "Hinglish",
        }
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "en" | "english" => Ok(Self::En),
            "hi" | "hindi" => Ok(Self::Hi),
            "hi_en" | "hinglish" => Ok(Self::HiEn),
            other => Err(ValidationError(format!(
                "unsupported language `{other}` (expected en, hi or hi_en)"
            ))),
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
