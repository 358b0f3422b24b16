// SPDX-License-Identifier: Apache-2.0

use jalmitr_model::{ParameterName, SampleType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdviceScope {
    Effluent,
    DrinkingWater,
}

impl AdviceScope {
    const fn of(sample_type: SampleType) -> Self {
        if sample_type.is_effluent() {
            Self::Effluent
        } else {
            Self::DrinkingWater
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct AdviceRule {
    parameter: &'static str,
    scope: AdviceScope,
    text: &'static str,
}

const ADVICE_RULES: &[AdviceRule] = &[
    AdviceRule {
        parameter: "BOD",
        scope: AdviceScope::Effluent,
        text: "BOD: Check aeration, microbial dosing, clarifier cleaning.",
    },
    AdviceRule {
        parameter: "COD",
        scope: AdviceScope::Effluent,
        text: "COD: Boost aeration, remove excess sludge.",
    },
    AdviceRule {
        parameter: "Turbidity",
        scope: AdviceScope::Effluent,
        text: "TSS/Turbidity: Clean/replace filter media, clarifier maintenance.",
    },
    AdviceRule {
        parameter: "Fecal Coliform",
        scope: AdviceScope::Effluent,
        text: "Fecal Coliform: Improve chlorination/UV dosing, inspect dosing units.",
    },
    AdviceRule {
        parameter: "Ammonia",
        scope: AdviceScope::Effluent,
        text: "Ammonia: Enhance nitrification, check aeration.",
    },
    AdviceRule {
        parameter: "pH",
        scope: AdviceScope::Effluent,
        text: "pH abnormal: Adjust acid/alkali dosing, check neutralization units.",
    },
    AdviceRule {
        parameter: "TDS",
        scope: AdviceScope::DrinkingWater,
        text: "TDS High: Use RO purifier.",
    },
    AdviceRule {
        parameter: "Iron",
        scope: AdviceScope::DrinkingWater,
        text: "Iron High: Install iron removal filter.",
    },
    AdviceRule {
        parameter: "Ammonia",
        scope: AdviceScope::DrinkingWater,
        text: "Ammonia High: Check sewage; aerate source.",
    },
    AdviceRule {
        parameter: "Nitrate",
        scope: AdviceScope::DrinkingWater,
        text: "Nitrate High: RO/ion exchange recommended, infants avoid.",
    },
    AdviceRule {
        parameter: "Fluoride",
        scope: AdviceScope::DrinkingWater,
        text: "Fluoride High: Nalgonda/RO method for removal.",
    },
    AdviceRule {
        parameter: "Lead",
        scope: AdviceScope::DrinkingWater,
        text: "Lead High: Replace pipes, use RO+carbon.",
    },
];

pub const EFFLUENT_CLOSING_NOTE: &str =
    "Plant operator training & maintenance required. Do not reuse/discharge until compliant.";

/// Advice shown when `parameter` fails for `sample_type`, if any.
#[must_use]
pub fn advice_for(sample_type: SampleType, parameter: &str) -> Option<&'static str> {
    let scope = AdviceScope::of(sample_type);
    ADVICE_RULES
        .iter()
        .find(|rule| rule.scope == scope && rule.parameter == parameter)
        .map(|rule| rule.text)
}

/// Advice lines in fail-list order; parameters without advice are skipped.
#[must_use]
pub fn advice_lines(sample_type: SampleType, failed: &[ParameterName]) -> Vec<String> {
    failed
        .iter()
        .filter_map(|name| advice_for(sample_type, name.as_str()))
        .map(ToString::to_string)
        .collect()
}
