// SPDX-License-Identifier: Apache-2.0

use crate::limits::{FALLBACK_INPUT_MAX, FALLBACK_INPUT_MIN, FALLBACK_LIMIT};
use jalmitr_model::ValueKind::{Decimal, Integer};
use jalmitr_model::{
    InputRange, ParameterDefinition, ParameterName, SampleType, Standard, ValueKind,
};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy)]
struct ParameterSpec {
    name: &'static str,
    min: f64,
    max: f64,
    standard: Standard,
    kind: ValueKind,
}

const fn at_most(
    name: &'static str,
    min: f64,
    max: f64,
    limit: f64,
    kind: ValueKind,
) -> ParameterSpec {
    ParameterSpec {
        name,
        min,
        max,
        standard: Standard::AtMost { limit },
        kind,
    }
}

const CATALOG_SPECS: &[ParameterSpec] = &[
    ParameterSpec {
        name: "pH",
        min: 0.0,
        max: 14.0,
        standard: Standard::Band {
            low: 6.5,
            high: 8.5,
        },
        kind: Decimal,
    },
    at_most("Conductivity", 0.0, 5000.0, 2000.0, Decimal),
    at_most("DO", 0.0, 14.0, 5.0, Decimal),
    at_most("BOD", 0.0, 100.0, 10.0, Decimal),
    at_most("COD", 0.0, 500.0, 50.0, Decimal),
    at_most("TDS", 0.0, 5000.0, 2000.0, Integer),
    at_most("Total Hardness", 0.0, 2000.0, 200.0, Integer),
    at_most("Total Alkalinity", 0.0, 600.0, 200.0, Integer),
    at_most("Nitrate", 0.0, 100.0, 10.0, Decimal),
    at_most("Fluoride", 0.0, 5.0, 1.0, Decimal),
    at_most("Ammonia", 0.0, 10.0, 5.0, Decimal),
    at_most("Sulphate", 0.0, 1000.0, 200.0, Decimal),
    at_most("Iron", 0.0, 10.0, 0.3, Decimal),
    at_most("Fecal Coliform", 0.0, 10000.0, 1000.0, Integer),
    at_most("Total Coliform", 0.0, 10000.0, 1000.0, Integer),
    at_most("Turbidity", 0.0, 100.0, 2.0, Decimal),
    at_most("Calcium", 0.0, 200.0, 75.0, Decimal),
    at_most("Chloride", 0.0, 1500.0, 250.0, Decimal),
    at_most("Carbonate", 0.0, 500.0, 200.0, Decimal),
    at_most("Magnesium", 0.0, 150.0, 30.0, Decimal),
    at_most("Calcium hardness", 0.0, 500.0, 75.0, Decimal),
    at_most("Bicarbonate", 0.0, 500.0, 200.0, Decimal),
    at_most("Potassium", 0.0, 50.0, 10.0, Decimal),
    at_most("Sodium", 0.0, 200.0, 50.0, Decimal),
    at_most("Magnesium hardness", 0.0, 200.0, 30.0, Decimal),
    at_most("Total Suspended Solids", 0.0, 1000.0, 20.0, Integer),
    at_most("Total Organic Carbon", 0.0, 50.0, 2.0, Decimal),
    at_most("Zinc", 0.0, 15.0, 5.0, Decimal),
    at_most("Arsenic", 0.0, 0.05, 0.01, Decimal),
    at_most("Odour", 0.0, 1.0, 0.0, Decimal),
    at_most("Lead", 0.0, 1.0, 0.01, Decimal),
    at_most("Chlorine", 0.0, 10.0, 1.0, Decimal),
];

/// Drinking-water entry form, in display order.
pub const DRINKING_WATER_PARAMETERS: &[&str] = &[
    "pH",
    "Conductivity",
    "DO",
    "BOD",
    "COD",
    "TDS",
    "Total Hardness",
    "Total Alkalinity",
    "Nitrate",
    "Fluoride",
    "Ammonia",
    "Sulphate",
    "Iron",
    "Fecal Coliform",
    "Total Coliform",
    "Turbidity",
    "Calcium",
    "Chloride",
    "Carbonate",
    "Magnesium",
    "Calcium hardness",
    "Bicarbonate",
    "Potassium",
    "Sodium",
    "Magnesium hardness",
    "Total Suspended Solids",
    "Total Organic Carbon",
    "Zinc",
    "Arsenic",
    "Odour",
    "Lead",
];

/// STP/ETP outlet entry form, in display order.
pub const EFFLUENT_PARAMETERS: &[&str] = &[
    "pH",
    "BOD",
    "COD",
    "Turbidity",
    "Ammonia",
    "Nitrate",
    "Fecal Coliform",
    "Chlorine",
    "TDS",
    "Total Alkalinity",
    "Chloride",
];

/// Parameter name -> definition lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: BTreeMap<ParameterName, ParameterDefinition>,
}

impl Catalog {
    /// The regulatory table shipped with the tool.
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Catalog::from_definitions(CATALOG_SPECS.iter().filter_map(|spec| {
                let name = ParameterName::parse(spec.name).ok()?;
                Some(ParameterDefinition::new(
                    name,
                    InputRange::new(spec.min, spec.max),
                    spec.standard,
                    spec.kind,
                ))
            }))
        })
    }

    #[must_use]
    pub fn from_definitions<I>(definitions: I) -> Self
    where
        I: IntoIterator<Item = ParameterDefinition>,
    {
        Self {
            entries: definitions
                .into_iter()
                .map(|d| (d.name.clone(), d))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParameterDefinition> {
        self.entries.get(name)
    }

    /// Missing entries fall back to the wide default range so an unknown
    /// parameter still produces a row instead of an error.
    #[must_use]
    pub fn definition_or_default(&self, name: &ParameterName) -> Cow<'_, ParameterDefinition> {
        match self.entries.get(name.as_str()) {
            Some(def) => Cow::Borrowed(def),
            None => Cow::Owned(default_definition(name.clone())),
        }
    }

    /// Case-insensitive match against catalog spelling (`ph` -> `pH`).
    #[must_use]
    pub fn resolve_name(&self, input: &str) -> Option<&ParameterName> {
        let wanted = normalize_key(input);
        self.entries
            .keys()
            .find(|name| normalize_key(name.as_str()) == wanted)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterDefinition> {
        self.entries.values()
    }
}

#[must_use]
pub fn default_definition(name: ParameterName) -> ParameterDefinition {
    ParameterDefinition::new(
        name,
        InputRange::new(FALLBACK_INPUT_MIN, FALLBACK_INPUT_MAX),
        Standard::AtMost {
            limit: FALLBACK_LIMIT,
        },
        ValueKind::Integer,
    )
}

/// The ordered parameter set shown for `sample_type`.
#[must_use]
pub fn parameter_set(sample_type: SampleType) -> &'static [ParameterName] {
    static DRINKING: OnceLock<Vec<ParameterName>> = OnceLock::new();
    static EFFLUENT: OnceLock<Vec<ParameterName>> = OnceLock::new();
    if sample_type.is_effluent() {
        EFFLUENT.get_or_init(|| parse_names(EFFLUENT_PARAMETERS))
    } else {
        DRINKING.get_or_init(|| parse_names(DRINKING_WATER_PARAMETERS))
    }
}

fn parse_names(names: &[&str]) -> Vec<ParameterName> {
    names
        .iter()
        .filter_map(|n| ParameterName::parse(n).ok())
        .collect()
}

fn normalize_key(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
