// SPDX-License-Identifier: Apache-2.0

use crate::catalog::Catalog;
use crate::limits::NOT_ENTERED_TEXT;
use jalmitr_model::{Measurements, ParameterDefinition, ParameterName, ReportRow, Status};

/// Rows for one parameter set plus the failed subset, both in set order.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub rows: Vec<ReportRow>,
    pub failed: Vec<ParameterName>,
}

#[must_use]
pub fn classify(definition: &ParameterDefinition, value: Option<f64>) -> Status {
    match value {
        None => Status::NotEntered,
        Some(v) if definition.standard.is_met(v) => Status::Pass,
        Some(_) => Status::Fail,
    }
}

/// Classifies every parameter in `set`. Advice is attached later, once the
/// sample type is known to the caller.
#[must_use]
pub fn evaluate(measurements: &Measurements, set: &[ParameterName], catalog: &Catalog) -> Evaluation {
    let mut rows = Vec::with_capacity(set.len());
    let mut failed = Vec::new();
    for name in set {
        let definition = catalog.definition_or_default(name);
        let value = measurements.get(name.as_str());
        let status = classify(&definition, value);
        if status == Status::Fail {
            failed.push(name.clone());
        }
        rows.push(ReportRow {
            parameter: name.clone(),
            value,
            value_text: value.map_or_else(
                || NOT_ENTERED_TEXT.to_string(),
                |v| definition.format_value(v),
            ),
            standard_text: definition.standard_text(),
            status,
            advice: None,
        });
    }
    Evaluation { rows, failed }
}
