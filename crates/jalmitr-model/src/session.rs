// SPDX-License-Identifier: Apache-2.0

use crate::location::Pincode;
use crate::measurement::Measurements;
use crate::parameter::ParameterName;
use crate::sample::SampleType;

/// Per-user entry form state.
///
/// Entered values belong to one (pincode, sample type) pair: changing either
/// clears every value so a report can never mix readings from two samples.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSession {
    pincode: Option<Pincode>,
    sample_type: SampleType,
    values: Measurements,
}

impl FormSession {
    #[must_use]
    pub fn new(sample_type: SampleType) -> Self {
        Self {
            pincode: None,
            sample_type,
            values: Measurements::new(),
        }
    }

    /// Returns `true` when the entered values were reset.
    pub fn set_pincode(&mut self, pincode: Pincode) -> bool {
        if self.pincode.as_ref() == Some(&pincode) {
            return false;
        }
        self.pincode = Some(pincode);
        self.reset_values()
    }

    /// Returns `true` when the entered values were reset.
    pub fn set_sample_type(&mut self, sample_type: SampleType) -> bool {
        if self.sample_type == sample_type {
            return false;
        }
        self.sample_type = sample_type;
        self.reset_values()
    }

    pub fn set_value(&mut self, name: ParameterName, value: f64) -> Option<f64> {
        self.values.set(name, value)
    }

    pub fn clear_value(&mut self, name: &str) -> Option<f64> {
        self.values.clear(name)
    }

    #[must_use]
    pub fn pincode(&self) -> Option<&Pincode> {
        self.pincode.as_ref()
    }

    #[must_use]
    pub fn sample_type(&self) -> SampleType {
        self.sample_type
    }

    #[must_use]
    pub fn values(&self) -> &Measurements {
        &self.values
    }

    fn reset_values(&mut self) -> bool {
        let had_values = !self.values.is_empty();
        self.values.clear_all();
        had_values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ParameterName {
        ParameterName::parse(s).expect("name")
    }

    fn pin(s: &str) -> Pincode {
        Pincode::parse(s).expect("pincode")
    }

    #[test]
    fn changing_sample_type_clears_values() {
        let mut form = FormSession::new(SampleType::TapWater);
        form.set_pincode(pin("110001"));
        form.set_value(name("TDS"), 300.0);
        assert!(form.set_sample_type(SampleType::StpEtp));
        assert!(form.values().is_empty());
        assert_eq!(form.sample_type(), SampleType::StpEtp);
    }

    #[test]
    fn changing_pincode_clears_values() {
        let mut form = FormSession::new(SampleType::GroundWater);
        form.set_pincode(pin("110001"));
        form.set_value(name("pH"), 7.2);
        assert!(form.set_pincode(pin("560001")));
        assert!(form.values().is_empty());
    }

    #[test]
    fn unchanged_selection_keeps_values() {
        let mut form = FormSession::new(SampleType::GroundWater);
        form.set_pincode(pin("110001"));
        form.set_value(name("pH"), 7.2);
        assert!(!form.set_pincode(pin(" 110001 ")));
        assert!(!form.set_sample_type(SampleType::GroundWater));
        assert_eq!(form.values().get("pH"), Some(7.2));
    }

    #[test]
    fn first_pincode_on_empty_form_reports_no_reset() {
        let mut form = FormSession::new(SampleType::RoWater);
        assert!(!form.set_pincode(pin("400001")));
        assert_eq!(form.pincode().map(Pincode::as_str), Some("400001"));
    }
}
