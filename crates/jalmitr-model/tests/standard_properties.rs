use jalmitr_model::{format_decimal, InputRange, Standard, ValueKind};
use proptest::prelude::*;

proptest! {
    #[test]
    fn band_is_met_exactly_inside_bounds(v in -1.0f64..20.0) {
        let band = Standard::Band { low: 6.5, high: 8.5 };
        prop_assert_eq!(band.is_met(v), (6.5..=8.5).contains(&v));
    }

    #[test]
    fn at_most_is_met_up_to_limit(v in 0.0f64..5000.0, limit in 0.0f64..5000.0) {
        prop_assert_eq!(Standard::AtMost { limit }.is_met(v), v <= limit);
    }

    #[test]
    fn decimal_text_parses_back(v in 0.0f64..10000.0) {
        let text = format_decimal(v);
        let back: f64 = text.parse().expect("decimal text");
        prop_assert_eq!(back, v);
    }

    #[test]
    fn integer_text_has_no_fraction(v in 0u32..100_000) {
        let text = ValueKind::Integer.format(f64::from(v));
        prop_assert_eq!(text, v.to_string());
    }

    #[test]
    fn input_range_rejects_values_above_max(excess in 0.001f64..1000.0) {
        let range = InputRange::new(0.0, 14.0);
        prop_assert!(!range.contains(14.0 + excess));
        prop_assert!(range.contains(14.0));
    }
}
