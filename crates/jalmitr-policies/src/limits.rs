pub const MIN_FILLED_DRINKING_WATER: usize = 5;
pub const MIN_FILLED_EFFLUENT: usize = 3;
pub const COMPULSORY_DRINKING_WATER_PARAMETER: &str = "TDS";

pub const FALLBACK_INPUT_MIN: f64 = 0.0;
pub const FALLBACK_INPUT_MAX: f64 = 1000.0;
pub const FALLBACK_LIMIT: f64 = 0.0;

pub const NOT_ENTERED_TEXT: &str = "--";
