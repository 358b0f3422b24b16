#![forbid(unsafe_code)]
//! JalMitr model SSOT.
//!
//! Plain data types shared by the policy, ingest and CLI crates. Nothing in
//! this crate knows the regulatory thresholds; those live in
//! `jalmitr-policies`.
//!
//! ```compile_fail
//! use jalmitr_model::Status;
//!
//! fn exhaustive_match(s: Status) -> &'static str {
//!     match s {
//!         Status::Pass => "p",
//!         Status::Fail => "f",
//!         Status::NotEntered => "n",
//!     }
//! }
//! ```

mod error;
mod language;
mod location;
mod measurement;
mod parameter;
mod report;
mod sample;
mod session;

pub use error::ValidationError;
pub use language::Language;
pub use location::{Location, Pincode};
pub use measurement::Measurements;
pub use parameter::{
    format_decimal, InputRange, ParameterDefinition, ParameterName, Standard, ValueKind,
    PARAMETER_NAME_MAX_LEN,
};
pub use report::{Report, ReportRow, Status, Verdict};
pub use sample::SampleType;
pub use session::FormSession;

pub const CRATE_NAME: &str = "jalmitr-model";
