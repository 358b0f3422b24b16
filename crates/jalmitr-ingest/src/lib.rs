// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod csv;
mod export;
mod measurements;
mod pincode;

use std::fmt::{Display, Formatter};

pub const CRATE_NAME: &str = "jalmitr-ingest";

pub use export::{render_report_csv, write_report_csv, EXPORT_HEADER};
pub use measurements::{
    decode_measurements, parse_value_arg, read_measurements_file, InputFormat,
    MeasurementFileError,
};
pub use pincode::{PincodeDirectory, REQUIRED_COLUMNS};

#[derive(Debug)]
pub struct IngestError(pub String);
impl Display for IngestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for IngestError {}
