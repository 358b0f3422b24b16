// SPDX-License-Identifier: Apache-2.0

use crate::csv::split_record;
use crate::IngestError;
use jalmitr_core::sha256_hex;
use jalmitr_model::{Location, Pincode};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Header columns the directory file must carry, in any order.
pub const REQUIRED_COLUMNS: [&str; 4] = ["pincode", "district", "statename", "officename"];

/// Postal-code directory loaded from a CSV export.
///
/// The first row for a pincode wins; later duplicates are ignored. Rows
/// with a blank pincode cell are skipped and counted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PincodeDirectory {
    entries: BTreeMap<Pincode, Location>,
    rows: usize,
    skipped: usize,
    source_sha256: Option<String>,
}

struct ColumnIndex {
    pincode: usize,
    district: usize,
    state: usize,
    office: usize,
    width: usize,
}

impl ColumnIndex {
    fn from_header(line: &str) -> Result<Self, IngestError> {
        let names: Vec<String> = split_record(line)?
            .into_iter()
            .map(|n| n.trim().to_ascii_lowercase())
            .collect();
        let find = |wanted: &str| {
            names.iter().position(|n| n == wanted).ok_or_else(|| {
                IngestError(format!("pincode directory header is missing column `{wanted}`"))
            })
        };
        let pincode = find(REQUIRED_COLUMNS[0])?;
        let district = find(REQUIRED_COLUMNS[1])?;
        let state = find(REQUIRED_COLUMNS[2])?;
        let office = find(REQUIRED_COLUMNS[3])?;
        Ok(Self {
            pincode,
            district,
            state,
            office,
            width: pincode.max(district).max(state).max(office) + 1,
        })
    }
}

impl PincodeDirectory {
    pub fn load(path: &Path) -> Result<Self, IngestError> {
        let bytes = fs::read(path).map_err(|e| {
            IngestError(format!("failed to read pincode directory {}: {e}", path.display()))
        })?;
        let text = String::from_utf8(bytes).map_err(|e| {
            IngestError(format!("pincode directory {} is not UTF-8: {e}", path.display()))
        })?;
        let mut directory = Self::parse_str(&text)?;
        let digest = sha256_hex(text.as_bytes());
        tracing::info!(
            path = %path.display(),
            entries = directory.len(),
            rows = directory.rows,
            skipped = directory.skipped,
            sha256 = %digest,
            "pincode directory loaded"
        );
        directory.source_sha256 = Some(digest);
        Ok(directory)
    }

    pub fn parse_str(text: &str) -> Result<Self, IngestError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut lines = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());
        let Some((_, header)) = lines.next() else {
            return Err(IngestError("pincode directory is empty".to_string()));
        };
        let columns = ColumnIndex::from_header(header)?;

        let mut directory = Self::default();
        for (idx, line) in lines {
            let cols = split_record(line)?;
            if cols.len() < columns.width {
                return Err(IngestError(format!(
                    "pincode directory line {}: expected at least {} columns, found {}",
                    idx + 1,
                    columns.width,
                    cols.len()
                )));
            }
            directory.rows += 1;
            let Ok(pincode) = Pincode::parse(&cols[columns.pincode]) else {
                directory.skipped += 1;
                continue;
            };
            directory.entries.entry(pincode.clone()).or_insert_with(|| {
                Location::new(
                    pincode,
                    cols[columns.district].clone(),
                    cols[columns.state].clone(),
                    cols[columns.office].clone(),
                )
            });
        }
        Ok(directory)
    }

    #[must_use]
    pub fn lookup(&self, pincode: &Pincode) -> Option<&Location> {
        self.entries.get(pincode)
    }

    /// Distinct pincodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Data rows read, including skipped and duplicate ones.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Digest of the file contents, when loaded from disk.
    #[must_use]
    pub fn source_sha256(&self) -> Option<&str> {
        self.source_sha256.as_deref()
    }
}
