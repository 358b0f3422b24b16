// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

pub mod canonical;
mod config;
mod errors;

pub use canonical::sha256_hex;
pub use config::{
    resolve_config_path, ConfigPathScope, ENV_JALMITR_CONFIG_DIR, ENV_JALMITR_LANG,
    ENV_JALMITR_LOG_JSON, ENV_JALMITR_LOG_LEVEL, ENV_JALMITR_PINCODE_CSV,
};
pub use errors::{ExitCode, MachineError};

pub const CRATE_NAME: &str = "jalmitr-core";
