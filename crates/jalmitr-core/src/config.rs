// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

pub const ENV_JALMITR_LOG_LEVEL: &str = "JALMITR_LOG_LEVEL";
pub const ENV_JALMITR_LOG_JSON: &str = "JALMITR_LOG_JSON";
pub const ENV_JALMITR_PINCODE_CSV: &str = "JALMITR_PINCODE_CSV";
pub const ENV_JALMITR_LANG: &str = "JALMITR_LANG";
pub const ENV_JALMITR_CONFIG_DIR: &str = "JALMITR_CONFIG_DIR";

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigPathScope {
    User,
    Workspace,
}

#[must_use]
pub fn resolve_config_path(scope: ConfigPathScope) -> PathBuf {
    match scope {
        ConfigPathScope::User => {
            if let Some(dir) = non_empty_env(ENV_JALMITR_CONFIG_DIR) {
                return PathBuf::from(dir).join(CONFIG_FILE_NAME);
            }
            if let Some(xdg_config_home) = non_empty_env("XDG_CONFIG_HOME") {
                return PathBuf::from(xdg_config_home)
                    .join("jalmitr")
                    .join(CONFIG_FILE_NAME);
            }
            if let Some(home) = non_empty_env("HOME") {
                return PathBuf::from(home)
                    .join(".config")
                    .join("jalmitr")
                    .join(CONFIG_FILE_NAME);
            }
            PathBuf::from(".jalmitr").join(CONFIG_FILE_NAME)
        }
        ConfigPathScope::Workspace => PathBuf::from(".jalmitr").join(CONFIG_FILE_NAME),
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    let value = std::env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
