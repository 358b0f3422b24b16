// SPDX-License-Identifier: Apache-2.0
//! Layered settings: defaults, user config, workspace config, `--config`,
//! environment, then command-line flags.

use jalmitr_core::{
    resolve_config_path, ConfigPathScope, ENV_JALMITR_LANG, ENV_JALMITR_LOG_JSON,
    ENV_JALMITR_PINCODE_CSV,
};
use jalmitr_model::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) const DEFAULT_PINCODE_CSV: &str = "data/pincode.csv";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    pincode_csv: Option<PathBuf>,
    language: Option<String>,
    log_json: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigError {
    Unreadable(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreadable(m) | Self::Invalid(m) => f.write_str(m),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Settings {
    pub pincode_csv: PathBuf,
    pub language: Language,
    pub log_json: bool,
    /// Config files that were found and applied, lowest precedence first.
    pub sources: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pincode_csv: PathBuf::from(DEFAULT_PINCODE_CSV),
            language: Language::En,
            log_json: false,
            sources: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Overrides<'a> {
    pub config: Option<&'a Path>,
    pub language: Option<Language>,
}

impl Settings {
    pub(crate) fn resolve(overrides: Overrides<'_>) -> Result<Self, ConfigError> {
        Self::resolve_with(overrides, |name| std::env::var(name).ok())
    }

    fn resolve_with(
        overrides: Overrides<'_>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut settings = Self::default();
        for scope in [ConfigPathScope::User, ConfigPathScope::Workspace] {
            let path = resolve_config_path(scope);
            if path.is_file() && !settings.sources.contains(&path) {
                settings.apply_file(&path)?;
            }
        }
        if let Some(path) = overrides.config {
            if !path.is_file() {
                return Err(ConfigError::Unreadable(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            settings.apply_file(path)?;
        }
        settings.apply_env(env)?;
        if let Some(language) = overrides.language {
            settings.language = language;
        }
        Ok(settings)
    }

    fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| {
            ConfigError::Unreadable(format!("failed to read config {}: {e}", path.display()))
        })?;
        let file: SettingsFile = toml::from_str(&text).map_err(|e| {
            ConfigError::Invalid(format!("invalid config {}: {e}", path.display()))
        })?;
        if let Some(csv) = file.pincode_csv {
            self.pincode_csv = csv;
        }
        if let Some(lang) = file.language {
            self.language = parse_language(&lang, path.display())?;
        }
        if let Some(log_json) = file.log_json {
            self.log_json = log_json;
        }
        self.sources.push(path.to_path_buf());
        Ok(())
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        let non_empty = |name: &str| env(name).filter(|v| !v.trim().is_empty());
        if let Some(csv) = non_empty(ENV_JALMITR_PINCODE_CSV) {
            self.pincode_csv = PathBuf::from(csv.trim());
        }
        if let Some(lang) = non_empty(ENV_JALMITR_LANG) {
            self.language = parse_language(&lang, ENV_JALMITR_LANG)?;
        }
        if let Some(raw) = non_empty(ENV_JALMITR_LOG_JSON) {
            self.log_json = parse_bool(&raw).ok_or_else(|| {
                ConfigError::Invalid(format!("{ENV_JALMITR_LOG_JSON} must be a boolean, got `{raw}`"))
            })?;
        }
        Ok(())
    }
}

fn parse_language(raw: &str, source: impl std::fmt::Display) -> Result<Language, ConfigError> {
    Language::parse(raw).map_err(|e| ConfigError::Invalid(format!("{source}: {e}")))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("jalmitr.toml");
        fs::write(&path, body).expect("write config");
        path
    }

    #[test]
    fn explicit_config_overrides_defaults() {
        let tmp = tempfile::tempdir().expect("tmp");
        let path = write_config(
            tmp.path(),
            "pincode_csv = \"/srv/pincodes.csv\"\nlanguage = \"hi\"\nlog_json = true\n",
        );
        let settings = Settings::resolve_with(
            Overrides {
                config: Some(&path),
                language: None,
            },
            env_from(&[]),
        )
        .expect("settings");
        assert_eq!(settings.pincode_csv, PathBuf::from("/srv/pincodes.csv"));
        assert_eq!(settings.language, Language::Hi);
        assert!(settings.log_json);
        assert_eq!(settings.sources.last(), Some(&path));
    }

    #[test]
    fn env_beats_file_and_flag_beats_env() {
        let tmp = tempfile::tempdir().expect("tmp");
        let path = write_config(tmp.path(), "language = \"hi\"\npincode_csv = \"a.csv\"\n");
        let env = env_from(&[(ENV_JALMITR_LANG, "hi-en"), (ENV_JALMITR_PINCODE_CSV, "b.csv")]);
        let settings = Settings::resolve_with(
            Overrides {
                config: Some(&path),
                language: None,
            },
            &env,
        )
        .expect("settings");
        assert_eq!(settings.language, Language::HiEn);
        assert_eq!(settings.pincode_csv, PathBuf::from("b.csv"));

        let settings = Settings::resolve_with(
            Overrides {
                config: Some(&path),
                language: Some(Language::En),
            },
            &env,
        )
        .expect("settings");
        assert_eq!(settings.language, Language::En);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let tmp = tempfile::tempdir().expect("tmp");
        let path = write_config(tmp.path(), "pincode_file = \"x.csv\"\n");
        let err = Settings::resolve_with(
            Overrides {
                config: Some(&path),
                language: None,
            },
            env_from(&[]),
        )
        .expect_err("unknown key");
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("pincode_file"), "{err}");
    }

    #[test]
    fn missing_explicit_config_is_unreadable() {
        let tmp = tempfile::tempdir().expect("tmp");
        let missing = tmp.path().join("nope.toml");
        let err = Settings::resolve_with(
            Overrides {
                config: Some(&missing),
                language: None,
            },
            env_from(&[]),
        )
        .expect_err("missing");
        assert!(matches!(err, ConfigError::Unreadable(_)));
    }

    #[test]
    fn log_json_env_must_be_boolean() {
        let mut settings = Settings::default();
        settings
            .apply_env(env_from(&[(ENV_JALMITR_LOG_JSON, "yes")]))
            .expect("bool");
        assert!(settings.log_json);
        let err = settings
            .apply_env(env_from(&[(ENV_JALMITR_LOG_JSON, "maybe")]))
            .expect_err("not a bool");
        assert!(err.to_string().contains(ENV_JALMITR_LOG_JSON));
    }
}
