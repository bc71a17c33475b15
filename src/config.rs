//! Layered configuration for the command-line tools.
//!
//! Sources, highest priority first:
//! 1. Environment variables (`KOVOL_*`, `__` between section and key)
//! 2. `kovol.toml` in the working directory
//! 3. Built-in defaults
//!
//! `KOVOL_NORMALIZER__HARD_FAIL=false` maps to `normalizer.hard_fail`.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub const CONFIG_FILE: &str = "kovol.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),
}

const fn default_hard_fail() -> bool {
    true
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from("elicited_verbs.json")
}

fn default_report_path() -> PathBuf {
    PathBuf::from("accuracy_report.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NormalizerConfig {
    /// Stop at the first invalid character or cluster.
    #[serde(default = "default_hard_fail")]
    pub hard_fail: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            hard_fail: default_hard_fail(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// JSON array of elicited rows.
    #[serde(default = "default_corpus_path")]
    pub path: PathBuf,

    /// Where the accuracy report is written (`.bin` for bincode).
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
            report_path: default_report_path(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KovolConfig {
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
}

impl KovolConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed("KOVOL_").split("__"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = KovolConfig::default();
        assert!(config.normalizer.hard_fail);
        assert_eq!(config.corpus.path, PathBuf::from("elicited_verbs.json"));
        assert_eq!(config.corpus.report_path, PathBuf::from("accuracy_report.json"));
    }

    #[test]
    fn toml_and_env_layers() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
[corpus]
path = "data/verbs.json"
"#,
            )?;
            jail.set_env("KOVOL_NORMALIZER__HARD_FAIL", "false");

            let config = KovolConfig::load().expect("config");
            assert!(!config.normalizer.hard_fail);
            assert_eq!(config.corpus.path, PathBuf::from("data/verbs.json"));
            assert_eq!(config.corpus.report_path, PathBuf::from("accuracy_report.json"));
            Ok(())
        });
    }
}
