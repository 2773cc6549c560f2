//! Layered configuration: built-in defaults, then a configuration file, then
//! `LOCUS_`-prefixed environment variables (`__` separates nested keys, as in
//! `LOCUS_OUTCOMES__RESET=false`).

pub mod error;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ErrorKind, Result};

const FILE_STEM: &str = "locus";
const ENV_PREFIX: &str = "LOCUS_";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub outcomes: OutcomesConfig,
    pub extract: ExtractConfig,
    pub log: LogConfig,
}

/// Where resolution outcomes are appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutcomesConfig {
    pub resolved: PathBuf,
    pub unresolved: PathBuf,
    /// Empty both logs at the start of every extraction run.
    pub reset: bool,
}

impl Default for OutcomesConfig {
    fn default() -> Self {
        Self {
            resolved: PathBuf::from("cit_data/citations.jsonl"),
            unresolved: PathBuf::from("cit_data/citation_failures.jsonl"),
            reset: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Bytes of surrounding markup kept with each outcome entry.
    pub context_bytes: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { context_bytes: 4 * 1024 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directives, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { filter: "warn".to_string() }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// With an explicit `path`, that file must exist and is the only file
    /// read. Otherwise `locus.{toml,yaml,yml,json}` is looked for in the user's
    /// configuration directory, then in the working directory, later files
    /// overriding earlier ones; missing files are skipped.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::from_figment(Self::figment(path)?)
    }

    /// All configuration sources, merged but not yet extracted.
    pub fn figment(path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        match path {
            Some(path) => {
                if !path.is_file() {
                    exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
                }
                figment = merge_file(figment, path)?;
            },
            None => {
                for path in search_paths() {
                    if path.is_file() {
                        tracing::debug!(path = %path.display(), "found configuration file");
                        figment = merge_file(figment, &path)?;
                    }
                }
            },
        }
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        figment.extract().or_raise(|| ErrorKind::Invalid)
    }
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    let extension = path.extension().and_then(|extension| extension.to_str()).map(str::to_ascii_lowercase);
    Ok(match extension.as_deref() {
        Some("toml") => figment.merge(Toml::file_exact(path)),
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path)),
        Some("json") => figment.merge(Json::file_exact(path)),
        _ => exn::bail!(ErrorKind::UnsupportedFormat(path.to_path_buf())),
    })
}

fn search_paths() -> Vec<PathBuf> {
    let mut directories = Vec::new();
    if let Some(project) = ProjectDirs::from("org", "perseus", FILE_STEM) {
        directories.push(project.config_dir().to_path_buf());
    }
    directories.push(PathBuf::from("."));
    directories
        .into_iter()
        .flat_map(|directory| {
            ["toml", "yaml", "yml", "json"].map(|extension| directory.join(format!("{FILE_STEM}.{extension}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use figment::Jail;
    use rstest::rstest;

    use super::*;

    #[test]
    fn defaults_without_any_source() {
        Jail::expect_with(|_| {
            let config = Config::load(None).unwrap();
            assert_eq!(config, Config::default());
            assert!(config.outcomes.reset);
            Ok(())
        });
    }

    #[test]
    fn working_directory_file_then_environment() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "locus.toml",
                r#"
                    [outcomes]
                    resolved = "out/ok.jsonl"
                    reset = false

                    [log]
                    filter = "info"
                "#,
            )?;
            jail.set_env("LOCUS_LOG__FILTER", "locus_resolve=debug");
            jail.set_env("LOCUS_EXTRACT__CONTEXT_BYTES", "256");

            let config = Config::load(None).unwrap();
            assert_eq!(config.outcomes.resolved, PathBuf::from("out/ok.jsonl"));
            assert_eq!(config.outcomes.unresolved, OutcomesConfig::default().unresolved);
            assert!(!config.outcomes.reset);
            assert_eq!(config.log.filter, "locus_resolve=debug");
            assert_eq!(config.extract.context_bytes, 256);
            Ok(())
        });
    }

    #[rstest]
    #[case("settings.yaml", "outcomes:\n  unresolved: failures.jsonl\n")]
    #[case("settings.json", r#"{"outcomes": {"unresolved": "failures.jsonl"}}"#)]
    #[case("settings.toml", "outcomes.unresolved = \"failures.jsonl\"\n")]
    fn explicit_file_in_any_format(#[case] name: &str, #[case] contents: &str) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        let config = Config::from_figment(Config::figment(Some(&path)).unwrap()).unwrap();
        assert_eq!(config.outcomes.unresolved, PathBuf::from("failures.jsonl"));
    }

    #[test]
    fn explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(&*err, ErrorKind::NotFound(missing) if missing == &path));
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locus.ini");
        std::fs::write(&path, "").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(&*err, ErrorKind::UnsupportedFormat(_)));
    }

    #[test]
    fn invalid_values_fail_extraction() {
        Jail::expect_with(|jail| {
            jail.set_env("LOCUS_EXTRACT__CONTEXT_BYTES", "lots");
            let err = Config::load(None).unwrap_err();
            assert!(matches!(&*err, ErrorKind::Invalid));
            Ok(())
        });
    }
}
