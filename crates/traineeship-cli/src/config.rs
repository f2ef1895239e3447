//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level traineeship configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraineeshipConfig {
    /// Where `mark` looks for quizzes when `--quiz` is not given.
    #[serde(default = "default_quiz_dir")]
    pub quiz_dir: PathBuf,
    /// Where `mark` writes JSON reports when `--output` is not given.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Default `tracing` filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_quiz_dir() -> PathBuf {
    PathBuf::from("./quizzes")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./traineeship-results")
}
fn default_log_filter() -> String {
    "traineeship=info".to_string()
}

impl Default for TraineeshipConfig {
    fn default() -> Self {
        Self {
            quiz_dir: default_quiz_dir(),
            output_dir: default_output_dir(),
            log_filter: default_log_filter(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `traineeship.toml` in the current directory
/// 2. `~/.config/traineeship/config.toml`
///
/// Environment variable overrides: `TRAINEESHIP_QUIZ_DIR`, `TRAINEESHIP_OUTPUT_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<TraineeshipConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("traineeship.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => TraineeshipConfig::default(),
    };

    if let Ok(dir) = std::env::var("TRAINEESHIP_QUIZ_DIR") {
        config.quiz_dir = PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("TRAINEESHIP_OUTPUT_DIR") {
        config.output_dir = PathBuf::from(dir);
    }

    Ok(config)
}

fn parse_config(content: &str) -> Result<TraineeshipConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("traineeship"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TraineeshipConfig::default();
        assert_eq!(config.quiz_dir, PathBuf::from("./quizzes"));
        assert_eq!(config.log_filter, "traineeship=info");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config = parse_config(r#"quiz_dir = "week1""#).unwrap();
        assert_eq!(config.quiz_dir, PathBuf::from("week1"));
        assert_eq!(config.output_dir, PathBuf::from("./traineeship-results"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config_from(Some(Path::new("definitely-missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "log_filter = \"traineeship=debug\"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.log_filter, "traineeship=debug");
    }
}
