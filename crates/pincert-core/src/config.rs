//! pincert configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::assessment::PassThreshold;
use crate::evaluator::Rounding;

/// Environment variable overriding the configured pass threshold.
pub const PASS_THRESHOLD_ENV: &str = "PINCERT_PASS_THRESHOLD";

/// Top-level pincert configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PincertConfig {
    /// Quiz percentage needed for a PASS verdict, unless a course sets its own.
    #[serde(default)]
    pub pass_threshold: PassThreshold,
    /// Rounding rule for score and progress percentages.
    #[serde(default)]
    pub rounding: Rounding,
    /// Directory holding course definitions.
    #[serde(default = "default_courses_dir")]
    pub courses_dir: PathBuf,
}

fn default_courses_dir() -> PathBuf {
    PathBuf::from("./courses")
}

impl Default for PincertConfig {
    fn default() -> Self {
        Self {
            pass_threshold: PassThreshold::DEFAULT,
            rounding: Rounding::default(),
            courses_dir: default_courses_dir(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `pincert.toml` in the current directory
/// 2. `~/.config/pincert/config.toml`
///
/// `PINCERT_PASS_THRESHOLD` overrides the threshold from any source.
pub fn load_config_from(path: Option<&Path>) -> Result<PincertConfig> {
    load_config_with(path, std::env::var(PASS_THRESHOLD_ENV).ok())
}

fn load_config_with(
    path: Option<&Path>,
    threshold_override: Option<String>,
) -> Result<PincertConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("pincert.toml");
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
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => PincertConfig::default(),
    };

    apply_threshold_override(&mut config, threshold_override)?;

    Ok(config)
}

/// Parse a config document.
pub fn parse_config(content: &str) -> Result<PincertConfig> {
    Ok(toml::from_str(content)?)
}

fn apply_threshold_override(config: &mut PincertConfig, value: Option<String>) -> Result<()> {
    let Some(raw) = value else {
        return Ok(());
    };
    let percent: u32 = raw
        .trim()
        .parse()
        .with_context(|| format!("{PASS_THRESHOLD_ENV} is not a number: '{raw}'"))?;
    config.pass_threshold =
        PassThreshold::new(percent).with_context(|| format!("invalid {PASS_THRESHOLD_ENV}"))?;
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("pincert"))
}
