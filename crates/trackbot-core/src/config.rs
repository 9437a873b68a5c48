use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const GLOBAL_CONFIG_DIR: &str = "trackbot";
const CONFIG_FILE_NAME: &str = "config.json";
const LOCAL_CONFIG_FILE_NAME: &str = "trackbot.json";

/// Which analytics provider answers track requests
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsMode {
    /// Random values in fixed plausible ranges
    #[default]
    Placeholder,
    /// Values derived from the route geometry and update timestamps
    Route,
}

impl std::str::FromStr for AnalyticsMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "placeholder" => Ok(Self::Placeholder),
            "route" => Ok(Self::Route),
            other => Err(ConfigError::Invalid(format!(
                "unknown analytics mode '{other}' (expected placeholder or route)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_working_dir")]
    pub working_dir: PathBuf,

    #[serde(default)]
    pub analytics: AnalyticsMode,

    /// Seed for the placeholder analytics generator; unseeded when absent
    #[serde(default)]
    pub rng_seed: Option<u64>,

    /// Miles per gallon assumed by route analytics when estimating fuel
    #[serde(default = "default_fuel_mpg")]
    pub fuel_mpg: f64,

    #[serde(default)]
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            working_dir: default_working_dir(),
            analytics: AnalyticsMode::default(),
            rng_seed: None,
            fuel_mpg: default_fuel_mpg(),
            debug: false,
        }
    }
}

fn default_working_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn default_fuel_mpg() -> f64 {
    6.5
}

pub fn load_config(working_dir: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
    let wd = working_dir.unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let global_path = dirs::config_dir().map(|dir| dir.join(GLOBAL_CONFIG_DIR).join(CONFIG_FILE_NAME));

    let mut config = load_layers(global_path.as_deref(), &wd)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}

/// Defaults, then the global file, then `<wd>/trackbot.json`.
pub fn load_layers(global_path: Option<&Path>, wd: &Path) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig {
        working_dir: wd.to_path_buf(),
        ..Default::default()
    };

    if let Some(path) = global_path {
        if path.exists() {
            merge_config(&mut config, read_config_file(path)?);
        }
    }

    let local_path = wd.join(LOCAL_CONFIG_FILE_NAME);
    if local_path.exists() {
        merge_config(&mut config, read_config_file(&local_path)?);
    }

    Ok(config)
}

/// One config file's contents; keys absent from the file stay `None`.
#[derive(Debug, Default, Deserialize)]
struct ConfigOverlay {
    analytics: Option<AnalyticsMode>,
    rng_seed: Option<u64>,
    fuel_mpg: Option<f64>,
    debug: Option<bool>,
}

fn read_config_file(path: &Path) -> Result<ConfigOverlay, ConfigError> {
    tracing::debug!(path = %path.display(), "loading config file");
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::File(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| ConfigError::Invalid(format!("{}: {e}", path.display())))
}

fn merge_config(base: &mut AppConfig, overlay: ConfigOverlay) {
    if let Some(analytics) = overlay.analytics {
        base.analytics = analytics;
    }
    if let Some(seed) = overlay.rng_seed {
        base.rng_seed = Some(seed);
    }
    if let Some(mpg) = overlay.fuel_mpg {
        base.fuel_mpg = mpg;
    }
    if let Some(debug) = overlay.debug {
        base.debug = debug;
    }
}

/// Applies `TRACKBOT_ANALYTICS` and `TRACKBOT_SEED` on top of file config.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(mode) = lookup("TRACKBOT_ANALYTICS").filter(|v| !v.is_empty()) {
        config.analytics = mode.parse()?;
    }

    if let Some(seed) = lookup("TRACKBOT_SEED").filter(|v| !v.is_empty()) {
        let seed = seed
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::Invalid(format!("TRACKBOT_SEED: {e}")))?;
        config.rng_seed = Some(seed);
    }

    Ok(())
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fuel_mpg.is_finite() && self.fuel_mpg > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "fuel_mpg must be a positive number, got {}",
                self.fuel_mpg
            )));
        }
        Ok(())
    }
}
