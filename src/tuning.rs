//! Strategy tuning.
//!
//! Loads tunable strategy parameters from a JSON file so thresholds can be
//! adjusted between arena runs without recompiling. The bot binary looks
//! for the file path in the `MYRMEX_TUNING` environment variable and falls
//! back to the defaults when it is unset.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Environment variable naming the tuning JSON file.
pub const TUNING_ENV: &str = "MYRMEX_TUNING";

/// Tunable strategy parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Own/enemy ratio below which the colony counts as behind.
    pub behind_ratio: f64,
    /// Own/enemy ratio above which the colony counts as ahead.
    pub ahead_ratio: f64,
    /// Append a MESSAGE command describing the turn's decision.
    pub announce: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            behind_ratio: 0.9,
            ahead_ratio: 1.1,
            announce: false,
        }
    }
}

/// Loads tuning from a JSON file at the given path.
pub fn load_tuning(path: &Path) -> Result<Tuning, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    load_tuning_from_str(&data)
}

/// Loads tuning from a JSON string.
pub fn load_tuning_from_str(json: &str) -> Result<Tuning, String> {
    let tuning: Tuning =
        serde_json::from_str(json).map_err(|e| format!("failed to parse tuning JSON: {}", e))?;
    if tuning.behind_ratio <= 0.0 || tuning.ahead_ratio <= 0.0 {
        return Err("tuning ratios must be positive".to_string());
    }
    if tuning.behind_ratio > tuning.ahead_ratio {
        return Err(format!(
            "behind_ratio {} exceeds ahead_ratio {}",
            tuning.behind_ratio, tuning.ahead_ratio
        ));
    }
    Ok(tuning)
}

/// Resolves tuning from the environment, falling back to defaults.
/// A present-but-unloadable file is logged and ignored.
pub fn tuning_from_env() -> Tuning {
    match env::var(TUNING_ENV) {
        Ok(path) => match load_tuning(Path::new(&path)) {
            Ok(tuning) => tuning,
            Err(e) => {
                eprintln!("{}: {}", TUNING_ENV, e);
                Tuning::default()
            }
        },
        Err(_) => Tuning::default(),
    }
}
