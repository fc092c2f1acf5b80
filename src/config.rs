use crate::ir::DeclaredWidth;
use crate::size::{DEFAULT_HEIGHT, DEFAULT_WIDTH, resolve_height, resolve_width};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Number of columns in the dashboard grid. Height is unbounded.
pub const GRID_WIDTH: u32 = 48;

/// Packing strategy applied to floating panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Algorithm {
    /// Skyline compaction: float up first, then left.
    #[default]
    UpLeft,
    /// Row packing, left to right.
    LeftRight,
    /// Row packing; shares the left-right mechanism.
    Blocked,
    /// Exhaustive top-to-bottom, left-to-right first fit.
    FirstAvailableGap,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::UpLeft,
        Algorithm::LeftRight,
        Algorithm::Blocked,
        Algorithm::FirstAvailableGap,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::UpLeft => "up-left",
            Self::LeftRight => "left-right",
            Self::Blocked => "blocked",
            Self::FirstAvailableGap => "first-available-gap",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == token.trim())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridConfig {
    pub algorithm: Algorithm,
}

impl GridConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }
}

/// Sizes given to panels that leave width or height undeclared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeDefaults {
    pub width: u32,
    pub height: u32,
}

impl Default for SizeDefaults {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub grid: GridConfig,
    pub defaults: SizeDefaults,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    layout: Option<LayoutSection>,
    defaults: Option<DefaultsSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutSection {
    algorithm: Option<Algorithm>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DefaultsSection {
    width: Option<DeclaredWidth>,
    height: Option<i64>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if let Some(layout) = parsed.layout
        && let Some(algorithm) = layout.algorithm
    {
        config.grid.algorithm = algorithm;
    }

    if let Some(defaults) = parsed.defaults {
        if let Some(width) = defaults.width.as_ref() {
            config.defaults.width = resolve_width(width)?;
        }
        if let Some(height) = defaults.height {
            config.defaults.height = resolve_height(height)?;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_tokens_round_trip_through_names() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_token(algorithm.as_str()), Some(algorithm));
        }
        assert_eq!(Algorithm::from_token("diagonal"), None);
    }

    #[test]
    fn algorithm_deserializes_from_kebab_case() {
        let algorithm: Algorithm = serde_json::from_str("\"first-available-gap\"").unwrap();
        assert_eq!(algorithm, Algorithm::FirstAvailableGap);
        assert!(serde_json::from_str::<Algorithm>("\"firstAvailableGap\"").is_err());
    }

    #[test]
    fn missing_config_file_yields_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.grid.algorithm, Algorithm::UpLeft);
        assert_eq!(config.defaults, SizeDefaults { width: 12, height: 8 });
    }

    #[test]
    fn config_merges_present_fields() {
        let config = parse_config(
            r#"{ "layout": { "algorithm": "blocked" }, "defaults": { "width": "half" } }"#,
        )
        .unwrap();
        assert_eq!(config.grid.algorithm, Algorithm::Blocked);
        assert_eq!(config.defaults.width, 24);
        assert_eq!(config.defaults.height, 8);
    }

    #[test]
    fn config_rejects_invalid_default_sizes() {
        assert!(parse_config(r#"{ "defaults": { "width": 64 } }"#).is_err());
        assert!(parse_config(r#"{ "defaults": { "height": 0 } }"#).is_err());
        assert!(parse_config(r#"{ "defaults": { "width": "wide" } }"#).is_err());
    }

    #[test]
    fn config_file_is_read_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "dashboard-grid-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "layout": { "algorithm": "left-right" } }"#).unwrap();
        let config = load_config(Some(&path));
        let _ = std::fs::remove_file(&path);
        assert_eq!(config.unwrap().grid.algorithm, Algorithm::LeftRight);
    }
}
