use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::{Algorithm, Config, GridConfig, SizeDefaults};
use crate::layout::{Layout, LayoutError, Result, compute_layout};
use crate::size::resolve_with;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: u32,
    pub y: u32,
}

impl GridPoint {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A panel with resolved grid size. Panels carrying a position are pinned and
/// never moved by the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub id: String,
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<GridPoint>,
}

impl PanelSpec {
    pub fn floating(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            position: None,
        }
    }

    pub fn pinned(id: impl Into<String>, width: u32, height: u32, x: u32, y: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            position: Some(GridPoint::new(x, y)),
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.position.is_some()
    }
}

/// Width as written in a dashboard: a semantic token or a column count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeclaredWidth {
    Units(i64),
    Token(String),
}

impl From<&str> for DeclaredWidth {
    fn from(token: &str) -> Self {
        Self::Token(token.to_string())
    }
}

impl From<i64> for DeclaredWidth {
    fn from(units: i64) -> Self {
        Self::Units(units)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelDecl {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<DeclaredWidth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
}

impl PanelDecl {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn resolve(&self, defaults: &SizeDefaults) -> Result<PanelSpec> {
        let (width, height) = resolve_with(defaults, self.width.as_ref(), self.height)
            .map_err(|err| err.for_panel(&self.id))?;
        let position = match (self.x, self.y) {
            (None, None) => None,
            (Some(x), Some(y)) => {
                let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
                    return Err(LayoutError::InvalidPosition {
                        id: self.id.clone(),
                    });
                };
                Some(GridPoint::new(x, y))
            }
            _ => {
                return Err(LayoutError::IncompletePosition {
                    id: self.id.clone(),
                });
            }
        };
        Ok(PanelSpec {
            id: self.id.clone(),
            width,
            height,
            position,
        })
    }
}

/// The layout-relevant slice of a dashboard definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(default, alias = "layout", skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,
    #[serde(default)]
    pub panels: Vec<PanelDecl>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DashboardFile {
    Dashboard(Dashboard),
    Panels(Vec<PanelDecl>),
}

impl Dashboard {
    /// Parses either a dashboard object or a bare array of panels.
    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        let file: DashboardFile = serde_json::from_str(input)?;
        Ok(match file {
            DashboardFile::Dashboard(dashboard) => dashboard,
            DashboardFile::Panels(panels) => Dashboard {
                algorithm: None,
                panels,
            },
        })
    }

    pub fn grid_config(&self, config: &Config) -> GridConfig {
        GridConfig::new(self.algorithm.unwrap_or(config.grid.algorithm))
    }

    pub fn resolve_panels(&self, defaults: &SizeDefaults) -> Result<Vec<PanelSpec>> {
        let mut seen = HashSet::new();
        let mut panels = Vec::with_capacity(self.panels.len());
        for decl in &self.panels {
            if !seen.insert(decl.id.as_str()) {
                return Err(LayoutError::DuplicatePanelId {
                    id: decl.id.clone(),
                });
            }
            panels.push(decl.resolve(defaults)?);
        }
        Ok(panels)
    }

    pub fn layout(&self, config: &Config) -> Result<Layout> {
        let panels = self.resolve_panels(&config.defaults)?;
        compute_layout(&panels, &self.grid_config(config))
    }
}
