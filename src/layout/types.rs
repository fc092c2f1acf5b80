use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::Algorithm;
use crate::ir::{GridPoint, PanelSpec};

/// Half-open grid rectangle `[x, x + width) x [y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn at(point: GridPoint, width: u32, height: u32) -> Self {
        Self::new(point.x, point.y, width, height)
    }

    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Rectangles sharing only an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub id: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub pinned: bool,
}

impl Placement {
    pub fn new(id: &str, rect: Rect, pinned: bool) -> Self {
        Self {
            id: id.to_string(),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            pinned,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Result of one layout run: a placement for every input panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub algorithm: Algorithm,
    pub placements: BTreeMap<String, Placement>,
    /// Panel ids in input order.
    pub order: Vec<String>,
    /// Bottom edge of the lowest panel.
    pub height: u32,
}

impl Layout {
    pub fn get(&self, id: &str) -> Option<&Placement> {
        self.placements.get(id)
    }

    /// Placements in input order.
    pub fn iter(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.order.iter().filter_map(|id| self.placements.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Freezes the layout into fully pinned panels, in input order.
    pub fn pinned_panels(&self) -> Vec<PanelSpec> {
        self.iter()
            .map(|p| PanelSpec::pinned(p.id.clone(), p.width, p.height, p.x, p.y))
            .collect()
    }
}
