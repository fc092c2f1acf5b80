mod error;
mod first_fit;
mod occupancy;
mod rows;
mod skyline;
pub(crate) mod types;
pub use error::*;
pub use first_fit::place_first_available;
pub use occupancy::Occupancy;
pub use rows::RowPacker;
pub use skyline::place_up_left;
pub use types::*;

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, debug_span};

use crate::config::{Algorithm, GRID_WIDTH, GridConfig};
use crate::ir::{GridPoint, PanelSpec};

/// Assigns grid coordinates to every panel.
///
/// Pinned panels keep their coordinates and act as fixed obstacles. Floating
/// panels are placed one at a time, in input order, by the configured
/// algorithm. Any validation failure aborts the whole layout.
pub fn compute_layout(panels: &[PanelSpec], config: &GridConfig) -> Result<Layout> {
    let span = debug_span!("compute_layout", algorithm = %config.algorithm, panels = panels.len());
    let _enter = span.enter();

    validate_panels(panels)?;
    let pinned = pinned_rects(panels)?;

    let mut occupancy = Occupancy::new();
    for (_, rect) in &pinned {
        occupancy.reserve(*rect)?;
    }
    let obstacles: Vec<Rect> = pinned.iter().map(|(_, rect)| *rect).collect();
    let mut rows = RowPacker::new(&obstacles);

    let mut placements = BTreeMap::new();
    let mut order = Vec::with_capacity(panels.len());
    for panel in panels {
        let rect = match panel.position {
            Some(point) => Rect::at(point, panel.width, panel.height),
            None => {
                let point = place_floating(panel, config.algorithm, &occupancy, &mut rows)?;
                let rect = Rect::at(point, panel.width, panel.height);
                occupancy.reserve(rect)?;
                debug!(id = %panel.id, x = rect.x, y = rect.y, w = rect.width, h = rect.height, "placed panel");
                rect
            }
        };
        order.push(panel.id.clone());
        placements.insert(
            panel.id.clone(),
            Placement::new(&panel.id, rect, panel.is_pinned()),
        );
    }

    Ok(Layout {
        algorithm: config.algorithm,
        placements,
        order,
        height: occupancy.max_bottom(),
    })
}

fn place_floating(
    panel: &PanelSpec,
    algorithm: Algorithm,
    occupancy: &Occupancy,
    rows: &mut RowPacker,
) -> Result<GridPoint> {
    match algorithm {
        Algorithm::UpLeft => place_up_left(panel.width, occupancy),
        Algorithm::LeftRight | Algorithm::Blocked => rows.place(panel.width, panel.height, occupancy),
        Algorithm::FirstAvailableGap => place_first_available(panel.width, panel.height, occupancy),
    }
}

fn validate_panels(panels: &[PanelSpec]) -> Result<()> {
    let mut seen = HashSet::new();
    for panel in panels {
        if !seen.insert(panel.id.as_str()) {
            return Err(LayoutError::DuplicatePanelId {
                id: panel.id.clone(),
            });
        }
        if panel.width == 0 {
            return Err(LayoutError::InvalidSize(format!(
                "panel `{}`: width must be at least 1",
                panel.id
            )));
        }
        if panel.height == 0 {
            return Err(LayoutError::InvalidSize(format!(
                "panel `{}`: height must be at least 1",
                panel.id
            )));
        }
        if panel.width > GRID_WIDTH {
            return Err(LayoutError::PanelWiderThanGrid {
                id: panel.id.clone(),
                width: panel.width,
            });
        }
    }
    Ok(())
}

fn pinned_rects(panels: &[PanelSpec]) -> Result<Vec<(&str, Rect)>> {
    let mut pinned: Vec<(&str, Rect)> = Vec::new();
    for panel in panels {
        let Some(point) = panel.position else {
            continue;
        };
        let rect = Rect::at(point, panel.width, panel.height);
        if !Occupancy::in_bounds(rect) {
            return Err(LayoutError::PinnedOutOfBounds {
                id: panel.id.clone(),
                x: point.x,
                width: panel.width,
            });
        }
        if let Some((other, _)) = pinned.iter().find(|(_, other)| other.intersects(&rect)) {
            return Err(LayoutError::OverlappingPinnedPanels {
                first: (*other).to_string(),
                second: panel.id.clone(),
            });
        }
        pinned.push((panel.id.as_str(), rect));
    }
    Ok(pinned)
}

/// Pins one panel at `(x, y)`, as a drag in the editor does. Every other panel
/// is returned untouched and no layout is run.
pub fn pin_panel(panels: &[PanelSpec], id: &str, x: u32, y: u32) -> Result<Vec<PanelSpec>> {
    let Some(target) = panels.iter().find(|panel| panel.id == id) else {
        return Err(LayoutError::UnknownPanel { id: id.to_string() });
    };
    if !Occupancy::in_bounds(Rect::new(x, y, target.width, target.height)) {
        return Err(LayoutError::PinnedOutOfBounds {
            id: id.to_string(),
            x,
            width: target.width,
        });
    }
    Ok(panels
        .iter()
        .map(|panel| {
            if panel.id == id {
                PanelSpec {
                    position: Some(GridPoint::new(x, y)),
                    ..panel.clone()
                }
            } else {
                panel.clone()
            }
        })
        .collect())
}
