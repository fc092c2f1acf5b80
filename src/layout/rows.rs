use tracing::trace;

use crate::config::GRID_WIDTH;
use crate::ir::GridPoint;

use super::{LayoutError, Occupancy, Rect, Result};

/// Row packing with a single open row. Panels fill the row left to right,
/// stepping over obstructions; a full row closes at its deepest bottom edge
/// and is never revisited.
#[derive(Debug, Clone)]
pub struct RowPacker {
    pinned: Vec<Rect>,
    row_y: u32,
    cursor_x: u32,
    row_bottom: u32,
    // Shallowest bottom edge among obstructions met in the open row.
    row_floor: Option<u32>,
}

impl RowPacker {
    pub fn new(pinned: &[Rect]) -> Self {
        let mut packer = Self {
            pinned: pinned.to_vec(),
            row_y: 0,
            cursor_x: 0,
            row_bottom: 0,
            row_floor: None,
        };
        packer.open_row(0);
        packer
    }

    fn open_row(&mut self, row_y: u32) {
        self.row_y = row_y;
        self.cursor_x = 0;
        self.row_floor = None;
        self.row_bottom = self
            .pinned
            .iter()
            .filter(|rect| rect.y == row_y)
            .map(Rect::bottom)
            .fold(row_y, u32::max);
    }

    fn close_row(&mut self) -> Result<()> {
        let next = if self.row_bottom > self.row_y {
            self.row_bottom
        } else {
            match self.row_floor {
                Some(floor) if floor > self.row_y => floor,
                _ => {
                    return Err(LayoutError::Internal(format!(
                        "row at y={} closed without progress",
                        self.row_y
                    )));
                }
            }
        };
        trace!(from = self.row_y, to = next, "closing row");
        self.open_row(next);
        Ok(())
    }

    pub fn place(&mut self, width: u32, height: u32, occupancy: &Occupancy) -> Result<GridPoint> {
        if width == 0 || width > GRID_WIDTH || height == 0 {
            return Err(LayoutError::Internal(format!(
                "row packing cannot place a {width}x{height} panel"
            )));
        }
        loop {
            if self.cursor_x + width <= GRID_WIDTH {
                let slot = Rect::new(self.cursor_x, self.row_y, width, height);
                match occupancy.collision(slot) {
                    None => {
                        self.cursor_x = slot.right();
                        self.row_bottom = self.row_bottom.max(slot.bottom());
                        return Ok(GridPoint::new(slot.x, slot.y));
                    }
                    Some(blocker) => {
                        let floor = blocker.bottom();
                        self.row_floor = Some(self.row_floor.map_or(floor, |f| f.min(floor)));
                        self.cursor_x = blocker.right();
                        continue;
                    }
                }
            }
            if self.row_y > occupancy.max_bottom() {
                return Err(LayoutError::Internal("no placement found".to_string()));
            }
            self.close_row()?;
        }
    }
}
