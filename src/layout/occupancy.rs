use crate::config::GRID_WIDTH;

use super::{LayoutError, Rect, Result};

const COLUMNS: usize = GRID_WIDTH as usize;

/// Every rectangle reserved so far, plus the per-column skyline.
///
/// The rectangle list answers exact overlap queries; the skyline records, per
/// column, the bottom edge of the lowest rectangle reserved in it. Both are
/// updated together by [`Occupancy::reserve`], which refuses any rectangle that
/// would break the no-overlap invariant.
#[derive(Debug, Clone)]
pub struct Occupancy {
    skyline: [u32; COLUMNS],
    rects: Vec<Rect>,
}

impl Default for Occupancy {
    fn default() -> Self {
        Self::new()
    }
}

impl Occupancy {
    pub fn new() -> Self {
        Self {
            skyline: [0; COLUMNS],
            rects: Vec::new(),
        }
    }

    pub fn in_bounds(rect: Rect) -> bool {
        !rect.is_empty()
            && rect
                .x
                .checked_add(rect.width)
                .is_some_and(|right| right <= GRID_WIDTH)
            && rect.y.checked_add(rect.height).is_some()
    }

    pub fn fits(&self, rect: Rect) -> bool {
        Self::in_bounds(rect) && self.collision(rect).is_none()
    }

    /// First reserved rectangle, in reservation order, that intersects `rect`.
    pub fn collision(&self, rect: Rect) -> Option<Rect> {
        self.rects.iter().copied().find(|r| r.intersects(&rect))
    }

    pub fn reserve(&mut self, rect: Rect) -> Result<()> {
        if !Self::in_bounds(rect) {
            return Err(LayoutError::Internal(format!(
                "rectangle {rect:?} is outside the grid"
            )));
        }
        if let Some(existing) = self.collision(rect) {
            return Err(LayoutError::Internal(format!(
                "rectangle {rect:?} overlaps reserved {existing:?}"
            )));
        }
        let bottom = rect.bottom();
        for column in &mut self.skyline[rect.x as usize..rect.right() as usize] {
            *column = (*column).max(bottom);
        }
        self.rects.push(rect);
        Ok(())
    }

    /// Top of the skyline at column `x`; 0 for an empty or out-of-range column.
    pub fn column_height(&self, x: u32) -> u32 {
        self.skyline.get(x as usize).copied().unwrap_or(0)
    }

    pub fn max_bottom(&self) -> u32 {
        self.skyline.iter().copied().max().unwrap_or(0)
    }
}
