use crate::config::GRID_WIDTH;
use crate::ir::GridPoint;

use super::{LayoutError, Occupancy, Rect, Result};

/// Row-major first fit: the topmost row with room, then the leftmost column in
/// it. Gaps left beside tall panels are backfilled.
///
/// A free slot always exists at the skyline's deepest point, so the scan stops
/// there; running past it means the occupancy is corrupt.
pub fn place_first_available(width: u32, height: u32, occupancy: &Occupancy) -> Result<GridPoint> {
    if width == 0 || width > GRID_WIDTH || height == 0 {
        return Err(LayoutError::Internal(format!(
            "first fit cannot place a {width}x{height} panel"
        )));
    }
    let limit = occupancy.max_bottom();
    let mut y = 0;
    while y <= limit {
        let mut x = 0;
        let mut next_y = u32::MAX;
        while x + width <= GRID_WIDTH {
            match occupancy.collision(Rect::new(x, y, width, height)) {
                None => return Ok(GridPoint::new(x, y)),
                // Every start column left of the blocker's right edge hits it too.
                Some(blocker) => {
                    next_y = next_y.min(blocker.bottom());
                    x = blocker.right();
                }
            }
        }
        if y == limit {
            break;
        }
        // Rows above the shallowest blocker's bottom hit the same blockers.
        y = next_y.max(y + 1);
    }
    Err(LayoutError::Internal("no placement found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_first_fit(width: u32, height: u32, occupancy: &Occupancy) -> GridPoint {
        for y in 0.. {
            for x in 0..=GRID_WIDTH - width {
                if occupancy.fits(Rect::new(x, y, width, height)) {
                    return GridPoint::new(x, y);
                }
            }
        }
        unreachable!()
    }

    #[test]
    fn backfills_beside_tall_pinned_panel() {
        let mut occupancy = Occupancy::new();
        occupancy.reserve(Rect::new(0, 0, 24, 20)).unwrap();
        let p1 = place_first_available(24, 8, &occupancy).unwrap();
        occupancy.reserve(Rect::at(p1, 24, 8)).unwrap();
        let p2 = place_first_available(24, 8, &occupancy).unwrap();
        assert_eq!(p1, GridPoint::new(24, 0));
        assert_eq!(p2, GridPoint::new(24, 8));
    }

    #[test]
    fn finds_gap_above_low_pinned_panel() {
        let mut occupancy = Occupancy::new();
        occupancy.reserve(Rect::new(0, 30, 48, 4)).unwrap();
        assert_eq!(
            place_first_available(48, 30, &occupancy).unwrap(),
            GridPoint::new(0, 0)
        );
        assert_eq!(
            place_first_available(48, 31, &occupancy).unwrap(),
            GridPoint::new(0, 34)
        );
    }

    #[test]
    fn very_tall_blockers_are_skipped_in_one_step() {
        let mut occupancy = Occupancy::new();
        occupancy.reserve(Rect::new(0, 0, 48, 1_000_000_000)).unwrap();
        assert_eq!(
            place_first_available(48, 1, &occupancy).unwrap(),
            GridPoint::new(0, 1_000_000_000)
        );
        occupancy.reserve(Rect::new(0, 1_000_000_000, 20, 3_000_000_000)).unwrap();
        assert_eq!(
            place_first_available(28, 1, &occupancy).unwrap(),
            GridPoint::new(20, 1_000_000_000)
        );
        assert_eq!(
            place_first_available(30, 1, &occupancy).unwrap(),
            GridPoint::new(0, 4_000_000_000)
        );
    }

    #[test]
    fn column_skipping_matches_cell_by_cell_scan() {
        let mut occupancy = Occupancy::new();
        for rect in [
            Rect::new(0, 0, 10, 3),
            Rect::new(14, 0, 6, 9),
            Rect::new(30, 2, 18, 2),
            Rect::new(5, 6, 7, 5),
            Rect::new(22, 5, 3, 12),
        ] {
            occupancy.reserve(rect).unwrap();
        }
        for width in [1, 3, 4, 8, 13, 20, 48] {
            for height in [1, 2, 5, 9] {
                assert_eq!(
                    place_first_available(width, height, &occupancy).unwrap(),
                    naive_first_fit(width, height, &occupancy),
                    "{width}x{height}"
                );
            }
        }
    }
}
