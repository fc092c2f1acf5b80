use crate::config::GRID_WIDTH;
use crate::ir::GridPoint;

use super::{LayoutError, Occupancy, Result};

/// Skyline compaction: the lowest resting height over every horizontal span
/// of `width` columns wins, the leftmost span breaks ties.
pub fn place_up_left(width: u32, occupancy: &Occupancy) -> Result<GridPoint> {
    if width == 0 || width > GRID_WIDTH {
        return Err(LayoutError::Internal(format!(
            "skyline cannot place a panel {width} columns wide"
        )));
    }
    let mut best: Option<GridPoint> = None;
    for x in 0..=GRID_WIDTH - width {
        let y = (x..x + width)
            .map(|column| occupancy.column_height(column))
            .max()
            .unwrap_or(0);
        if best.is_none_or(|current| y < current.y) {
            best = Some(GridPoint::new(x, y));
        }
    }
    best.ok_or_else(|| LayoutError::Internal("no placement found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;

    fn place_all(occupancy: &mut Occupancy, sizes: &[(u32, u32)]) -> Vec<(u32, u32)> {
        sizes
            .iter()
            .map(|&(w, h)| {
                let point = place_up_left(w, occupancy).unwrap();
                occupancy.reserve(Rect::at(point, w, h)).unwrap();
                (point.x, point.y)
            })
            .collect()
    }

    #[test]
    fn half_width_panels_fill_rows_of_two() {
        let mut occupancy = Occupancy::new();
        let placed = place_all(&mut occupancy, &[(24, 8); 4]);
        assert_eq!(placed, vec![(0, 0), (24, 0), (0, 8), (24, 8)]);
    }

    #[test]
    fn quarter_width_panels_share_one_row() {
        let mut occupancy = Occupancy::new();
        let placed = place_all(&mut occupancy, &[(12, 8); 4]);
        assert_eq!(placed, vec![(0, 0), (12, 0), (24, 0), (36, 0)]);
    }

    #[test]
    fn panels_float_up_before_left() {
        let mut occupancy = Occupancy::new();
        // A tall panel on the left and a short one on the right leave the
        // right-hand column as the highest resting place.
        let placed = place_all(&mut occupancy, &[(24, 20), (24, 4), (24, 4), (24, 4)]);
        assert_eq!(placed, vec![(0, 0), (24, 0), (24, 4), (24, 8)]);
    }

    #[test]
    fn resting_height_spans_every_covered_column() {
        let mut occupancy = Occupancy::new();
        occupancy.reserve(Rect::new(10, 0, 2, 30)).unwrap();
        let point = place_up_left(12, &occupancy).unwrap();
        assert_eq!(point, GridPoint::new(12, 0));
        let point = place_up_left(40, &occupancy).unwrap();
        assert_eq!(point, GridPoint::new(0, 30));
    }

    #[test]
    fn rejects_impossible_widths() {
        let occupancy = Occupancy::new();
        assert!(place_up_left(0, &occupancy).is_err());
        assert!(place_up_left(49, &occupancy).is_err());
    }
}
