use crate::grid::{Grid, Position};

/// follows predecessor links back from `end`; the start (no predecessor) is excluded
pub fn reconstruct_path(grid: &Grid, end: Position) -> Vec<Position> {
    let mut path = Vec::new();
    let mut current = end;

    while let Some(prev) = grid.cell(current).and_then(|cell| cell.predecessor()) {
        path.push(current);
        current = prev;

        if path.len() > grid.len() {
            log::warn!("predecessor chain from {} does not terminate", end);
            break;
        }
    }

    path.reverse();
    path
}
