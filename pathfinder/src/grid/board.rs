use std::ops::Index;

use rand::Rng;

use super::{cell::Cell, editor::Editor, position::Position};
use crate::{
    config::GridSize,
    error::{ConfigurationError, GridError},
};

/// dense row-major arena of cells plus the start/end references and editor state
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    start: Option<Position>,
    end: Option<Position>,
    pub(super) editor: Editor,
}

impl Grid {
    /// builds a grid without endpoints; runs fail until both are set
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::TooLarge { rows, cols })?;
        if len < 2 {
            return Err(GridError::TooSmall { rows, cols });
        }

        let cells = (0..len)
            .map(|idx| Cell::new(Position::from_index(idx, cols)))
            .collect();

        Ok(Self {
            cells,
            rows,
            cols,
            start: None,
            end: None,
            editor: Editor::default(),
        })
    }

    /// start in the top-left corner, end in the bottom-right one
    pub fn with_default_endpoints(rows: usize, cols: usize) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, cols)?;
        grid.start = Some(Position::new(0, 0));
        grid.end = Some(Position::new(rows - 1, cols - 1));
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn size(&self) -> GridSize {
        GridSize::new(self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cell(Position::new(row, col))
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        if self.contains(pos) {
            Some(&self.cells[pos.to_index(self.cols)])
        } else {
            None
        }
    }

    /// caller guarantees `pos` is in bounds
    pub(crate) fn at_mut(&mut self, pos: Position) -> &mut Cell {
        let idx = pos.to_index(self.cols);
        &mut self.cells[idx]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn end(&self) -> Option<Position> {
        self.end
    }

    pub fn is_endpoint(&self, pos: Position) -> bool {
        self.start == Some(pos) || self.end == Some(pos)
    }

    /// validated (start, end) pair; checked before any search state is touched
    pub fn endpoints(&self) -> Result<(Position, Position), ConfigurationError> {
        let start = self.start.ok_or(ConfigurationError::MissingStart)?;
        let end = self.end.ok_or(ConfigurationError::MissingEnd)?;

        if start == end {
            return Err(ConfigurationError::Coincident(start));
        }

        for pos in [start, end] {
            if !self.is_walkable(pos) {
                return Err(ConfigurationError::EndpointIsWall(pos));
            }
        }

        Ok((start, end))
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(|cell| !cell.is_wall())
    }

    /// passable 4-directional neighbors in up, down, left, right order
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        pos.neighbors(self.bounds())
            .filter(|p| self.is_walkable(*p))
            .collect()
    }

    pub fn set_start(&mut self, pos: Position) -> Result<(), GridError> {
        self.check_endpoint_target(pos, self.end)?;
        self.start = Some(pos);
        Ok(())
    }

    pub fn set_end(&mut self, pos: Position) -> Result<(), GridError> {
        self.check_endpoint_target(pos, self.start)?;
        self.end = Some(pos);
        Ok(())
    }

    fn check_endpoint_target(
        &self,
        pos: Position,
        other: Option<Position>,
    ) -> Result<(), GridError> {
        let cell = self.checked(pos)?;
        if cell.is_wall() {
            return Err(GridError::Wall(pos));
        }
        if other == Some(pos) {
            return Err(GridError::Endpoint(pos));
        }
        Ok(())
    }

    fn checked(&self, pos: Position) -> Result<&Cell, GridError> {
        self.cell(pos).ok_or(GridError::OutOfBounds {
            position: pos,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// returns the new wall state
    pub fn toggle_wall(&mut self, pos: Position) -> Result<bool, GridError> {
        let is_wall = self.checked(pos)?.is_wall();
        self.set_wall(pos, !is_wall)?;
        Ok(!is_wall)
    }

    pub fn set_wall(&mut self, pos: Position, is_wall: bool) -> Result<(), GridError> {
        self.checked(pos)?;
        if self.is_endpoint(pos) {
            return Err(GridError::Endpoint(pos));
        }
        self.at_mut(pos).is_wall = is_wall;
        Ok(())
    }

    /// lets an endpoint tool claim a wall cell
    pub(super) fn clear_wall_under(&mut self, pos: Position) {
        if self.contains(pos) {
            self.at_mut(pos).is_wall = false;
        }
    }

    pub fn walls(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.is_wall())
            .map(Cell::position)
            .collect()
    }

    /// resets visited/path flags and all per-run search state; walls stay
    pub fn clear_path(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }

    pub fn clear_walls(&mut self) {
        for cell in &mut self.cells {
            cell.is_wall = false;
        }
    }

    /// clears the old walls, then walls each non-endpoint cell with probability `density`
    pub fn generate_random_walls(&mut self, density: f64) -> Result<usize, GridError> {
        self.generate_random_walls_with(density, &mut rand::rng())
    }

    pub fn generate_random_walls_with<R: Rng>(
        &mut self,
        density: f64,
        rng: &mut R,
    ) -> Result<usize, GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }

        self.clear_walls();

        let (start, end) = (self.start, self.end);
        let mut placed = 0;
        for cell in &mut self.cells {
            let pos = Some(cell.position());
            if pos == start || pos == end {
                continue;
            }
            if rng.random_bool(density) {
                cell.is_wall = true;
                placed += 1;
            }
        }

        log::debug!(
            "placed {} random walls on {}x{} grid (density {})",
            placed,
            self.rows,
            self.cols,
            density
        );

        Ok(placed)
    }

    pub fn mark_path(&mut self, path: &[Position]) {
        for &pos in path {
            if self.contains(pos) {
                self.at_mut(pos).on_path = true;
            }
        }
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_visited()).count()
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.to_index(self.cols)]
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn rejects_degenerate_sizes() {
        assert_eq!(
            Grid::new(1, 1).unwrap_err(),
            GridError::TooSmall { rows: 1, cols: 1 }
        );
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(1, 2).is_ok());
    }

    #[test]
    fn overflowing_sizes_are_rejected() {
        assert_eq!(
            Grid::new(usize::MAX, 2).unwrap_err(),
            GridError::TooLarge {
                rows: usize::MAX,
                cols: 2
            }
        );
        assert!(matches!(
            Grid::new(usize::MAX, 0),
            Err(GridError::TooSmall { .. })
        ));
    }

    #[test]
    fn cells_are_dense_and_row_major() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.len(), 12);
        for (idx, cell) in grid.cells().enumerate() {
            assert_eq!(cell.position(), Position::from_index(idx, 4));
        }
        assert_eq!(grid.get_cell(2, 3).map(Cell::position), Some(Position::new(2, 3)));
        assert!(grid.get_cell(3, 0).is_none());
        assert!(grid.get_cell(0, 4).is_none());
    }

    #[test]
    fn default_endpoints_are_opposite_corners() {
        let grid = Grid::with_default_endpoints(4, 6).unwrap();
        assert_eq!(
            grid.endpoints(),
            Ok((Position::new(0, 0), Position::new(3, 5)))
        );
    }

    #[test]
    fn endpoints_report_each_misconfiguration() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.endpoints(), Err(ConfigurationError::MissingStart));

        grid.set_start(Position::new(0, 0)).unwrap();
        assert_eq!(grid.endpoints(), Err(ConfigurationError::MissingEnd));

        grid.set_end(Position::new(2, 2)).unwrap();
        assert!(grid.endpoints().is_ok());
    }

    #[test]
    fn neighbors_skip_walls_and_keep_order() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_wall(Position::new(0, 1), true).unwrap();

        assert_eq!(
            grid.neighbors(Position::new(1, 1)),
            vec![Position::new(2, 1), Position::new(1, 0), Position::new(1, 2)]
        );
    }

    #[test]
    fn endpoints_cannot_be_walled_or_shared() {
        let mut grid = Grid::with_default_endpoints(3, 3).unwrap();
        let start = Position::new(0, 0);
        let end = Position::new(2, 2);

        assert_eq!(grid.toggle_wall(start), Err(GridError::Endpoint(start)));
        assert_eq!(grid.set_start(end), Err(GridError::Endpoint(end)));
        assert_eq!(grid.set_end(start), Err(GridError::Endpoint(start)));

        let wall = Position::new(1, 1);
        assert_eq!(grid.toggle_wall(wall), Ok(true));
        assert_eq!(grid.set_start(wall), Err(GridError::Wall(wall)));
        assert_eq!(grid.toggle_wall(wall), Ok(false));
        assert_eq!(grid.set_start(wall), Ok(()));
        assert_eq!(grid.start(), Some(wall));

        let outside = Position::new(3, 0);
        assert!(matches!(
            grid.toggle_wall(outside),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn clear_path_keeps_walls() {
        let mut grid = Grid::with_default_endpoints(3, 3).unwrap();
        grid.set_wall(Position::new(1, 1), true).unwrap();
        grid.at_mut(Position::new(0, 1)).visited = true;
        grid.mark_path(&[Position::new(0, 2)]);

        grid.clear_path();

        assert!(grid.cells().all(|cell| !cell.has_search_state()));
        assert_eq!(grid.walls(), vec![Position::new(1, 1)]);

        grid.clear_walls();
        assert!(grid.walls().is_empty());
    }

    #[test]
    fn random_walls_spare_endpoints() {
        let mut grid = Grid::with_default_endpoints(10, 10).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let placed = grid.generate_random_walls_with(1.0, &mut rng).unwrap();
        assert_eq!(placed, 98);
        assert!(grid.is_walkable(Position::new(0, 0)));
        assert!(grid.is_walkable(Position::new(9, 9)));

        let placed = grid.generate_random_walls_with(0.0, &mut rng).unwrap();
        assert_eq!(placed, 0);
        assert!(grid.walls().is_empty());
    }

    #[test]
    fn random_walls_reject_bad_density() {
        let mut grid = Grid::with_default_endpoints(3, 3).unwrap();
        assert_eq!(
            grid.generate_random_walls(1.5),
            Err(GridError::InvalidDensity(1.5))
        );
        assert!(grid.generate_random_walls(-0.1).is_err());
    }
}
