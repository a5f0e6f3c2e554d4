use super::position::Position;

/// sentinel for "+infinity" distances and scores
pub const UNREACHABLE: usize = usize::MAX;

/// a single grid position with its editable and per-run search state
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    position: Position,
    pub(crate) is_wall: bool,
    pub(crate) visited: bool,
    pub(crate) on_path: bool,
    pub(crate) distance: usize,
    pub(crate) heuristic: usize,
    pub(crate) predecessor: Option<Position>,
}

impl Cell {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            is_wall: false,
            visited: false,
            on_path: false,
            distance: UNREACHABLE,
            heuristic: UNREACHABLE,
            predecessor: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_wall(&self) -> bool {
        self.is_wall
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn is_on_path(&self) -> bool {
        self.on_path
    }

    pub fn distance(&self) -> usize {
        self.distance
    }

    pub fn heuristic(&self) -> usize {
        self.heuristic
    }

    /// distance + heuristic, saturating at [`UNREACHABLE`]
    pub fn combined_score(&self) -> usize {
        self.distance.saturating_add(self.heuristic)
    }

    pub fn predecessor(&self) -> Option<Position> {
        self.predecessor
    }

    /// clears all search state back to the freshly constructed defaults
    pub fn reset(&mut self) {
        self.visited = false;
        self.on_path = false;
        self.distance = UNREACHABLE;
        self.heuristic = UNREACHABLE;
        self.predecessor = None;
    }

    pub fn has_search_state(&self) -> bool {
        self.visited
            || self.on_path
            || self.distance != UNREACHABLE
            || self.heuristic != UNREACHABLE
            || self.predecessor.is_some()
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Cell {}
