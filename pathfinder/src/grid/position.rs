use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// default neighbor order used by every search
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Self::new(index / width, index % width)
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// bounds are (rows, cols)
    pub fn move_in_direction(self, direction: Direction, bounds: (usize, usize)) -> Option<Self> {
        let (rows, cols) = bounds;
        match direction {
            Direction::Up if self.row > 0 => Some(Self::new(self.row - 1, self.col)),
            Direction::Down if self.row + 1 < rows => Some(Self::new(self.row + 1, self.col)),
            Direction::Left if self.col > 0 => Some(Self::new(self.row, self.col - 1)),
            Direction::Right if self.col + 1 < cols => Some(Self::new(self.row, self.col + 1)),
            _ => None,
        }
    }

    pub fn neighbors(self, bounds: (usize, usize)) -> impl Iterator<Item = Self> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.move_in_direction(dir, bounds))
    }

    /// direction of a single 4-directional step towards `other`, if adjacent
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        match (
            other.row as isize - self.row as isize,
            other.col as isize - self.col as isize,
        ) {
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn is_adjacent(self, other: Self) -> bool {
        self.direction_to(other).is_some()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = String;

    /// parses `row,col`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| format!("expected `row,col`, got {:?}", s))?;

        let row = row
            .trim()
            .parse()
            .map_err(|e| format!("invalid row {:?}: {}", row, e))?;
        let col = col
            .trim()
            .parse()
            .map_err(|e| format!("invalid col {:?}: {}", col, e))?;

        Ok(Self::new(row, col))
    }
}
