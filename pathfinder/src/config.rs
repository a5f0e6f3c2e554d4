use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::animation::AnimationSpeed;

pub const MIN_GRID_SIDE: usize = 2;
pub const MAX_GRID_SIDE: usize = 100;
pub const DEFAULT_GRID_SIDE: usize = 20;
pub const DEFAULT_WALL_DENSITY: f64 = 0.3;

/// grid dimensions, written `RxC`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// user-supplied sizes are clamped per side
    pub fn clamped(rows: usize, cols: usize) -> Self {
        Self::new(
            rows.clamp(MIN_GRID_SIDE, MAX_GRID_SIDE),
            cols.clamp(MIN_GRID_SIDE, MAX_GRID_SIDE),
        )
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIDE, DEFAULT_GRID_SIDE)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl FromStr for GridSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rows, cols) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected `ROWSxCOLS`, got {:?}", s))?;

        let rows = rows
            .trim()
            .parse()
            .map_err(|e| format!("invalid rows {:?}: {}", rows, e))?;
        let cols = cols
            .trim()
            .parse()
            .map_err(|e| format!("invalid cols {:?}: {}", cols, e))?;

        Ok(Self::new(rows, cols))
    }
}

impl Serialize for GridSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GridSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// knobs shared by every run of a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub size: GridSize,
    pub speed: AnimationSpeed,
    pub wall_density: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: GridSize::default(),
            speed: AnimationSpeed::default(),
            wall_density: DEFAULT_WALL_DENSITY,
        }
    }
}
