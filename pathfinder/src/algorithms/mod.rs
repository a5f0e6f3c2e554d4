mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod path;
pub mod traits;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use dijkstra::Dijkstra;
pub use path::reconstruct_path;
pub use traits::{SearchAlgorithm, SearchOutcome, Visitor};

use crate::{error::ConfigurationError, grid::Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "bfs")]
    BreadthFirst,

    #[serde(rename = "dfs")]
    DepthFirst,

    #[serde(rename = "dijkstra")]
    Dijkstra,

    #[serde(rename = "astar")]
    AStar,
}

impl Algorithm {
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::BreadthFirst, Self::DepthFirst, Self::Dijkstra, Self::AStar].into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => BreadthFirst.name(),
            Self::DepthFirst => DepthFirst.name(),
            Self::Dijkstra => Dijkstra.name(),
            Self::AStar => AStar.name(),
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
        }
    }

    /// whether the returned path is guaranteed to be a shortest one
    pub fn is_optimal(&self) -> bool {
        !matches!(self, Self::DepthFirst)
    }

    pub async fn run<V: Visitor>(
        self,
        grid: &mut Grid,
        visitor: &mut V,
    ) -> Result<SearchOutcome, ConfigurationError> {
        match self {
            Self::BreadthFirst => BreadthFirst.run(grid, visitor).await,
            Self::DepthFirst => DepthFirst.run(grid, visitor).await,
            Self::Dijkstra => Dijkstra.run(grid, visitor).await,
            Self::AStar => AStar.run(grid, visitor).await,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a-star" | "a*" => Ok(Self::AStar),
            other => Err(format!("unknown algorithm {:?}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for algorithm in Algorithm::all() {
            assert_eq!(algorithm.id().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert!("greedy".parse::<Algorithm>().is_err());
    }

    #[test]
    fn serializes_by_id() {
        let json = serde_json::to_string(&Algorithm::AStar).unwrap();
        assert_eq!(json, "\"astar\"");
    }
}
