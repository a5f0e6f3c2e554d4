use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

use crate::{
    error::ConfigurationError,
    grid::{Grid, Position},
};

use super::{
    path::reconstruct_path,
    traits::{SearchAlgorithm, SearchOutcome, Visitor, expand},
};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    f_score: usize,
    /// first-discovery sequence number; equal scores pop oldest first
    discovered: usize,
    position: Position,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.discovered.cmp(&self.discovered))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* with the Manhattan distance to the end as heuristic
pub struct AStar;

impl SearchAlgorithm for AStar {
    async fn run<V: Visitor>(
        &self,
        grid: &mut Grid,
        visitor: &mut V,
    ) -> Result<SearchOutcome, ConfigurationError> {
        let (start, end) = grid.endpoints()?;
        let started = Instant::now();

        let mut open_set = BinaryHeap::new();
        let mut discovery: HashMap<Position, usize> = HashMap::new();
        let mut closed_set: HashSet<Position> = HashSet::new();
        let mut visited_count = 0;

        let h = start.manhattan_distance(end);
        let cell = grid.at_mut(start);
        cell.distance = 0;
        cell.heuristic = h;
        discovery.insert(start, 0);
        open_set.push(State {
            f_score: h,
            discovered: 0,
            position: start,
        });

        while let Some(State {
            f_score, position, ..
        }) = open_set.pop()
        {
            if closed_set.contains(&position) || f_score > grid[position].combined_score() {
                continue;
            }

            if position == end {
                let path = reconstruct_path(grid, end);
                return Ok(SearchOutcome::found(path, visited_count, started.elapsed()));
            }

            closed_set.insert(position);

            if position != start {
                expand(grid, position, visitor).await;
                visited_count += 1;
            }

            let tentative_g = grid[position].distance() + 1;
            for neighbor in grid.neighbors(position) {
                if closed_set.contains(&neighbor) {
                    continue;
                }

                let next_seq = discovery.len();
                let seq = match discovery.get(&neighbor).copied() {
                    Some(_) if tentative_g >= grid[neighbor].distance() => continue,
                    Some(seq) => seq,
                    None => {
                        discovery.insert(neighbor, next_seq);
                        next_seq
                    }
                };

                let h = neighbor.manhattan_distance(end);
                let cell = grid.at_mut(neighbor);
                cell.predecessor = Some(position);
                cell.distance = tentative_g;
                cell.heuristic = h;

                open_set.push(State {
                    f_score: tentative_g + h,
                    discovered: seq,
                    position: neighbor,
                });
            }
        }

        Ok(SearchOutcome::unreachable(visited_count, started.elapsed()))
    }

    fn name(&self) -> &'static str {
        "A*"
    }
}
