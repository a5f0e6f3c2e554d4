use std::collections::HashSet;
use std::time::Instant;

use crate::{error::ConfigurationError, grid::Grid};

use super::{
    path::reconstruct_path,
    traits::{SearchAlgorithm, SearchOutcome, Visitor, expand},
};

pub struct DepthFirst;

impl SearchAlgorithm for DepthFirst {
    async fn run<V: Visitor>(
        &self,
        grid: &mut Grid,
        visitor: &mut V,
    ) -> Result<SearchOutcome, ConfigurationError> {
        let (start, end) = grid.endpoints()?;
        let started = Instant::now();

        let mut stack = vec![start];
        let mut discovered = HashSet::from([start]);
        let mut visited_count = 0;
        grid.at_mut(start).distance = 0;

        while let Some(current) = stack.pop() {
            if current == end {
                let path = reconstruct_path(grid, end);
                return Ok(SearchOutcome::found(path, visited_count, started.elapsed()));
            }

            if current != start {
                expand(grid, current, visitor).await;
                visited_count += 1;
            }

            // pushed in reverse so the default order pops first
            let depth = grid[current].distance() + 1;
            for neighbor in grid.neighbors(current).into_iter().rev() {
                if discovered.insert(neighbor) {
                    let cell = grid.at_mut(neighbor);
                    cell.predecessor = Some(current);
                    cell.distance = depth;
                    stack.push(neighbor);
                }
            }
        }

        Ok(SearchOutcome::unreachable(visited_count, started.elapsed()))
    }

    fn name(&self) -> &'static str {
        "DFS"
    }
}
