use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
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
    cost: usize,
    /// row-major index; equal costs pop in grid order
    order: usize,
    position: Position,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub struct Dijkstra;

impl SearchAlgorithm for Dijkstra {
    async fn run<V: Visitor>(
        &self,
        grid: &mut Grid,
        visitor: &mut V,
    ) -> Result<SearchOutcome, ConfigurationError> {
        let (start, end) = grid.endpoints()?;
        let started = Instant::now();
        let width = grid.cols();

        let mut heap = BinaryHeap::new();
        let mut settled: HashSet<Position> = HashSet::new();
        let mut visited_count = 0;

        grid.at_mut(start).distance = 0;
        heap.push(State {
            cost: 0,
            order: start.to_index(width),
            position: start,
        });

        // an empty heap means every remaining cell sits at infinite distance
        while let Some(State { cost, position, .. }) = heap.pop() {
            if settled.contains(&position) || cost > grid[position].distance() {
                continue;
            }

            if position == end {
                let path = reconstruct_path(grid, end);
                return Ok(SearchOutcome::found(path, visited_count, started.elapsed()));
            }

            settled.insert(position);

            if position != start {
                expand(grid, position, visitor).await;
                visited_count += 1;
            }

            for neighbor in grid.neighbors(position) {
                if settled.contains(&neighbor) {
                    continue;
                }

                let new_cost = cost + 1;
                if new_cost < grid[neighbor].distance() {
                    let cell = grid.at_mut(neighbor);
                    cell.distance = new_cost;
                    cell.predecessor = Some(position);
                    heap.push(State {
                        cost: new_cost,
                        order: neighbor.to_index(width),
                        position: neighbor,
                    });
                }
            }
        }

        Ok(SearchOutcome::unreachable(visited_count, started.elapsed()))
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
}
