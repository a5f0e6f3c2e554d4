use std::time::Duration;

use crate::{
    error::ConfigurationError,
    grid::{Cell, Grid, Position},
};

/// receives every cell the moment it is expanded; the search awaits each call
#[allow(async_fn_in_trait)]
pub trait Visitor {
    async fn visit(&mut self, cell: &Cell);
}

/// no-op visitor
impl Visitor for () {
    async fn visit(&mut self, _cell: &Cell) {}
}

/// records expansion order
impl Visitor for Vec<Position> {
    async fn visit(&mut self, cell: &Cell) {
        self.push(cell.position());
    }
}

#[allow(async_fn_in_trait)]
pub trait SearchAlgorithm {
    /// expects a grid whose search state was cleared by the caller
    async fn run<V: Visitor>(
        &self,
        grid: &mut Grid,
        visitor: &mut V,
    ) -> Result<SearchOutcome, ConfigurationError>;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub success: bool,
    /// from the cell after start up to and including end
    pub path: Vec<Position>,
    pub visited_count: usize,
    pub execution_time: Duration,
}

impl SearchOutcome {
    pub fn found(path: Vec<Position>, visited_count: usize, execution_time: Duration) -> Self {
        Self {
            success: true,
            path,
            visited_count,
            execution_time,
        }
    }

    pub fn unreachable(visited_count: usize, execution_time: Duration) -> Self {
        Self {
            success: false,
            path: Vec::new(),
            visited_count,
            execution_time,
        }
    }

    pub fn path_length(&self) -> usize {
        self.path.len()
    }

    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time.as_secs_f64() * 1000.0
    }
}

/// marks `pos` expanded and hands it to the visitor
pub(super) async fn expand<V: Visitor>(grid: &mut Grid, pos: Position, visitor: &mut V) {
    let cell = grid.at_mut(pos);
    cell.visited = true;
    let snapshot = *cell;

    log::trace!("expanded {}", pos);
    visitor.visit(&snapshot).await;
}
