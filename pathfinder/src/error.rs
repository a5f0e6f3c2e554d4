use thiserror::Error;

use crate::grid::Position;

/// a run was requested on a grid without a valid start/end pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("start cell is not set")]
    MissingStart,

    #[error("end cell is not set")]
    MissingEnd,

    #[error("start and end both reference {0}")]
    Coincident(Position),

    #[error("endpoint {0} is a wall")]
    EndpointIsWall(Position),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid needs at least two cells, got {rows}x{cols}")]
    TooSmall { rows: usize, cols: usize },

    #[error("{rows}x{cols} grid has more cells than can be addressed")]
    TooLarge { rows: usize, cols: usize },

    #[error("{position} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("{0} is a wall")]
    Wall(Position),

    #[error("{0} is already an endpoint")]
    Endpoint(Position),

    #[error("wall density must be within [0, 1], got {0}")]
    InvalidDensity(f64),
}
