pub mod algorithms;
pub mod animation;
pub mod config;
pub mod error;
pub mod grid;
pub mod runner;
pub mod stats;

pub use algorithms::{Algorithm, SearchAlgorithm, SearchOutcome, Visitor};
pub use animation::{AnimationSpeed, RenderEvent, Sequencer};
pub use config::{GridSize, Settings};
pub use error::{ConfigurationError, GridError};
pub use grid::{Cell, Direction, EditMode, EditTool, Grid, PointerEvent, Position};
pub use runner::SearchRunner;
pub use stats::{JsonLinesSink, MemorySink, SearchRecord, StatisticsSink};
