use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use pathfinder::{
    Algorithm, AnimationSpeed, EditTool, GridSize, PointerEvent, Position, Settings,
    config::DEFAULT_WALL_DENSITY,
};

#[derive(Parser, Debug)]
#[command(name = "pathfinder")]
#[command(about = "Grid pathfinding with four classic search strategies")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Grid size as ROWSxCOLS (each side clamped to 2..=100)
    #[arg(short, long, value_name = "ROWSxCOLS", default_value_t = GridSize::default())]
    pub size: GridSize,

    /// Start cell (defaults to the top-left corner)
    #[arg(long, value_name = "ROW,COL")]
    pub start: Option<Position>,

    /// End cell (defaults to the bottom-right corner)
    #[arg(long, value_name = "ROW,COL")]
    pub end: Option<Position>,

    /// Turn a cell into a wall (repeatable)
    #[arg(short, long = "wall", value_name = "ROW,COL")]
    pub walls: Vec<Position>,

    /// Fill the grid with random walls before applying edits
    #[arg(short, long)]
    pub random_walls: bool,

    /// Probability of each cell becoming a random wall
    #[arg(long, default_value_t = DEFAULT_WALL_DENSITY)]
    pub density: f64,

    /// Seed for random walls (unseeded by default)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Tool used by scripted pointer presses
    #[arg(long, value_enum, default_value_t = Tool::Wall)]
    pub tool: Tool,

    /// Pointer event replayed through the editor: press:ROW,COL | move:ROW,COL | release | leave (repeatable)
    #[arg(short, long = "event", value_name = "EVENT")]
    pub events: Vec<PointerEvent>,

    /// Animation speed, 0 (no delay) to 200
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u16).range(0..=200))]
    pub speed: u16,

    /// Append one JSON line per run to this file
    #[arg(long, value_name = "FILE")]
    pub history: Option<PathBuf>,

    /// Don't draw the final grid
    #[arg(long)]
    pub no_draw: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn settings(&self) -> Settings {
        Settings {
            size: GridSize::clamped(self.size.rows, self.size.cols),
            speed: AnimationSpeed::new(self.speed),
            wall_density: self.density,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a single search algorithm
    Run {
        /// Search algorithm to use
        #[arg(value_enum)]
        algorithm: PathfindingAlgorithm,
    },

    /// Run every algorithm on the same grid and compare them
    Benchmark,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PathfindingAlgorithm {
    /// Breadth-First Search
    #[value(name = "bfs")]
    #[allow(clippy::upper_case_acronyms)]
    BFS,

    /// Depth-First Search
    #[value(name = "dfs")]
    #[allow(clippy::upper_case_acronyms)]
    DFS,

    /// Dijkstra's shortest path algorithm
    Dijkstra,

    /// A* algorithm with Manhattan distance heuristic
    #[value(name = "astar", alias = "a-star")]
    AStar,
}

impl From<PathfindingAlgorithm> for Algorithm {
    fn from(algorithm: PathfindingAlgorithm) -> Self {
        match algorithm {
            PathfindingAlgorithm::BFS => Self::BreadthFirst,
            PathfindingAlgorithm::DFS => Self::DepthFirst,
            PathfindingAlgorithm::Dijkstra => Self::Dijkstra,
            PathfindingAlgorithm::AStar => Self::AStar,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Tool {
    /// Presses toggle walls
    Wall,

    /// Presses move the start cell
    Start,

    /// Presses move the end cell
    End,
}

impl From<Tool> for EditTool {
    fn from(tool: Tool) -> Self {
        match tool {
            Tool::Wall => Self::Wall,
            Tool::Start => Self::Start,
            Tool::End => Self::End,
        }
    }
}
