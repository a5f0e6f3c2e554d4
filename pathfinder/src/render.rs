use colored::{ColoredString, Colorize};
use tokio::{sync::mpsc::UnboundedReceiver, task::JoinHandle};

use pathfinder::{Grid, Position, RenderEvent};

/// terminal picture of the grid: start, end, walls, visited cells and the path
pub fn draw(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.len() * 3);

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            out.push_str(&glyph(grid, Position::new(row, col)).to_string());
        }
        out.push('\n');
    }

    out
}

fn glyph(grid: &Grid, pos: Position) -> ColoredString {
    let cell = &grid[pos];

    if grid.start() == Some(pos) {
        "S ".green().bold()
    } else if grid.end() == Some(pos) {
        "E ".red().bold()
    } else if cell.is_wall() {
        "# ".bright_black()
    } else if cell.is_on_path() {
        "* ".yellow().bold()
    } else if cell.is_visited() {
        ". ".cyan()
    } else {
        "· ".dimmed()
    }
}

/// the path as moves, e.g. `right right down`
pub fn describe_route(start: Position, path: &[Position]) -> String {
    let mut previous = start;
    let mut moves = Vec::with_capacity(path.len());

    for &pos in path {
        match previous.direction_to(pos) {
            Some(direction) => moves.push(direction.as_str()),
            None => moves.push("?"),
        }
        previous = pos;
    }

    moves.join(" ")
}

/// follows the sequencer's event stream; resolves to the number of visits seen
pub fn spawn_listener(mut rx: UnboundedReceiver<RenderEvent>) -> JoinHandle<usize> {
    tokio::task::spawn(async move {
        let mut visited = 0;
        while let Some(event) = rx.recv().await {
            match event {
                RenderEvent::Visited(pos) => {
                    visited += 1;
                    log::trace!("visit #{}: {}", visited, pos);
                }
                RenderEvent::Path(pos) => {
                    log::trace!("path: {}", pos);
                }
                RenderEvent::Finished { success } => {
                    log::debug!("render stream finished (success: {})", success);
                    break;
                }
            }
        }
        visited
    })
}
