mod board;
mod cell;
mod editor;
mod position;

pub use board::Grid;
pub use cell::{Cell, UNREACHABLE};
pub use editor::{EditMode, EditTool, PointerEvent};
pub use position::{Direction, Position};
