use std::collections::HashSet;
use std::str::FromStr;

use super::{board::Grid, position::Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Idle,
    PaintingWalls,
    DraggingStart,
    DraggingEnd,
}

/// what a press on a non-endpoint cell does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditTool {
    #[default]
    Wall,
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Press(Position),
    /// pointer moved onto a cell while pressed
    Move(Position),
    Release,
    /// pointer left the grid; same as a release
    Leave,
}

impl FromStr for PointerEvent {
    type Err = String;

    /// `press:r,c`, `move:r,c`, `release` or `leave`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once(':') {
            Some(("press", pos)) => pos.parse().map(Self::Press),
            Some(("move", pos)) => pos.parse().map(Self::Move),
            None if s == "release" => Ok(Self::Release),
            None if s == "leave" => Ok(Self::Leave),
            _ => Err(format!(
                "expected press:r,c | move:r,c | release | leave, got {:?}",
                s
            )),
        }
    }
}

/// pointer-driven edit state; lives inside the grid it edits
#[derive(Debug, Clone, Default)]
pub(crate) struct Editor {
    mode: EditMode,
    tool: EditTool,
    /// cells already toggled during the current paint stroke
    painted: HashSet<Position>,
}

impl Grid {
    pub fn edit_mode(&self) -> EditMode {
        self.editor.mode
    }

    pub fn edit_tool(&self) -> EditTool {
        self.editor.tool
    }

    pub fn set_edit_tool(&mut self, tool: EditTool) {
        self.editor.tool = tool;
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> EditMode {
        match event {
            PointerEvent::Press(pos) => self.press(pos),
            PointerEvent::Move(pos) => self.drag(pos),
            PointerEvent::Release | PointerEvent::Leave => self.release(),
        }
        self.editor.mode
    }

    pub fn press(&mut self, pos: Position) {
        if !self.contains(pos) {
            return;
        }

        self.editor.painted.clear();

        let mode = if self.start() == Some(pos) {
            EditMode::DraggingStart
        } else if self.end() == Some(pos) {
            EditMode::DraggingEnd
        } else {
            match self.editor.tool {
                EditTool::Wall => {
                    self.paint(pos);
                    EditMode::PaintingWalls
                }
                EditTool::Start => {
                    self.clear_wall_under(pos);
                    match self.set_start(pos) {
                        Ok(()) => EditMode::DraggingStart,
                        Err(_) => EditMode::Idle,
                    }
                }
                EditTool::End => {
                    self.clear_wall_under(pos);
                    match self.set_end(pos) {
                        Ok(()) => EditMode::DraggingEnd,
                        Err(_) => EditMode::Idle,
                    }
                }
            }
        };

        log::trace!("press at {} -> {:?}", pos, mode);
        self.editor.mode = mode;
    }

    /// the pointer entered `pos` while pressed
    pub fn drag(&mut self, pos: Position) {
        if !self.contains(pos) {
            return;
        }

        match self.editor.mode {
            EditMode::Idle => {}
            EditMode::PaintingWalls => {
                if !self.is_endpoint(pos) && !self.editor.painted.contains(&pos) {
                    self.paint(pos);
                }
            }
            EditMode::DraggingStart => {
                if self.start() != Some(pos) && self.set_start(pos).is_ok() {
                    log::trace!("start dragged to {}", pos);
                }
            }
            EditMode::DraggingEnd => {
                if self.end() != Some(pos) && self.set_end(pos).is_ok() {
                    log::trace!("end dragged to {}", pos);
                }
            }
        }
    }

    /// toggles once per stroke; endpoints are filtered by the callers
    fn paint(&mut self, pos: Position) {
        match self.toggle_wall(pos) {
            Ok(is_wall) => {
                self.editor.painted.insert(pos);
                log::trace!("{} painted (wall: {})", pos, is_wall);
            }
            Err(e) => log::warn!("cannot paint {}: {}", pos, e),
        }
    }

    pub fn release(&mut self) {
        self.editor.mode = EditMode::Idle;
        self.editor.painted.clear();
    }
}
