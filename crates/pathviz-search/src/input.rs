//! Translation of raw input messages into grid and runner commands.

use pathviz_core::{Key, MouseAction, Msg, Point, Range};

use crate::grid::GridError;
use crate::search::StrategyKind;

/// What the user asked for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move the end cell.
    SetEnd(Point),
    /// Flip the wall flag of a cell.
    ToggleWall(Point),
    /// Pointer is over a cell.
    Hover(Point),
    /// Run one strategy.
    Run(StrategyKind),
    /// Run all strategies in benchmark order.
    RunAll,
    ClearWalls,
    ScatterWalls,
    Quit,
}

/// Maps back-end positions and keys to [`Command`]s.
///
/// A grid cell covers `cell_size` back-end units (pixels, or terminal
/// columns and rows), with cell `(0, 0)` at back-end position `(0, 0)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InputMap {
    cell_size: Point,
    bounds: Range,
}

impl InputMap {
    /// Non-positive cell sizes are raised to 1.
    pub fn new(cell_size: Point, bounds: Range) -> Self {
        Self {
            cell_size: Point::new(cell_size.x.max(1), cell_size.y.max(1)),
            bounds,
        }
    }

    pub fn cell_size(&self) -> Point {
        self.cell_size
    }

    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Grid cell under back-end position `pos`.
    pub fn cell_at(&self, pos: Point) -> Result<Point, GridError> {
        if pos.x < 0 || pos.y < 0 {
            return Err(GridError::OutOfRange(pos));
        }
        let p = Point::new(pos.x / self.cell_size.x, pos.y / self.cell_size.y);
        if self.bounds.contains(p) {
            Ok(p)
        } else {
            Err(GridError::OutOfRange(p))
        }
    }

    /// Translate `msg`, or `None` when it maps to nothing.
    pub fn translate(&self, msg: &Msg) -> Option<Command> {
        match msg {
            Msg::Quit => Some(Command::Quit),
            Msg::KeyDown { key } => key_command(key),
            Msg::Mouse { action, pos } => {
                let make: fn(Point) -> Command = match action {
                    MouseAction::Main => Command::SetEnd,
                    MouseAction::Secondary => Command::ToggleWall,
                    MouseAction::Move => Command::Hover,
                    MouseAction::Auxiliary | MouseAction::Release => return None,
                };
                match self.cell_at(*pos) {
                    Ok(p) => Some(make(p)),
                    Err(err) => {
                        if *action != MouseAction::Move {
                            log::debug!("dropped {action:?} click: {err}");
                        }
                        None
                    }
                }
            }
            Msg::Screen { .. } => None,
        }
    }
}

fn key_command(key: &Key) -> Option<Command> {
    let cmd = match key {
        Key::Space => Command::RunAll,
        Key::Escape => Command::Quit,
        Key::Char('1') => Command::Run(StrategyKind::DepthFirst),
        Key::Char('2') => Command::Run(StrategyKind::BreadthFirst),
        Key::Char('3') => Command::Run(StrategyKind::Dijkstra),
        Key::Char('4') => Command::Run(StrategyKind::AStar),
        Key::Char('c' | 'C') => Command::ClearWalls,
        Key::Char('r' | 'R') => Command::ScatterWalls,
        Key::Char('q' | 'Q') => Command::Quit,
        _ => return None,
    };
    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> InputMap {
        InputMap::new(Point::new(2, 1), Range::with_size(20, 20))
    }

    #[test]
    fn positions_divide_by_cell_size() {
        let m = map();
        assert_eq!(m.cell_at(Point::new(0, 0)), Ok(Point::ZERO));
        assert_eq!(m.cell_at(Point::new(1, 0)), Ok(Point::ZERO));
        assert_eq!(m.cell_at(Point::new(7, 3)), Ok(Point::new(3, 3)));
        assert_eq!(m.cell_at(Point::new(39, 19)), Ok(Point::new(19, 19)));
    }

    #[test]
    fn outside_positions_are_rejected() {
        let m = map();
        assert_eq!(
            m.cell_at(Point::new(40, 0)),
            Err(GridError::OutOfRange(Point::new(20, 0)))
        );
        assert_eq!(
            m.cell_at(Point::new(-1, 4)),
            Err(GridError::OutOfRange(Point::new(-1, 4)))
        );
        assert_eq!(m.translate(&Msg::mouse(MouseAction::Main, 5, 25)), None);
    }

    #[test]
    fn mouse_buttons() {
        let m = map();
        assert_eq!(
            m.translate(&Msg::mouse(MouseAction::Main, 8, 2)),
            Some(Command::SetEnd(Point::new(4, 2)))
        );
        assert_eq!(
            m.translate(&Msg::mouse(MouseAction::Secondary, 8, 2)),
            Some(Command::ToggleWall(Point::new(4, 2)))
        );
        assert_eq!(
            m.translate(&Msg::mouse(MouseAction::Move, 0, 19)),
            Some(Command::Hover(Point::new(0, 19)))
        );
        assert_eq!(m.translate(&Msg::mouse(MouseAction::Release, 8, 2)), None);
        assert_eq!(m.translate(&Msg::mouse(MouseAction::Auxiliary, 8, 2)), None);
    }

    #[test]
    fn keys() {
        let m = map();
        let cases = [
            (Key::Space, Some(Command::RunAll)),
            (Key::Char('1'), Some(Command::Run(StrategyKind::DepthFirst))),
            (Key::Char('4'), Some(Command::Run(StrategyKind::AStar))),
            (Key::Char('c'), Some(Command::ClearWalls)),
            (Key::Char('r'), Some(Command::ScatterWalls)),
            (Key::Char('q'), Some(Command::Quit)),
            (Key::Escape, Some(Command::Quit)),
            (Key::Char('5'), None),
            (Key::Enter, None),
        ];
        for (key, want) in cases {
            assert_eq!(m.translate(&Msg::key(key.clone())), want, "{key:?}");
        }
        assert_eq!(m.translate(&Msg::Quit), Some(Command::Quit));
        assert_eq!(
            m.translate(&Msg::Screen {
                width: 80,
                height: 24
            }),
            None
        );
    }

    #[test]
    fn zero_cell_size_is_clamped() {
        let m = InputMap::new(Point::ZERO, Range::with_size(3, 3));
        assert_eq!(m.cell_size(), Point::new(1, 1));
        assert_eq!(m.cell_at(Point::new(2, 2)), Ok(Point::new(2, 2)));
    }
}
