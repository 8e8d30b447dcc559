use super::Bounds;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Move `pos` one cell in this direction within `bounds`.  The field is
    /// toroidal, so stepping off any edge reappears on the opposite one.
    pub(super) fn advance(self, pos: Position, bounds: Bounds) -> Position {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::North => {
                y = decrement_wrapping(y, bounds.height);
            }
            Direction::East => {
                x = increment_wrapping(x, bounds.width);
            }
            Direction::South => {
                y = increment_wrapping(y, bounds.height);
            }
            Direction::West => {
                x = decrement_wrapping(x, bounds.width);
            }
        }
        Position { x, y }
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

fn decrement_wrapping(x: u16, max: u16) -> u16 {
    x.checked_sub(1).unwrap_or(max - 1)
}

fn increment_wrapping(x: u16, max: u16) -> u16 {
    x.checked_add(1).filter(|&xx| xx < max).unwrap_or(0)
}
