use super::direction::Direction;
use super::Bounds;
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.
///
/// All positions are relative to the top-left corner of the playing field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Position,

    /// The positions of all of the cells in the snake's body, with the most
    /// recent at the end.  The tail is at the front.
    pub(super) body: VecDeque<Position>,

    /// The maximum number of cells (head included) the snake may occupy
    pub(super) max_len: usize,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,

    /// The direction of the snake's most recent movement.  Turn requests
    /// are checked against this, not `direction`, so several turns within
    /// one tick cannot compose into a reversal.
    pub(super) last_move: Direction,
}

impl Snake {
    /// Create a new snake with its head at `head`, facing in `direction`,
    /// already at [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH],
    /// with its body trailing in the opposite direction (wrapped within
    /// `bounds` if need be).
    pub(super) fn new(head: Position, direction: Direction, bounds: Bounds) -> Snake {
        let backwards = direction.reverse();
        let mut body = VecDeque::with_capacity(consts::INITIAL_SNAKE_LENGTH - 1);
        let mut pos = head;
        for _ in 1..consts::INITIAL_SNAKE_LENGTH {
            pos = backwards.advance(pos, bounds);
            body.push_front(pos);
        }
        Snake {
            head,
            body,
            max_len: consts::INITIAL_SNAKE_LENGTH,
            direction,
            last_move: direction,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        self.head
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.direction {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }

    /// Return the positions of the cells in the snake's body
    pub(super) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// The number of cells the snake currently occupies, head included
    pub(super) fn length(&self) -> usize {
        self.body.len() + 1
    }

    /// Does any cell of the snake (head or body, tail included) sit at
    /// `pos`?
    pub(super) fn contains(&self, pos: Position) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    /// The cell the head will occupy after the next movement
    pub(super) fn next_head(&self, bounds: Bounds) -> Position {
        self.direction.advance(self.head, bounds)
    }

    /// Change the snake's direction to `direction`.  A request to reverse
    /// straight into the snake's own neck — judged against the direction
    /// the snake last moved in — is ignored.
    pub(super) fn turn(&mut self, direction: Direction) {
        if direction != self.last_move.reverse() {
            self.direction = direction;
        }
    }

    /// Move the snake's head to `pos`, dragging the body behind it and
    /// dropping tail cells beyond the maximum length.
    pub(super) fn advance_to(&mut self, pos: Position) {
        self.body.push_back(self.head);
        self.head = pos;
        self.last_move = self.direction;
        while self.body.len() + 1 > self.max_len {
            let _ = self.body.pop_front();
        }
    }

    /// Extend the snake's maximum length in response to eating the food.
    /// Growth beyond [`MAX_SNAKE_LENGTH`][consts::MAX_SNAKE_LENGTH] is
    /// silently dropped.
    pub(super) fn grow(&mut self) {
        self.max_len = self
            .max_len
            .saturating_add(consts::SNAKE_GROWTH)
            .min(consts::MAX_SNAKE_LENGTH);
    }
}
