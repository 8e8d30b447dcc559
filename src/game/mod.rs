mod direction;
mod snake;
use self::direction::Direction;
use self::snake::Snake;
use crate::app::Outcome;
use crate::command::Command;
use crate::consts;
use crossterm::event::{poll, read, Event};
use rand::{seq::IteratorRandom, Rng};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Positions, Rect, Size},
    style::Style,
    text::Line,
    widgets::Widget,
    Frame,
};
use std::io;
use std::time::Instant;

/// The running game: the snake, the food, and the tick clock.
///
/// `Game` is generic over its random number generator so that tests can use
/// a seeded one; everything other than food placement is deterministic.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    snake: Snake,
    food: Position,
    bounds: Bounds,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(terminal_size: Size) -> Self {
        Game::new_with_rng(terminal_size, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(terminal_size: Size, rng: R) -> Game<R> {
        let bounds = Bounds::for_terminal(terminal_size);
        let head = Position::new(bounds.width / 2, bounds.height / 2);
        let snake = Snake::new(head, Direction::East, bounds);
        let mut game = Game {
            rng,
            snake,
            food: Position::ORIGIN,
            bounds,
            next_tick: None,
        };
        game.place_food();
        game
    }

    /// Wait out the remainder of the current tick, handling any key events
    /// that arrive in the meantime, and advance the snake when the tick
    /// elapses.  Returns `Some` when the game is over.
    pub(crate) fn process_input(&mut self) -> io::Result<Option<Outcome>> {
        if self.next_tick.is_none() {
            self.next_tick = Some(Instant::now() + consts::TICK_PERIOD);
        }
        let when = self.next_tick.expect("next_tick should be Some");
        let wait = when.saturating_duration_since(Instant::now());
        if wait.is_zero() || !poll(wait)? {
            self.next_tick = None;
            Ok(self.advance())
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Apply one tick's worth of movement.
    ///
    /// The collision check runs against every cell the snake currently
    /// occupies, the still-unmoved tail included, so turning hard into the
    /// tail's cell is fatal even though the tail is about to vacate it.
    fn advance(&mut self) -> Option<Outcome> {
        let next = self.snake.next_head(self.bounds);
        if self.snake.contains(next) {
            return Some(Outcome::Dead {
                length: self.snake.length(),
            });
        }
        if next == self.food {
            // Grow before the move so the tail survives this tick's trim
            self.snake.grow();
            self.snake.advance_to(next);
            self.place_food();
        } else {
            self.snake.advance_to(next);
        }
        None
    }

    /// Move the food to a cell the snake does not occupy, chosen uniformly
    /// at random.  If the snake covers the whole field, the food stays put.
    fn place_food(&mut self) {
        if let Some(pos) = self
            .bounds
            .positions()
            .filter(|&p| !self.snake.contains(p))
            .choose(&mut self.rng)
        {
            self.food = pos;
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Outcome> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit => return Some(Outcome::Quit),
            Command::Up => self.snake.turn(Direction::North),
            Command::Left => self.snake.turn(Direction::West),
            Command::Down => self.snake.turn(Direction::South),
            Command::Right => self.snake.turn(Direction::East),
        }
        None
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [bar_area, field_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
        Line::styled(
            format!(" Length: {}", self.snake.length()),
            consts::LENGTH_BAR_STYLE,
        )
        .render(bar_area, buf);
        let mut field = Canvas {
            area: field_area,
            buf,
        };
        for &p in self.snake.body() {
            field.draw_cell(p, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        field.draw_cell(self.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        field.draw_cell(
            self.snake.head(),
            self.snake.head_symbol(),
            consts::SNAKE_STYLE,
        );
    }
}

/// Dimensions of the playing field, captured once at startup.  Both axes
/// wrap.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Bounds {
    /// The playing field for a terminal of the given size: the full width,
    /// and everything below the one-row length bar.
    fn for_terminal(terminal_size: Size) -> Bounds {
        Bounds {
            width: terminal_size.width,
            height: terminal_size.height.saturating_sub(1),
        }
    }

    fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    /// A 40×20 playing field (plus the length bar row)
    const TERMINAL_SIZE: Size = Size {
        width: 40,
        height: 21,
    };

    fn test_game() -> Game<ChaCha12Rng> {
        Game::new_with_rng(TERMINAL_SIZE, ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    #[test]
    fn new_game() {
        let mut game = Game::new_with_rng(Size::new(20, 7), ChaCha12Rng::seed_from_u64(RNG_SEED));
        game.food = Position::new(4, 2);
        let area = Rect::new(0, 0, 20, 7);
        let mut buffer = Buffer::empty(area);
        game.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Length: 3          ",
            "                    ",
            "                    ",
            "    ●               ",
            "        ⚬⚬<         ",
            "                    ",
            "                    ",
        ]);
        expected.set_style(Rect::new(0, 0, 20, 1), consts::LENGTH_BAR_STYLE);
        expected.set_style(Rect::new(4, 3, 1, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(8, 4, 3, 1), consts::SNAKE_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn no_input_trajectory() {
        let mut game = test_game();
        game.snake.head = Position::new(10, 10);
        game.snake.body = VecDeque::from([Position::new(8, 10), Position::new(9, 10)]);
        game.food = Position::ORIGIN;
        for _ in 0..5 {
            assert_eq!(game.advance(), None);
        }
        assert_eq!(game.snake.head(), Position::new(15, 10));
        assert_eq!(game.snake.length(), 3);
        assert_eq!(
            game.snake.body(),
            &VecDeque::from([Position::new(13, 10), Position::new(14, 10)])
        );
    }

    #[test]
    fn movement_is_deterministic() {
        let mut game1 = test_game();
        let mut game2 = test_game();
        for _ in 0..10 {
            assert_eq!(game1.advance(), None);
            assert_eq!(game2.advance(), None);
        }
        assert_eq!(game1.snake, game2.snake);
        assert_eq!(game1.food, game2.food);
    }

    #[test]
    fn wrap_east_edge() {
        let mut game = test_game();
        game.snake.head = Position::new(39, 10);
        game.snake.body = VecDeque::from([Position::new(37, 10), Position::new(38, 10)]);
        game.food = Position::ORIGIN;
        assert_eq!(game.advance(), None);
        assert_eq!(game.snake.head(), Position::new(0, 10));
    }

    #[test]
    fn wrap_north_edge() {
        let mut game = test_game();
        game.snake.head = Position::new(5, 0);
        game.snake.body = VecDeque::from([Position::new(5, 2), Position::new(5, 1)]);
        game.snake.direction = Direction::North;
        game.food = Position::new(20, 15);
        assert_eq!(game.advance(), None);
        assert_eq!(game.snake.head(), Position::new(5, 19));
    }

    #[test]
    fn reversal_is_ignored() {
        let mut game = test_game();
        let head = game.snake.head();
        game.food = Position::ORIGIN;
        assert_eq!(
            game.handle_event(Event::Key(KeyCode::Left.into())),
            None,
            "reversing should not end the game"
        );
        assert_eq!(game.snake.direction, Direction::East);
        assert_eq!(game.advance(), None);
        assert_eq!(game.snake.head(), Position::new(head.x + 1, head.y));
    }

    #[test]
    fn double_turn_in_one_tick_is_not_fatal() {
        let mut game = test_game();
        let head = game.snake.head();
        game.food = Position::ORIGIN;
        assert_eq!(game.handle_event(Event::Key(KeyCode::Up.into())), None);
        assert_eq!(game.handle_event(Event::Key(KeyCode::Left.into())), None);
        assert_eq!(game.snake.direction, Direction::North);
        assert_eq!(game.advance(), None);
        assert_eq!(game.snake.head(), Position::new(head.x, head.y - 1));
    }

    #[test]
    fn perpendicular_turn() {
        let mut game = test_game();
        let head = game.snake.head();
        game.food = Position::ORIGIN;
        assert_eq!(game.handle_event(Event::Key(KeyCode::Up.into())), None);
        assert_eq!(game.snake.direction, Direction::North);
        assert_eq!(game.advance(), None);
        assert_eq!(game.snake.head(), Position::new(head.x, head.y - 1));
    }

    #[test]
    fn self_collision_on_tail() {
        let mut game = test_game();
        game.snake.head = Position::new(10, 10);
        game.snake.body = VecDeque::from([
            Position::new(11, 10),
            Position::new(11, 9),
            Position::new(10, 9),
        ]);
        game.snake.max_len = 4;
        game.food = Position::ORIGIN;
        assert_eq!(game.advance(), Some(Outcome::Dead { length: 4 }));
    }

    #[test]
    fn eating_grows_and_moves_food() {
        let mut game = test_game();
        let head = game.snake.head();
        let target = Position::new(head.x + 1, head.y);
        game.food = target;
        assert_eq!(game.advance(), None);
        assert_eq!(game.snake.head(), target);
        assert_eq!(game.snake.length(), 4);
        assert_ne!(game.food, target);
        assert!(game.food.x < game.bounds.width && game.food.y < game.bounds.height);
        assert!(!game.snake.contains(game.food));
    }

    #[test]
    fn food_lands_on_only_free_cell() {
        let mut game = Game::new_with_rng(Size::new(4, 3), ChaCha12Rng::seed_from_u64(RNG_SEED));
        game.snake.head = Position::new(0, 0);
        game.snake.body = VecDeque::from([
            Position::new(1, 0),
            Position::new(2, 0),
            Position::new(3, 0),
            Position::new(0, 1),
            Position::new(1, 1),
            Position::new(2, 1),
        ]);
        game.snake.max_len = 7;
        game.place_food();
        assert_eq!(game.food, Position::new(3, 1));
    }

    #[test]
    fn quit_key_ends_game() {
        let mut game = test_game();
        assert_eq!(
            game.handle_event(Event::Key(KeyCode::Char('q').into())),
            Some(Outcome::Quit)
        );
    }
}
