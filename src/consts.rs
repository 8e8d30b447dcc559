//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(100);

/// The snake never grows beyond this many cells
pub(crate) const MAX_SNAKE_LENGTH: usize = 1000;

/// Snake length at the start of a game
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// How many cells the snake's length should increase by upon eating the food
pub(crate) const SNAKE_GROWTH: usize = 1;

/// Smallest terminal the game will agree to run in; one row is reserved for
/// the length bar, and the rest must fit the starting snake with room to
/// spare.
pub(crate) const MIN_TERMINAL_SIZE: Size = Size {
    width: 10,
    height: 5,
};

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for the length bar at the top of the screen
pub(crate) const LENGTH_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
