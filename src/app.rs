use crate::consts;
use crate::game::Game;
use ratatui::{backend::Backend, layout::Size, Terminal};
use std::io;

/// How a finished run of the game ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    /// The player pressed the quit key
    Quit,
    /// The snake ran into itself, at `length` cells long
    Dead { length: usize },
}

#[derive(Clone, Debug)]
pub(crate) struct App {
    game: Game,
}

impl App {
    /// Set up a game sized to `terminal_size`, captured once for the whole
    /// run.  Fails if the terminal is too small to hold the playing field.
    pub(crate) fn new(terminal_size: Size) -> io::Result<App> {
        let min = consts::MIN_TERMINAL_SIZE;
        if terminal_size.width < min.width || terminal_size.height < min.height {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "terminal is {}x{} but the game needs at least {}x{}",
                    terminal_size.width, terminal_size.height, min.width, min.height
                ),
            ));
        }
        Ok(App {
            game: Game::new(terminal_size),
        })
    }

    pub(crate) fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<Outcome> {
        loop {
            terminal.draw(|frame| self.game.draw(frame))?;
            if let Some(outcome) = self.game.process_input()? {
                return Ok(outcome);
            }
        }
    }
}
