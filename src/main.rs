mod app;
mod command;
mod consts;
mod game;
use crate::app::{App, Outcome};
use std::io::ErrorKind;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut terminal = ratatui::init();
    let r = terminal
        .size()
        .and_then(App::new)
        .and_then(|app| app.run(&mut terminal));
    ratatui::restore();
    match r {
        Ok(Outcome::Dead { length }) => {
            println!("Game Over! Final Length: {length}");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Quit) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
