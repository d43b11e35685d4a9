use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::direction::Direction;

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Restart,
    Quit,
}

/// Translates one key press into a game input; unknown keys map to `None`.
///
/// Arrow keys and lowercase `w`/`a`/`s`/`d` steer.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (key.code == KeyCode::Char('c')).then_some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => GameInput::Direction(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => GameInput::Restart,
        KeyCode::Esc | KeyCode::Char('q') => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}

/// Reads keyboard events from the terminal.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for the next meaningful input.
    ///
    /// Resize, mouse and ignored keys yield `Ok(None)`.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}
