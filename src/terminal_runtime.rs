use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Concrete terminal type used by the game screen.
pub type GameTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw-mode, alternate-screen terminal for one play session.
///
/// Dropping the screen restores the terminal best-effort.
pub struct GameScreen {
    terminal: GameTerminal,
}

impl GameScreen {
    /// Switches the terminal into game mode.
    pub fn open() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                restore_terminal();
                Err(error)
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut GameTerminal {
        &mut self.terminal
    }
}

impl Drop for GameScreen {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Chains a panic hook that leaves game mode before the panic is printed.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
}
