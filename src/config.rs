use std::path::PathBuf;

use ratatui::style::Color;
use ratatui::symbols::border;

/// Side length of the square play grid, in cells.
pub const GRID_SIZE: i32 = 20;

/// Total number of cells on the grid.
pub const GRID_CELLS: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// Where a fresh snake starts, as `(x, y)`.
pub const START_CELL: (i32, i32) = (10, 10);

/// Tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 200;

/// Terminal columns used to draw one grid cell, keeping cells roughly square.
pub const CELL_WIDTH: u16 = 2;

/// Upper bound on how long the event loop waits for input between frames.
pub const FRAME_POLL_MS: u64 = 16;

/// Name of the per-user data directory holding logs and scores.
pub const APP_DIR_NAME: &str = "grid-snake";

/// Per-user directory for logs and scores, falling back to the working directory.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Colours applied to the board and its chrome.
#[derive(Debug)]
pub struct Theme {
    pub snake: Color,
    pub food: Color,
    pub empty: Color,
    pub border_fg: Color,
    pub hud_text: Color,
    pub hint: Color,
    pub title: Color,
    pub alert: Color,
}

/// Green snake, red apple on a dark board.
pub const THEME: Theme = Theme {
    snake: Color::Green,
    food: Color::Red,
    empty: Color::Rgb(31, 41, 55),
    border_fg: Color::Gray,
    hud_text: Color::White,
    hint: Color::DarkGray,
    title: Color::Green,
    alert: Color::Red,
};

/// Solid glyph for occupied cells (one per terminal column).
pub const GLYPH_FILLED: &str = "██";

/// Glyph for empty cells; colour comes from the background.
pub const GLYPH_EMPTY: &str = "  ";

/// Border set used around the board.
pub const BOARD_BORDER: border::Set = border::THICK;
