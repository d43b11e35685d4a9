use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::config::{BOARD_BORDER, CELL_WIDTH, GLYPH_EMPTY, GLYPH_FILLED, GRID_SIZE, THEME};
use crate::game::{GameState, GameStatus};
use crate::snake::Cell;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_game_over_menu, render_start_hint, render_victory_menu};

/// How a single grid cell is drawn.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CellKind {
    Snake,
    Food,
    Empty,
}

/// Classifies `cell`; snake occupancy wins over food.
#[must_use]
pub fn classify(state: &GameState, cell: Cell) -> CellKind {
    if state.snake.occupies(cell) {
        CellKind::Snake
    } else if state.food == Some(cell) {
        CellKind::Food
    } else {
        CellKind::Empty
    }
}

/// Returns the whole grid, row by row from the top.
#[must_use]
pub fn board(state: &GameState) -> Vec<Vec<CellKind>> {
    (0..GRID_SIZE)
        .map(|y| {
            (0..GRID_SIZE)
                .map(|x| classify(state, Cell::new(x, y)))
                .collect()
        })
        .collect()
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, hud_info: &HudInfo) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, hud_info);
    let board_area = centered_board(play_area);

    let block = Block::bordered()
        .border_set(BOARD_BORDER)
        .border_style(Style::new().fg(THEME.border_fg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_cells(frame, inner, state);

    match state.status {
        GameStatus::Waiting => render_start_hint(frame, board_area),
        GameStatus::GameOver => render_game_over_menu(
            frame,
            board_area,
            state.score(),
            hud_info.high_score,
            hud_info.game_over_reference_high_score,
            state.death_reason,
        ),
        GameStatus::Victory => render_victory_menu(frame, board_area, state.score()),
        GameStatus::Playing => {}
    }
}

fn render_cells(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let buffer = frame.buffer_mut();

    for (y, row) in board(state).into_iter().enumerate() {
        for (x, kind) in row.into_iter().enumerate() {
            let Some((tx, ty)) = cell_to_terminal(inner, x, y) else {
                continue;
            };

            let (glyph, style) = match kind {
                CellKind::Snake => (GLYPH_FILLED, Style::new().fg(THEME.snake)),
                CellKind::Food => (GLYPH_FILLED, Style::new().fg(THEME.food)),
                CellKind::Empty => (GLYPH_EMPTY, Style::new().bg(THEME.empty)),
            };
            buffer.set_string(tx, ty, glyph, style);
        }
    }
}

fn cell_to_terminal(inner: Rect, x: usize, y: usize) -> Option<(u16, u16)> {
    let x_offset = u16::try_from(x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(y).ok()?;

    let tx = inner.x.saturating_add(x_offset);
    let ty = inner.y.saturating_add(y_offset);
    if tx.saturating_add(CELL_WIDTH) > inner.right() || ty >= inner.bottom() {
        return None;
    }

    Some((tx, ty))
}

fn centered_board(area: Rect) -> Rect {
    let grid = GRID_SIZE.unsigned_abs() as u16;
    let width = grid * CELL_WIDTH + 2;
    let height = grid + 2;

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    board
}
