use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::THEME;
use crate::game::GameState;
use crate::score::ScoreBoard;

const LEGEND: &str = "Green is snake, red is apple.";
const CONTROLS: &str = "arrows/WASD steer · [R] restart · [Q] quit";

/// Values the HUD shows that do not live in the game state.
#[derive(Debug, Clone, Copy, Default)]
pub struct HudInfo {
    pub high_score: u32,
    /// Best score before the game that just ended; decides "new high score".
    pub game_over_reference_high_score: u32,
}

impl HudInfo {
    #[must_use]
    pub fn from_scores(scores: &ScoreBoard) -> Self {
        Self {
            high_score: scores.best(),
            game_over_reference_high_score: scores.best_before_last_game(),
        }
    }
}

/// Draws the title row, legend and control hints, returning the area left
/// for the board.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: &HudInfo) -> Rect {
    let [title_row, legend_row, play_area, controls_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let width = usize::from(title_row.width);
    let stats = format!(
        "Score {}  Length {}  Hi {}",
        state.score(),
        state.snake.len(),
        info.high_score.max(state.score())
    );
    let title = "SNAKE";
    let gap = width.saturating_sub(title.width() + stats.width());

    let line = Line::from(vec![
        Span::styled(
            title,
            Style::new().fg(THEME.title).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(gap)),
        Span::styled(stats, Style::new().fg(THEME.hud_text)),
    ]);
    frame.render_widget(Paragraph::new(line), title_row);

    frame.render_widget(
        Paragraph::new(fit_to_width(LEGEND, usize::from(legend_row.width)))
            .alignment(Alignment::Center)
            .style(Style::new().fg(THEME.hint)),
        legend_row,
    );

    frame.render_widget(
        Paragraph::new(fit_to_width(CONTROLS, usize::from(controls_row.width)))
            .alignment(Alignment::Center)
            .style(Style::new().fg(THEME.hint)),
        controls_row,
    );

    play_area
}

/// Clips `text` to at most `max_width` display columns.
#[must_use]
pub fn fit_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_owned();
    }

    let mut used = 0;
    let mut clipped = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > max_width {
            break;
        }
        used += ch_width;
        clipped.push(ch);
    }
    clipped
}

#[cfg(test)]
mod tests {
    use super::fit_to_width;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(fit_to_width("score", 10), "score");
    }

    #[test]
    fn long_text_is_clipped_by_display_width() {
        assert_eq!(fit_to_width("abcdef", 3), "abc");
        assert_eq!(fit_to_width("a·b·c", 4), "a·b·");
        assert_eq!(fit_to_width("蛇蛇", 3), "蛇");
    }
}
