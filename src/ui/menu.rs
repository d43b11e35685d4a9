use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::THEME;
use crate::game::DeathReason;

/// Draws the "press a key to start" banner over the board.
pub fn render_start_hint(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_popup(area, 80, 25);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("Press an arrow key or WASD to start"),
        Line::from(""),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(THEME.hud_text))
            .block(Block::bordered().title(" start ")),
        popup,
    );
}

/// Draws the game-over popup with the cause and restart hints.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    high_score: u32,
    reference_high_score: u32,
    death_reason: Option<DeathReason>,
) {
    let popup = centered_popup(area, 80, 50);
    frame.render_widget(Clear, popup);

    let is_new_high = score > reference_high_score;
    let lines = vec![
        Line::styled(
            "GAME OVER",
            Style::new().fg(THEME.alert).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(format!("High score: {}", high_score.max(score))),
        Line::from(match death_reason {
            Some(DeathReason::Wall) => "Cause: hit wall",
            Some(DeathReason::SelfCollision) => "Cause: hit yourself",
            None => "",
        }),
        Line::from(if is_new_high { "New high score!" } else { "" }),
        Line::from(""),
        Line::from("[Enter]/[R] Restart"),
        Line::from("[Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

/// Draws the popup shown once the snake fills the grid.
pub fn render_victory_menu(frame: &mut Frame<'_>, area: Rect, score: u32) {
    let popup = centered_popup(area, 80, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::styled(
            "YOU WIN",
            Style::new().fg(THEME.title).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Final score: {score}")),
        Line::from(""),
        Line::from("[Enter]/[R] Play Again"),
        Line::from("[Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" victory ")),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
