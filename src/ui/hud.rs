use ratatui::prelude::*;
use ratatui::widgets::*;

use super::{rgb, world_to_cells};
use crate::game::{Game, Phase};

const BUTTON_BG: Color = Color::Rgb(0, 255, 0);
const BUTTON_FG: Color = Color::Rgb(255, 255, 255);
const KEY_FG: Color = Color::Rgb(80, 120, 200);
const HINT_FG: Color = Color::Rgb(120, 120, 120);

/// Draw `text` on one row of `area`, only as wide as the text itself so the
/// field stays visible around it.
fn label(frame: &mut Frame, area: Rect, row: u16, align: Alignment, text: &str, style: Style) {
    let width = (Line::from(text).width() as u16).min(area.width);
    if width == 0 || row >= area.height {
        return;
    }
    let x = match align {
        Alignment::Left => area.x,
        Alignment::Center => area.x + (area.width - width) / 2,
        Alignment::Right => area.right() - width,
    };
    let rect = Rect::new(x, area.y + row, width, 1);
    frame.render_widget(Paragraph::new(Span::styled(text.to_string(), style)), rect);
}

/// Lives top-left, record top-center, score top-right with the level under it.
pub fn render_scoreboard(frame: &mut Frame, area: Rect, game: &Game) {
    let settings = game.settings();
    let style = Style::default()
        .fg(rgb(settings.text_color))
        .bg(rgb(settings.bg_color))
        .add_modifier(Modifier::BOLD);
    let board = game.scoreboard();

    label(frame, area, 0, Alignment::Left, board.ships_text(), style);
    label(frame, area, 0, Alignment::Center, board.record_text(), style);
    label(frame, area, 0, Alignment::Right, board.score_text(), style);
    label(frame, area, 1, Alignment::Right, board.level_text(), style);
}

pub fn render_play_button(frame: &mut Frame, area: Rect, game: &Game) {
    let settings = game.settings();
    let mut rect = world_to_cells(
        area,
        &game.play_button(),
        settings.screen_width,
        settings.screen_height,
    );
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    frame.render_widget(Clear, rect);
    frame.render_widget(Block::default().style(Style::default().bg(BUTTON_BG)), rect);

    rect.y += rect.height.saturating_sub(1) / 2;
    rect.height = 1;
    let text = Paragraph::new("Play")
        .style(Style::default().fg(BUTTON_FG).bg(BUTTON_BG).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(text, rect);
}

pub fn render_help(frame: &mut Frame, area: Rect, game: &Game) {
    let settings = game.settings();
    let bg = rgb(settings.bg_color);
    let key = |s: &'static str| {
        Span::styled(s, Style::default().fg(KEY_FG).bg(bg).add_modifier(Modifier::BOLD))
    };
    let hint = |s: &'static str| Span::styled(s, Style::default().fg(HINT_FG).bg(bg));

    let spans = match game.phase() {
        Phase::Inactive => vec![
            key("Click Play"),
            hint(" or "),
            key("P"),
            hint(" Start  "),
            key("Q"),
            hint(" Quit"),
        ],
        Phase::Stunned { .. } => vec![hint("Ship lost!  "), key("Q"), hint(" Quit")],
        Phase::Active => vec![
            key("\u{2190}\u{2192}"),
            hint(" Move  "),
            key("Space"),
            hint(" Shoot  "),
            key("P"),
            hint(" New game  "),
            key("Q"),
            hint(" Quit"),
        ],
    };
    let help = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(bg))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}
