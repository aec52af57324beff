pub mod field;
pub mod hud;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::entities::Aabb;
use crate::settings::Rgb;

pub fn render(frame: &mut Frame, app: &mut App) {
    let settings = app.game.settings();
    let bg = rgb(settings.bg_color);
    let fg = rgb(settings.text_color);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(fg))
        .title(" Alien Invasion ")
        .title_style(Style::default().fg(fg).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(bg));

    let area = frame.area();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Field
            Constraint::Length(1), // Controls
        ])
        .split(inner);

    app.field_area = chunks[0];
    let game = &app.game;

    field::render_field(frame, chunks[0], game);
    hud::render_scoreboard(frame, chunks[0], game);
    if !game.is_active() {
        hud::render_play_button(frame, chunks[0], game);
    }
    hud::render_help(frame, chunks[1], game);
}

pub fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

/// World coordinates at the center of a terminal cell, if the cell lies in
/// `area`.
pub fn cell_to_world(
    area: Rect,
    column: u16,
    row: u16,
    screen_width: f32,
    screen_height: f32,
) -> Option<(f32, f32)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    if column < area.x || column >= area.right() || row < area.y || row >= area.bottom() {
        return None;
    }
    let x = ((column - area.x) as f32 + 0.5) * screen_width / area.width as f32;
    let y = ((row - area.y) as f32 + 0.5) * screen_height / area.height as f32;
    Some((x, y))
}

/// The cells covering a world-space box, clipped to `area`.
pub fn world_to_cells(area: Rect, rect: &Aabb, screen_width: f32, screen_height: f32) -> Rect {
    let to_x = |v: f32| v * area.width as f32 / screen_width;
    let to_y = |v: f32| v * area.height as f32 / screen_height;
    let clip_x = |v: f32| (v.max(0.0) as u16).min(area.width);
    let clip_y = |v: f32| (v.max(0.0) as u16).min(area.height);

    let x0 = clip_x(to_x(rect.left()).floor());
    let x1 = clip_x(to_x(rect.right()).ceil());
    let y0 = clip_y(to_y(rect.top()).floor());
    let y1 = clip_y(to_y(rect.bottom()).ceil());
    Rect::new(area.x + x0, area.y + y0, x1 - x0, y1 - y0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_map_to_world() {
        let area = Rect::new(1, 1, 100, 30);
        assert_eq!(cell_to_world(area, 0, 5, 1000.0, 600.0), None);
        assert_eq!(cell_to_world(area, 101, 5, 1000.0, 600.0), None);
        assert_eq!(cell_to_world(area, 5, 31, 1000.0, 600.0), None);
        assert_eq!(cell_to_world(area, 1, 1, 1000.0, 600.0), Some((5.0, 10.0)));
        assert_eq!(cell_to_world(area, 100, 30, 1000.0, 600.0), Some((995.0, 590.0)));
        assert_eq!(cell_to_world(Rect::new(0, 0, 0, 0), 0, 0, 1000.0, 600.0), None);
    }

    #[test]
    fn button_maps_to_cells() {
        let area = Rect::new(1, 1, 100, 30);
        let button = Aabb::centered(1000.0, 600.0, 200.0, 50.0);
        let cells = world_to_cells(area, &button, 1000.0, 600.0);
        assert_eq!(cells, Rect::new(41, 14, 20, 4));

        // A click in any of those cells lands on the button
        for col in cells.left()..cells.right() {
            let (x, _) = cell_to_world(area, col, 15, 1000.0, 600.0).unwrap();
            assert!(x >= button.left() && x < button.right());
        }
    }

    #[test]
    fn boxes_are_clipped() {
        let area = Rect::new(0, 0, 100, 30);
        let off = Aabb::new(-50.0, 590.0, 100.0, 100.0);
        let cells = world_to_cells(area, &off, 1000.0, 600.0);
        assert_eq!(cells, Rect::new(0, 29, 5, 1));
    }
}
