//! Braille rendering of the play field. Each terminal cell holds a 2x4 grid of
//! dots, and world space is scaled onto the dot grid of whatever area we get.

use std::collections::HashMap;

use ratatui::prelude::*;
use ratatui::widgets::*;

use super::rgb;
use crate::entities::Aabb;
use crate::game::Game;

const ALIEN_SPRITE: &[&str] = &[
    "..#.....#..",
    "...#...#...",
    "..#######..",
    ".##.###.##.",
    "###########",
    "#.#######.#",
    "#.#.....#.#",
    "...##.##...",
];

const SHIP_SPRITE: &[&str] = &[
    ".....#.....",
    "....###....",
    "....###....",
    ".#########.",
    "###########",
    "###########",
    "##.#####.##",
    "#.........#",
];

const SOLID: &[&str] = &["#"];

const ALIEN_COLOR: Color = Color::Rgb(40, 150, 60);
const SHIP_COLOR: Color = Color::Rgb(40, 60, 160);

type DotMap = HashMap<(usize, usize), u8>;

/// Dot grid of the area being drawn, and the world-to-dot scale.
struct Canvas {
    bw: i32,
    bh: i32,
    sx: f32,
    sy: f32,
}

fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

fn set_dot(map: &mut DotMap, canvas: &Canvas, bx: i32, by: i32) {
    if bx < 0 || by < 0 || bx >= canvas.bw || by >= canvas.bh {
        return;
    }
    let (bx, by) = (bx as usize, by as usize);
    *map.entry((bx / 2, by / 4)).or_insert(0) |= braille_bit(bx % 2, by % 4);
}

/// Scale `mask` over the dots covered by `rect`. Every box gets at least one dot.
fn stamp(map: &mut DotMap, canvas: &Canvas, rect: &Aabb, mask: &[&str]) {
    let x0 = (rect.x * canvas.sx).round() as i32;
    let y0 = (rect.y * canvas.sy).round() as i32;
    let dw = ((rect.w * canvas.sx).round() as i32).max(1);
    let dh = ((rect.h * canvas.sy).round() as i32).max(1);
    let rows = mask.len();
    let cols = mask.first().map_or(0, |row| row.len());
    if rows == 0 || cols == 0 {
        return;
    }
    for dy in 0..dh {
        let line = mask[dy as usize * rows / dh as usize].as_bytes();
        for dx in 0..dw {
            if line[dx as usize * cols / dw as usize] == b'#' {
                set_dot(map, canvas, x0 + dx, y0 + dy);
            }
        }
    }
}

fn write_layer(grid: &mut [Vec<(char, Style)>], map: &DotMap, color: Color, bg: Color) {
    for (&(cx, cy), &bits) in map {
        if bits == 0 {
            continue;
        }
        if let Some(cell) = grid.get_mut(cy).and_then(|row| row.get_mut(cx)) {
            let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
            *cell = (ch, Style::default().fg(color).bg(bg));
        }
    }
}

pub fn render_field(frame: &mut Frame, area: Rect, game: &Game) {
    let (w, h) = (area.width as usize, area.height as usize);
    if w == 0 || h == 0 {
        return;
    }
    let settings = game.settings();
    let bg = rgb(settings.bg_color);
    let canvas = Canvas {
        bw: (w * 2) as i32,
        bh: (h * 4) as i32,
        sx: (w * 2) as f32 / settings.screen_width,
        sy: (h * 4) as f32 / settings.screen_height,
    };

    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', Style::default().bg(bg)); w]; h];

    let mut aliens = DotMap::new();
    for alien in game.aliens().values() {
        stamp(&mut aliens, &canvas, &alien.rect, ALIEN_SPRITE);
    }
    write_layer(&mut grid, &aliens, ALIEN_COLOR, bg);

    if game.is_active() {
        let mut bullets = DotMap::new();
        for bullet in game.bullets().values() {
            stamp(&mut bullets, &canvas, &bullet.rect, SOLID);
        }
        write_layer(&mut grid, &bullets, rgb(settings.bullet_color), bg);
    }

    let mut ship = DotMap::new();
    stamp(&mut ship, &canvas, &game.ship().rect, SHIP_SPRITE);
    write_layer(&mut grid, &ship, SHIP_COLOR, bg);

    let lines: Vec<Line<'static>> = grid
        .into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
