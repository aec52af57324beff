use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::game::Game;
use crate::record::RecordStore;
use crate::ui;

/// Ticks a movement key counts as held after its last press or repeat. Many
/// terminals never report releases, so a key without a fresh repeat lets go
/// on its own. Longer than the OS repeat interval at the default tick rate.
const HOLD_WINDOW: u64 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Left,
    Right,
}

pub struct App {
    pub should_quit: bool,
    pub game: Game,
    store: RecordStore,
    tick: u64,
    held_left: Option<u64>,
    held_right: Option<u64>,
    /// Where the field was drawn last frame, in terminal cells.
    pub field_area: Rect,
}

impl App {
    pub fn new(game: Game, store: RecordStore) -> Self {
        Self {
            should_quit: false,
            game,
            store,
            tick: 0,
            held_left: None,
            held_right: None,
            field_area: Rect::default(),
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.tick += 1;
        let tick = self.tick;
        let fresh = |seen: Option<u64>| seen.filter(|&t| tick.saturating_sub(t) <= HOLD_WINDOW);
        self.held_left = fresh(self.held_left);
        self.held_right = fresh(self.held_right);
        self.game.set_moving_left(self.held_left.is_some());
        self.game.set_moving_right(self.held_right.is_some());
        self.game.update(now);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        let heading = match key.code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Heading::Left),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Heading::Right),
            _ => None,
        };
        if let Some(heading) = heading {
            self.on_heading(heading, key.kind);
            return;
        }

        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit(),
            KeyCode::Char(' ') => {
                self.game.fire_bullet();
            }
            KeyCode::Char('p') | KeyCode::Char('P') => self.game.start_game(),
            _ => {}
        }
    }

    fn on_heading(&mut self, heading: Heading, kind: KeyEventKind) {
        let seen = match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => Some(self.tick),
            KeyEventKind::Release => None,
        };
        match heading {
            Heading::Left => self.held_left = seen,
            Heading::Right => self.held_right = seen,
        }
        self.game.set_moving_left(self.held_left.is_some());
        self.game.set_moving_right(self.held_right.is_some());
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let settings = self.game.settings();
        let point = ui::cell_to_world(
            self.field_area,
            mouse.column,
            mouse.row,
            settings.screen_width,
            settings.screen_height,
        );
        if let Some((x, y)) = point {
            self.game.click(x, y);
        }
    }

    /// Persist the record and ask the main loop to stop.
    pub fn quit(&mut self) {
        self.save_record();
        self.should_quit = true;
    }

    /// Write the record to disk, logging the outcome. Returns true on success.
    pub fn save_record(&self) -> bool {
        let record = self.game.stats().record;
        match self.store.save(record) {
            Ok(()) => {
                log::info!("Record {} saved to {}", record, self.store.path().display());
                true
            }
            Err(err) => {
                log::error!("Could not save record: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crossterm::event::KeyEventState;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_record_path(name_hint: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "alien_invasion_app_{}_{}_{}.txt",
            name_hint,
            std::process::id(),
            nanos
        ))
    }

    fn app() -> App {
        let game = Game::new(Settings::default(), 0);
        App::new(game, RecordStore::new(temp_record_path("app")))
    }

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn press_repeat_and_release_drive_the_ship() {
        let mut app = app();
        app.on_key(key(KeyCode::Char('p'), KeyEventKind::Press));
        let start = app.game.ship().rect.x;

        app.on_key(key(KeyCode::Right, KeyEventKind::Press));
        for _ in 0..20 {
            app.on_tick(Instant::now());
            app.on_key(key(KeyCode::Right, KeyEventKind::Repeat));
        }
        let moved = app.game.ship().rect.x;
        assert!(moved > start);
        assert!(app.game.ship().moving_right);

        app.on_key(key(KeyCode::Right, KeyEventKind::Release));
        app.on_tick(Instant::now());
        assert_eq!(app.game.ship().rect.x, moved);
    }

    #[test]
    fn tapped_key_lets_go_without_a_release() {
        let mut app = app();
        app.on_key(key(KeyCode::Char('p'), KeyEventKind::Press));
        let start = app.game.ship().rect.x;
        app.on_key(key(KeyCode::Right, KeyEventKind::Press));
        for _ in 0..HOLD_WINDOW {
            app.on_tick(Instant::now());
        }
        assert!(app.game.ship().moving_right);

        for _ in 0..200 {
            app.on_tick(Instant::now());
        }
        assert!(!app.game.ship().moving_right);
        let speed = app.game.settings().dynamic.ship_speed;
        assert!(app.game.ship().rect.x <= start + speed * (HOLD_WINDOW + 1) as f32);
    }

    #[test]
    fn taps_in_both_directions_do_not_lock_the_ship() {
        let mut app = app();
        app.on_key(key(KeyCode::Char('p'), KeyEventKind::Press));
        app.on_key(key(KeyCode::Left, KeyEventKind::Press));
        app.on_key(key(KeyCode::Right, KeyEventKind::Press));
        for _ in 0..=HOLD_WINDOW {
            app.on_tick(Instant::now());
        }
        assert!(!app.game.ship().moving_left);
        assert!(!app.game.ship().moving_right);

        let start = app.game.ship().rect.x;
        app.on_key(key(KeyCode::Left, KeyEventKind::Press));
        app.on_tick(Instant::now());
        assert!(app.game.ship().rect.x < start);
    }

    #[test]
    fn space_fires_and_p_restarts() {
        let mut app = app();
        app.on_key(key(KeyCode::Char(' '), KeyEventKind::Press));
        assert!(app.game.bullets().is_empty());

        app.on_key(key(KeyCode::Char('p'), KeyEventKind::Press));
        assert!(app.game.is_active());
        app.on_key(key(KeyCode::Char(' '), KeyEventKind::Press));
        assert_eq!(app.game.bullets().len(), 1);
    }

    #[test]
    fn quit_writes_the_record() {
        let path = temp_record_path("quit");
        let game = Game::new(Settings::default(), 4321);
        let mut app = App::new(game, RecordStore::new(path.clone()));

        app.on_key(key(KeyCode::Char('q'), KeyEventKind::Press));

        assert!(app.should_quit);
        let saved = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(saved, "4321");
    }

    #[test]
    fn save_record_writes_without_quitting() {
        let path = temp_record_path("save");
        let mut game = Game::new(Settings::default(), 0);
        game.start_game();
        let mut app = App::new(game, RecordStore::new(path.clone()));

        assert!(app.save_record());
        assert!(!app.should_quit);
        let saved = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(saved, "0");
    }

    #[test]
    fn save_record_reports_a_failed_write() {
        let dir = temp_record_path("missing_dir");
        let game = Game::new(Settings::default(), 10);
        let app = App::new(game, RecordStore::new(dir.join("record.txt")));
        assert!(!app.save_record());
    }

    #[test]
    fn click_on_play_button_starts() {
        let mut app = app();
        app.field_area = Rect::new(0, 0, 100, 30);
        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        app.on_mouse(click(2, 2));
        assert!(!app.game.is_active());
        app.on_mouse(click(50, 15));
        assert!(app.game.is_active());
    }
}
