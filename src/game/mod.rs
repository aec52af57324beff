//! The controller: owns every entity, the stats and the settings, and advances
//! them one tick at a time.

pub mod collision;
pub mod fleet;

use std::time::{Duration, Instant};

use crate::entities::{Aabb, Alien, Arena, Bullet, Ship};
use crate::scoreboard::ScoreBoard;
use crate::settings::Settings;
use crate::stats::GameStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting on the play button. Nothing moves.
    Inactive,
    Active,
    /// Frozen after losing a ship, until the deadline passes.
    Stunned { until: Instant },
}

pub struct Game {
    settings: Settings,
    stats: GameStats,
    scoreboard: ScoreBoard,
    ship: Ship,
    bullets: Arena<Bullet>,
    aliens: Arena<Alien>,
    phase: Phase,
    pointer_visible: bool,
}

impl Game {
    /// A game on the title screen: a fleet is already in place behind the
    /// play button.
    pub fn new(mut settings: Settings, record: u32) -> Self {
        settings.initialize_dynamic_settings();
        let stats = GameStats::new(settings.ship_limit, record);
        let scoreboard = ScoreBoard::new(&stats);
        let ship = Ship::new(&settings);
        let mut aliens = Arena::new();
        fleet::build_fleet(&mut aliens, &settings);
        Self {
            settings,
            stats,
            scoreboard,
            ship,
            bullets: Arena::new(),
            aliens,
            phase: Phase::Inactive,
            pointer_visible: true,
        }
    }

    pub fn start_game(&mut self) {
        self.stats.reset_stats(self.settings.ship_limit);
        self.settings.initialize_dynamic_settings();

        self.bullets.clear();
        self.aliens.clear();
        fleet::build_fleet(&mut self.aliens, &self.settings);
        self.ship.center(self.settings.screen_width);
        self.ship.moving_left = false;
        self.ship.moving_right = false;

        self.pointer_visible = false;
        self.phase = Phase::Active;
        self.scoreboard.refresh(&self.stats);
        log::info!(
            "New game: {} aliens, {} ships",
            self.aliens.len(),
            self.stats.ships_left
        );
    }

    /// Advance one tick. `now` decides when a stun wears off.
    pub fn update(&mut self, now: Instant) {
        if let Phase::Stunned { until } = self.phase {
            if now >= until {
                self.phase = Phase::Active;
            }
        }
        if self.phase == Phase::Active {
            self.ship
                .update(self.settings.dynamic.ship_speed, self.settings.screen_width);
            self.update_bullets();
            self.update_aliens(now);
        }
        self.scoreboard.refresh(&self.stats);
    }

    /// Returns true if a bullet was fired.
    pub fn fire_bullet(&mut self) -> bool {
        if self.phase != Phase::Active || self.bullets.len() >= self.settings.bullets_allowed {
            return false;
        }
        self.bullets.insert(Bullet::from_ship(&self.ship, &self.settings));
        true
    }

    pub fn set_moving_left(&mut self, moving: bool) {
        self.ship.moving_left = moving;
    }

    pub fn set_moving_right(&mut self, moving: bool) {
        self.ship.moving_right = moving;
    }

    /// A click at world position `(x, y)`. Starts a game when it lands on the
    /// play button while no game is running.
    pub fn click(&mut self, x: f32, y: f32) -> bool {
        if self.is_active() || !self.play_button().contains_point(x, y) {
            return false;
        }
        self.start_game();
        true
    }

    pub fn play_button(&self) -> Aabb {
        Aabb::centered(
            self.settings.screen_width,
            self.settings.screen_height,
            self.settings.play_button_width,
            self.settings.play_button_height,
        )
    }

    /// True while a game is in progress, stunned or not.
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Inactive
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pointer_visible(&self) -> bool {
        self.pointer_visible
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn scoreboard(&self) -> &ScoreBoard {
        &self.scoreboard
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn bullets(&self) -> &Arena<Bullet> {
        &self.bullets
    }

    pub fn aliens(&self) -> &Arena<Alien> {
        &self.aliens
    }

    fn update_bullets(&mut self) {
        let speed = self.settings.dynamic.bullet_speed;
        for bullet in self.bullets.values_mut() {
            bullet.update(speed);
        }
        self.bullets.retain(|b| !b.is_off_screen());

        self.check_bullet_alien_collisions();
    }

    fn check_bullet_alien_collisions(&mut self) {
        let hits = collision::bullet_alien_collisions(&mut self.bullets, &mut self.aliens);
        if !hits.is_empty() {
            let points = self.settings.dynamic.alien_points;
            self.stats
                .add_points(points.saturating_mul(hits.aliens.len() as u32));
            if self.stats.check_record() {
                log::debug!("New record: {}", self.stats.record);
            }
        }

        if !hits.aliens.is_empty() && self.aliens.is_empty() {
            self.bullets.clear();
            fleet::build_fleet(&mut self.aliens, &self.settings);
            self.settings.increase_speed();
            self.stats.level += 1;
            log::info!(
                "Fleet destroyed, level {} (aliens worth {})",
                self.stats.level,
                self.settings.dynamic.alien_points
            );
        }
    }

    fn update_aliens(&mut self, now: Instant) {
        fleet::update_fleet(&mut self.aliens, &mut self.settings);

        let rammed = collision::any_overlap(&self.ship.rect, self.aliens.values().map(|a| &a.rect));
        if rammed || self.aliens_reached_bottom() {
            self.ship_hit(now);
        }
    }

    fn aliens_reached_bottom(&self) -> bool {
        let bottom = self.settings.screen_height;
        self.aliens.values().any(|a| a.rect.bottom() >= bottom)
    }

    fn ship_hit(&mut self, now: Instant) {
        if self.phase != Phase::Active {
            return;
        }
        self.stats.ships_left = self.stats.ships_left.saturating_sub(1);

        if self.stats.ships_left > 0 {
            self.bullets.clear();
            self.aliens.clear();
            fleet::build_fleet(&mut self.aliens, &self.settings);
            self.ship.center(self.settings.screen_width);

            let pause = Duration::from_millis(self.settings.hit_pause_ms);
            self.phase = Phase::Stunned { until: now + pause };
            log::info!("Ship hit, {} left", self.stats.ships_left);
        } else {
            self.phase = Phase::Inactive;
            self.pointer_visible = true;
            log::info!(
                "Game over at level {} with score {} (record {})",
                self.stats.level,
                self.stats.score,
                self.stats.record
            );
        }
    }
}
