use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const RECORD_FILE: &str = "record.txt";
pub const SETTINGS_FILE: &str = "alien_invasion.json";
pub const LOG_FILE: &str = "alien_invasion.log";

pub type Rgb = (u8, u8, u8);

/// Horizontal heading shared by every alien in the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FleetDirection {
    Right,
    Left,
}

impl FleetDirection {
    pub fn sign(self) -> f32 {
        match self {
            FleetDirection::Right => 1.0,
            FleetDirection::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            FleetDirection::Right => FleetDirection::Left,
            FleetDirection::Left => FleetDirection::Right,
        }
    }
}

/// Values that change while a game is running.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DynamicSettings {
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub alien_points: u32,
    pub fleet_direction: FleetDirection,
}

impl Default for DynamicSettings {
    fn default() -> Self {
        Self {
            ship_speed: 6.0,
            bullet_speed: 10.0,
            alien_speed: 2.0,
            alien_points: 50,
            fleet_direction: FleetDirection::Right,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Screen, in world units
    pub screen_width: f32,
    pub screen_height: f32,
    pub bg_color: Rgb,
    pub text_color: Rgb,

    // Ship
    pub ship_limit: u32,
    pub ship_width: f32,
    pub ship_height: f32,

    // Aliens
    pub alien_width: f32,
    pub alien_height: f32,
    pub fleet_drop_speed: f32,

    // Bullets
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_color: Rgb,
    pub bullets_allowed: usize,

    // Difficulty
    pub speedup_scale: f32,
    pub score_scale: f32,

    // Timing
    pub tick_rate_ms: u64,
    pub hit_pause_ms: u64,

    pub play_button_width: f32,
    pub play_button_height: f32,

    /// Base values `dynamic` is reset to at every game start.
    pub initial: DynamicSettings,
    #[serde(skip)]
    pub dynamic: DynamicSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1000.0,
            screen_height: 600.0,
            bg_color: (230, 230, 230),
            text_color: (30, 30, 30),
            ship_limit: 3,
            ship_width: 60.0,
            ship_height: 48.0,
            alien_width: 60.0,
            alien_height: 58.0,
            fleet_drop_speed: 10.0,
            bullet_width: 3.0,
            bullet_height: 15.0,
            bullet_color: (230, 0, 0),
            bullets_allowed: 5,
            speedup_scale: 1.1,
            score_scale: 1.5,
            tick_rate_ms: 16,
            hit_pause_ms: 500,
            play_button_width: 200.0,
            play_button_height: 50.0,
            initial: DynamicSettings::default(),
            dynamic: DynamicSettings::default(),
        }
    }
}

impl Settings {
    /// Read overrides from a JSON file. Fields not present keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings: Settings =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        settings.initialize_dynamic_settings();
        Ok(settings)
    }

    /// Like [`Settings::load`], but any problem falls back to the defaults.
    /// A missing file is the normal case and is not worth a warning.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive: [(&'static str, f32); 13] = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ship_width", self.ship_width),
            ("ship_height", self.ship_height),
            ("alien_width", self.alien_width),
            ("alien_height", self.alien_height),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("play_button_width", self.play_button_width),
            ("play_button_height", self.play_button_height),
            ("initial.ship_speed", self.initial.ship_speed),
            ("initial.bullet_speed", self.initial.bullet_speed),
            ("initial.alien_speed", self.initial.alien_speed),
        ];
        for (field, value) in positive {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }
        if self.fleet_drop_speed < 0.0 {
            return Err(ConfigError::Invalid {
                field: "fleet_drop_speed",
                reason: format!("must not be negative, got {}", self.fleet_drop_speed),
            });
        }
        let scales = [
            ("speedup_scale", self.speedup_scale),
            ("score_scale", self.score_scale),
        ];
        for (field, value) in scales {
            if !(value >= 1.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be at least 1.0, got {value}"),
                });
            }
        }
        if self.ship_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "ship_limit",
                reason: "at least one ship is required".to_string(),
            });
        }
        if self.bullets_allowed == 0 {
            return Err(ConfigError::Invalid {
                field: "bullets_allowed",
                reason: "at least one bullet is required".to_string(),
            });
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "tick_rate_ms",
                reason: "must be non-zero".to_string(),
            });
        }
        Ok(())
    }

    pub fn initialize_dynamic_settings(&mut self) {
        self.dynamic = self.initial;
    }

    /// Speed the game up and make aliens worth more.
    pub fn increase_speed(&mut self) {
        let d = &mut self.dynamic;
        d.ship_speed *= self.speedup_scale;
        d.bullet_speed *= self.speedup_scale;
        d.alien_speed *= self.speedup_scale;
        d.alien_points = (d.alien_points as f32 * self.score_scale) as u32;
    }
}

/// Files live next to the executable, or in the working directory when that
/// cannot be determined.
pub fn data_path(file_name: &str) -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            return dir.join(file_name);
        }
    }
    PathBuf::from(file_name)
}
