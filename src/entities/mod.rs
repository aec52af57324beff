//! Things that live on the field. Positions are world coordinates; the
//! controller owns every entity and passes in whatever shared state an update
//! needs.

mod aabb;
mod arena;

pub use aabb::Aabb;
pub use arena::Arena;

use crate::settings::{FleetDirection, Settings};

#[derive(Debug, Clone)]
pub struct Ship {
    pub rect: Aabb,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// A ship resting on the bottom edge, centered.
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Self {
            rect: Aabb::new(
                0.0,
                settings.screen_height - settings.ship_height,
                settings.ship_width,
                settings.ship_height,
            ),
            moving_left: false,
            moving_right: false,
        };
        ship.center(settings.screen_width);
        ship
    }

    pub fn center(&mut self, screen_width: f32) {
        self.rect.x = (screen_width - self.rect.w) / 2.0;
    }

    pub fn update(&mut self, speed: f32, screen_width: f32) {
        if self.moving_right && self.rect.right() < screen_width {
            self.rect.x += speed;
        }
        if self.moving_left && self.rect.left() > 0.0 {
            self.rect.x -= speed;
        }
        self.rect.x = self.rect.x.clamp(0.0, (screen_width - self.rect.w).max(0.0));
    }
}

#[derive(Debug, Clone)]
pub struct Bullet {
    pub rect: Aabb,
}

impl Bullet {
    /// Spawned with its top edge on the ship's top-center.
    pub fn from_ship(ship: &Ship, settings: &Settings) -> Self {
        let w = settings.bullet_width;
        Self {
            rect: Aabb::new(
                ship.rect.center_x() - w / 2.0,
                ship.rect.top(),
                w,
                settings.bullet_height,
            ),
        }
    }

    pub fn update(&mut self, speed: f32) {
        self.rect.y -= speed;
    }

    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0.0
    }
}

#[derive(Debug, Clone)]
pub struct Alien {
    pub rect: Aabb,
}

impl Alien {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Aabb::new(x, y, w, h),
        }
    }

    /// True once the alien touches either side of the screen.
    pub fn check_edges(&self, screen_width: f32) -> bool {
        self.rect.left() <= 0.0 || self.rect.right() >= screen_width
    }

    pub fn update(&mut self, speed: f32, direction: FleetDirection) {
        self.rect.x += speed * direction.sign();
    }

    pub fn drop_by(&mut self, distance: f32) {
        self.rect.y += distance;
    }
}
