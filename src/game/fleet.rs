use crate::entities::{Alien, Arena};
use crate::settings::Settings;

/// Grid dimensions of a fresh fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetLayout {
    pub columns: usize,
    pub rows: usize,
}

/// Aliens are spaced one alien apart on both axes, with a margin of one alien
/// on the sides and three alien heights kept clear above the ship.
pub fn fleet_layout(
    screen_width: f32,
    screen_height: f32,
    ship_height: f32,
    alien_width: f32,
    alien_height: f32,
) -> FleetLayout {
    FleetLayout {
        columns: grid_count(screen_width - 2.0 * alien_width, 2.0 * alien_width),
        rows: grid_count(
            screen_height - ship_height - 3.0 * alien_height,
            2.0 * alien_height,
        ),
    }
}

fn grid_count(available: f32, step: f32) -> usize {
    if step <= 0.0 || available <= 0.0 {
        return 0;
    }
    (available / step).floor() as usize
}

/// Top-left corner of the alien at `index` along one axis.
pub fn grid_offset(index: usize, size: f32) -> f32 {
    (1.0 + 2.0 * index as f32) * size
}

/// Fill `aliens` with a full grid. Existing aliens are left in place; callers
/// clear the arena first.
pub fn build_fleet(aliens: &mut Arena<Alien>, settings: &Settings) -> FleetLayout {
    let (w, h) = (settings.alien_width, settings.alien_height);
    let layout = fleet_layout(
        settings.screen_width,
        settings.screen_height,
        settings.ship_height,
        w,
        h,
    );
    for row in 0..layout.rows {
        for col in 0..layout.columns {
            aliens.insert(Alien::new(grid_offset(col, w), grid_offset(row, h), w, h));
        }
    }
    layout
}

pub fn fleet_at_edge(aliens: &Arena<Alien>, screen_width: f32) -> bool {
    aliens.values().any(|a| a.check_edges(screen_width))
}

/// One tick of fleet movement. A fleet touching an edge first drops and turns
/// around, then every alien steps sideways. Returns true if the fleet dropped.
pub fn update_fleet(aliens: &mut Arena<Alien>, settings: &mut Settings) -> bool {
    let dropped = fleet_at_edge(aliens, settings.screen_width);
    if dropped {
        for alien in aliens.values_mut() {
            alien.drop_by(settings.fleet_drop_speed);
        }
        settings.dynamic.fleet_direction = settings.dynamic.fleet_direction.flipped();
    }
    let (speed, direction) = (settings.dynamic.alien_speed, settings.dynamic.fleet_direction);
    for alien in aliens.values_mut() {
        alien.update(speed, direction);
    }
    dropped
}
