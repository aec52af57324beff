use alien_invasion::entities::{Alien, Arena};
use alien_invasion::game::fleet::*;
use alien_invasion::settings::{FleetDirection, Settings};

#[test]
fn default_screen_fits_seven_by_three() {
    let layout = fleet_layout(1000.0, 600.0, 48.0, 60.0, 58.0);
    assert_eq!(layout, FleetLayout { columns: 7, rows: 3 });
}

#[test]
fn cramped_screens_give_empty_axes() {
    // Not even one alien plus margins across
    assert_eq!(fleet_layout(150.0, 600.0, 48.0, 60.0, 58.0).columns, 0);
    // Ship and the clear band eat the whole height
    assert_eq!(fleet_layout(1000.0, 200.0, 48.0, 60.0, 58.0).rows, 0);
    assert_eq!(fleet_layout(1000.0, 600.0, 48.0, 0.0, 58.0).columns, 0);
}

#[test]
fn aliens_sit_on_odd_multiples_of_their_size() {
    assert_eq!(grid_offset(0, 60.0), 60.0);
    assert_eq!(grid_offset(1, 60.0), 180.0);
    assert_eq!(grid_offset(6, 60.0), 780.0);
    assert_eq!(grid_offset(2, 58.0), 290.0);
}

#[test]
fn built_fleet_matches_layout() {
    let settings = Settings::default();
    let mut aliens = Arena::new();
    let layout = build_fleet(&mut aliens, &settings);

    assert_eq!(aliens.len(), layout.columns * layout.rows);
    let mut xs: Vec<f32> = aliens.values().map(|a| a.rect.x).collect();
    xs.sort_by(|a, b| a.total_cmp(b));
    xs.dedup();
    assert_eq!(xs, vec![60.0, 180.0, 300.0, 420.0, 540.0, 660.0, 780.0]);
    let mut ys: Vec<f32> = aliens.values().map(|a| a.rect.y).collect();
    ys.sort_by(|a, b| a.total_cmp(b));
    ys.dedup();
    assert_eq!(ys, vec![58.0, 174.0, 290.0]);
    assert!(!fleet_at_edge(&aliens, settings.screen_width));
}

#[test]
fn fleet_direction_alternates_with_a_drop_per_bounce() {
    let mut settings = Settings::default();
    let mut aliens = Arena::new();
    aliens.insert(Alien::new(400.0, 0.0, settings.alien_width, settings.alien_height));

    let mut bounces = Vec::new();
    for _ in 0..2000 {
        let before = settings.dynamic.fleet_direction;
        if update_fleet(&mut aliens, &mut settings) {
            assert_eq!(settings.dynamic.fleet_direction, before.flipped());
            bounces.push(settings.dynamic.fleet_direction);
        } else {
            assert_eq!(settings.dynamic.fleet_direction, before);
        }
        let alien = aliens.values().next().unwrap();
        assert!(alien.rect.left() >= -settings.dynamic.alien_speed);
        assert!(alien.rect.right() <= settings.screen_width + settings.dynamic.alien_speed);
    }

    assert!(bounces.len() >= 3);
    for pair in bounces.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
    assert_eq!(bounces[0], FleetDirection::Left);
    let alien = aliens.values().next().unwrap();
    assert_eq!(alien.rect.y, bounces.len() as f32 * settings.fleet_drop_speed);
}

#[test]
fn empty_fleet_never_bounces() {
    let mut settings = Settings::default();
    let mut aliens: Arena<Alien> = Arena::new();
    assert!(!update_fleet(&mut aliens, &mut settings));
    assert_eq!(settings.dynamic.fleet_direction, FleetDirection::Right);
}
