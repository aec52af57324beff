use std::time::{Duration, Instant};

use alien_invasion::game::{Game, Phase};
use alien_invasion::settings::Settings;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn title_screen_then_play() {
    let mut game = Game::new(Settings::default(), 80);
    assert_eq!(game.phase(), Phase::Inactive);
    assert_eq!(game.scoreboard().record_text(), "80");
    assert_eq!(game.scoreboard().ships_text(), "\u{25b2} \u{25b2} \u{25b2}");

    let button = game.play_button();
    assert!(game.click(button.center_x(), button.top() + 1.0));
    assert!(game.is_active());
    assert!(!game.pointer_visible());
    assert_eq!(game.scoreboard().level_text(), "1");
}

#[test]
fn idle_fleet_eventually_lands_and_ends_the_game() {
    let mut game = Game::new(Settings::default(), 0);
    game.start_game();
    let step = Duration::from_millis(game.settings().tick_rate_ms);
    let mut now = Instant::now();

    let mut ticks = 0;
    while game.phase() != Phase::Inactive {
        now += step;
        game.update(now);
        ticks += 1;
        assert!(ticks < 200_000, "fleet never finished the game");
    }

    assert_eq!(game.stats().ships_left, 0);
    assert_eq!(game.stats().score, 0);
    assert!(game.pointer_visible());
}

#[test]
fn random_play_keeps_counters_consistent() {
    let mut rng = rng();
    let mut game = Game::new(Settings::default(), 0);
    game.start_game();
    let step = Duration::from_millis(game.settings().tick_rate_ms);
    let limit = game.settings().ship_limit;
    let cap = game.settings().bullets_allowed;
    let mut now = Instant::now();
    let mut last_record = 0;
    let mut last_score = 0;
    let mut last_level = 1;

    for _ in 0..20_000 {
        match rng.gen_range(0..10) {
            0..=3 => {
                game.fire_bullet();
            }
            4 => game.set_moving_left(rng.gen_bool(0.5)),
            5 => game.set_moving_right(rng.gen_bool(0.5)),
            _ => {}
        }
        let restarted = !game.is_active()
            && rng.gen_bool(0.05)
            && game.click(500.0, 300.0);

        now += step;
        game.update(now);

        let stats = game.stats();
        assert!(stats.record >= last_record);
        assert!(stats.record >= stats.score);
        assert!(stats.ships_left <= limit);
        assert!(stats.level >= 1);
        if !restarted {
            assert!(stats.score >= last_score);
            assert!(stats.level >= last_level);
        }
        assert!(game.bullets().len() <= cap);
        let ship = game.ship().rect;
        assert!(ship.left() >= 0.0 && ship.right() <= game.settings().screen_width);

        last_record = stats.record;
        last_score = stats.score;
        last_level = stats.level;
    }

    assert!(last_record > 0);
}
