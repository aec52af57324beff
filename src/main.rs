use std::io;
use std::time::Instant;

use anyhow::Context;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use alien_invasion::app::App;
use alien_invasion::event::{Event, EventHandler};
use alien_invasion::game::Game;
use alien_invasion::logging;
use alien_invasion::record::RecordStore;
use alien_invasion::settings::{data_path, Settings, LOG_FILE, RECORD_FILE, SETTINGS_FILE};
use alien_invasion::ui;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> anyhow::Result<()> {
    let log_path = data_path(LOG_FILE);
    if let Err(err) = logging::init(&log_path) {
        eprintln!("Logging disabled, could not open {}: {err}", log_path.display());
    }

    log::info!("Alien Invasion starting...");

    let settings = Settings::load_or_default(&data_path(SETTINGS_FILE));
    let tick_rate_ms = settings.tick_rate_ms;
    let store = RecordStore::new(data_path(RECORD_FILE));
    let record = store.load_or_default();

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("entering alternate screen")?;
    // Release events where the terminal has them; App times out held keys either way
    let enhanced = matches!(supports_keyboard_enhancement(), Ok(true))
        && execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .is_ok();
    log::debug!("Keyboard enhancement: {enhanced}");

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).context("creating terminal")?;

    let mut app = App::new(Game::new(settings, record), store);
    let result = run(&mut terminal, &mut app, tick_rate_ms);
    if let Err(err) = &result {
        log::error!("Game loop failed: {err:#}");
        app.save_record();
    }

    // Restore terminal
    if enhanced {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    disable_raw_mode().context("disabling raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
        .context("leaving alternate screen")?;
    terminal.show_cursor()?;

    log::info!("Shut down");
    result
}

fn run(terminal: &mut Term, app: &mut App, tick_rate_ms: u64) -> anyhow::Result<()> {
    terminal.clear()?;
    let mut events = EventHandler::new(tick_rate_ms);
    let mut pointer_visible = true;

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next().context("reading terminal events")? {
            Event::Tick => app.on_tick(Instant::now()),
            Event::Key(key) => app.on_key(key),
            Event::Mouse(mouse) => app.on_mouse(mouse),
            Event::Resize => {}
        }

        // The pointer only matters while the Play button is up
        let visible = app.game.pointer_visible();
        if visible != pointer_visible {
            if visible {
                execute!(terminal.backend_mut(), EnableMouseCapture)?;
            } else {
                execute!(terminal.backend_mut(), DisableMouseCapture)?;
            }
            pointer_visible = visible;
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
