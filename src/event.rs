use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, KeyEvent, MouseEvent};

pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,
    Tick,
}

/// Polls the terminal on the calling thread. Input that arrives before the
/// next tick is returned as it comes; otherwise the call blocks until the tick
/// is due.
pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            last_tick: Instant::now(),
        }
    }

    pub fn next(&mut self) -> io::Result<Event> {
        loop {
            // A due tick goes first so a stream of input cannot starve it
            let elapsed = self.last_tick.elapsed();
            if elapsed >= self.tick_rate || !event::poll(self.tick_rate - elapsed)? {
                self.last_tick = Instant::now();
                return Ok(Event::Tick);
            }
            match event::read()? {
                event::Event::Key(key) => return Ok(Event::Key(key)),
                event::Event::Mouse(mouse) => return Ok(Event::Mouse(mouse)),
                event::Event::Resize(..) => return Ok(Event::Resize),
                _ => {}
            }
        }
    }
}
