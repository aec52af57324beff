/// Counters for the current session plus the all-time record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    /// Loaded once at startup; never reset.
    pub record: u32,
}

impl GameStats {
    pub fn new(ship_limit: u32, record: u32) -> Self {
        let mut stats = Self {
            ships_left: 0,
            score: 0,
            level: 1,
            record,
        };
        stats.reset_stats(ship_limit);
        stats
    }

    pub fn reset_stats(&mut self, ship_limit: u32) {
        self.ships_left = ship_limit;
        self.score = 0;
        self.level = 1;
    }

    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Raise the record to the current score. Returns true on a new record.
    pub fn check_record(&mut self) -> bool {
        if self.score > self.record {
            self.record = self.score;
            true
        } else {
            false
        }
    }
}
