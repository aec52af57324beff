use crate::stats::GameStats;

pub const SHIP_ICON: &str = "\u{25b2}";

/// Display text derived from [`GameStats`]. Each piece is re-prepared only when
/// the value behind it changes.
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    score_text: String,
    record_text: String,
    level_text: String,
    ships_text: String,
    shown: GameStats,
}

impl ScoreBoard {
    pub fn new(stats: &GameStats) -> Self {
        let mut board = Self {
            score_text: String::new(),
            record_text: String::new(),
            level_text: String::new(),
            ships_text: String::new(),
            shown: stats.clone(),
        };
        board.prep_score();
        board.prep_record();
        board.prep_level();
        board.prep_ships();
        board
    }

    /// Returns true if any text was re-prepared.
    pub fn refresh(&mut self, stats: &GameStats) -> bool {
        let mut changed = false;
        if stats.score != self.shown.score {
            self.shown.score = stats.score;
            self.prep_score();
            changed = true;
        }
        if stats.record != self.shown.record {
            self.shown.record = stats.record;
            self.prep_record();
            changed = true;
        }
        if stats.level != self.shown.level {
            self.shown.level = stats.level;
            self.prep_level();
            changed = true;
        }
        if stats.ships_left != self.shown.ships_left {
            self.shown.ships_left = stats.ships_left;
            self.prep_ships();
            changed = true;
        }
        changed
    }

    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    pub fn record_text(&self) -> &str {
        &self.record_text
    }

    pub fn level_text(&self) -> &str {
        &self.level_text
    }

    pub fn ships_text(&self) -> &str {
        &self.ships_text
    }

    fn prep_score(&mut self) {
        self.score_text = format_score(self.shown.score);
    }

    fn prep_record(&mut self) {
        self.record_text = format_score(self.shown.record);
    }

    fn prep_level(&mut self) {
        self.level_text = self.shown.level.to_string();
    }

    fn prep_ships(&mut self) {
        self.ships_text = vec![SHIP_ICON; self.shown.ships_left as usize].join(" ");
    }
}

/// Round down to the nearest ten and group thousands: 12345 -> "12,340".
pub fn format_score(value: u32) -> String {
    let digits = (value - value % 10).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
