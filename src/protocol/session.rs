use super::settings::Settings;
use crate::game::board::Board;
use crate::game::error::Error;
use std::time::Duration;
use std::time::Instant;

/// process-lifetime state accumulated from engine events. created once at
/// startup, mutated only by the decoder, read by the move policy.
#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    round: i64,
    board: Board,
    deadline: Option<Instant>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            round: -1,
            board: Board::default(),
            deadline: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn round(&self) -> i64 {
        self.round
    }
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn configure(&mut self, key: &str, raw: &str) -> Result<(), Error> {
        self.settings.set(key, raw)
    }

    pub fn advance(&mut self, round: i64) {
        self.round = round;
    }

    /// replace the canonical board with a freshly parsed field. the prior
    /// board survives any parse failure.
    pub fn refresh(&mut self, field: &str) -> Result<(), Error> {
        self.board = Board::parse(field, self.settings.rows(), self.settings.cols())?;
        Ok(())
    }

    /// start the clock for one action event.
    pub fn arm(&mut self, millis: u64) {
        self.deadline = Some(Instant::now() + Duration::from_millis(millis));
    }

    /// remaining budget for the current turn, zero once the deadline has
    /// passed, None outside any action event.
    pub fn time_left(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }
}
