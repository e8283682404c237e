use crate::game::error::Error;
use crate::Player;
use crate::DEFAULT_COLS;
use crate::DEFAULT_ROWS;
use std::collections::HashMap;

/// keys the engine documents as integers; anything else is opaque text.
const NUMERIC_KEYS: [&str; 5] = [
    "timebank",
    "time_per_move",
    "your_botid",
    "field_columns",
    "field_rows",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Text(String),
}

/// engine configuration, populated one `settings` line at a time.
/// keys are never removed, only written and read.
#[derive(Debug, Clone, Default)]
pub struct Settings(HashMap<String, Value>);

impl Settings {
    pub fn set(&mut self, key: &str, raw: &str) -> Result<(), Error> {
        let value = if NUMERIC_KEYS.contains(&key) {
            let n = raw
                .parse::<i64>()
                .map_err(|_| Error::MalformedField(format!("bad value for {}: {:?}", key, raw)))?;
            Value::Int(n)
        } else {
            Value::Text(raw.to_string())
        };
        self.0.insert(key.to_string(), value);
        Ok(())
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        match self.0.get(key) {
            Some(Value::Int(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(Value::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// our id in board cells. the engine hands this out before the first
    /// round; default to 1 until it does.
    pub fn bot_id(&self) -> Player {
        self.int("your_botid").unwrap_or(1).clamp(1, u8::MAX as i64) as Player
    }

    pub fn rows(&self) -> usize {
        self.int("field_rows")
            .filter(|n| *n > 0)
            .map(|n| n as usize)
            .unwrap_or(DEFAULT_ROWS)
    }

    pub fn cols(&self) -> usize {
        self.int("field_columns")
            .filter(|n| *n > 0)
            .map(|n| n as usize)
            .unwrap_or(DEFAULT_COLS)
    }

    pub fn timebank(&self) -> Option<i64> {
        self.int("timebank")
    }

    pub fn time_per_move(&self) -> Option<i64> {
        self.int("time_per_move")
    }
}
