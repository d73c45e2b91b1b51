//! Best score persistence
//!
//! A single integer kept in LocalStorage. Missing or malformed values read
//! as zero; the session never fails because of storage.

use crate::storage;

/// The best score ever reached on this device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BestScore {
    pub value: u64,
}

impl BestScore {
    const STORAGE_KEY: &'static str = "dinoHighScore";

    pub fn new(value: u64) -> Self {
        Self { value }
    }

    /// Parse a stored value; anything unreadable becomes zero
    pub fn parse(raw: Option<&str>) -> Self {
        let value = raw
            .map(str::trim)
            .and_then(|s| s.parse::<i64>().ok())
            .map(|v| v.max(0) as u64)
            .unwrap_or(0);
        Self { value }
    }

    /// Offer a finished session's score. Returns true if it set a new best.
    pub fn submit(&mut self, score: u64) -> bool {
        if score > self.value {
            self.value = score;
            true
        } else {
            false
        }
    }

    /// Load the best score from LocalStorage
    pub fn load() -> Self {
        let best = Self::parse(storage::read(Self::STORAGE_KEY).as_deref());
        log::info!("Loaded best score {}", best.value);
        best
    }

    /// Persist the best score
    pub fn save(&self) {
        if storage::write(Self::STORAGE_KEY, &self.value.to_string()) {
            log::info!("Best score saved ({})", self.value);
        } else {
            log::warn!("Best score {} not persisted", self.value);
        }
    }
}
