//! Mood tracking types for `/api/mood` and `/api/mood/history`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Self-reported mood on a 1-10 scale. Out-of-range values clamp, so a
/// `MoodLevel` is always valid to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct MoodLevel(u8);

impl MoodLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    /// Slider midpoint the form resets to after a successful submission.
    pub const DEFAULT: MoodLevel = MoodLevel(5);

    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn raised(self) -> Self {
        Self::new(self.0 as i64 + 1)
    }

    pub fn lowered(self) -> Self {
        Self::new(self.0 as i64 - 1)
    }

    pub fn emoji(self) -> &'static str {
        const EMOJIS: [&str; 5] = ["😢", "😔", "😐", "😊", "😄"];
        EMOJIS[((self.0 - 1) / 2) as usize]
    }

    pub fn band(self) -> MoodBand {
        match self.0 {
            0..=2 => MoodBand::VeryLow,
            3..=4 => MoodBand::Low,
            5..=6 => MoodBand::Neutral,
            7..=8 => MoodBand::Good,
            _ => MoodBand::Great,
        }
    }
}

impl Default for MoodLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i64> for MoodLevel {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<MoodLevel> for i64 {
    fn from(level: MoodLevel) -> Self {
        level.0 as i64
    }
}

impl std::fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

/// Colour band a level falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodBand {
    VeryLow,
    Low,
    Neutral,
    Good,
    Great,
}

/// A stored mood entry as returned by the history endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoodEntry {
    #[serde(default)]
    pub id: String,
    pub mood_level: MoodLevel,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl MoodEntry {
    /// Non-empty notes, if any.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.trim().is_empty())
    }

    /// Parse the timestamp. The backend emits RFC 3339 for fresh entries and
    /// naive UTC datetimes for entries read back from storage.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.as_deref()?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// Envelope for `GET /api/mood/history`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoodHistoryResponse {
    #[serde(default)]
    pub mood_entries: Vec<MoodEntry>,
}

/// Request body for `POST /api/mood`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodSubmission {
    pub mood_level: MoodLevel,
    pub notes: String,
    pub activities: Vec<String>,
}

impl MoodSubmission {
    pub fn new(mood_level: MoodLevel, notes: impl Into<String>) -> Self {
        Self {
            mood_level,
            notes: notes.into(),
            activities: Vec::new(),
        }
    }
}
