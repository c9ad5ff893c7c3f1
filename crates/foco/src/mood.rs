//! Mood selection and the bounded mood log
//!
//! The log keeps the most recent entries, newest first. Inserting past
//! capacity evicts the oldest entry; nothing is ever deleted otherwise.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};
use std::fmt::Write;

/// Maximum number of entries kept in the log
pub const LOG_CAPACITY: usize = 20;

/// Time format used when the configured one cannot be rendered
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// The fixed set of moods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodKey {
    Great,
    Good,
    Neutral,
    Tired,
    Stressed,
}

impl MoodKey {
    /// All moods in display order
    pub const ALL: [MoodKey; 5] = [
        MoodKey::Great,
        MoodKey::Good,
        MoodKey::Neutral,
        MoodKey::Tired,
        MoodKey::Stressed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodKey::Great => "great",
            MoodKey::Good => "good",
            MoodKey::Neutral => "neutral",
            MoodKey::Tired => "tired",
            MoodKey::Stressed => "stressed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "great" => Some(MoodKey::Great),
            "good" => Some(MoodKey::Good),
            "neutral" => Some(MoodKey::Neutral),
            "tired" => Some(MoodKey::Tired),
            "stressed" => Some(MoodKey::Stressed),
            _ => None,
        }
    }

    /// Built-in label
    pub fn default_label(&self) -> &'static str {
        match self {
            MoodKey::Great => "😄 Great",
            MoodKey::Good => "🙂 Good",
            MoodKey::Neutral => "😐 Neutral",
            MoodKey::Tired => "😕 Tired",
            MoodKey::Stressed => "😫 Stressed",
        }
    }

    /// Position in [`MoodKey::ALL`]
    pub fn index(&self) -> usize {
        match self {
            MoodKey::Great => 0,
            MoodKey::Good => 1,
            MoodKey::Neutral => 2,
            MoodKey::Tired => 3,
            MoodKey::Stressed => 4,
        }
    }
}

/// One selectable mood as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodOption {
    pub key: MoodKey,
    pub label: String,
}

/// Key to label mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodTable {
    options: Vec<MoodOption>,
}

impl Default for MoodTable {
    fn default() -> Self {
        Self {
            options: MoodKey::ALL
                .iter()
                .map(|key| MoodOption {
                    key: *key,
                    label: key.default_label().to_string(),
                })
                .collect(),
        }
    }
}

impl MoodTable {
    /// An explicit table; moods missing from it fall back to their key
    pub fn from_options(options: Vec<MoodOption>) -> Self {
        Self { options }
    }

    /// Built-in labels with config overrides applied
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Self {
        let mut table = Self::default();
        for (name, label) in overrides {
            match MoodKey::from_str(name) {
                Some(key) => {
                    if let Some(option) = table.options.iter_mut().find(|o| o.key == key) {
                        option.label = label.clone();
                    }
                }
                None => tracing::warn!(key = %name, "ignoring label for unknown mood"),
            }
        }
        table
    }

    pub fn options(&self) -> &[MoodOption] {
        &self.options
    }

    pub fn label_for(&self, key: MoodKey) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.key == key)
            .map(|o| o.label.as_str())
    }
}

/// An immutable record of a registered mood
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodEntry {
    /// Milliseconds since the epoch at creation, bumped to stay unique
    pub id: i64,
    pub mood: MoodKey,
    /// Label as it was when the entry was created
    pub label: String,
    /// Formatted wall-clock time of registration
    pub time: String,
    pub recorded_at: DateTime<Local>,
}

/// Bounded, newest-first list of entries
#[derive(Debug, Clone)]
pub struct MoodLog {
    entries: VecDeque<MoodEntry>,
    capacity: usize,
    last_id: i64,
}

impl Default for MoodLog {
    fn default() -> Self {
        Self::with_capacity(LOG_CAPACITY)
    }
}

impl MoodLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            last_id: i64::MIN,
        }
    }

    /// Allocate an id no smaller than `millis` and larger than any before it
    pub fn next_id(&mut self, millis: i64) -> i64 {
        let id = millis.max(self.last_id.saturating_add(1));
        self.last_id = id;
        id
    }

    /// Insert at the front, evicting the oldest entry when over capacity
    pub fn push(&mut self, entry: MoodEntry) -> Option<MoodEntry> {
        self.entries.push_front(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Newest entry
    pub fn latest(&self) -> Option<&MoodEntry> {
        self.entries.front()
    }

    /// Entries newest first
    pub fn iter(&self) -> impl Iterator<Item = &MoodEntry> {
        self.entries.iter()
    }
}

/// The mood tab: options, the pending selection and the log
#[derive(Debug, Clone)]
pub struct MoodBoard {
    table: MoodTable,
    time_format: String,
    pending: Option<MoodKey>,
    log: MoodLog,
}

impl Default for MoodBoard {
    fn default() -> Self {
        Self::new(MoodTable::default(), DEFAULT_TIME_FORMAT)
    }
}

impl MoodBoard {
    pub fn new(table: MoodTable, time_format: impl Into<String>) -> Self {
        Self {
            table,
            time_format: time_format.into(),
            pending: None,
            log: MoodLog::default(),
        }
    }

    pub fn options(&self) -> &[MoodOption] {
        self.table.options()
    }

    pub fn pending(&self) -> Option<MoodKey> {
        self.pending
    }

    pub fn log(&self) -> &MoodLog {
        &self.log
    }

    pub fn select(&mut self, key: MoodKey) {
        self.pending = Some(key);
    }

    /// Select by key name; unknown names are ignored. Returns whether it took.
    pub fn select_by_name(&mut self, name: &str) -> bool {
        match MoodKey::from_str(name) {
            Some(key) => {
                self.select(key);
                true
            }
            None => {
                tracing::debug!(name, "ignoring unknown mood");
                false
            }
        }
    }

    /// Move the selection forward through the options, wrapping around
    pub fn select_next(&mut self) {
        let next = match self.pending {
            Some(key) => MoodKey::ALL[(key.index() + 1) % MoodKey::ALL.len()],
            None => MoodKey::ALL[0],
        };
        self.select(next);
    }

    /// Move the selection backward through the options, wrapping around
    pub fn select_prev(&mut self) {
        let len = MoodKey::ALL.len();
        let prev = match self.pending {
            Some(key) => MoodKey::ALL[(key.index() + len - 1) % len],
            None => MoodKey::ALL[len - 1],
        };
        self.select(prev);
    }

    /// Turn the pending selection into a log entry.
    ///
    /// Without a selection this does nothing and returns `None`.
    pub fn register(&mut self, now: DateTime<Local>) -> Option<&MoodEntry> {
        let mood = self.pending.take()?;

        let label = self
            .table
            .label_for(mood)
            .unwrap_or(mood.as_str())
            .to_string();

        let entry = MoodEntry {
            id: self.log.next_id(now.timestamp_millis()),
            mood,
            label,
            time: self.format_time(&now),
            recorded_at: now,
        };

        if let Some(evicted) = self.log.push(entry) {
            tracing::trace!(id = evicted.id, "evicted oldest mood entry");
        }
        self.log.latest()
    }

    fn format_time(&self, now: &DateTime<Local>) -> String {
        let mut time = String::new();
        if write!(time, "{}", now.format(&self.time_format)).is_err() {
            tracing::debug!(format = %self.time_format, "bad time format, using default");
            time = now.format(DEFAULT_TIME_FORMAT).to_string();
        }
        time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 19, h, m, 0).unwrap()
    }

    #[test]
    fn test_key_roundtrip() {
        for key in MoodKey::ALL {
            assert_eq!(MoodKey::from_str(key.as_str()), Some(key));
            assert_eq!(MoodKey::ALL[key.index()], key);
        }
        assert_eq!(MoodKey::from_str("Tired"), Some(MoodKey::Tired));
        assert_eq!(MoodKey::from_str("hangry"), None);
    }

    #[test]
    fn test_register_scenario() {
        let mut board = MoodBoard::default();
        assert!(board.select_by_name("tired"));
        assert_eq!(board.pending(), Some(MoodKey::Tired));

        let entry = board.register(at(14, 5)).cloned().unwrap();
        assert_eq!(entry.mood, MoodKey::Tired);
        assert_eq!(entry.label, "😕 Tired");
        assert_eq!(entry.time, "14:05");
        assert_eq!(board.log().latest(), Some(&entry));
        assert_eq!(board.pending(), None);
    }

    #[test]
    fn test_register_without_selection_is_noop() {
        let mut board = MoodBoard::default();
        assert!(board.register(at(9, 0)).is_none());
        assert!(board.log().is_empty());

        board.select(MoodKey::Good);
        board.register(at(9, 0));
        assert!(board.register(at(9, 1)).is_none());
        assert_eq!(board.log().len(), 1);
    }

    #[test]
    fn test_unknown_name_is_ignored() {
        let mut board = MoodBoard::default();
        board.select(MoodKey::Great);
        assert!(!board.select_by_name("ecstatic"));
        assert_eq!(board.pending(), Some(MoodKey::Great));
    }

    #[test]
    fn test_log_keeps_most_recent_twenty() {
        let mut board = MoodBoard::default();
        let start = at(8, 0);
        for i in 0..25 {
            board.select(MoodKey::ALL[i % 5]);
            board.register(start + Duration::minutes(i as i64));
        }

        let log = board.log();
        assert_eq!(log.len(), LOG_CAPACITY);
        let times: Vec<&str> = log.iter().map(|e| e.time.as_str()).collect();
        assert_eq!(times.first(), Some(&"08:24"));
        assert_eq!(times.last(), Some(&"08:05"));

        let ids: Vec<i64> = log.iter().map(|e| e.id).collect();
        assert!(ids.windows(2).all(|w| w[0] > w[1]), "newest first");
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut board = MoodBoard::default();
        let now = at(10, 0);
        let mut ids = Vec::new();
        for _ in 0..3 {
            board.select(MoodKey::Neutral);
            ids.push(board.register(now).unwrap().id);
        }
        assert_eq!(ids[0], now.timestamp_millis());
        assert_eq!(ids[1], ids[0] + 1);
        assert_eq!(ids[2], ids[0] + 2);
    }

    #[test]
    fn test_label_falls_back_to_key() {
        let table = MoodTable::from_options(vec![MoodOption {
            key: MoodKey::Great,
            label: "yay".to_string(),
        }]);
        let mut board = MoodBoard::new(table, DEFAULT_TIME_FORMAT);

        board.select(MoodKey::Stressed);
        assert_eq!(board.register(at(11, 0)).unwrap().label, "stressed");

        board.select(MoodKey::Great);
        assert_eq!(board.register(at(11, 1)).unwrap().label, "yay");
    }

    #[test]
    fn test_overrides_apply_and_skip_unknown() {
        let mut overrides = BTreeMap::new();
        overrides.insert("tired".to_string(), "sleepy".to_string());
        overrides.insert("bored".to_string(), "meh".to_string());

        let table = MoodTable::with_overrides(&overrides);
        assert_eq!(table.options().len(), 5);
        assert_eq!(table.label_for(MoodKey::Tired), Some("sleepy"));
        assert_eq!(table.label_for(MoodKey::Great), Some("😄 Great"));
    }

    #[test]
    fn test_label_is_bound_at_creation() {
        let mut board = MoodBoard::default();
        board.select(MoodKey::Good);
        board.register(at(12, 0));

        board.table = MoodTable::from_options(vec![MoodOption {
            key: MoodKey::Good,
            label: "renamed".to_string(),
        }]);
        assert_eq!(board.log().latest().unwrap().label, "🙂 Good");
    }

    #[test]
    fn test_selection_cycles() {
        let mut board = MoodBoard::default();
        board.select_next();
        assert_eq!(board.pending(), Some(MoodKey::Great));
        board.select_prev();
        assert_eq!(board.pending(), Some(MoodKey::Stressed));
        board.select_next();
        assert_eq!(board.pending(), Some(MoodKey::Great));

        let mut board = MoodBoard::default();
        board.select_prev();
        assert_eq!(board.pending(), Some(MoodKey::Stressed));
    }

    #[test]
    fn test_custom_time_format() {
        let mut board = MoodBoard::new(MoodTable::default(), "%I:%M %p");
        board.select(MoodKey::Great);
        assert_eq!(board.register(at(15, 30)).unwrap().time, "03:30 PM");
    }

    #[test]
    fn test_invalid_time_format_falls_back() {
        let mut board = MoodBoard::new(MoodTable::default(), "%Q");
        board.select(MoodKey::Great);
        assert_eq!(board.register(at(7, 45)).unwrap().time, "07:45");
    }

    #[test]
    fn test_log_push_reports_eviction() {
        let mut log = MoodLog::with_capacity(2);
        let entry = |id| MoodEntry {
            id,
            mood: MoodKey::Good,
            label: "g".to_string(),
            time: "00:00".to_string(),
            recorded_at: at(0, 0),
        };
        assert!(log.push(entry(1)).is_none());
        assert!(log.push(entry(2)).is_none());
        assert_eq!(log.push(entry(3)).map(|e| e.id), Some(1));
        assert_eq!(log.capacity(), 2);
    }
}
