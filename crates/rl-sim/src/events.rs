//! Operator action log.
//!
//! One row per on/off transition of a tracked control, in call order,
//! plus a terminal row at shutdown. The log is append-only and read once
//! at report export.

use chrono::NaiveTime;

/// Every logged action completes by construction; the column exists for
/// report-format compatibility.
pub const STATUS_COMPLETED: &str = "Completed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLogEntry {
    pub timestamp: NaiveTime,
    pub action: String,
    pub status: &'static str,
}

#[derive(Debug, Default, Clone)]
pub struct ActionLog {
    entries: Vec<ActionLogEntry>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edge: one row on false->true (`on_text`) or true->false
    /// (`off_text`), nothing when the value is unchanged.
    pub fn record_transition(
        &mut self,
        now: NaiveTime,
        current: bool,
        previous: bool,
        on_text: &str,
        off_text: &str,
    ) {
        let action = match (previous, current) {
            (false, true) => on_text,
            (true, false) => off_text,
            _ => return,
        };
        self.append(now, action);
    }

    /// Append a row unconditionally (terminal shutdown entry).
    pub fn append(&mut self, now: NaiveTime, action: &str) {
        self.entries.push(ActionLogEntry {
            timestamp: now,
            action: action.to_string(),
            status: STATUS_COMPLETED,
        });
    }

    pub fn entries(&self) -> &[ActionLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
