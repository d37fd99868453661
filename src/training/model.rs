//! Training record types produced by the message parser.

use chrono::NaiveDate;
use serde::Serialize;

/// Number of exercise slots in a session. Slot `i` holds message line `i + 2`.
pub const SLOT_COUNT: usize = 4;

/// One exercise line as it was matched, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub name: String,
    pub weight: u32,
    pub reps: u32,
}

/// One exercise slot of a session.
///
/// `weight` and `reps` are `None` both when the line did not match and when
/// the user logged a literal zero; downstream the two cases are identical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrainingEntry {
    pub menu: String,
    pub weight: Option<u32>,
    pub reps: Option<u32>,
}

impl TrainingEntry {
    /// Build an entry, treating zero weight/reps as unset.
    pub fn new(menu: impl Into<String>, weight: Option<u32>, reps: Option<u32>) -> Self {
        Self {
            menu: menu.into(),
            weight: weight.filter(|w| *w != 0),
            reps: reps.filter(|r| *r != 0),
        }
    }

    /// Whether nothing was recorded in this slot.
    pub fn is_empty(&self) -> bool {
        self.menu.is_empty() && self.weight.is_none() && self.reps.is_none()
    }
}

impl From<Option<ParsedLine>> for TrainingEntry {
    fn from(parsed: Option<ParsedLine>) -> Self {
        match parsed {
            Some(line) => Self::new(line.name, Some(line.weight), Some(line.reps)),
            None => Self::default(),
        }
    }
}

/// The unit submitted to the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainingSession {
    /// First message line, trimmed. Empty when the message had no lines.
    pub training_type: String,
    /// Calendar date the message was processed.
    pub workout_date: NaiveDate,
    pub entries: [TrainingEntry; SLOT_COUNT],
}

impl TrainingSession {
    /// Number of slots that carry any data.
    pub fn recorded_slots(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_normalized_to_unset() {
        let entry = TrainingEntry::new("squat", Some(0), Some(0));
        assert_eq!(entry.menu, "squat");
        assert_eq!(entry.weight, None);
        assert_eq!(entry.reps, None);
    }

    #[test]
    fn nonzero_values_are_kept() {
        let entry = TrainingEntry::new("squat", Some(100), Some(5));
        assert_eq!(entry.weight, Some(100));
        assert_eq!(entry.reps, Some(5));
        assert!(!entry.is_empty());
    }

    #[test]
    fn unmatched_line_becomes_empty_entry() {
        let entry = TrainingEntry::from(None::<ParsedLine>);
        assert!(entry.is_empty());
        assert_eq!(entry.menu, "");
    }

    #[test]
    fn matched_line_with_zero_reps() {
        let entry = TrainingEntry::from(Some(ParsedLine {
            name: "plank".into(),
            weight: 0,
            reps: 0,
        }));
        assert_eq!(entry, TrainingEntry::new("plank", None, None));
        assert!(!entry.is_empty());
    }
}
