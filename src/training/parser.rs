//! Line-oriented parser for free-text workout logs.
//!
//! Expected message shape:
//!
//! ```text
//! 胸の日
//! ベンチプレス　60kg　10回
//! bench 50kg 8回
//! ```
//!
//! Line 1 is the training type. Lines 2-5 are exercise lines matching
//! `<name><spaces><digits>kg<spaces><digits>回`, anchored at both ends.
//! Anything else on those lines yields an empty slot. Parsing never fails.

use chrono::NaiveDate;
use tracing::debug;

use super::model::{ParsedLine, SLOT_COUNT, TrainingEntry, TrainingSession};

/// Rep-count marker that terminates an exercise line.
const REPS_MARKER: char = '回';

/// Weight unit, matched ASCII case-insensitively.
const WEIGHT_UNIT: &str = "kg";

/// Characters accepted in a whitespace run between tokens.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{0B}' | '\u{0C}' | '\u{3000}')
}

/// Parse a whole message into a session dated `workout_date`.
pub fn parse_message(text: &str, workout_date: NaiveDate) -> TrainingSession {
    let lines = split_lines(text);

    let training_type = lines.first().map(|l| l.trim()).unwrap_or("").to_string();

    let entries: [TrainingEntry; SLOT_COUNT] = std::array::from_fn(|slot| {
        let line = lines.get(slot + 1).copied().unwrap_or("");
        TrainingEntry::from(parse_line(line))
    });

    let session = TrainingSession {
        training_type,
        workout_date,
        entries,
    };
    debug!(
        lines = lines.len(),
        recorded_slots = session.recorded_slots(),
        "Parsed workout message"
    );
    session
}

/// Split on runs of CR/LF.
///
/// A leading empty line is kept (it is line 1); empty lines elsewhere
/// collapse into the surrounding separator run.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text
        .split(['\r', '\n'])
        .enumerate()
        .filter(|(i, piece)| *i == 0 || !piece.is_empty())
        .map(|(_, piece)| piece)
        .collect();

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Match one exercise line. Returns `None` unless the whole line matches.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let rest = line.strip_suffix(REPS_MARKER)?;
    let (rest, reps) = split_trailing_number(rest)?;
    let rest = strip_trailing_spaces(rest)?;
    let rest = strip_weight_unit(rest)?;
    let (head, weight) = split_trailing_number(rest)?;

    // `head` is the name followed by at least one space; the name itself
    // must be non-empty before trimming.
    let mut chars = head.chars();
    let last = chars.next_back()?;
    if !is_space(last) || chars.as_str().is_empty() {
        return None;
    }

    Some(ParsedLine {
        name: head.trim().to_string(),
        weight,
        reps,
    })
}

/// Split off the maximal run of trailing ASCII digits and parse it.
fn split_trailing_number(s: &str) -> Option<(&str, u32)> {
    let head = s.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &s[head.len()..];
    if digits.is_empty() {
        return None;
    }
    // Overflowing runs fail the line rather than saturating.
    let value = digits.parse().ok()?;
    Some((head, value))
}

/// Strip a non-empty run of trailing spaces.
fn strip_trailing_spaces(s: &str) -> Option<&str> {
    let trimmed = s.trim_end_matches(is_space);
    (trimmed.len() < s.len()).then_some(trimmed)
}

fn strip_weight_unit(s: &str) -> Option<&str> {
    let split = s.len().checked_sub(WEIGHT_UNIT.len())?;
    if !s.is_char_boundary(split) {
        return None;
    }
    let (head, unit) = s.split_at(split);
    unit.eq_ignore_ascii_case(WEIGHT_UNIT).then_some(head)
}
