//! Workout message parsing.

pub mod model;
pub mod parser;

pub use model::{ParsedLine, SLOT_COUNT, TrainingEntry, TrainingSession};
pub use parser::{parse_line, parse_message, split_lines};

use chrono::NaiveDate;

/// Today's date in the host's local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
