//! Mapping from a training session to Notion page properties.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::training::{SLOT_COUNT, TrainingEntry, TrainingSession};

pub const TRAINING_TYPE_FIELD: &str = "TrainingType";
pub const WORKOUT_DATE_FIELD: &str = "WorkoutDate";

/// Database column names for one exercise slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotFields {
    pub menu: &'static str,
    pub weight: &'static str,
    pub reps: &'static str,
}

/// Column names per slot, in slot order.
pub const SLOT_FIELDS: [SlotFields; SLOT_COUNT] = [
    SlotFields {
        menu: "TrainingMenu1",
        weight: "Weight1",
        reps: "Reps1",
    },
    SlotFields {
        menu: "TrainingMenu2",
        weight: "Weight2",
        reps: "Reps2",
    },
    SlotFields {
        menu: "TrainingMenu3",
        weight: "Weight3",
        reps: "Reps3",
    },
    SlotFields {
        menu: "TrainingMenu4",
        weight: "Weight4",
        reps: "Reps4",
    },
];

/// A rich-text run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichText {
    pub text: TextContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContent {
    pub content: String,
}

impl RichText {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            text: TextContent {
                content: content.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateValue {
    pub start: NaiveDate,
}

/// One typed property value, serialized in Notion's tagged form
/// (`{"number": 50}`, `{"number": null}`, `{"date": {"start": ...}}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    Title(Vec<RichText>),
    RichText(Vec<RichText>),
    /// `None` is sent as an explicit null, never omitted.
    Number(Option<u32>),
    Date(DateValue),
}

pub type PropertyMap = BTreeMap<&'static str, PropertyValue>;

/// Build the full property map for a session.
pub fn build_properties(session: &TrainingSession) -> PropertyMap {
    let mut properties = PropertyMap::new();
    properties.insert(
        TRAINING_TYPE_FIELD,
        PropertyValue::Title(vec![RichText::plain(&session.training_type)]),
    );
    properties.insert(
        WORKOUT_DATE_FIELD,
        PropertyValue::Date(DateValue {
            start: session.workout_date,
        }),
    );

    for (fields, entry) in SLOT_FIELDS.iter().zip(&session.entries) {
        insert_slot(&mut properties, fields, entry);
    }
    properties
}

fn insert_slot(properties: &mut PropertyMap, fields: &SlotFields, entry: &TrainingEntry) {
    properties.insert(
        fields.menu,
        PropertyValue::RichText(vec![RichText::plain(&entry.menu)]),
    );
    // Zero is folded into unset here as well as at parse time.
    properties.insert(
        fields.weight,
        PropertyValue::Number(entry.weight.filter(|w| *w != 0)),
    );
    properties.insert(
        fields.reps,
        PropertyValue::Number(entry.reps.filter(|r| *r != 0)),
    );
}

#[derive(Debug, Serialize)]
pub struct Parent<'a> {
    pub database_id: &'a str,
}

/// Body of `POST /v1/pages`.
#[derive(Debug, Serialize)]
pub struct PageCreate<'a> {
    pub parent: Parent<'a>,
    pub properties: PropertyMap,
}

impl<'a> PageCreate<'a> {
    pub fn new(database_id: &'a str, session: &TrainingSession) -> Self {
        Self {
            parent: Parent { database_id },
            properties: build_properties(session),
        }
    }
}
