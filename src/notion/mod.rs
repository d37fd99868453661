//! Notion document-store integration.

pub mod client;
pub mod properties;

pub use client::{NotionClient, PREVIEW_CHARS, SubmissionOutcome, truncate_chars};
pub use properties::{PageCreate, PropertyMap, PropertyValue, SLOT_FIELDS, build_properties};
