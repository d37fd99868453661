//! Workout relay: turns chat workout logs into Notion database pages.

pub mod config;
pub mod error;
pub mod notion;
pub mod params;
pub mod server;
pub mod training;
pub mod webhook;
