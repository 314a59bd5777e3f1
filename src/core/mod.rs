//! Core card state
//!
//! - Card: the 9-entry (text, mark) state machine
//! - Snapshot: aligned read-only view for renderers

pub mod card;

pub use card::{Card, Snapshot, CELL_COUNT, GRID_COLS, MARK_GLYPH};
