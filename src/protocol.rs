//! UI event contract
//!
//! JSON-tagged events emitted by the UI collaborators - the text input, the
//! drag-reorder source, the per-cell click binding and the action buttons -
//! and the replies the app produces after each mutate-then-redraw cycle.
//!
//! Example:
//! ```json
//! {"event": "reorder", "from": 0, "to": 8}
//! ```

use serde::{Deserialize, Serialize};

/// Events from UI collaborators to the card app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    /// Initial load: replace items from multi-line text and clear all marks
    LoadText { raw: String },

    /// Text-input edit: replace items, marks stay in place
    EditText { raw: String },

    /// Drag-end from the reorder source: move the entry at `from` to `to`
    Reorder { from: usize, to: usize },

    /// Click on the cell currently rendered at `index`
    ToggleMark { index: usize },

    /// Reset button: clear every mark
    ResetMarks,

    /// Shuffle button: uniform random permutation of the 9 positions
    Shuffle,

    /// Download button: capture the rendered grid and name the download
    Export,
}

/// Replies from the app after processing an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiReply {
    /// State mutated and the grid was re-rendered
    Rendered,

    /// Export completed
    Exported { filename: String, size: usize },

    /// Error message (export failure passes through here)
    Error { message: String },
}

/// Narrow interface over the drag-reorder collaborator.
///
/// Implementations emit `(from, to)` index pairs at drag-end; indices are
/// always in range by contract.
pub trait ReorderSource {
    /// Next completed drag, if any
    fn next_reorder(&mut self) -> Option<(usize, usize)>;
}

impl<I: Iterator<Item = (usize, usize)>> ReorderSource for I {
    fn next_reorder(&mut self) -> Option<(usize, usize)> {
        self.next()
    }
}

/// Parse a UI event from JSON
pub fn parse_event(json: &str) -> Result<UiEvent, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serialize a reply to JSON
pub fn serialize_reply(reply: &UiReply) -> String {
    serde_json::to_string(reply)
        .unwrap_or_else(|_| r#"{"type":"error","message":"Serialization failed"}"#.to_string())
}
