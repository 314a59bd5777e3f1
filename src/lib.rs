//! Bingo Card Kit
//!
//! A bingo card generator: nine lines of text arranged into a 3x3 grid,
//! a toggleable mark per cell, image export of the grid.
//!
//! # Overview
//!
//! The crate provides:
//! - A card state machine with synchronized (text, mark) sequences
//! - A renderer deriving the 3x3 visual grid and the served HTML page
//! - An export bridge over a pluggable rasterization capability
//! - A JSON event contract for the UI collaborators
//! - A static-content server delivering the page
//!
//! # Example
//!
//! ```
//! use bingo_card_kit::core::Card;
//! use bingo_card_kit::render::{HtmlRenderer, Renderer, VisualGrid};
//!
//! let mut card = Card::from_text("1\n2\n3\n4\n5\n6\n7\n8\n9");
//! card.toggle_mark(4);
//! card.reorder(0, 8);
//!
//! let renderer = HtmlRenderer::new();
//! let markup = renderer.render_grid(&VisualGrid::derive(&card.snapshot()));
//! assert!(markup.contains("⭕"));
//! ```

pub mod app;
pub mod core;
pub mod export;
pub mod protocol;
pub mod render;
pub mod server;

// Re-export commonly used types
pub use app::{App, ViewSink, DEFAULT_TEXT};
pub use core::{Card, Snapshot, CELL_COUNT, MARK_GLYPH};
pub use export::{Export, ExportBridge, RasterizeError, Rasterizer};
pub use protocol::{ReorderSource, UiEvent, UiReply};
pub use render::{HtmlRenderer, Renderer, VisualCell, VisualGrid};
pub use server::Server;
