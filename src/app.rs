//! Card app - the synchronous mutate-then-redraw cycle
//!
//! The app owns the card and republishes a freshly rendered grid to its view
//! sink after every mutating event. Everything runs to completion on the
//! calling thread, so a mutation and its redraw are atomic from the user's
//! perspective: no intermediate frame is ever observable.

use log::debug;

use crate::core::Card;
use crate::export::{ExportBridge, Rasterizer};
use crate::protocol::{ReorderSource, UiEvent, UiReply};
use crate::render::{Renderer, VisualGrid};

/// Initial textarea content served with the page
pub const DEFAULT_TEXT: &str = "1\n2\n3\n4\n5\n6\n7\n8\n9";

/// Observer receiving each rendered grid
pub trait ViewSink {
    /// Present a freshly rendered grid region
    fn present(&mut self, markup: &str);
}

/// The composed UI: card state, renderer, export bridge, view sink.
///
/// There is exactly one implicit state - "the view reflects the current
/// snapshot" - re-entered after every mutating event.
pub struct App<R: Renderer, S: ViewSink, Z: Rasterizer> {
    card: Card,
    renderer: R,
    sink: S,
    rasterizer: Z,
    export: ExportBridge,
}

impl<R: Renderer, S: ViewSink, Z: Rasterizer> App<R, S, Z> {
    /// Create an app with the default nine-line text loaded, and render the
    /// initial frame
    pub fn new(renderer: R, sink: S, rasterizer: Z) -> Self {
        let mut app = Self {
            card: Card::from_text(DEFAULT_TEXT),
            renderer,
            sink,
            rasterizer,
            export: ExportBridge::new(),
        };
        app.redraw();
        app
    }

    /// The current card state
    pub fn card(&self) -> &Card {
        &self.card
    }

    /// Apply one UI event: mutate, then redraw.
    ///
    /// Export is the exception - it mutates nothing and captures whatever
    /// the grid currently shows.
    pub fn apply(&mut self, event: UiEvent) -> UiReply {
        debug!("UI event: {:?}", event);
        match event {
            UiEvent::LoadText { raw } => {
                self.card.load_from_text(&raw);
                self.redraw();
                UiReply::Rendered
            }
            UiEvent::EditText { raw } => {
                self.card.replace_items(&raw);
                self.redraw();
                UiReply::Rendered
            }
            UiEvent::Reorder { from, to } => {
                self.card.reorder(from, to);
                self.redraw();
                UiReply::Rendered
            }
            UiEvent::ToggleMark { index } => {
                self.card.toggle_mark(index);
                self.redraw();
                UiReply::Rendered
            }
            UiEvent::ResetMarks => {
                self.card.reset_marks();
                self.redraw();
                UiReply::Rendered
            }
            UiEvent::Shuffle => {
                self.card.shuffle();
                self.redraw();
                UiReply::Rendered
            }
            UiEvent::Export => {
                let region = VisualGrid::derive(&self.card.snapshot());
                match self.export.export_image(&self.rasterizer, &region) {
                    Ok(export) => UiReply::Exported {
                        filename: export.filename,
                        size: export.bytes.len(),
                    },
                    Err(e) => UiReply::Error {
                        message: e.to_string(),
                    },
                }
            }
        }
    }

    /// Drain all pending drag-end events from a reorder source, in order
    pub fn drain_reorders<T: ReorderSource>(&mut self, source: &mut T) {
        while let Some((from, to)) = source.next_reorder() {
            self.apply(UiEvent::Reorder { from, to });
        }
    }

    fn redraw(&mut self) {
        let grid = VisualGrid::derive(&self.card.snapshot());
        let markup = self.renderer.render_grid(&grid);
        self.sink.present(&markup);
    }
}
