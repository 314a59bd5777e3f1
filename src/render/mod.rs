//! Renderer module
//!
//! Renderers derive a visual 3x3 grid from a card snapshot and turn it into
//! output text. Rendering is a pure function of the snapshot: rendering the
//! same snapshot twice produces identical output.

pub mod html;

pub use html::HtmlRenderer;

use crate::core::{Snapshot, CELL_COUNT, GRID_COLS};

/// One visual cell of the rendered grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualCell {
    /// Cell text as typed (possibly empty)
    pub text: String,
    /// Whether the mark overlay is shown in the cell corner
    pub marked: bool,
}

impl VisualCell {
    /// Text to display: a no-break space keeps an empty cell's height
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            "\u{00A0}"
        } else {
            &self.text
        }
    }
}

/// The derived 3x3 visual layout, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualGrid {
    cells: Vec<VisualCell>,
}

impl VisualGrid {
    /// Derive the visual grid from a snapshot.
    ///
    /// Index 0..2 is row 1, 3..5 row 2, 6..8 row 3. Deterministic: equal
    /// snapshots yield equal grids.
    pub fn derive(snapshot: &Snapshot) -> Self {
        let cells = snapshot
            .entries()
            .map(|(text, mark)| VisualCell {
                text: text.to_string(),
                marked: !mark.is_empty(),
            })
            .collect();
        Self { cells }
    }

    /// Cell at its current grid index
    pub fn cell(&self, index: usize) -> Option<&VisualCell> {
        self.cells.get(index)
    }

    /// Iterate cells with their grid indices, in sequence order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &VisualCell)> {
        self.cells.iter().enumerate()
    }

    /// Iterate the grid row by row
    pub fn rows(&self) -> impl Iterator<Item = &[VisualCell]> {
        self.cells.chunks(GRID_COLS)
    }

    /// Number of cells (always [`CELL_COUNT`])
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Trait for renderers
pub trait Renderer {
    /// Renderer name
    fn name(&self) -> &str;

    /// Render the grid region only (the part the rasterizer captures)
    fn render_grid(&self, grid: &VisualGrid) -> String;

    /// Render the complete document served to the client
    fn render_page(&self, snapshot: &Snapshot) -> String {
        self.render_grid(&VisualGrid::derive(snapshot))
    }
}

// Compile-time sanity: the grid is exactly 3 columns of 3 rows
const _: () = assert!(CELL_COUNT == GRID_COLS * GRID_COLS);
