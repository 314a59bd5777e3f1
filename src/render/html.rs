//! HTML renderer
//!
//! Produces the grid markup the rasterizer captures and the complete static
//! document the server responds with. The document carries the client-side
//! wiring (drag-reorder, per-cell click, export) against the same grid
//! semantics the core implements.

use super::{Renderer, VisualGrid};
use crate::core::{Snapshot, CELL_COUNT, MARK_GLYPH};
use crate::export::EXPORT_FILENAME;

/// Visible label for an empty entry in the reorder list
const EMPTY_LABEL: &str = "(empty)";

/// HTML renderer
#[derive(Debug, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Markup for the reorder list next to the text input
    fn list_markup(&self, snapshot: &Snapshot) -> String {
        let mut out = String::from("<ul id=\"sortable-list\">\n");
        for (text, _) in snapshot.entries() {
            let label = if text.is_empty() { EMPTY_LABEL } else { text };
            out.push_str(&format!("  <li>{}</li>\n", escape(label)));
        }
        out.push_str("</ul>");
        out
    }
}

impl Renderer for HtmlRenderer {
    fn name(&self) -> &str {
        "html"
    }

    fn render_grid(&self, grid: &VisualGrid) -> String {
        let mut out = String::from("<div id=\"grid\">\n");
        for (index, cell) in grid.iter() {
            out.push_str(&format!(
                "  <div class=\"cell\" data-index=\"{}\">{}",
                index,
                escape(cell.display_text())
            ));
            if cell.marked {
                out.push_str(&format!("<span class=\"overlay\">{}</span>", MARK_GLYPH));
            }
            out.push_str("</div>\n");
        }
        out.push_str("</div>");
        out
    }

    fn render_page(&self, snapshot: &Snapshot) -> String {
        let grid = VisualGrid::derive(snapshot);
        PAGE_TEMPLATE
            .replace("{{text}}", &escape(&snapshot.items.join("\n")))
            .replace("{{list}}", &self.list_markup(snapshot))
            .replace("{{grid}}", &self.render_grid(&grid))
            .replace("{{mark}}", MARK_GLYPH)
            .replace("{{filename}}", EXPORT_FILENAME)
            .replace("{{cells}}", &CELL_COUNT.to_string())
    }
}

/// Escape text for HTML element and attribute context
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// The served document. Placeholders: {{text}} initial textarea content,
/// {{list}} reorder list, {{grid}} initial grid markup, {{mark}} the mark
/// glyph, {{filename}} the export download name, {{cells}} the cell count.
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Bingo Card Generator</title>
  <style>
    body { font-family: Arial, sans-serif; max-width: 800px; margin: auto; padding: 20px; }
    #input-area, #actions, #preview { margin-bottom: 20px; }
    #sortable-list { list-style: none; padding: 0; }
    #sortable-list li { padding: 8px; margin: 4px 0; background: #f0f0f0; border: 1px solid #ccc; cursor: grab; }
    #grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 4px; }
    .cell { position: relative; padding: 20px 0; border: 1px solid #000; text-align: center; cursor: pointer; user-select: none; min-height: 80px; }
    .overlay { position: absolute; top: 4px; right: 4px; font-size: 24px; pointer-events: none; }
    h2 { margin: 16px 0 8px; }
  </style>
</head>
<body>
  <h1>Bingo Card Generator</h1>
  <div id="input-area">
    <textarea id="text-input" rows="{{cells}}" style="width:100%;" placeholder="One cell per line">{{text}}</textarea>
    {{list}}
  </div>
  <div id="actions">
    <button id="reset">Reset</button>
    <button id="shuffle">Shuffle</button>
    <button id="download">Download (PNG)</button>
  </div>
  <div id="preview">
    <h2>Card preview</h2>
    {{grid}}
  </div>
  <script src="https://cdn.jsdelivr.net/npm/sortablejs@latest/Sortable.min.js"></script>
  <script src="https://html2canvas.hertzen.com/dist/html2canvas.min.js"></script>
  <script>
    window.addEventListener('DOMContentLoaded', () => {
      const CELLS = {{cells}};
      const MARK = '{{mark}}';
      const textInput = document.getElementById('text-input');
      const listEl = document.getElementById('sortable-list');
      const gridEl = document.getElementById('grid');

      let items = [];
      let marks = [];

      function loadFromText(raw) {
        items = raw.split('\n').slice(0, CELLS);
        while (items.length < CELLS) items.push('');
      }

      function render() {
        listEl.innerHTML = '';
        items.forEach(text => {
          const li = document.createElement('li');
          li.textContent = text || '(empty)';
          listEl.appendChild(li);
        });
        gridEl.innerHTML = '';
        items.forEach((text, idx) => {
          const cell = document.createElement('div');
          cell.className = 'cell';
          cell.dataset.index = idx;
          cell.textContent = text || ' ';
          if (marks[idx]) {
            const overlay = document.createElement('span');
            overlay.className = 'overlay';
            overlay.textContent = marks[idx];
            cell.appendChild(overlay);
          }
          cell.addEventListener('click', () => {
            marks[idx] = marks[idx] === MARK ? '' : MARK;
            render();
          });
          gridEl.appendChild(cell);
        });
      }

      textInput.addEventListener('input', () => {
        loadFromText(textInput.value);
        render();
      });

      new Sortable(listEl, {
        animation: 150,
        onEnd: evt => {
          const [item] = items.splice(evt.oldIndex, 1);
          items.splice(evt.newIndex, 0, item);
          const [mark] = marks.splice(evt.oldIndex, 1);
          marks.splice(evt.newIndex, 0, mark);
          render();
        }
      });

      document.getElementById('reset').addEventListener('click', () => {
        marks = Array(CELLS).fill('');
        render();
      });

      document.getElementById('shuffle').addEventListener('click', () => {
        for (let i = items.length - 1; i > 0; i--) {
          const j = Math.floor(Math.random() * (i + 1));
          [items[i], items[j]] = [items[j], items[i]];
          [marks[i], marks[j]] = [marks[j], marks[i]];
        }
        render();
      });

      document.getElementById('download').addEventListener('click', () => {
        html2canvas(gridEl).then(canvas => {
          const link = document.createElement('a');
          link.download = '{{filename}}';
          link.href = canvas.toDataURL('image/png');
          link.click();
        });
      });

      loadFromText(textInput.value);
      marks = Array(CELLS).fill('');
      render();
    });
  </script>
</body>
</html>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Card;

    #[test]
    fn test_grid_markup_row_major() {
        let card = Card::from_text("a\nb\nc");
        let renderer = HtmlRenderer::new();
        let markup = renderer.render_grid(&VisualGrid::derive(&card.snapshot()));
        let a = markup.find(">a<").unwrap();
        let b = markup.find(">b<").unwrap();
        let c = markup.find(">c<").unwrap();
        assert!(a < b && b < c);
        // empty cells keep their height via a no-break space
        assert!(markup.contains('\u{00A0}'));
    }

    #[test]
    fn test_grid_markup_overlay_only_when_marked() {
        let mut card = Card::from_text("a\nb\nc");
        let renderer = HtmlRenderer::new();
        let unmarked = renderer.render_grid(&VisualGrid::derive(&card.snapshot()));
        assert!(!unmarked.contains(MARK_GLYPH));

        card.toggle_mark(2);
        let marked = renderer.render_grid(&VisualGrid::derive(&card.snapshot()));
        assert!(marked.contains(MARK_GLYPH));
    }

    #[test]
    fn test_cell_text_is_escaped() {
        let card = Card::from_text("<script>alert(1)</script>");
        let renderer = HtmlRenderer::new();
        let markup = renderer.render_grid(&VisualGrid::derive(&card.snapshot()));
        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_page_is_complete_document() {
        let card = Card::from_text("1\n2\n3\n4\n5\n6\n7\n8\n9");
        let renderer = HtmlRenderer::new();
        let page = renderer.render_page(&card.snapshot());
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.ends_with("</html>"));
        assert!(page.contains("1\n2\n3\n4\n5\n6\n7\n8\n9"));
        assert!(page.contains(EXPORT_FILENAME));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn test_page_render_idempotent() {
        let card = Card::from_text("x\ny");
        let renderer = HtmlRenderer::new();
        let snap = card.snapshot();
        assert_eq!(renderer.render_page(&snap), renderer.render_page(&snap));
    }
}
