//! Bingo card state - the synchronized dual sequences
//!
//! A card is two index-aligned sequences of length 9: the cell text and the
//! cell mark. Every mutation keeps them aligned, so a (text, mark) pair
//! moves through the grid as a unit.

use rand::Rng;

/// Number of cells on a card
pub const CELL_COUNT: usize = 9;

/// Grid columns (cards are 3x3, row-major)
pub const GRID_COLS: usize = 3;

/// The glyph overlaid on a marked cell
pub const MARK_GLYPH: &str = "⭕";

/// Read-only aligned view of a card, consumed by renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub items: Vec<String>,
    pub marks: Vec<String>,
}

impl Snapshot {
    /// Iterate (text, mark) pairs in sequence order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items
            .iter()
            .zip(self.marks.iter())
            .map(|(t, m)| (t.as_str(), m.as_str()))
    }
}

/// The card state machine
///
/// Invariant: `items.len() == marks.len() == CELL_COUNT` after every
/// mutation. Callers are responsible for re-rendering after a mutating call.
pub struct Card {
    /// Cell text, possibly empty, index 0..8
    items: Vec<String>,
    /// Cell marks, empty string = unmarked, MARK_GLYPH = marked
    marks: Vec<String>,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            items: vec![String::new(); CELL_COUNT],
            marks: vec![String::new(); CELL_COUNT],
        }
    }
}

impl Card {
    /// Create an empty card (9 empty cells, no marks)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a card from multi-line text (see [`Card::load_from_text`])
    pub fn from_text(raw: &str) -> Self {
        let mut card = Self::new();
        card.load_from_text(raw);
        card
    }

    /// Split `raw` on newlines into exactly 9 items and clear all marks.
    ///
    /// Takes at most the first 9 lines, pads with empty strings, truncates
    /// silently past 9. Always succeeds, even on empty input.
    pub fn load_from_text(&mut self, raw: &str) {
        self.items = split_lines(raw);
        self.marks = vec![String::new(); CELL_COUNT];
    }

    /// Replace the items from edited text, leaving marks in place.
    ///
    /// This is the text-input edit path: marks are positional, not tied to
    /// content, so an edit does not re-pair or clear them.
    pub fn replace_items(&mut self, raw: &str) {
        self.items = split_lines(raw);
    }

    /// Move the entry at `from` to `to`, carrying its mark along.
    ///
    /// No-op when `from == to` or either index is out of range (out-of-range
    /// indices are a caller contract violation; the drag collaborator only
    /// ever supplies valid ones).
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from == to || from >= CELL_COUNT || to >= CELL_COUNT {
            return;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        let mark = self.marks.remove(from);
        self.marks.insert(to, mark);
    }

    /// Flip the mark at `index` between empty and the mark glyph
    pub fn toggle_mark(&mut self, index: usize) {
        if let Some(mark) = self.marks.get_mut(index) {
            if mark.is_empty() {
                *mark = MARK_GLYPH.to_string();
            } else {
                mark.clear();
            }
        }
    }

    /// Check whether the cell at `index` is marked
    pub fn is_marked(&self, index: usize) -> bool {
        self.marks.get(index).is_some_and(|m| !m.is_empty())
    }

    /// Clear every mark, leaving items untouched
    pub fn reset_marks(&mut self) {
        for mark in &mut self.marks {
            mark.clear();
        }
    }

    /// Apply a uniform random permutation to the 9 positions.
    ///
    /// Each (text, mark) pair moves as a unit.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Fisher-Yates with a caller-supplied RNG, for deterministic tests.
    ///
    /// Walks from the last index down to 1, swapping position `i` with a
    /// uniform `j` in `[0, i]`, so each of the 9! orderings is equally
    /// likely.
    pub fn shuffle_with<R: Rng>(&mut self, rng: &mut R) {
        for i in (1..CELL_COUNT).rev() {
            let j = rng.gen_range(0..=i);
            self.items.swap(i, j);
            self.marks.swap(i, j);
        }
    }

    /// Current aligned (items, marks) pair for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            items: self.items.clone(),
            marks: self.marks.clone(),
        }
    }
}

/// Split raw text on newlines into exactly CELL_COUNT entries
fn split_lines(raw: &str) -> Vec<String> {
    let mut lines: Vec<String> = raw
        .split('\n')
        .take(CELL_COUNT)
        .map(String::from)
        .collect();
    lines.resize(CELL_COUNT, String::new());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn digits_card() -> Card {
        Card::from_text("1\n2\n3\n4\n5\n6\n7\n8\n9")
    }

    #[test]
    fn test_load_pads_short_input() {
        let card = Card::from_text("a\nb");
        let snap = card.snapshot();
        assert_eq!(snap.items, ["a", "b", "", "", "", "", "", "", ""]);
        assert_eq!(snap.marks, vec![String::new(); CELL_COUNT]);
    }

    #[test]
    fn test_load_always_yields_nine() {
        for raw in ["", "x", "1\n2\n3", "1\n2\n3\n4\n5\n6\n7\n8\n9"] {
            let card = Card::from_text(raw);
            assert_eq!(card.snapshot().items.len(), CELL_COUNT);
            assert_eq!(card.snapshot().marks.len(), CELL_COUNT);
        }
        // 50 lines truncate silently to the first 9
        let long = (1..=50).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        let card = Card::from_text(&long);
        let snap = card.snapshot();
        assert_eq!(snap.items.len(), CELL_COUNT);
        assert_eq!(snap.items[8], "9");
    }

    #[test]
    fn test_load_resets_marks() {
        let mut card = digits_card();
        card.toggle_mark(3);
        card.load_from_text("a\nb\nc");
        assert!(!card.is_marked(3));
    }

    #[test]
    fn test_replace_items_keeps_marks() {
        let mut card = digits_card();
        card.toggle_mark(4);
        card.replace_items("a\nb\nc\nd\ne\nf\ng\nh\ni");
        let snap = card.snapshot();
        assert_eq!(snap.items[4], "e");
        assert_eq!(snap.marks[4], MARK_GLYPH);
    }

    #[test]
    fn test_reorder_shifts_left() {
        let mut card = digits_card();
        card.toggle_mark(0);
        card.reorder(0, 8);
        let snap = card.snapshot();
        assert_eq!(snap.items, ["2", "3", "4", "5", "6", "7", "8", "9", "1"]);
        // the mark rode along with "1"
        assert_eq!(snap.marks[8], MARK_GLYPH);
        assert!(snap.marks[..8].iter().all(|m| m.is_empty()));
    }

    #[test]
    fn test_reorder_round_trip() {
        let mut card = digits_card();
        card.toggle_mark(2);
        let before = card.snapshot();
        card.reorder(2, 6);
        card.reorder(6, 2);
        assert_eq!(card.snapshot(), before);
    }

    #[test]
    fn test_reorder_same_index_is_noop() {
        let mut card = digits_card();
        let before = card.snapshot();
        card.reorder(5, 5);
        assert_eq!(card.snapshot(), before);
    }

    #[test]
    fn test_toggle_mark_involution() {
        let mut card = digits_card();
        card.toggle_mark(4);
        assert_eq!(card.snapshot().marks[4], MARK_GLYPH);
        card.toggle_mark(4);
        assert_eq!(card.snapshot().marks[4], "");
    }

    #[test]
    fn test_reset_marks_keeps_item_order() {
        let mut card = digits_card();
        card.toggle_mark(1);
        card.toggle_mark(7);
        card.reset_marks();
        let snap = card.snapshot();
        assert!(snap.marks.iter().all(|m| m.is_empty()));
        assert_eq!(snap.items, ["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    }

    #[test]
    fn test_shuffle_preserves_pairs() {
        let mut card = digits_card();
        card.toggle_mark(0);
        card.toggle_mark(4);
        let mut before: Vec<(String, String)> = card
            .snapshot()
            .entries()
            .map(|(t, m)| (t.to_string(), m.to_string()))
            .collect();

        let mut rng = StdRng::seed_from_u64(42);
        card.shuffle_with(&mut rng);

        let mut after: Vec<(String, String)> = card
            .snapshot()
            .entries()
            .map(|(t, m)| (t.to_string(), m.to_string()))
            .collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_shuffle_deterministic_with_seed() {
        let mut a = digits_card();
        let mut b = digits_card();
        a.shuffle_with(&mut StdRng::seed_from_u64(7));
        b.shuffle_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
