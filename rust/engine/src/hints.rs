use crate::cards::{is_set, Card};

/// Every Set currently on the table, as ascending index triples, with a round-robin cursor.
///
/// Indices refer to the table as it was when [`HintIndex::recompute`] last ran; any change
/// to table order or membership must be followed by another recompute.
#[derive(Debug, Clone, Default)]
pub struct HintIndex {
    triples: Vec<[usize; 3]>,
    cursor: usize,
}

impl HintIndex {
    pub fn new(table: &[Card]) -> Self {
        let mut hints = Self::default();
        hints.recompute(table);
        hints
    }

    /// Rebuilds the list from scratch and resets the cursor.
    pub fn recompute(&mut self, table: &[Card]) {
        self.cursor = 0;
        self.triples.clear();
        let n = table.len();
        for i in 0..n {
            for j in i + 1..n {
                for k in j + 1..n {
                    if is_set(&[table[i], table[j], table[k]]) {
                        self.triples.push([i, j, k]);
                    }
                }
            }
        }
        tracing::trace!(table = n, sets = self.triples.len(), "hints recomputed");
    }

    /// Returns the triple at the cursor and advances it, wrapping after the last entry.
    pub fn next_hint(&mut self) -> Option<[usize; 3]> {
        let hint = *self.triples.get(self.cursor)?;
        self.cursor = (self.cursor + 1) % self.triples.len();
        Some(hint)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn triples(&self) -> &[[usize; 3]] {
        &self.triples
    }
}
