//! Dense adjacency-count matrix addressed by stacked indices.

#[derive(Debug, Clone, Default)]
pub(in crate::graph) struct AdjacencyMatrix {
    rows: Vec<Vec<u32>>,
}

impl AdjacencyMatrix {
    pub(in crate::graph) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(in crate::graph) fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    pub(in crate::graph) fn get(&self, i: usize, j: usize) -> u32 {
        self.rows
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(0)
    }

    /// Appends one zeroed row and column.
    pub(in crate::graph) fn push_vertex(&mut self) {
        for row in &mut self.rows {
            row.push(0);
        }
        self.rows.push(vec![0; self.rows.len() + 1]);
    }

    /// Drops row `i` and column `i`; rows/columns after `i` shift down by one.
    pub(in crate::graph) fn remove_vertex(&mut self, i: usize) {
        if i >= self.rows.len() {
            return;
        }
        self.rows.remove(i);
        for row in &mut self.rows {
            row.remove(i);
        }
    }

    pub(in crate::graph) fn increment(&mut self, i: usize, j: usize) {
        if let Some(cell) = self.rows.get_mut(i).and_then(|row| row.get_mut(j)) {
            *cell += 1;
        }
    }

    pub(in crate::graph) fn decrement(&mut self, i: usize, j: usize) {
        if let Some(cell) = self.rows.get_mut(i).and_then(|row| row.get_mut(j)) {
            *cell = cell.saturating_sub(1);
        }
    }

    pub(in crate::graph) fn clear(&mut self) {
        self.rows.clear();
    }
}
