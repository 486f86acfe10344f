//! Floyd–Warshall hop-distance oracle.

use crate::graph::Graph;

/// All-pairs hop distances; `None` marks an unreachable pair.
pub(super) struct HopDistances {
    order: usize,
    cells: Vec<Option<usize>>,
}

impl HopDistances {
    /// Computes hop distances over the non-zero cells of the adjacency
    /// matrix, ignoring weights.
    pub(super) fn of(graph: &Graph) -> Self {
        let order = graph.vertex_count();
        let mut cells = vec![None; order * order];
        for (from, row) in graph.adjacency_matrix().rows().enumerate().take(order) {
            cells[from * order + from] = Some(0);
            for (to, weight) in row.iter().enumerate() {
                if *weight != 0 && from != to {
                    cells[from * order + to] = Some(1);
                }
            }
        }
        for via in 0..order {
            for from in 0..order {
                let Some(first) = cells[from * order + via] else {
                    continue;
                };
                for to in 0..order {
                    let Some(second) = cells[via * order + to] else {
                        continue;
                    };
                    let candidate = first + second;
                    let cell = &mut cells[from * order + to];
                    if cell.is_none_or(|current| candidate < current) {
                        *cell = Some(candidate);
                    }
                }
            }
        }
        Self { order, cells }
    }

    pub(super) fn between(&self, from: usize, to: usize) -> Option<usize> {
        self.cells[from * self.order + to]
    }
}
