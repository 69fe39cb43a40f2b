//! Dancing Links exact-cover engine.
//!
//! The toroidal node structure from Knuth's DLX paper, stored as a flat
//! arena: one `Vec` of nodes addressed by index, with left/right/up/down
//! held as indices rather than references. Column heads occupy indices
//! `0..columns` and a root sentinel sits at index `columns`, so the whole
//! self-referential structure needs no interior mutability or unsafe code.
//!
//! `cover`/`uncover` are the reversible primitives; they follow strict
//! stack discipline. A single recursive `search` handles all termination
//! modes (first solution, exhaustive count, enumeration) via [`SearchMode`].

/// Row marker for column heads and the root, which belong to no matrix row.
const NO_ROW: usize = usize::MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,
    /// Owning column head index; heads point at themselves.
    column: usize,
    /// Matrix row this node belongs to, `NO_ROW` for heads.
    row: usize,
}

/// Sparse 0/1 matrix as a toroidal doubly-linked structure.
pub(crate) struct LinkedGrid {
    nodes: Vec<Node>,
    /// Live node count per column, indexed by column head.
    sizes: Vec<usize>,
    columns: usize,
    root: usize,
}

impl LinkedGrid {
    /// Build the root and `columns` empty column heads, linked into the
    /// horizontal ring in index order.
    pub(crate) fn new(columns: usize) -> Self {
        let root = columns;
        let mut nodes = Vec::with_capacity(columns + 1);
        for i in 0..=columns {
            let left = if i == 0 { root } else { i - 1 };
            let right = if i + 1 > columns { 0 } else { i + 1 };
            nodes.push(Node {
                left,
                right,
                up: i,
                down: i,
                column: i,
                row: NO_ROW,
            });
        }
        if columns == 0 {
            nodes[root].left = root;
            nodes[root].right = root;
        }
        Self {
            nodes,
            sizes: vec![0; columns],
            columns,
            root,
        }
    }

    /// Append one matrix row: a node per activated column, linked to the
    /// bottom of each column's vertical ring and into a horizontal ring
    /// with its row siblings. `cols` must be strictly increasing (a row
    /// activating the same column twice is a caller bug).
    pub(crate) fn add_row(&mut self, row: usize, cols: &[usize]) {
        debug_assert!(cols.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(cols.iter().all(|&c| c < self.columns));

        let mut first: Option<usize> = None;
        for &col in cols {
            let node = self.nodes.len();
            let up = self.nodes[col].up;
            self.nodes.push(Node {
                left: node,
                right: node,
                up,
                down: col,
                column: col,
                row,
            });
            self.nodes[up].down = node;
            self.nodes[col].up = node;
            self.sizes[col] += 1;

            match first {
                Some(head) => {
                    let left = self.nodes[head].left;
                    self.nodes[node].left = left;
                    self.nodes[node].right = head;
                    self.nodes[left].right = node;
                    self.nodes[head].left = node;
                }
                None => first = Some(node),
            }
        }
    }

    /// Remove `col` from the horizontal ring, and every other node of
    /// every row in `col`'s vertical ring from its own column.
    fn cover(&mut self, col: usize) {
        let (left, right) = (self.nodes[col].left, self.nodes[col].right);
        self.nodes[right].left = left;
        self.nodes[left].right = right;

        let mut row = self.nodes[col].down;
        while row != col {
            let mut node = self.nodes[row].right;
            while node != row {
                let (up, down) = (self.nodes[node].up, self.nodes[node].down);
                self.nodes[down].up = up;
                self.nodes[up].down = down;
                self.sizes[self.nodes[node].column] -= 1;
                node = self.nodes[node].right;
            }
            row = self.nodes[row].down;
        }
    }

    /// Exact inverse of [`cover`](Self::cover); traverses in the reverse
    /// direction so ring pointers are restored bit-for-bit. Must be called
    /// in reverse order of the matching covers.
    fn uncover(&mut self, col: usize) {
        let mut row = self.nodes[col].up;
        while row != col {
            let mut node = self.nodes[row].left;
            while node != row {
                self.sizes[self.nodes[node].column] += 1;
                let (up, down) = (self.nodes[node].up, self.nodes[node].down);
                self.nodes[down].up = node;
                self.nodes[up].down = node;
                node = self.nodes[node].left;
            }
            row = self.nodes[row].up;
        }
        let (left, right) = (self.nodes[col].left, self.nodes[col].right);
        self.nodes[right].left = col;
        self.nodes[left].right = col;
    }

    /// Column with the fewest live nodes, the min-branching heuristic.
    /// A size-0 column forces immediate backtrack for free.
    fn min_column(&self) -> usize {
        let mut best = self.nodes[self.root].right;
        let mut candidate = self.nodes[best].right;
        while candidate != self.root {
            if self.sizes[candidate] < self.sizes[best] {
                best = candidate;
            }
            candidate = self.nodes[candidate].right;
        }
        best
    }

    fn solved(&self) -> bool {
        self.nodes[self.root].right == self.root
    }
}

/// What to do when the search reaches a solution, and when to halt.
pub(crate) enum SearchMode {
    /// Stop at the first solution.
    First,
    /// Count every solution; `cap` bounds pathological inputs.
    CountAll { cap: Option<usize> },
    /// Materialize every solution's row set, up to `cap`.
    Enumerate { cap: Option<usize> },
}

#[derive(Debug, Default)]
pub(crate) struct SearchOutcome {
    /// Total solutions seen before halting.
    pub count: usize,
    /// Matrix rows of the first solution encountered.
    pub first: Option<Vec<usize>>,
    /// All solutions' row sets (Enumerate mode only).
    pub all: Vec<Vec<usize>>,
}

/// Run the backtracking search over a freshly built structure.
pub(crate) fn search(grid: &mut LinkedGrid, mode: &SearchMode) -> SearchOutcome {
    let mut outcome = SearchOutcome::default();
    let mut partial = Vec::new();
    search_rec(grid, mode, &mut partial, &mut outcome);
    outcome
}

/// Returns true when the search should halt (first solution found, or a
/// solution cap reached). The structure is fully restored on unwind either
/// way.
fn search_rec(
    grid: &mut LinkedGrid,
    mode: &SearchMode,
    partial: &mut Vec<usize>,
    outcome: &mut SearchOutcome,
) -> bool {
    if grid.solved() {
        outcome.count += 1;
        let rows: Vec<usize> = partial.iter().map(|&n| grid.nodes[n].row).collect();
        if outcome.first.is_none() {
            outcome.first = Some(rows.clone());
        }
        return match mode {
            SearchMode::First => true,
            SearchMode::CountAll { cap } => cap.is_some_and(|c| outcome.count >= c),
            SearchMode::Enumerate { cap } => {
                outcome.all.push(rows);
                cap.is_some_and(|c| outcome.count >= c)
            }
        };
    }

    let col = grid.min_column();
    grid.cover(col);

    let mut halt = false;
    let mut row = grid.nodes[col].down;
    while row != col {
        partial.push(row);
        let mut node = grid.nodes[row].right;
        while node != row {
            let column = grid.nodes[node].column;
            grid.cover(column);
            node = grid.nodes[node].right;
        }

        halt = search_rec(grid, mode, partial, outcome);

        partial.pop();
        let mut node = grid.nodes[row].left;
        while node != row {
            let column = grid.nodes[node].column;
            grid.uncover(column);
            node = grid.nodes[node].left;
        }

        if halt {
            break;
        }
        row = grid.nodes[row].down;
    }

    grid.uncover(col);
    halt
}
