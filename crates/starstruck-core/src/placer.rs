//! Star placement: one star per row and column, no two touching.

use crate::grid::Position;
use crate::rng::PuzzleRng;

/// One row's worth of search state: the shuffled column order for that row
/// and a cursor over the columns not yet tried.
struct RowFrame {
    columns: Vec<usize>,
    next: usize,
}

impl RowFrame {
    fn new(n: usize, rng: &mut PuzzleRng) -> Self {
        let mut columns: Vec<usize> = (0..n).collect();
        rng.shuffle(&mut columns);
        Self { columns, next: 0 }
    }
}

/// Find one valid star placement for an n×n grid.
///
/// Row-by-row backtracking over randomly shuffled column orders: a candidate
/// column must be unused and its cell must not touch any star placed in an
/// earlier row. The shuffle is what makes successive calls on an advancing
/// rng stream explore different placements.
///
/// The search runs on an explicit frame stack, so its depth cost is O(n) heap
/// regardless of grid size. It is exhaustive over the randomized order and
/// imposes no retry cap: `None` means no placement exists at all, which is
/// the case only for n = 2 and n = 3.
pub fn place_stars(n: usize, rng: &mut PuzzleRng) -> Option<Vec<Position>> {
    let mut chosen: Vec<Position> = Vec::with_capacity(n);
    let mut used_cols = vec![false; n];
    let mut stack = vec![RowFrame::new(n, rng)];

    while let Some(frame) = stack.last_mut() {
        let row = chosen.len();

        let mut placed = None;
        while frame.next < frame.columns.len() {
            let col = frame.columns[frame.next];
            frame.next += 1;
            if used_cols[col] {
                continue;
            }
            let candidate = Position::new(row, col);
            if chosen.iter().any(|star| star.touches(candidate)) {
                continue;
            }
            placed = Some(candidate);
            break;
        }

        match placed {
            Some(star) => {
                used_cols[star.col] = true;
                chosen.push(star);
                if chosen.len() == n {
                    return Some(chosen);
                }
                stack.push(RowFrame::new(n, rng));
            }
            None => {
                // Row exhausted: unwind the previous row's choice and resume
                // its remaining columns.
                stack.pop();
                if let Some(star) = chosen.pop() {
                    used_cols[star.col] = false;
                }
            }
        }
    }

    None
}
