//! Uniqueness solver.
//!
//! Decides how many star configurations a region partition admits under the
//! full rule set: one star per row, per column, and per region, with no two
//! stars touching (including diagonally). The search is bounded, so proving
//! "exactly one" needs a limit of 2, never full enumeration.

use crate::grid::Position;
use crate::regions::RegionGrid;

/// One search step: a region committed to at this depth, its valid candidate
/// cells at the time of commitment, and a cursor over branches not yet taken.
struct Frame {
    region: usize,
    candidates: Vec<Position>,
    next: usize,
}

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Find up to `limit` valid star configurations for the partition.
    ///
    /// Backtracking over regions in most-constrained-first order: each step
    /// commits to the unassigned region with the fewest cells that sit in an
    /// unused row and column and touch no star chosen so far. A region with
    /// zero candidates kills its branch immediately, which is what keeps the
    /// search tractable as N grows. Ties break on the lowest region id; the
    /// choice affects speed, never the result set.
    ///
    /// Runs on an explicit frame stack rather than call-stack recursion.
    /// Zero results and `limit` results are both ordinary outcomes.
    pub fn find_solutions(&self, regions: &RegionGrid, limit: usize) -> Vec<Vec<Position>> {
        let n = regions.size();
        let mut solutions = Vec::new();
        if limit == 0 || n == 0 {
            return solutions;
        }

        let region_cells = regions.cells_by_region();
        // A partition not using exactly N region ids admits no solution:
        // N stars cannot be one-per-region otherwise.
        if region_cells.len() != n {
            return solutions;
        }

        let mut used_rows = vec![false; n];
        let mut used_cols = vec![false; n];
        let mut assigned = vec![false; n];
        let mut chosen: Vec<Position> = Vec::with_capacity(n);
        let mut stack: Vec<Frame> = Vec::with_capacity(n);

        if let Some(root) = select_frame(&region_cells, &assigned, &used_rows, &used_cols, &chosen)
        {
            assigned[root.region] = true;
            stack.push(root);
        }

        while !stack.is_empty() {
            let top = stack.len() - 1;
            let branch = {
                let frame = &mut stack[top];
                if frame.next < frame.candidates.len() {
                    frame.next += 1;
                    Some(frame.candidates[frame.next - 1])
                } else {
                    None
                }
            };

            match branch {
                Some(star) => {
                    used_rows[star.row] = true;
                    used_cols[star.col] = true;
                    chosen.push(star);

                    match select_frame(&region_cells, &assigned, &used_rows, &used_cols, &chosen) {
                        Some(child) => {
                            assigned[child.region] = true;
                            stack.push(child);
                        }
                        None => {
                            // Every region assigned: a full configuration.
                            solutions.push(chosen.clone());
                            if solutions.len() >= limit {
                                return solutions;
                            }
                            chosen.pop();
                            used_rows[star.row] = false;
                            used_cols[star.col] = false;
                        }
                    }
                }
                None => {
                    // Branches exhausted: release this region and undo the
                    // choice that led here.
                    if let Some(frame) = stack.pop() {
                        assigned[frame.region] = false;
                    }
                    if let Some(star) = chosen.pop() {
                        used_rows[star.row] = false;
                        used_cols[star.col] = false;
                    }
                }
            }
        }

        solutions
    }

    /// Count solutions up to a limit.
    pub fn count_solutions(&self, regions: &RegionGrid, limit: usize) -> usize {
        self.find_solutions(regions, limit).len()
    }

    /// Check if the partition has exactly one solution.
    pub fn has_unique_solution(&self, regions: &RegionGrid) -> bool {
        self.count_solutions(regions, 2) == 1
    }
}

/// Pick the unassigned region with the fewest valid candidates, together with
/// those candidates. `None` once every region is assigned.
fn select_frame(
    region_cells: &[Vec<Position>],
    assigned: &[bool],
    used_rows: &[bool],
    used_cols: &[bool],
    chosen: &[Position],
) -> Option<Frame> {
    let mut best: Option<Frame> = None;

    for (region, cells) in region_cells.iter().enumerate() {
        if assigned[region] {
            continue;
        }
        let candidates: Vec<Position> = cells
            .iter()
            .copied()
            .filter(|&cell| {
                !used_rows[cell.row]
                    && !used_cols[cell.col]
                    && chosen.iter().all(|star| !star.touches(cell))
            })
            .collect();

        let better = match best {
            Some(ref frame) => candidates.len() < frame.candidates.len(),
            None => true,
        };
        if better {
            let dead_end = candidates.is_empty();
            best = Some(Frame {
                region,
                candidates,
                next: 0,
            });
            if dead_end {
                break;
            }
        }
    }

    best
}
