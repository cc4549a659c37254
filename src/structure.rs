use rustc_hash::FxHashMap;

use crate::grid::{Direction, Grid};

/// An addressable run of open cells requiring one word.
///
/// Identity is structural: two slots with the same start, direction and
/// length are the same slot.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Slot {
    pub start_row: usize,
    pub start_col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Slot {
    /// Grid cell holding character `index` of this slot's word.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.start_row, self.start_col + index),
            Direction::Down => (self.start_row + index, self.start_col),
        }
    }
}

/// The fixed constraint graph of a grid: its slots, the overlap relation,
/// and per-slot neighbor lists. Built once, read-only for the whole solve.
///
/// Slots are numbered in scan order (across slots row-major, then down slots
/// column-major); every internal table is indexed by that id.
#[derive(Debug, Clone)]
pub struct Structure {
    slots: Vec<Slot>,
    overlaps: FxHashMap<(usize, usize), (usize, usize)>,
    neighbors: Vec<Vec<usize>>,
}

impl Structure {
    pub fn build(grid: &Grid) -> Structure {
        let slots = scan_slots(grid);

        // Index every occupied cell; two slots overlap iff they share one.
        let mut by_cell: FxHashMap<(usize, usize), Vec<(usize, usize)>> = FxHashMap::default();
        for (id, slot) in slots.iter().enumerate() {
            for index in 0..slot.length {
                by_cell.entry(slot.cell(index)).or_default().push((id, index));
            }
        }

        let mut overlaps = FxHashMap::default();
        let mut neighbors = vec![vec![]; slots.len()];
        for sharers in by_cell.values() {
            for (i, &(x, a)) in sharers.iter().enumerate() {
                for &(y, b) in &sharers[i + 1..] {
                    overlaps.insert((x, y), (a, b));
                    overlaps.insert((y, x), (b, a));
                    neighbors[x].push(y);
                    neighbors[y].push(x);
                }
            }
        }
        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }

        Structure {
            slots,
            overlaps,
            neighbors,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, id: usize) -> Slot {
        self.slots[id]
    }

    /// Character positions `(pos_in_x, pos_in_y)` shared by slots `x` and
    /// `y`, or `None` if they do not cross.
    pub fn overlap(&self, x: usize, y: usize) -> Option<(usize, usize)> {
        self.overlaps.get(&(x, y)).copied()
    }

    pub fn neighbors(&self, id: usize) -> &[usize] {
        &self.neighbors[id]
    }

    pub fn degree(&self, id: usize) -> usize {
        self.neighbors[id].len()
    }
}

/// Scan rows and columns for maximal runs of open cells. Runs of length 1
/// are not addressable slots and are skipped.
fn scan_slots(grid: &Grid) -> Vec<Slot> {
    let mut result = vec![];

    for row in 0..grid.height() {
        let mut run_start = None;
        for col in 0..grid.width() {
            if grid.is_open(row, col) {
                run_start.get_or_insert(col);
            } else {
                push_run(&mut result, row, run_start.take(), col, Direction::Across);
            }
        }
        push_run(&mut result, row, run_start, grid.width(), Direction::Across);
    }

    for col in 0..grid.width() {
        let mut run_start = None;
        for row in 0..grid.height() {
            if grid.is_open(row, col) {
                run_start.get_or_insert(row);
            } else {
                push_run(&mut result, col, run_start.take(), row, Direction::Down);
            }
        }
        push_run(&mut result, col, run_start, grid.height(), Direction::Down);
    }

    result
}

fn push_run(
    result: &mut Vec<Slot>,
    fixed: usize,
    run_start: Option<usize>,
    run_end: usize,
    direction: Direction,
) {
    let Some(start) = run_start else {
        return;
    };
    let length = run_end - start;
    if length < 2 {
        return;
    }
    let slot = match direction {
        Direction::Across => Slot {
            start_row: fixed,
            start_col: start,
            direction,
            length,
        },
        Direction::Down => Slot {
            start_row: start,
            start_col: fixed,
            direction,
            length,
        },
    };
    result.push(slot);
}
