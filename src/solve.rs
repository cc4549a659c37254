//! Backtracking search with maintaining arc consistency.
//!
//! Each tentative assignment is propagated through AC-3 before recursing;
//! the domain store is snapshot beforehand and restored on any failed
//! branch, so sibling branches never see leaked propagation.

use std::cmp::Reverse;
use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::consistency::{all_arcs, enforce_arc_consistency, enforce_node_consistency};
use crate::domains::{DomainStore, WordId};
use crate::grid::Grid;
use crate::structure::{Slot, Structure};

/// A complete solution: one word per slot.
pub type Assignment = FxHashMap<Slot, String>;

/// Build the structure for `grid` and search for a complete assignment.
/// `None` means the vocabulary admits no valid fill; it is a normal
/// outcome, not an error.
pub fn solve(grid: &Grid, vocabulary: &[String]) -> Option<Assignment> {
    let structure = Structure::build(grid);
    Solver::new(&structure, vocabulary).solve()
}

pub struct Solver<'s> {
    structure: &'s Structure,
    words: Vec<String>,
}

struct SearchState {
    store: DomainStore,
    chosen: Vec<Option<WordId>>,
    used: FxHashSet<WordId>,
}

impl<'s> Solver<'s> {
    /// The vocabulary is sorted and deduplicated up front; every heuristic
    /// tie-break falls back on word ids, which makes the search order (and
    /// the returned solution) deterministic.
    pub fn new(structure: &'s Structure, vocabulary: &[String]) -> Solver<'s> {
        let mut words = vocabulary.to_vec();
        words.sort();
        words.dedup();
        Solver { structure, words }
    }

    pub fn solve(&self) -> Option<Assignment> {
        let mut store = DomainStore::new(self.structure.len(), self.words.len());
        enforce_node_consistency(&mut store, self.structure, &self.words);

        // AC-3 only reports domains it empties itself; a slot that no word
        // fits at all has to be caught here.
        if (0..self.structure.len()).any(|id| store.is_empty(id)) {
            return None;
        }
        if !enforce_arc_consistency(
            &mut store,
            self.structure,
            &self.words,
            all_arcs(self.structure),
        ) {
            return None;
        }

        let mut state = SearchState {
            store,
            chosen: vec![None; self.structure.len()],
            used: FxHashSet::default(),
        };
        if !self.backtrack(&mut state) {
            return None;
        }

        let mut assignment = Assignment::default();
        for (id, chosen) in state.chosen.iter().enumerate() {
            if let Some(word) = chosen {
                assignment.insert(self.structure.slot(id), self.words[*word].clone());
            }
        }
        Some(assignment)
    }

    fn backtrack(&self, state: &mut SearchState) -> bool {
        let Some(slot) = self.select_slot(state) else {
            // Every slot assigned.
            return true;
        };

        for word in self.order_candidates(slot, state) {
            if !self.fits(slot, word, state) {
                continue;
            }

            let snapshot = state.store.snapshot();
            state.chosen[slot] = Some(word);
            state.used.insert(word);
            state.store.narrow_to(slot, word);

            let arcs: VecDeque<(usize, usize)> = self
                .structure
                .neighbors(slot)
                .iter()
                .map(|&z| (z, slot))
                .collect();
            if enforce_arc_consistency(&mut state.store, self.structure, &self.words, arcs)
                && self.backtrack(state)
            {
                return true;
            }

            state.store.restore(snapshot);
            state.chosen[slot] = None;
            state.used.remove(&word);
        }

        false
    }

    /// Minimum-remaining-values selection, ties broken by degree and then
    /// by lowest slot id.
    fn select_slot(&self, state: &SearchState) -> Option<usize> {
        (0..self.structure.len())
            .filter(|&id| state.chosen[id].is_none())
            .min_by_key(|&id| (state.store.len(id), Reverse(self.structure.degree(id))))
    }

    /// Least-constraining-value ordering: candidates ascending by how many
    /// words they would eliminate from unassigned neighbors' domains, ties
    /// broken by word id.
    fn order_candidates(&self, slot: usize, state: &SearchState) -> Vec<WordId> {
        let mut scored: Vec<(usize, WordId)> = state
            .store
            .candidates(slot)
            .iter()
            .map(|&word| (self.eliminated_by(slot, word, state), word))
            .collect();
        scored.sort_unstable();
        scored.into_iter().map(|(_, word)| word).collect()
    }

    fn eliminated_by(&self, slot: usize, word: WordId, state: &SearchState) -> usize {
        let bytes = self.words[word].as_bytes();
        self.structure
            .neighbors(slot)
            .iter()
            .filter(|&&n| state.chosen[n].is_none())
            .filter_map(|&n| self.structure.overlap(slot, n).map(|positions| (n, positions)))
            .map(|(n, (a, b))| {
                state
                    .store
                    .candidates(n)
                    .iter()
                    .filter(|&&other| self.words[other].as_bytes()[b] != bytes[a])
                    .count()
            })
            .sum()
    }

    /// Is `word` consistent with the assignment so far: unused, right
    /// length (guaranteed by node consistency, checked anyway), and
    /// matching every assigned neighbor at the overlap.
    fn fits(&self, slot: usize, word: WordId, state: &SearchState) -> bool {
        if state.used.contains(&word) {
            return false;
        }
        if self.words[word].len() != self.structure.slot(slot).length {
            return false;
        }

        let bytes = self.words[word].as_bytes();
        for &n in self.structure.neighbors(slot) {
            let Some(other) = state.chosen[n] else {
                continue;
            };
            let Some((a, b)) = self.structure.overlap(slot, n) else {
                continue;
            };
            if bytes[a] != self.words[other].as_bytes()[b] {
                return false;
            }
        }
        true
    }
}
