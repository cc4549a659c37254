//! Node and arc consistency over a [`DomainStore`].
//!
//! Node consistency is the unary length filter; arc consistency is AC-3
//! over the overlap relation. Both only ever shrink domains, and AC-3
//! reaches a fixpoint: re-running it on an already-consistent store changes
//! nothing.

use std::collections::VecDeque;

use crate::domains::DomainStore;
use crate::structure::Structure;

/// Remove from every slot's domain the words whose length differs from the
/// slot's length. Run once, before any arc work.
pub fn enforce_node_consistency(store: &mut DomainStore, structure: &Structure, words: &[String]) {
    for (id, slot) in structure.slots().iter().enumerate() {
        store.retain(id, |&w| words[w].len() == slot.length);
    }
}

/// Make `x` arc-consistent with `y`: drop every word in `domain(x)` with no
/// supporting word in `domain(y)` at the overlap. Returns whether
/// `domain(x)` changed. A no-op for non-crossing slots.
pub fn revise(
    store: &mut DomainStore,
    x: usize,
    y: usize,
    structure: &Structure,
    words: &[String],
) -> bool {
    let Some((a, b)) = structure.overlap(x, y) else {
        return false;
    };

    // Support table over bytes: which letters appear at position b in y's
    // domain.
    let mut supported = [false; 256];
    for &wy in store.candidates(y) {
        supported[words[wy].as_bytes()[b] as usize] = true;
    }

    store.retain(x, |&wx| supported[words[wx].as_bytes()[a] as usize])
}

/// All directed arcs between crossing slots, the default AC-3 queue.
pub fn all_arcs(structure: &Structure) -> VecDeque<(usize, usize)> {
    let mut arcs = VecDeque::new();
    for x in 0..structure.len() {
        for &y in structure.neighbors(x) {
            arcs.push_back((x, y));
        }
    }
    arcs
}

/// AC-3: process the queue to a fixpoint. Whenever `revise(x, y)` shrinks
/// `domain(x)`, every other neighbor of `x` must be re-checked against it.
///
/// Returns `false` as soon as some domain empties; the store is left in its
/// reduced state either way, so callers that need rollback must snapshot
/// first.
pub fn enforce_arc_consistency(
    store: &mut DomainStore,
    structure: &Structure,
    words: &[String],
    mut queue: VecDeque<(usize, usize)>,
) -> bool {
    while let Some((x, y)) = queue.pop_front() {
        if revise(store, x, y, structure, words) {
            if store.is_empty(x) {
                return false;
            }
            for &z in structure.neighbors(x) {
                if z != y {
                    queue.push_back((z, x));
                }
            }
        }
    }
    true
}
