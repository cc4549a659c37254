use crossgen::{solve, Assignment, Grid, Structure};
use proptest::prelude::*;

fn vocabulary(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Check every contract a returned assignment must satisfy: one word per
/// slot, lengths match, crossing letters agree, no word reused.
fn assert_valid(grid: &Grid, words: &[String], assignment: &Assignment) {
    let structure = Structure::build(grid);
    assert_eq!(structure.len(), assignment.len());

    let slots = structure.slots();
    for (id, slot) in slots.iter().enumerate() {
        let word = assignment.get(slot).expect("every slot assigned");
        assert_eq!(slot.length, word.len());
        assert!(words.contains(word));
        for &n in structure.neighbors(id) {
            let (a, b) = structure.overlap(id, n).expect("neighbors cross");
            let other = assignment.get(&slots[n]).expect("every slot assigned");
            assert_eq!(word.as_bytes()[a], other.as_bytes()[b]);
        }
    }

    let mut values: Vec<_> = assignment.values().collect();
    values.sort();
    let count = values.len();
    values.dedup();
    assert_eq!(count, values.len(), "assigned words must be distinct");
}

#[test]
fn full_three_by_three_grid() {
    let grid = Grid::parse(
        "
___
___
___
",
    )
    .unwrap();
    // Row and column words of a consistent square, plus decoys.
    let words = vocabulary(&[
        "abc", "def", "ghi", "adg", "beh", "cfi", "abd", "xyz", "aaa", "dog",
    ]);

    let assignment = solve(&grid, &words).unwrap();
    assert_valid(&grid, &words, &assignment);
}

#[test]
fn h_shaped_grid() {
    let grid = Grid::parse(
        "
_*_
___
_*_
",
    )
    .unwrap();
    // "ado" bridges "cat" and "dog" at their middle letters; the rest are
    // decoys that fit no complete fill.
    let words = vocabulary(&["cat", "dog", "ado", "cot", "dig", "ade"]);

    let assignment = solve(&grid, &words).unwrap();
    assert_valid(&grid, &words, &assignment);
}

#[test]
fn unsatisfiable_crossing() {
    let grid = Grid::parse(
        "
___
_**
_**
",
    )
    .unwrap();

    // No two distinct words share a first letter.
    assert_eq!(None, solve(&grid, &vocabulary(&["ant", "bee", "cow"])));
}

#[test]
fn unmatched_slot_length_means_no_solution() {
    let grid = Grid::parse(
        "
____
****
",
    )
    .unwrap();

    // Node consistency empties the four-cell slot before any search.
    assert_eq!(None, solve(&grid, &vocabulary(&["cat", "dog", "horses"])));
}

#[test]
fn fully_blocked_grid_yields_empty_assignment() {
    let grid = Grid::parse(
        "
**
**
",
    )
    .unwrap();

    let assignment = solve(&grid, &vocabulary(&["cat"])).unwrap();
    assert!(assignment.is_empty());
}

#[test]
fn empty_vocabulary_fails_unless_no_slots() {
    let grid = Grid::parse("___").unwrap();
    assert_eq!(None, solve(&grid, &[]));

    let blocked = Grid::parse("***").unwrap();
    assert!(solve(&blocked, &[]).unwrap().is_empty());
}

proptest! {
    // The two-slot instance is small enough to check exhaustively: the
    // solver returns a fill exactly when some ordered pair of distinct
    // words shares a first letter.
    #[test]
    fn crossing_pair_matches_exhaustive_check(
        words in prop::collection::vec("[a-d]{3}", 1..8),
    ) {
        let grid = Grid::parse(
            "
___
_**
_**
",
        )
        .unwrap();

        let pair_exists = words.iter().any(|across| {
            words
                .iter()
                .any(|down| across != down && across.as_bytes()[0] == down.as_bytes()[0])
        });

        match solve(&grid, &words) {
            Some(assignment) => assert_valid(&grid, &words, &assignment),
            None => prop_assert!(!pair_exists),
        }
    }
}
