use crate::grid::{Grid, BLOCKED};
use crate::solve::Assignment;

/// Render an assignment as grid text: one row per line, assigned letters in
/// open cells, `*` in blocked ones. Open cells no slot covers stay blank.
///
/// Cells are indexed by byte position, matching the solver's length and
/// overlap model; each word byte lands in its own cell.
pub fn render(grid: &Grid, assignment: &Assignment) -> String {
    let mut rows: Vec<Vec<char>> = (0..grid.height())
        .map(|row| {
            (0..grid.width())
                .map(|col| if grid.is_open(row, col) { ' ' } else { BLOCKED })
                .collect()
        })
        .collect();

    for (slot, word) in assignment {
        for (index, b) in word.bytes().enumerate() {
            let (row, col) = slot.cell(index);
            rows[row][col] = b as char;
        }
    }

    let mut result = String::new();
    for row in rows {
        result.extend(row);
        result.push('\n');
    }
    result
}
