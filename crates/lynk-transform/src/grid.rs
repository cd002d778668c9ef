//! Clipboard-grid helpers.
//!
//! Spreadsheet clipboard text arrives as separator-delimited rows: a tab
//! between cells and a newline after every row, including the last.

/// Split clipboard text into rows and cells on `\n` / `\t`.
///
/// Shorthand for [`parse_grid_with`] with the spreadsheet defaults.
pub fn parse_grid(data: &str) -> Vec<Vec<String>> {
    parse_grid_with(data, "\n", "\t")
}

/// Split `data` into a row-major grid on the given separators.
///
/// Every row is expected to end with `row_sep`, so the fragment after the
/// last separator (usually empty) is dropped.
pub fn parse_grid_with(data: &str, row_sep: &str, col_sep: &str) -> Vec<Vec<String>> {
    let rows: Vec<&str> = data.split(row_sep).collect();
    let Some((_, complete)) = rows.split_last() else {
        return Vec::new();
    };
    complete
        .iter()
        .map(|row| row.split(col_sep).map(str::to_string).collect())
        .collect()
}

/// Transpose a row-major grid: R x C in, C x R out.
///
/// The first row fixes the width; shorter rows contribute no cell to the
/// columns they do not reach. Transposing twice returns a rectangular grid
/// unchanged.
pub fn transpose<T: Clone>(matrix: &[Vec<T>]) -> Vec<Vec<T>> {
    let Some(first) = matrix.first() else {
        return Vec::new();
    };
    (0..first.len())
        .map(|col| {
            matrix
                .iter()
                .filter_map(|row| row.get(col).cloned())
                .collect()
        })
        .collect()
}
