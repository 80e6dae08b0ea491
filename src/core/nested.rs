use crate::core::comprehension::checked_square;
use crate::utils::error::Result;

pub fn flatten(matrix: &[Vec<i64>]) -> Vec<i64> {
    matrix.iter().flat_map(|row| row.iter().copied()).collect()
}

/// Squares every cell, keeping the row structure.
pub fn square_matrix(matrix: &[Vec<i64>]) -> Result<Vec<Vec<i64>>> {
    matrix
        .iter()
        .map(|row| row.iter().map(|&x| checked_square(x)).collect())
        .collect()
}

/// Flattens by chaining the rows end to end.
pub fn chain_rows(rows: Vec<Vec<i64>>) -> Vec<i64> {
    rows.into_iter().flatten().collect()
}
