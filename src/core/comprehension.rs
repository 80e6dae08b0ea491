use crate::utils::error::{IdiomError, Result};
use indexmap::IndexMap;
use std::collections::BTreeSet;

pub(crate) fn checked_square(x: i64) -> Result<i64> {
    x.checked_mul(x).ok_or_else(|| IdiomError::ArithmeticOverflow {
        what: format!("square of {}", x),
    })
}

fn checked_cube(x: i64) -> Result<i64> {
    x.checked_pow(3).ok_or_else(|| IdiomError::ArithmeticOverflow {
        what: format!("cube of {}", x),
    })
}

/// Squares of the even members, in input order.
pub fn even_squares(values: &[i64]) -> Result<Vec<i64>> {
    values
        .iter()
        .filter(|&&x| x % 2 == 0)
        .map(|&x| checked_square(x))
        .collect()
}

/// Same list, built from separate `filter` and `map` passes with named
/// closures, for comparison.
pub fn even_squares_map_filter(values: &[i64]) -> Result<Vec<i64>> {
    let is_even = |x: &i64| x % 2 == 0;

    let evens: Vec<i64> = values.iter().copied().filter(is_even).collect();
    evens.into_iter().map(checked_square).collect()
}

pub fn cube_set(values: &[i64]) -> Result<BTreeSet<i64>> {
    values.iter().map(|&x| checked_cube(x)).collect()
}

/// Odd member to its square, keyed in first-seen order.
pub fn odd_square_map(values: &[i64]) -> Result<IndexMap<i64, i64>> {
    values
        .iter()
        .filter(|&&x| x % 2 != 0)
        .map(|&x| checked_square(x).map(|square| (x, square)))
        .collect()
}
