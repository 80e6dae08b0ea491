use crate::domain::model::Stats;
use crate::utils::error::{IdiomError, Result};

/// Returns `(minimum, maximum)` of a non-empty slice.
///
/// Two values come back as a tuple and are meant to be unpacked at the call
/// site. Past three values, use [`summarize`] and its named fields instead.
pub fn get_stats<T: Ord + Copy>(values: &[T]) -> Result<(T, T)> {
    let minimum = values.iter().min().copied();
    let maximum = values.iter().max().copied();

    match (minimum, maximum) {
        (Some(minimum), Some(maximum)) => Ok((minimum, maximum)),
        _ => Err(IdiomError::EmptyInput {
            what: "values".to_string(),
        }),
    }
}

pub fn summarize<T: Ord + Copy>(values: &[T]) -> Result<Stats<T>> {
    let (minimum, maximum) = get_stats(values)?;
    Ok(Stats { minimum, maximum })
}
