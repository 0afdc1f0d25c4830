/// The largest value in a set of grades and how many grades reach it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxStat {
    pub value: i32,
    pub count: usize,
}

/// Greatest element of `values` and the number of elements `>=` it.
///
/// Callers pass a non-empty slice. An empty slice yields
/// `MaxStat::default()`, i.e. `(0, 0)`.
pub fn max_and_count(values: &[i32]) -> MaxStat {
    let Some(&value) = values.iter().max() else {
        return MaxStat::default();
    };
    let count = values.iter().filter(|&&v| v >= value).count();
    MaxStat { value, count }
}

/// [`max_and_count`] over the elements strictly below `max`, or `(0, 0)`
/// when no element is below it.
pub fn second_max_and_count(values: &[i32], max: i32) -> MaxStat {
    let below: Vec<i32> = values.iter().copied().filter(|&v| v < max).collect();
    max_and_count(&below)
}
