//! Direction of each step in a series, relative to the step before it.

use serde::{Deserialize, Serialize};

/// Movement of a value relative to the one preceding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Strictly higher than the previous value.
    Up,
    /// Strictly lower than the previous value.
    Down,
    /// Unchanged, or not comparable because a value is missing.
    Flat,
}

impl Direction {
    /// Classifies `current` against `previous`.
    pub fn between(previous: Option<f64>, current: Option<f64>) -> Self {
        match (previous, current) {
            (Some(previous), Some(current)) if current > previous => Direction::Up,
            (Some(previous), Some(current)) if current < previous => Direction::Down,
            _ => Direction::Flat,
        }
    }
}

/// Direction of every value against its predecessor.
///
/// The first value is compared with `reference` (typically the close before the
/// charted range) and is [`Direction::Flat`] without one.
pub fn step_directions<T>(values: T, reference: Option<f64>) -> Vec<Direction>
where
    T: IntoIterator<Item = Option<f64>>,
{
    let mut previous = reference;
    values
        .into_iter()
        .map(|current| {
            let direction = Direction::between(previous, current);
            previous = current;
            direction
        })
        .collect()
}
