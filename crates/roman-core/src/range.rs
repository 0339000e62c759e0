//! Inclusive number ranges and their expansion

use crate::error::{ErrorCode, Result, RomanError};
use crate::numeral::{LOWER_LIMIT, UPPER_LIMIT};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use std::collections::BTreeSet;

/// An inclusive `[min, max]` range.
///
/// Bounds are kept as signed integers so that negative or oversized JSON
/// values still decode and are rejected by [`NumberRange::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NumberRange {
    /// Inclusive lower bound
    #[schema(example = 10)]
    pub min: i64,
    /// Inclusive upper bound
    #[schema(example = 12)]
    pub max: i64,
}

impl NumberRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Check `1 <= min <= max <= 3999`
    pub fn validate(&self) -> Result<()> {
        let lower = i64::from(LOWER_LIMIT);
        let upper = i64::from(UPPER_LIMIT);
        if self.min < lower || self.max > upper || self.min > self.max {
            return Err(RomanError::new(ErrorCode::InvalidRange));
        }
        Ok(())
    }

    /// Iterate the values of an already validated range
    fn values(&self) -> impl Iterator<Item = u32> {
        // validate() guarantees both bounds fit in 1..=3999
        let min = self.min as u32;
        let max = self.max as u32;
        min..=max
    }
}

/// Expand ranges into the set of values they cover.
///
/// Fails on the first range (in input order) that violates the bounds; no
/// values from earlier ranges are returned in that case. Overlapping ranges
/// contribute each value once.
pub fn expand_ranges(ranges: &[NumberRange]) -> Result<BTreeSet<u32>> {
    let mut numbers = BTreeSet::new();
    for range in ranges {
        range.validate()?;
        numbers.extend(range.values());
    }
    Ok(numbers)
}
