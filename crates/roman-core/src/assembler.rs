//! Result assembly: deduplicate, sort and convert

use crate::error::Result;
use crate::numeral::NumeralEntry;
use std::collections::BTreeSet;

/// Convert a collection of values into entries sorted strictly ascending.
///
/// Repeated values collapse to a single entry. An empty input produces an
/// empty list.
pub fn assemble<I>(numbers: I) -> Result<Vec<NumeralEntry>>
where
    I: IntoIterator<Item = u32>,
{
    numbers
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(NumeralEntry::from_number)
        .collect()
}
