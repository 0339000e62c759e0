//! Decimal to Roman numeral conversion
//!
//! Greedy conversion over the thirteen subtractive-notation breakpoints. Each
//! step takes the largest breakpoint that still fits, which yields the unique
//! standard form for every value in `1..=3999`.

use crate::error::{ErrorCode, Result, RomanError};
use serde::Serialize;
use utoipa::ToSchema;

/// Smallest convertible value
pub const LOWER_LIMIT: u32 = 1;

/// Largest convertible value (no vinculum extension)
pub const UPPER_LIMIT: u32 = 3999;

/// Breakpoints, strictly descending by value
const NUMERAL_TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Whether `n` lies inside the supported domain
pub fn in_bounds(n: u32) -> bool {
    (LOWER_LIMIT..=UPPER_LIMIT).contains(&n)
}

/// Convert an integer in `1..=3999` to its Roman numeral.
///
/// Values outside the domain fail with [`ErrorCode::OutOfBounds`].
pub fn to_roman(n: u32) -> Result<String> {
    if !in_bounds(n) {
        return Err(RomanError::new(ErrorCode::OutOfBounds));
    }

    let mut remaining = n;
    let mut roman = String::with_capacity(15);
    for &(value, symbol) in NUMERAL_TABLE.iter() {
        while remaining >= value {
            roman.push_str(symbol);
            remaining -= value;
        }
        if remaining == 0 {
            break;
        }
    }

    Ok(roman)
}

/// A decimal value paired with its numeral
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NumeralEntry {
    /// Decimal value
    #[schema(example = 1994)]
    pub number: u32,

    /// Roman numeral
    #[schema(example = "MCMXCIV")]
    pub roman: String,
}

impl NumeralEntry {
    /// Build an entry by converting `number`
    pub fn from_number(number: u32) -> Result<Self> {
        Ok(Self {
            number,
            roman: to_roman(number)?,
        })
    }
}
