//! Filter kinds
//!
//! The closed set of neighborhood statistics the engine knows how to
//! compute. Text tokens (config files, command lines) are parsed with
//! [`FromStr`]; anything else is rejected with
//! [`FilterError::UnsupportedFilterKind`].

use crate::FilterError;
use std::fmt;
use std::str::FromStr;

/// Neighborhood statistic applied by [`convolve`](crate::convolve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Arithmetic mean of the in-bounds window samples.
    Arithmetic,
    /// Contraharmonic mean of order +1: `sum(p^2) / sum(p)`.
    ///
    /// Biased toward large values, so isolated dark (pepper) pixels vanish.
    ContraharmonicBlack,
    /// Count over the sum of reciprocals (a harmonic mean).
    ///
    /// Biased toward small values, so isolated bright (salt) pixels vanish.
    /// A zero channel contributes [`ZERO_RECIPROCAL`](crate::ZERO_RECIPROCAL)
    /// instead of `1/0`.
    ContraharmonicWhite,
}

impl FilterKind {
    /// All filter kinds, in declaration order.
    pub const ALL: [FilterKind; 3] = [
        FilterKind::Arithmetic,
        FilterKind::ContraharmonicBlack,
        FilterKind::ContraharmonicWhite,
    ];

    /// The token naming this kind.
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Arithmetic => "arithmetic",
            FilterKind::ContraharmonicBlack => "contraharmonic_black",
            FilterKind::ContraharmonicWhite => "contraharmonic_white",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    /// Parse a token. Matching is exact: `"Arithmetic"` is not a kind.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| FilterError::UnsupportedFilterKind(s.to_string()))
    }
}
