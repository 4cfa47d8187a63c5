//! All kinds of errors in this crate.

use crate::cells::Coord;
use ca_rules::ParseRuleError;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Cell at {0:?} is outside the grid.
    CoordOutOfGrid(Coord),
    /// The pattern stamped at {0:?} lies entirely outside the grid.
    StampOutOfGrid(Coord),
    /// Invalid rule: {0:?}.
    ParseRuleError(#[from] ParseRuleError),
    /// Width / height should be positive.
    NonPositiveError,
    /// A pattern must contain at least one row of cells.
    EmptyPatternError,
    /// Unrecognized character {0:?} in a Plaintext pattern.
    PatternCharError(char),
}
