//! Cellular automata rules.
//!
//! For the notation of rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

use crate::{
    cells::{State, ALIVE, DEAD},
    error::Error,
};
use bitflags::bitflags;
use ca_rules::ParseLife;
use std::str::FromStr;

bitflags! {
    /// A set of neighbor counts.
    ///
    /// Bit `n` stands for exactly `n` live cells in the Moore neighborhood.
    struct CountSet: u16 {
        const N0 = 1 << 0;
        const N1 = 1 << 1;
        const N2 = 1 << 2;
        const N3 = 1 << 3;
        const N4 = 1 << 4;
        const N5 = 1 << 5;
        const N6 = 1 << 6;
        const N7 = 1 << 7;
        const N8 = 1 << 8;
    }
}

impl CountSet {
    /// The set containing only `count`.
    fn single(count: u8) -> Self {
        Self::from_bits_truncate(1u16 << count)
    }

    /// The set containing every count in `counts`.
    fn from_counts(counts: &[u8]) -> Self {
        counts
            .iter()
            .fold(Self::empty(), |set, &count| set | Self::single(count))
    }
}

/// A cellular automaton rule.
///
/// Given a cell's current state and the number of live cells among its
/// eight neighbors, a rule decides the cell's state in the next generation.
///
/// The rule is deliberately separate from neighbor counting and grid
/// traversal, so that alternative birth/survival sets can be substituted
/// without touching either.
pub trait Rule {
    /// The state of a cell in the next generation.
    ///
    /// Must be total: defined for every state and every count in `0..=8`.
    fn next_state(&self, state: State, live_neighbors: u8) -> State;
}

/// Totalistic Life-like rules.
///
/// The default rule is Conway's Game of Life, `B3/S23`:
/// a dead cell becomes alive with exactly 3 live neighbors,
/// and a live cell survives with 2 or 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Life {
    /// Counts at which a dead cell becomes alive.
    birth: CountSet,
    /// Counts at which a live cell stays alive.
    survival: CountSet,
}

impl Life {
    /// Constructs a new rule from the `b` and `s` data.
    pub fn new(b: Vec<u8>, s: Vec<u8>) -> Self {
        Life {
            birth: CountSet::from_counts(&b),
            survival: CountSet::from_counts(&s),
        }
    }

    /// Whether a dead cell with `live_neighbors` live neighbors becomes alive.
    pub fn births(&self, live_neighbors: u8) -> bool {
        self.birth.intersects(CountSet::single(live_neighbors))
    }

    /// Whether a live cell with `live_neighbors` live neighbors stays alive.
    pub fn survives(&self, live_neighbors: u8) -> bool {
        self.survival.intersects(CountSet::single(live_neighbors))
    }
}

/// Conway's Game of Life, `B3/S23`.
impl Default for Life {
    fn default() -> Self {
        Life::new(vec![3], vec![2, 3])
    }
}

impl Rule for Life {
    fn next_state(&self, state: State, live_neighbors: u8) -> State {
        let stays_alive = if state == ALIVE {
            self.survives(live_neighbors)
        } else {
            self.births(live_neighbors)
        };
        if stays_alive {
            ALIVE
        } else {
            DEAD
        }
    }
}

/// A parser for the rule.
impl ParseLife for Life {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(b, s)
    }
}

impl FromStr for Life {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        ParseLife::parse_rule(input).map_err(Error::ParseRuleError)
    }
}
