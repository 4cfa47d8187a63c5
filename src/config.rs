//! World configuration.

use crate::{error::Error, rules::Life, world::World};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World configuration.
///
/// The world will be generated from this configuration. The default is a
/// 200 × 200 grid running Conway's Game of Life.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Width.
    #[educe(Default = 200)]
    pub width: i32,

    /// Height.
    #[educe(Default = 200)]
    pub height: i32,

    /// The rule string of the cellular automaton.
    #[educe(Default = "B3/S23")]
    pub rule_string: String,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: i32, height: i32) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the rule string.
    pub fn set_rule_string<S: ToString>(mut self, rule_string: S) -> Self {
        self.rule_string = rule_string.to_string();
        self
    }

    /// Creates a new world from the configuration.
    ///
    /// Returns an error if the rule string is invalid or a dimension is not
    /// positive.
    pub fn world(&self) -> Result<World<Life>, Error> {
        let rule = self.rule_string.parse()?;
        World::new(self, rule)
    }
}
