//! The world: session state and the generation stepper.

use crate::{
    cells::{Coord, State, ALIVE, DEAD},
    config::Config,
    error::Error,
    grid::Grid,
    pattern::Pattern,
    rules::{Life, Rule},
};
use log::trace;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single cell's change of state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Change {
    /// The cell that changed.
    pub coord: Coord,
    /// Its new state.
    pub state: State,
}

/// The cells that changed value between two grid snapshots, with their new
/// states.
///
/// A renderer that applies a diff does `O(changes)` work per generation
/// instead of repainting the whole grid.
pub type Diff = Vec<Change>;

/// The world.
///
/// One world per running simulation: it owns the [`Grid`] and the generation
/// counter, and it is the only thing that mutates them. Stepping never adds
/// or removes coordinates, it only changes values.
pub struct World<R: Rule = Life> {
    /// World configuration.
    config: Config,

    /// The rule of the cellular automaton.
    rule: R,

    /// The current generation's cell states.
    grid: Grid,

    /// How many generations have been stepped since the last reset.
    generation: u64,
}

impl<R: Rule> World<R> {
    /// Creates an all-dead world from the configuration and the rule.
    pub fn new(config: &Config, rule: R) -> Result<Self, Error> {
        if config.width <= 0 || config.height <= 0 {
            return Err(Error::NonPositiveError);
        }
        Ok(World {
            config: config.clone(),
            rule,
            grid: Grid::new(config.width, config.height),
            generation: 0,
        })
    }

    /// World configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The rule of the cellular automaton.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generations stepped since the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances the world by one generation and returns the diff against the
    /// previous one.
    ///
    /// Every cell's next state is decided from neighbor counts taken on the
    /// pre-step grid, so the whole generation updates simultaneously. The
    /// diff is empty when the grid has reached a steady state; the generation
    /// counter advances either way.
    pub fn step(&mut self) -> Diff {
        let counts = self.grid.neighbor_counts();
        let mut next = Vec::with_capacity(self.grid.cells.len());
        let mut diff = Diff::new();
        for (i, &state) in self.grid.cells.iter().enumerate() {
            let new = self.rule.next_state(state, counts[i]);
            if new != state {
                diff.push(Change {
                    coord: self.grid.coord_of(i),
                    state: new,
                });
            }
            next.push(new);
        }
        // Stepping must never grow or shrink the coordinate domain.
        debug_assert_eq!(next.len(), self.grid.cells.len());
        self.grid.cells = next.into_boxed_slice();
        self.generation += 1;
        trace!(
            "generation {}: {} cells changed",
            self.generation,
            diff.len()
        );
        diff
    }

    /// Flips the cell at `coord` and returns the one-cell change.
    ///
    /// Fails if `coord` is outside the grid.
    pub fn toggle(&mut self, coord: Coord) -> Result<Change, Error> {
        let state = !self.grid.get(coord).ok_or(Error::CoordOutOfGrid(coord))?;
        self.grid.set(coord, state);
        Ok(Change { coord, state })
    }

    /// Writes `pattern` onto the grid with its top-left corner at `anchor`,
    /// overwriting prior values, and returns the diff of cells that actually
    /// changed.
    ///
    /// Pattern cells that fall outside the grid are silently clipped. An
    /// anchor that places the entire pattern off-grid is an error. Stamping
    /// the same pattern at the same anchor twice in a row yields an empty
    /// second diff.
    pub fn stamp(&mut self, anchor: Coord, pattern: &Pattern) -> Result<Diff, Error> {
        let (ax, ay) = anchor;
        if ax >= self.grid.width()
            || ay >= self.grid.height()
            || ax + pattern.width() <= 0
            || ay + pattern.height() <= 0
        {
            return Err(Error::StampOutOfGrid(anchor));
        }

        let mut diff = Diff::new();
        for ((dx, dy), state) in pattern.iter() {
            let coord = (ax + dx, ay + dy);
            match self.grid.get(coord) {
                Some(old) if old != state => {
                    self.grid.set(coord, state);
                    diff.push(Change { coord, state });
                }
                _ => {}
            }
        }
        Ok(diff)
    }

    /// Sets every cell alive or dead with probability 1/2 each, using the
    /// injected random source, and resets the generation counter.
    ///
    /// Passing a seeded RNG reproduces the exact same grid.
    pub fn randomize<G: Rng>(&mut self, rng: &mut G) -> Diff {
        let mut diff = Diff::new();
        for i in 0..self.grid.cells.len() {
            let state = if rng.gen() { ALIVE } else { DEAD };
            if self.grid.cells[i] != state {
                let coord = self.grid.coord_of(i);
                self.grid.cells[i] = state;
                diff.push(Change { coord, state });
            }
        }
        self.generation = 0;
        diff
    }

    /// Kills every cell and resets the generation counter.
    ///
    /// The diff lists the cells that were alive.
    pub fn clear(&mut self) -> Diff {
        let mut diff = Diff::new();
        for i in 0..self.grid.cells.len() {
            if self.grid.cells[i] != DEAD {
                let coord = self.grid.coord_of(i);
                self.grid.cells[i] = DEAD;
                diff.push(Change { coord, state: DEAD });
            }
        }
        self.generation = 0;
        diff
    }
}
