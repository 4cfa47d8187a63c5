//! __lifediff__ is a bounded Game of Life engine that reports exactly which
//! cells changed on every operation, so a renderer can repaint incrementally
//! instead of redrawing the whole grid.
//!
//! The engine is pure state transition plus a little session state (the
//! generation counter and the autoplay pacer); it performs no I/O and knows
//! nothing about windows, widgets or colors. A UI layer owns the rendered
//! cells, calls into the engine on user edits and generation ticks, and
//! applies the returned [`Diff`]s.
//!
//! The grid boundary is open: cells beyond the tracked rectangle are
//! permanently dead, never wrapped around.
//!
//! # Example
//!
//! ```
//! use lifediff::{Config, Pattern, ALIVE};
//!
//! # fn main() -> Result<(), lifediff::Error> {
//! let mut world = Config::new(16, 16).world()?;
//! world.stamp((1, 1), &Pattern::glider())?;
//!
//! let diff = world.step();
//! assert_eq!(world.generation(), 1);
//! for change in &diff {
//!     // Repaint exactly this cell.
//!     let (x, y) = change.coord;
//!     let _ = (x, y, change.state == ALIVE);
//! }
//! # Ok(())
//! # }
//! ```

mod cells;
mod config;
mod error;
mod grid;
mod pacer;
mod pattern;
pub mod rules;
mod world;

pub use cells::{Coord, State, ALIVE, DEAD};
pub use config::Config;
pub use error::Error;
pub use grid::Grid;
pub use pacer::{Pacer, Tick};
pub use pattern::Pattern;
pub use world::{Change, Diff, World};
