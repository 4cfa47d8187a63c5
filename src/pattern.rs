//! Stamp patterns.

use crate::{
    cells::{Coord, State, ALIVE, DEAD},
    error::Error,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A small fixed bitmap of cell states, stamped onto a grid at an anchor
/// coordinate.
///
/// The anchor is the pattern's top-left corner, offset `(0, 0)`. Stamping
/// writes every cell of the bitmap one-to-one, dead cells included, so a
/// stamp overwrites whatever was underneath it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pattern {
    width: i32,
    height: i32,
    /// Row-major, like [`Grid`](crate::Grid).
    cells: Box<[State]>,
}

impl Pattern {
    /// Parses a pattern from
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
    ///
    /// `.` and space are dead, `o`, `O` and `*` are alive, and lines starting
    /// with `!` are comments. Short rows are padded with dead cells to the
    /// longest row.
    pub fn from_plaintext(text: &str) -> Result<Self, Error> {
        let rows: Vec<&str> = text
            .lines()
            .filter(|line| !line.starts_with('!'))
            .collect();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        if width == 0 {
            return Err(Error::EmptyPatternError);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for row in &rows {
            let mut len = 0;
            for ch in row.chars() {
                match ch {
                    '.' | ' ' => cells.push(DEAD),
                    'o' | 'O' | '*' => cells.push(ALIVE),
                    _ => return Err(Error::PatternCharError(ch)),
                }
                len += 1;
            }
            cells.resize(cells.len() + width - len, DEAD);
        }

        Ok(Pattern {
            width: width as i32,
            height: rows.len() as i32,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Builds a pattern from rows that are known to be well-formed:
    /// `o` is alive, anything else is dead.
    fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut cells = vec![DEAD; width * rows.len()];
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == 'o' {
                    cells[y * width + x] = ALIVE;
                }
            }
        }
        Pattern {
            width: width as i32,
            height: rows.len() as i32,
            cells: cells.into_boxed_slice(),
        }
    }

    /// Width of the bitmap.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the bitmap.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The state at `offset` from the top-left corner,
    /// or `None` outside the bitmap.
    pub fn get(&self, (x, y): Coord) -> Option<State> {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            Some(self.cells[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Iterates over every `(offset, state)` pair of the bitmap, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, State)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| ((i as i32 % self.width, i as i32 / self.width), state))
    }

    /// The block, the smallest still life.
    pub fn block() -> Self {
        Self::from_rows(&["oo", "oo"])
    }

    /// The blinker, a period-2 oscillator, in its horizontal phase.
    pub fn blinker() -> Self {
        Self::from_rows(&["ooo"])
    }

    /// The glider, the smallest spaceship.
    pub fn glider() -> Self {
        Self::from_rows(&[".o.", "..o", "ooo"])
    }

    /// The R-pentomino, a methuselah that takes 1103 generations to settle.
    pub fn r_pentomino() -> Self {
        Self::from_rows(&[".oo", "oo.", ".o."])
    }

    /// The lightweight spaceship.
    pub fn lwss() -> Self {
        Self::from_rows(&[".o..o", "o....", "o...o", "oooo."])
    }
}
