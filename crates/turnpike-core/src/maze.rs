//! The [`Maze`] type — an immutable rectangular character map.
//!
//! A maze is parsed once from text and read-only afterwards, so it can be
//! shared freely across repeated solves.

use crate::error::MazeError;
use crate::geom::{Point, Range};

/// Wall cell symbol.
pub const WALL: u8 = b'#';
/// Open floor symbol.
pub const FLOOR: u8 = b'.';
/// Start marker symbol (must be unique).
pub const START: u8 = b'S';
/// Goal marker symbol (one or more).
pub const GOAL: u8 = b'E';

/// An immutable rectangular map of byte cells.
///
/// Invariant: every row has the same length. Constructed via
/// [`Maze::parse`], which rejects ragged input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<u8>,
    width: i32,
    height: i32,
}

impl Maze {
    /// Parse a maze from a block of text, one row per line.
    ///
    /// Trailing newlines are ignored. Fails if the text has no rows or if
    /// any row's length differs from the first's; a blank line inside the
    /// grid is a zero-length row, not an early end.
    pub fn parse(text: &str) -> Result<Maze, MazeError> {
        let text = text.trim_end_matches(['\n', '\r']);
        let mut cells = Vec::with_capacity(text.len());
        let mut width: Option<usize> = None;
        let mut height = 0usize;
        for (line, row) in text.lines().enumerate() {
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(MazeError::RaggedRow {
                    line,
                    expected,
                    got: row.len(),
                });
            }
            cells.extend_from_slice(row.as_bytes());
            height += 1;
        }
        let Some(width) = width else {
            return Err(MazeError::Empty);
        };
        Ok(Maze {
            cells,
            width: width as i32,
            height: height as i32,
        })
    }

    /// The bounding range of the maze, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The symbol at `p`. Out-of-bounds lookups are an error, never clamped.
    pub fn cell(&self, p: Point) -> Result<u8, MazeError> {
        self.get(p).ok_or(MazeError::OutOfBounds(p))
    }

    /// The symbol at `p`, or `None` outside the rectangle.
    #[inline]
    pub fn get(&self, p: Point) -> Option<u8> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some(self.cells[(p.y * self.width + p.x) as usize])
    }

    /// Whether `p` is inside the maze and not a wall.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.get(p).is_some_and(|c| c != WALL)
    }

    /// Locate the single occurrence of `symbol`.
    ///
    /// Fails if the symbol is missing or appears more than once; use
    /// [`find_all`](Maze::find_all) when multiples are expected.
    pub fn find_unique(&self, symbol: u8) -> Result<Point, MazeError> {
        let mut found = None;
        let mut count = 0usize;
        for p in self.bounds() {
            if self.cells[(p.y * self.width + p.x) as usize] == symbol {
                found = Some(p);
                count += 1;
            }
        }
        match (found, count) {
            (Some(p), 1) => Ok(p),
            _ => Err(MazeError::MarkerNotUnique {
                symbol: symbol as char,
                count,
            }),
        }
    }

    /// All positions carrying `symbol`, in row-major order.
    pub fn find_all(&self, symbol: u8) -> Vec<Point> {
        self.bounds()
            .iter()
            .filter(|&p| self.cells[(p.y * self.width + p.x) as usize] == symbol)
            .collect()
    }
}
