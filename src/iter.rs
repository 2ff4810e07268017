//! Row-major iteration over a board.

use std::iter::FusedIterator;
use std::ops::Bound;
use super::board::Board;
use super::error::{Error, Result};
use super::node::{self, Node};
use super::report::{Log, Report};
use super::tile::{Coordinate, RowMajor, Tile};

/// A position in a board's row-major sequence that does not borrow the board.
///
/// A cursor remembers the board's mutation counter from when it was created. Every call checks
/// the counter again and fails with [`Error::Stale`] if the board has been mutated since, even by
/// a mutation that left the board's contents as they were (such as clearing an empty board).
/// Used with any board but its own, including a clone of it, it fails with
/// [`Error::ForeignBoard`].
///
/// # Examples
///
/// ```
/// use hexboard::{Board, Error};
///
/// let mut board = Board::new();
/// board.add_str("<3,0>City").unwrap();
/// board.add_str("<2,1>Land").unwrap();
///
/// let mut cursor = board.cursor();
/// assert_eq!(cursor.next(&board).unwrap().to_string(), "<3,0>City");
/// assert_eq!(cursor.next(&board).unwrap().to_string(), "<2,1>Land");
/// assert_eq!(cursor.has_next(&board), Ok(false));
/// assert_eq!(cursor.next(&board), Err(Error::Exhausted));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    board: u64,
    version: u64,
    // Where the next tile may be found. `None` until the first call on a non-empty board.
    from: Option<Bound<Coordinate>>,
}

impl Cursor {
    pub(crate) fn new<R>(board: &Board<R>) -> Self where R: Report {
        Cursor { board: board.id(), version: board.version(), from: None }
    }

    fn check<R>(&self, board: &Board<R>) -> Result<()> where R: Report {
        if board.id() != self.board {
            log::debug!("cursor for board {} used with board {}", self.board, board.id());
            Err(Error::ForeignBoard)
        } else if board.version() == self.version {
            Ok(())
        } else {
            log::debug!("stale cursor: created at version {}, board at {}",
                        self.version, board.version());
            Err(Error::Stale { expected: self.version, found: board.version() })
        }
    }

    /// Checks if the board has a tile after the cursor.
    ///
    /// The first call on a non-empty board places the cursor at the start of the board's first
    /// row.
    pub fn has_next<R>(&mut self, board: &Board<R>) -> Result<bool> where R: Report {
        contract!(board, "in has_next");
        self.check(board)?;

        let root = board.root();
        if root.is_none() { return Ok(false); }

        if self.from.is_none() {
            let row = node::first_row(root);
            self.from = node::first_in_row(root, row).map(|t| Bound::Included(t.coordinate()));
        }

        let (row, within_row) = match self.from {
            Some(Bound::Included(c)) =>
                (c.b(), node::last_in_row(root, c.b()).map_or(false, |t| c.a() <= t.coordinate().a())),
            Some(Bound::Excluded(c)) =>
                (c.b(), node::last_in_row(root, c.b()).map_or(false, |t| c.a() < t.coordinate().a())),
            Some(Bound::Unbounded) | None => return Ok(false),
        };

        Ok(within_row || row < node::last_row(root))
    }

    /// Returns the next tile in row-major order and moves the cursor past it.
    ///
    /// Fails with [`Error::Stale`] if the board has been mutated since the cursor was created,
    /// or with [`Error::Exhausted`] if no tile is left.
    pub fn next<R>(&mut self, board: &Board<R>) -> Result<Tile> where R: Report {
        contract!(board, "in next");
        if !self.has_next(board)? { return Err(Error::Exhausted); }

        let tile = self.from.as_ref()
            .and_then(|from| node::succ(board.root(), &RowMajor, from.as_ref()))
            .map(Node::tile)
            .ok_or(Error::Exhausted)?;

        self.from = Some(Bound::Excluded(tile.coordinate()));
        Ok(tile)
    }
}

/// An iterator over a board's tiles in row-major order.
///
/// The iterator borrows the board, so the board cannot change while it is alive.
///
/// # Examples
///
/// Acquire through [`Board::iter`] or the `IntoIterator` trait:
///
/// ```
/// use hexboard::Board;
///
/// let mut board = Board::new();
/// board.add_str("<2,2>Forest").unwrap();
/// board.add_str("<3,0>City").unwrap();
///
/// for tile in &board {
///     println!("{}", tile);
/// }
/// ```
pub struct Iter<'a, R = Log> where R: Report + 'a {
    board: &'a Board<R>,
    cursor: Cursor,
    len: usize,
}

impl<'a, R> Iter<'a, R> where R: Report {
    pub(crate) fn new(board: &'a Board<R>) -> Self {
        Iter { board: board, cursor: Cursor::new(board), len: board.len() }
    }
}

impl<'a, R> Clone for Iter<'a, R> where R: Report {
    fn clone(&self) -> Self {
        Iter { board: self.board, cursor: self.cursor.clone(), len: self.len }
    }
}

impl<'a, R> Iterator for Iter<'a, R> where R: Report {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        if self.len == 0 { return None; }
        let tile = self.cursor.next(self.board).ok()?;
        self.len -= 1;
        Some(tile)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<'a, R> ExactSizeIterator for Iter<'a, R> where R: Report {}

impl<'a, R> FusedIterator for Iter<'a, R> where R: Report {}

#[cfg(test)]
mod test {
    use crate::board::Board;
    use crate::error::Error;
    use crate::tile::{Coordinate, Terrain, Tile};
    use crate::tile::Terrain::*;

    fn t(a: i32, b: i32, terrain: Terrain) -> Tile { Tile::new(Coordinate::new(a, b), terrain) }

    fn board(tiles: &[Tile]) -> Board { tiles.iter().cloned().collect() }

    #[test]
    fn empty_board_has_nothing() {
        let board = board(&[]);
        let mut cursor = board.cursor();
        assert_eq!(cursor.has_next(&board), Ok(false));
        assert_eq!(cursor.next(&board), Err(Error::Exhausted));
        assert_eq!(board.iter().next(), None);
    }

    #[test]
    fn has_next_is_idempotent() {
        let board = board(&[t(3, 0, City)]);
        let mut cursor = board.cursor();
        assert_eq!(cursor.has_next(&board), Ok(true));
        assert_eq!(cursor.has_next(&board), Ok(true));
        assert_eq!(cursor.next(&board), Ok(t(3, 0, City)));
        assert_eq!(cursor.has_next(&board), Ok(false));
        assert_eq!(cursor.has_next(&board), Ok(false));
    }

    #[test]
    fn has_next_looks_past_an_exhausted_row() {
        let board = board(&[t(3, 0, City), t(-9, 5, Desert)]);
        let mut cursor = board.cursor();
        assert_eq!(cursor.next(&board), Ok(t(3, 0, City)));
        assert_eq!(cursor.has_next(&board), Ok(true));
        assert_eq!(cursor.next(&board), Ok(t(-9, 5, Desert)));
        assert_eq!(cursor.has_next(&board), Ok(false));
    }

    #[test]
    fn skips_gaps_in_rows_and_columns() {
        let tiles = [t(i32::MIN, i32::MIN, Water), t(0, i32::MIN, Land), t(i32::MAX, i32::MIN, City),
                     t(i32::MIN, 0, Mountain), t(i32::MAX, i32::MAX, Forest)];
        let board = board(&[tiles[4], tiles[2], tiles[0], tiles[3], tiles[1]]);
        assert_eq!(board.iter().collect::<Vec<_>>(), tiles);
    }

    #[test]
    fn stale_takes_precedence_over_exhausted() {
        let mut board = board(&[t(3, 0, City)]);
        let mut cursor = board.cursor();
        assert_eq!(cursor.next(&board), Ok(t(3, 0, City)));

        board.add(t(2, 1, Land));
        assert_eq!(cursor.has_next(&board), Err(Error::Stale { expected: 1, found: 2 }));
        assert_eq!(cursor.next(&board), Err(Error::Stale { expected: 1, found: 2 }));
    }

    #[test]
    fn no_op_add_leaves_cursor_valid() {
        let mut board = board(&[t(3, 0, City), t(2, 1, Land)]);
        let mut cursor = board.cursor();
        assert_eq!(cursor.next(&board), Ok(t(3, 0, City)));

        assert!(!board.add(t(3, 0, City)));
        assert_eq!(cursor.next(&board), Ok(t(2, 1, Land)));
    }

    #[test]
    fn clearing_an_empty_board_stales_cursors() {
        let mut board = board(&[]);
        let mut cursor = board.cursor();
        board.clear();
        assert_eq!(cursor.has_next(&board), Err(Error::Stale { expected: 0, found: 1 }));
    }

    #[test]
    fn cursor_rejects_another_board() {
        let a = board(&[t(0, 0, City)]);
        let b = board(&[t(9, 9, Water)]);
        assert_eq!(a.version(), b.version());

        let mut cursor = a.cursor();
        assert_eq!(cursor.has_next(&b), Err(Error::ForeignBoard));
        assert_eq!(cursor.next(&b), Err(Error::ForeignBoard));
        assert_eq!(cursor.next(&a.clone()), Err(Error::ForeignBoard));
        assert_eq!(cursor.next(&a), Ok(t(0, 0, City)));
    }

    #[test]
    fn iter_reports_exact_len() {
        let board = board(&[t(3, 0, City), t(2, 1, Land), t(4, 1, Water), t(2, 2, Forest)]);
        let mut it = board.iter();
        assert_eq!(it.len(), 4);
        it.next();
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.clone().count(), 3);
        assert_eq!(it.len(), 3);
    }
}
