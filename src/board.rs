//! A hex board based on an unbalanced binary search tree.

use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::sync::atomic::{AtomicU64, Ordering};
use super::error::Result;
use super::iter::{Cursor, Iter};
use super::node::{self, Link};
use super::report::{Log, Report};
use super::tile::{Coordinate, RowMajor, Terrain, Tile};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 { NEXT_ID.fetch_add(1, Ordering::Relaxed) }

/// A collection of hex tiles with at most one tile per coordinate.
///
/// Tiles are kept in an unbalanced binary search tree ordered by [`RowMajor`], so iteration
/// visits rows top to bottom and each row left to right. Invariant violations found by
/// [`well_formed`](#method.well_formed) are sent to the board's [`Report`].
///
/// # Examples
///
/// ```
/// use hexboard::{Board, Coordinate, Terrain, Tile};
///
/// let mut board = Board::new();
/// board.add(Tile::new(Coordinate::new(4, 1), Terrain::Water));
/// board.add(Tile::new(Coordinate::new(3, 0), Terrain::City));
///
/// assert_eq!(board.len(), 2);
/// assert_eq!(board.terrain_at(&Coordinate::new(3, 0)), Some(Terrain::City));
///
/// let mut it = board.iter();
/// assert_eq!(it.next(), Some(Tile::new(Coordinate::new(3, 0), Terrain::City)));
/// assert_eq!(it.next(), Some(Tile::new(Coordinate::new(4, 1), Terrain::Water)));
/// assert_eq!(it.next(), None);
/// ```
pub struct Board<R = Log> where R: Report {
    id: u64,
    root: Link,
    len: usize,
    version: u64,
    report: R,
}

impl Board {
    /// Creates an empty board that logs invariant violations.
    pub fn new() -> Self { Board::with_report(Log) }
}

impl<R> Board<R> where R: Report {
    /// Creates an empty board that sends invariant violations to the given report.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexboard::{Board, Silent};
    ///
    /// let board = Board::with_report(Silent);
    /// assert!(board.is_empty());
    /// ```
    pub fn with_report(report: R) -> Self {
        let board = Board { id: next_id(), root: None, len: 0, version: 0, report: report };
        contract!(board, "in with_report");
        board
    }

    /// Checks if the board is empty.
    pub fn is_empty(&self) -> bool {
        contract!(self, "in is_empty");
        self.root.is_none()
    }

    /// Returns the number of tiles on the board.
    pub fn len(&self) -> usize {
        contract!(self, "in len");
        self.len
    }

    /// Returns the board's mutation counter.
    ///
    /// The counter advances whenever the board's contents change and whenever the board is
    /// cleared. It never advances on an `add` that changes nothing.
    pub fn version(&self) -> u64 {
        contract!(self, "in version");
        self.version
    }

    /// Returns a reference to the board's report.
    pub fn report(&self) -> &R { &self.report }

    /// Returns the terrain at the given coordinate, or `None` if the board has no tile there.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexboard::{Board, Coordinate, Terrain, Tile};
    ///
    /// let mut board = Board::new();
    /// assert_eq!(board.terrain_at(&Coordinate::new(2, 1)), None);
    ///
    /// board.add(Tile::new(Coordinate::new(2, 1), Terrain::Land));
    /// assert_eq!(board.terrain_at(&Coordinate::new(2, 1)), Some(Terrain::Land));
    /// ```
    pub fn terrain_at(&self, coordinate: &Coordinate) -> Option<Terrain> {
        contract!(self, "in terrain_at");
        node::get(&self.root, &RowMajor, coordinate).map(|node| node.tile().terrain())
    }

    /// Checks if the board holds exactly the given tile: its coordinate with its terrain.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexboard::{Board, Coordinate, Terrain, Tile};
    ///
    /// let mut board = Board::new();
    /// board.add(Tile::new(Coordinate::new(2, 1), Terrain::Land));
    ///
    /// assert!(board.contains(&Tile::new(Coordinate::new(2, 1), Terrain::Land)));
    /// assert!(!board.contains(&Tile::new(Coordinate::new(2, 1), Terrain::Water)));
    /// ```
    pub fn contains(&self, tile: &Tile) -> bool {
        contract!(self, "in contains");
        self.terrain_at(&tile.coordinate()) == Some(tile.terrain())
    }

    /// Puts a tile on the board, replacing the terrain already at its coordinate, if any.
    ///
    /// Returns `true` if the board changed: either the coordinate was new or its terrain was
    /// different.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexboard::{Board, Coordinate, Terrain, Tile};
    ///
    /// let mut board = Board::new();
    /// let at = Coordinate::new(4, 1);
    ///
    /// assert!(board.add(Tile::new(at, Terrain::Water)));
    /// assert!(!board.add(Tile::new(at, Terrain::Water)));
    /// assert!(board.add(Tile::new(at, Terrain::Forest)));
    ///
    /// assert_eq!(board.len(), 1);
    /// assert_eq!(board.terrain_at(&at), Some(Terrain::Forest));
    /// ```
    pub fn add(&mut self, tile: Tile) -> bool {
        contract!(self, "in add");

        let changed = match node::insert(&mut self.root, &RowMajor, tile.coordinate(), tile.terrain()) {
            Some(old) if old == tile.terrain() => false,
            Some(_) => true,
            None => { self.len += 1; true }
        };

        if changed {
            self.version += 1;
            log::trace!("added {} (len {}, version {})", tile, self.len, self.version);
        }

        contract!(self, "after add");
        changed
    }

    /// Parses a tile such as `<2,1>Land` and puts it on the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexboard::{Board, Coordinate, Terrain};
    ///
    /// let mut board = Board::new();
    /// assert_eq!(board.add_str("<2,1>Land"), Ok(true));
    /// assert!(board.add_str("<2,1>Lava").is_err());
    /// assert_eq!(board.terrain_at(&Coordinate::new(2, 1)), Some(Terrain::Land));
    /// ```
    pub fn add_str(&mut self, s: &str) -> Result<bool> {
        let tile = s.parse::<Tile>()?;
        Ok(self.add(tile))
    }

    /// Removes all tiles from the board.
    ///
    /// Clearing always advances the mutation counter, so it invalidates every outstanding
    /// cursor even when the board was already empty.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
        self.version += 1;
        log::trace!("cleared (version {})", self.version);
        contract!(self, "after clear");
    }

    /// Returns an iterator over the board's tiles in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexboard::Board;
    ///
    /// let board: Board = vec!["<2,2>Forest", "<3,0>City", "<2,1>Land"]
    ///     .into_iter().map(|s| s.parse().unwrap()).collect();
    ///
    /// let tiles: Vec<String> = board.iter().map(|t| t.to_string()).collect();
    /// assert_eq!(tiles, ["<3,0>City", "<2,1>Land", "<2,2>Forest"]);
    /// ```
    pub fn iter(&self) -> Iter<'_, R> {
        contract!(self, "in iter");
        Iter::new(self)
    }

    /// Returns a cursor over the board's tiles in row-major order.
    ///
    /// Unlike [`iter`](#method.iter), the cursor does not borrow the board. It fails with
    /// [`Error::Stale`](enum.Error.html#variant.Stale) once the board has been mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexboard::{Board, Error};
    ///
    /// let mut board = Board::new();
    /// board.add_str("<3,0>City").unwrap();
    ///
    /// let mut cursor = board.cursor();
    /// assert_eq!(cursor.has_next(&board), Ok(true));
    ///
    /// board.add_str("<2,1>Land").unwrap();
    /// assert!(matches!(cursor.next(&board), Err(Error::Stale { .. })));
    /// ```
    pub fn cursor(&self) -> Cursor {
        contract!(self, "in cursor");
        Cursor::new(self)
    }

    /// Checks the board's invariant: its tree is a search tree under [`RowMajor`] with no
    /// repeated coordinates, and its length matches the number of nodes.
    ///
    /// The first violation found is sent to the board's report.
    pub fn well_formed(&self) -> bool {
        if !node::in_order(&self.root, &RowMajor, None, None) {
            self.report.report("Tree is out of proper order.");
            return false;
        }

        let count = node::count(&self.root);

        if self.len != count {
            self.report.report(&format!("Size disparity. Field: {}\tMethod: {}", self.len, count));
            return false;
        }

        true
    }

    pub(crate) fn root(&self) -> &Link { &self.root }

    // Distinguishes this board from every other board, clones included.
    pub(crate) fn id(&self) -> u64 { self.id }
}

impl<R> Clone for Board<R> where R: Report + Clone {
    fn clone(&self) -> Self {
        Board {
            id: next_id(),
            root: self.root.clone(),
            len: self.len,
            version: self.version,
            report: self.report.clone(),
        }
    }
}

impl<R> Debug for Board<R> where R: Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<R> Default for Board<R> where R: Report + Default {
    fn default() -> Self { Board::with_report(R::default()) }
}

impl<R> Extend<Tile> for Board<R> where R: Report {
    fn extend<I: IntoIterator<Item=Tile>>(&mut self, it: I) {
        for tile in it { self.add(tile); }
    }
}

impl<R> FromIterator<Tile> for Board<R> where R: Report + Default {
    fn from_iter<I: IntoIterator<Item=Tile>>(it: I) -> Self {
        let mut board = Board::default();
        board.extend(it);
        board
    }
}

impl<'a, R> IntoIterator for &'a Board<R> where R: Report {
    type Item = Tile;
    type IntoIter = Iter<'a, R>;
    fn into_iter(self) -> Iter<'a, R> { self.iter() }
}

impl<R> PartialEq for Board<R> where R: Report {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<R> Eq for Board<R> where R: Report {}

impl<R> Hash for Board<R> where R: Report {
    fn hash<H: Hasher>(&self, h: &mut H) {
        for tile in self { tile.hash(h); }
    }
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;
    use super::Board;
    use crate::iter::Cursor;
    use crate::node::{Link, n};
    use crate::report::Report;
    use crate::tile::{Coordinate, Terrain, Tile};
    use crate::tile::Terrain::*;

    #[derive(Default)]
    struct Record(RefCell<Vec<String>>);

    impl Report for Record {
        fn report(&self, message: &str) { self.0.borrow_mut().push(message.to_owned()); }
    }

    fn h(a: i32, b: i32) -> Coordinate { Coordinate::new(a, b) }

    fn leaf(c: Coordinate, t: Terrain) -> Link { n(c, t, None, None) }

    fn well_formed(root: Link, len: usize) -> bool {
        let record = Record::default();
        let mut board = Board::with_report(&record);
        board.root = root;
        board.len = len;
        let result = board.well_formed();
        assert_eq!(record.0.borrow().len(), if result { 0 } else { 1 });
        result
    }

    #[test]
    fn empty_board_needs_zero_len() {
        assert!(well_formed(None, 0));
        assert!(!well_formed(None, 1));
    }

    #[test]
    fn single_tile_needs_len_one() {
        assert!(!well_formed(leaf(h(3, 2), Forest), 0));
        assert!(well_formed(leaf(h(3, 2), Forest), 1));
        assert!(!well_formed(leaf(h(3, 2), Forest), 2));
    }

    #[test]
    fn order_is_checked_before_len() {
        assert!(!well_formed(n(h(3, 0), City, leaf(h(3, 0), City), None), 2));
        assert!(well_formed(n(h(2, 1), City, leaf(h(3, 0), City), None), 2));
        assert!(!well_formed(n(h(2, 1), City, leaf(h(3, 0), City), None), 1));

        assert!(!well_formed(n(h(3, 0), City, None, leaf(h(3, 0), City)), 2));
        assert!(well_formed(n(h(3, 0), City, None, leaf(h(2, 1), City)), 2));
        assert!(!well_formed(n(h(3, 0), City, leaf(h(3, 0), City), leaf(h(2, 1), City)), 3));
        assert!(well_formed(n(h(4, 0), City, leaf(h(3, 0), City), leaf(h(2, 1), City)), 3));
    }

    #[test]
    fn len_must_count_every_node() {
        let tree = || n(h(2, 1), City, leaf(h(3, 0), City), leaf(h(3, 1), City));
        assert!(!well_formed(tree(), 4));
        assert!(well_formed(tree(), 3));

        let spine = n(h(3, 0), City, None,
                      n(h(3, 1), City, leaf(h(2, 1), City),
                        n(h(2, 2), City, None, leaf(h(3, 2), City))));
        assert!(!well_formed(spine.clone(), 6));
        assert!(well_formed(spine, 5));
    }

    #[test]
    fn reports_the_first_violation_only() {
        let record = Record::default();
        let mut board = Board::with_report(&record);
        board.root = n(h(3, 0), City, leaf(h(3, 0), City), None);
        board.len = 7;

        assert!(!board.well_formed());
        assert_eq!(*record.0.borrow(), ["Tree is out of proper order."]);

        board.root = leaf(h(3, 0), City);
        assert!(!board.well_formed());
        assert_eq!(record.0.borrow()[1], "Size disparity. Field: 7\tMethod: 1");
    }

    #[test]
    fn operations_keep_the_board_well_formed() {
        let record = Record::default();
        let mut board = Board::with_report(&record);

        for &(a, b) in &[(3, 1), (2, 1), (4, 1), (3, 0), (2, 2), (3, 1), (-5, 7)] {
            board.add(Tile::new(h(a, b), Land));
            assert!(board.well_formed());
        }

        board.clear();
        assert!(board.well_formed());
        assert!(record.0.borrow().is_empty());
    }

    #[test]
    fn deep_boards_drop_cleanly() {
        let mut spine = None;
        for a in 0..100_000 { spine = n(h(a, 0), City, spine, None); }

        let mut board = Board::new();
        board.root = spine;
        board.len = 100_000;
        board.clear();
        assert!(board.is_empty());
    }

    fn out_of_order(record: &Record) -> Board<&Record> {
        let mut board = Board::with_report(record);
        board.root = n(h(3, 0), City, leaf(h(3, 0), City), None);
        board.len = 2;
        board
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "contracts"))]
    #[should_panic(expected = "invariant violated in is_empty")]
    fn is_empty_checks_the_invariant() {
        out_of_order(&Record::default()).is_empty();
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "contracts"))]
    #[should_panic(expected = "invariant violated in version")]
    fn version_checks_the_invariant() {
        out_of_order(&Record::default()).version();
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "contracts"))]
    #[should_panic(expected = "invariant violated in contains")]
    fn contains_checks_the_invariant() {
        out_of_order(&Record::default()).contains(&Tile::new(h(3, 0), City));
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "contracts"))]
    #[should_panic(expected = "invariant violated in has_next")]
    fn cursor_checks_the_invariant() {
        let record = Record::default();
        let mut board = Board::with_report(&record);
        board.add(Tile::new(h(3, 0), City));
        let mut cursor: Cursor = board.cursor();

        board.root = n(h(3, 0), City, leaf(h(3, 0), City), None);
        board.len = 2;
        let _ = cursor.has_next(&board);
    }

    #[test]
    fn clones_are_deep_and_independent() {
        let mut spine = None;
        for a in 0..100_000 { spine = n(h(a, 0), City, spine, None); }

        let mut board = Board::new();
        board.root = spine;
        board.len = 100_000;

        let mut copy = board.clone();
        assert_ne!(copy.id, board.id);
        assert_eq!(copy.len, 100_000);
        assert_eq!(crate::node::count(&copy.root), 100_000);

        copy.clear();
        assert_eq!(crate::node::count(&board.root), 100_000);
        board.clear();
    }
}
