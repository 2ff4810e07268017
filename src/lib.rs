//! A hex-tile board based on an unbalanced binary search tree.
//!
//! A [`Board`] maps each [`Coordinate`] to at most one [`Terrain`]. Its tiles are kept in
//! row-major order ([`RowMajor`]) and can be visited either through a borrowing [`Iter`] or
//! through a detached [`Cursor`] that detects mutation of the board.
//!
//! # Examples
//!
//! ```
//! use hexboard::{Board, Coordinate, Terrain, Tile};
//!
//! let mut board = Board::new();
//!
//! for s in &["<3,0>City", "<2,1>Land", "<4,1>Water", "<2,2>Forest"] {
//!     board.add_str(s).unwrap();
//! }
//!
//! assert_eq!(board.len(), 4);
//! assert_eq!(board.terrain_at(&Coordinate::new(2, 1)), Some(Terrain::Land));
//!
//! assert!(!board.add(Tile::new(Coordinate::new(4, 1), Terrain::Water)));
//! assert!(board.add(Tile::new(Coordinate::new(4, 1), Terrain::Forest)));
//! assert_eq!(board.len(), 4);
//! ```

// Pre- and postconditions of the public operations. Compiled in for debug builds, or for any
// build with the `contracts` feature.
macro_rules! contract {
    ($board:expr, $context:expr) => {
        if cfg!(any(debug_assertions, feature = "contracts")) {
            assert!($board.well_formed(), "invariant violated {}", $context);
        }
    }
}

mod board;
mod error;
mod iter;
mod node;
pub mod report;
mod tile;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use board::Board;
pub use error::{Error, Result};
pub use iter::{Cursor, Iter};
pub use report::{Log, Report, Silent};
pub use tile::{Coordinate, RowMajor, Terrain, Tile};
