//! The values stored on a board: coordinates, terrain and the tiles pairing them.

use compare::Compare;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use super::error::Error;

/// An axial hex coordinate: column `a` and row `b`.
///
/// Coordinates are ordered row-major: by row first, then by column.
///
/// # Examples
///
/// ```
/// use hexboard::Coordinate;
///
/// assert!(Coordinate::new(5, 0) < Coordinate::new(0, 5));
/// assert!(Coordinate::new(2, 1) < Coordinate::new(3, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    a: i32,
    b: i32,
}

impl Coordinate {
    /// Creates the coordinate at column `a`, row `b`.
    pub fn new(a: i32, b: i32) -> Self { Coordinate { a: a, b: b } }

    /// Returns the coordinate's column.
    pub fn a(&self) -> i32 { self.a }

    /// Returns the coordinate's row.
    pub fn b(&self) -> i32 { self.b }
}

/// The row-major comparator: rows top to bottom, then columns left to right.
///
/// This is the only ordering used by a board, both for its tree shape and its iteration order.
///
/// # Examples
///
/// ```
/// # extern crate compare;
/// # extern crate hexboard;
/// # fn main() {
/// use compare::Compare;
/// use hexboard::{Coordinate, RowMajor};
///
/// assert!(RowMajor.compares_lt(&Coordinate::new(-4, -4), &Coordinate::new(-2, -4)));
/// assert!(RowMajor.compares_eq(&Coordinate::new(2, 1), &Coordinate::new(2, 1)));
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RowMajor;

impl Compare<Coordinate> for RowMajor {
    fn compare(&self, l: &Coordinate, r: &Coordinate) -> Ordering {
        l.b.cmp(&r.b).then(l.a.cmp(&r.a))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering { RowMajor.compare(self, other) }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "<{},{}>", self.a, self.b) }
}

impl FromStr for Coordinate {
    type Err = Error;

    /// Parses `<a,b>`, allowing whitespace around either number.
    fn from_str(s: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidCoordinate(s.to_owned());

        let inner = s.trim().strip_prefix('<').and_then(|s| s.strip_suffix('>')).ok_or_else(invalid)?;
        let (a, b) = inner.split_once(',').ok_or_else(invalid)?;
        let a = a.trim().parse().map_err(|_| invalid())?;
        let b = b.trim().parse().map_err(|_| invalid())?;
        Ok(Coordinate::new(a, b))
    }
}

/// The kind of ground on a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Terrain {
    City,
    Forest,
    Water,
    Land,
    Desert,
    Mountain,
    Inaccessible,
}

impl Terrain {
    /// Every terrain, in declaration order.
    pub const ALL: [Terrain; 7] = [
        Terrain::City,
        Terrain::Forest,
        Terrain::Water,
        Terrain::Land,
        Terrain::Desert,
        Terrain::Mountain,
        Terrain::Inaccessible,
    ];

    /// Returns the terrain's name.
    pub fn name(&self) -> &'static str {
        match *self {
            Terrain::City => "City",
            Terrain::Forest => "Forest",
            Terrain::Water => "Water",
            Terrain::Land => "Land",
            Terrain::Desert => "Desert",
            Terrain::Mountain => "Mountain",
            Terrain::Inaccessible => "Inaccessible",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for Terrain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let name = s.trim();
        Terrain::ALL.iter().cloned().find(|t| t.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::InvalidTerrain(s.to_owned()))
    }
}

/// A snapshot of one board position: a coordinate and its terrain.
///
/// Tiles compare by coordinate first (row-major), then by terrain.
///
/// # Examples
///
/// ```
/// use hexboard::{Coordinate, Terrain, Tile};
///
/// let tile: Tile = "<3,0>City".parse().unwrap();
/// assert_eq!(tile, Tile::new(Coordinate::new(3, 0), Terrain::City));
/// assert_eq!(tile.to_string(), "<3,0>City");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile {
    coordinate: Coordinate,
    terrain: Terrain,
}

impl Tile {
    /// Creates a tile with the given terrain at the given coordinate.
    pub fn new(coordinate: Coordinate, terrain: Terrain) -> Self {
        Tile { coordinate: coordinate, terrain: terrain }
    }

    /// Returns the tile's coordinate.
    pub fn coordinate(&self) -> Coordinate { self.coordinate }

    /// Returns the tile's terrain.
    pub fn terrain(&self) -> Terrain { self.terrain }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.coordinate, self.terrain)
    }
}

impl FromStr for Tile {
    type Err = Error;

    /// Parses a coordinate immediately followed by a terrain name, e.g. `<2,1>Land`.
    fn from_str(s: &str) -> Result<Self, Error> {
        let invalid = |_: Error| Error::InvalidTile(s.to_owned());

        let s = s.trim();
        let split = s.find('>').map(|i| i + 1).ok_or_else(|| Error::InvalidTile(s.to_owned()))?;
        let coordinate = s[..split].parse::<Coordinate>().map_err(invalid)?;
        let terrain = s[split..].parse::<Terrain>().map_err(invalid)?;
        Ok(Tile::new(coordinate, terrain))
    }
}
