/// Errors returned by board cursors and by parsing board values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `Cursor::next` was called with no tiles left.
    #[error("iterator exhausted")]
    Exhausted,

    /// The cursor's board was mutated after the cursor was created.
    #[error("iterator is stale: created at version {expected}, board is at version {found}")]
    Stale { expected: u64, found: u64 },

    /// The cursor was used with a board other than the one that created it.
    #[error("iterator used with a board other than the one that created it")]
    ForeignBoard,

    #[error("invalid hex coordinate: '{0}'")]
    InvalidCoordinate(String),

    #[error("unknown terrain: '{0}'")]
    InvalidTerrain(String),

    #[error("invalid hex tile: '{0}'")]
    InvalidTile(String),
}

/// A `Result` whose error is a board [`Error`](enum.Error.html).
pub type Result<T> = ::std::result::Result<T, Error>;
