use ::ordered_iter::OrderedSetIterator;
use super::{Iter, Report};

impl<'a, R> OrderedSetIterator for Iter<'a, R> where R: Report {}

#[cfg(test)]
mod test {
    use ::ordered_iter::OrderedSetIterator;
    use crate::Board;

    fn ordered<I>(it: I) -> I where I: OrderedSetIterator { it }

    #[test]
    fn board_iter_is_ordered() {
        let mut board = Board::new();
        board.add_str("<1,1>Land").unwrap();
        assert_eq!(ordered(board.iter()).count(), 1);
    }
}
