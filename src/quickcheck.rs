use ::quickcheck::{Arbitrary, Gen};
use super::{Board, Coordinate, Report, Terrain, Tile};

// Coordinates come from a small window so that generated boards share rows and repeat
// coordinates often.
fn small(g: &mut Gen) -> i32 { i32::from(i8::arbitrary(g)) / 16 }

impl Arbitrary for Coordinate {
    fn arbitrary(g: &mut Gen) -> Self { Coordinate::new(small(g), small(g)) }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        Box::new((self.a(), self.b()).shrink().map(|(a, b)| Coordinate::new(a, b)))
    }
}

impl Arbitrary for Terrain {
    fn arbitrary(g: &mut Gen) -> Self { Terrain::ALL[usize::arbitrary(g) % Terrain::ALL.len()] }
}

impl Arbitrary for Tile {
    fn arbitrary(g: &mut Gen) -> Self { Tile::new(Coordinate::arbitrary(g), Terrain::arbitrary(g)) }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let terrain = self.terrain();
        Box::new(self.coordinate().shrink().map(move |c| Tile::new(c, terrain)))
    }
}

impl<R> Arbitrary for Board<R> where R: 'static + Clone + Default + Report {
    fn arbitrary(g: &mut Gen) -> Self { Vec::<Tile>::arbitrary(g).into_iter().collect() }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let tiles: Vec<Tile> = self.iter().collect();
        Box::new(tiles.shrink().map(|tiles| tiles.into_iter().collect()))
    }
}
