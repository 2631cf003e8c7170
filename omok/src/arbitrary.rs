use crate::{Axis, Board, Coordinate, Stone};

/// A board of random size with stones at random intersections.
#[derive(Clone, Debug)]
pub struct BoardInput {
    pub size: usize,
    // May contain the same coordinate more than once, the last stone wins
    pub stones: Vec<(usize, usize, Stone)>,
}

impl BoardInput {
    pub fn to_board(&self) -> Board {
        let mut board = Board::new(self.size).unwrap();
        for &(x, y, stone) in &self.stones {
            board.place_stone(x, y, stone).unwrap();
        }
        board
    }
}

impl quickcheck::Arbitrary for BoardInput {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let size = (u8::arbitrary(g) % 12) as usize + 1;
        // Dense boards make long runs likely, sparse ones make them rare
        let num_stones = usize::arbitrary(g) % (size * size * 2 + 1);
        let stones = (0..num_stones)
            .map(|_| {
                let x = usize::arbitrary(g) % size;
                let y = usize::arbitrary(g) % size;
                (x, y, Stone::arbitrary(g))
            })
            .collect();
        BoardInput { size, stones }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let size = self.size;
        Box::new(
            self.stones
                .shrink()
                .map(move |stones| BoardInput { size, stones }),
        )
    }
}

/// A contiguous run of coordinates along a single axis.
#[derive(Clone, Debug)]
pub struct StraightRunInput {
    pub size: usize,
    pub run: Vec<Coordinate>,
}

impl quickcheck::Arbitrary for StraightRunInput {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let size = (u8::arbitrary(g) % 11) as usize + 5;
        let axis = Axis::arbitrary(g);
        let lines: Vec<Vec<Coordinate>> = axis.lines(size).map(|line| line.collect()).collect();
        let line = &lines[usize::arbitrary(g) % lines.len()];
        let start = usize::arbitrary(g) % line.len();
        let len = usize::arbitrary(g) % (line.len() - start) + 1;
        StraightRunInput {
            size,
            run: line[start..start + len].to_vec(),
        }
    }
}

impl quickcheck::Arbitrary for Axis {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Axis::ALL).unwrap()
    }
}

impl quickcheck::Arbitrary for Stone {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Stone::Black, Stone::White]).unwrap()
    }
}
