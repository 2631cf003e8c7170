use crate::Coordinate;

/// How many stones in a row win the game.
pub const WINNING_RUN_LENGTH: usize = 5;

/// The four directions along which a winning run can be formed.
///
/// The order of [`Axis::ALL`] is the order in which the board is scanned,
/// which decides which run is reported when there is more than one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Fixed row, increasing column.
    Horizontal,
    /// Fixed column, increasing row.
    Vertical,
    /// Increasing row and column.
    DiagonalDownRight,
    /// Increasing row, decreasing column.
    DiagonalDownLeft,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDownRight,
        Axis::DiagonalDownLeft,
    ];

    /// The (column, row) delta between two neighbours on a line of this axis.
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
            Axis::DiagonalDownRight => (1, 1),
            Axis::DiagonalDownLeft => (-1, 1),
        }
    }

    /// Every maximal line of this axis on a board of the given size.
    ///
    /// Together, the lines of one axis cover each intersection exactly once.
    pub fn lines(self, size: usize) -> impl Iterator<Item = Line> {
        let starts: Vec<Coordinate> = match self {
            Axis::Horizontal => (0..size).map(|y| Coordinate::new(0, y)).collect(),
            Axis::Vertical => (0..size).map(|x| Coordinate::new(x, 0)).collect(),
            // Left edge bottom-up, then top edge left-to-right
            Axis::DiagonalDownRight => (0..size)
                .rev()
                .map(|y| Coordinate::new(0, y))
                .chain((1..size).map(|x| Coordinate::new(x, 0)))
                .collect(),
            // Top edge left-to-right, then right edge top-down
            Axis::DiagonalDownLeft => (0..size)
                .map(|x| Coordinate::new(x, 0))
                .chain((1..size).map(|y| Coordinate::new(size - 1, y)))
                .collect(),
        };
        let step = self.step();
        starts.into_iter().map(move |start| Line {
            next: Some(start),
            step,
            size,
        })
    }
}

/// The coordinates of one line across the board, from edge to edge.
#[derive(Clone, Debug)]
pub struct Line {
    next: Option<Coordinate>,
    step: (isize, isize),
    size: usize,
}

impl Iterator for Line {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let (dx, dy) = self.step;
        self.next = match (
            current.x.checked_add_signed(dx),
            current.y.checked_add_signed(dy),
        ) {
            (Some(x), Some(y)) if x < self.size && y < self.size => Some(Coordinate::new(x, y)),
            _ => None,
        };
        Some(current)
    }
}
