use crate::{Coordinate, Stone};

/// An intersection of the board, identified by its 0-based column `x`
/// and row `y`. (0, 0) is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Intersection {
    x: usize,
    y: usize,
    owner: Option<Stone>,
}

impl Intersection {
    pub(crate) fn new(x: usize, y: usize) -> Self {
        Self { x, y, owner: None }
    }

    /// The 0-based column.
    pub fn x(&self) -> usize {
        self.x
    }

    /// The 0-based row.
    pub fn y(&self) -> usize {
        self.y
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }

    /// The stone on this intersection, if any.
    pub fn owner(&self) -> Option<Stone> {
        self.owner
    }

    pub fn is_occupied(&self) -> bool {
        self.owner.is_some()
    }

    pub(crate) fn set_owner(&mut self, owner: Option<Stone>) {
        self.owner = owner;
    }
}
