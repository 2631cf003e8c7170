mod error;
mod intersection;
mod scan;

use std::ops::Deref;

pub use error::*;
pub use intersection::*;
pub use scan::*;

use crate::{Coordinate, IllegalPlacement, PlacedStone, Stone};

pub const DEFAULT_BOARD_SIZE: usize = 10;

/// An Omok board of `size x size` intersections.
///
/// Intersections are addressed by a 0-based column `x` and row `y`, with
/// (0, 0) at the top-left and (size - 1, size - 1) at the bottom-right.
/// Every query and mutation is bounds-checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major, i.e. the intersection (x, y) is at index `y * size + x`.
    intersections: Vec<Intersection>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidDimension { size });
        }
        Ok(Self::empty(size))
    }

    // Callers make sure that the size is positive.
    fn empty(size: usize) -> Self {
        let intersections = (0..size)
            .flat_map(|y| (0..size).map(move |x| Intersection::new(x, y)))
            .collect();
        Self {
            size,
            intersections,
        }
    }

    /// Creates a board with the given stones on it, e.g. from a
    /// [`Request::PlaceStone`](crate::Request::PlaceStone).
    pub fn from_stones(size: usize, stones: &[PlacedStone]) -> Result<Self, BoardError> {
        let mut board = Self::new(size)?;
        for &PlacedStone { x, y, stone } in stones {
            board.place_stone(x, y, stone)?;
        }
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Removes all the stones from the board.
    pub fn clear(&mut self) {
        for intersection in self.intersections.iter_mut() {
            intersection.set_owner(None);
        }
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if x >= self.size || y >= self.size {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(y * self.size + x)
    }

    pub fn intersection(&self, x: usize, y: usize) -> Result<&Intersection, BoardError> {
        let idx = self.index(x, y)?;
        Ok(&self.intersections[idx])
    }

    pub fn is_empty(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        Ok(!self.is_occupied(x, y)?)
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        Ok(self.intersection(x, y)?.is_occupied())
    }

    pub fn is_occupied_by(&self, x: usize, y: usize, stone: Stone) -> Result<bool, BoardError> {
        Ok(self.owner_at(x, y)? == Some(stone))
    }

    /// The stone at the given intersection, or `None` if it is empty.
    pub fn owner_at(&self, x: usize, y: usize) -> Result<Option<Stone>, BoardError> {
        Ok(self.intersection(x, y)?.owner())
    }

    /// Are all intersections occupied?
    pub fn is_full(&self) -> bool {
        self.intersections.iter().all(Intersection::is_occupied)
    }

    /// The number of stones on the board.
    pub fn stone_count(&self) -> usize {
        self.intersections
            .iter()
            .filter(|intersection| intersection.is_occupied())
            .count()
    }

    /// Puts a stone on the given intersection, replacing whatever was there.
    ///
    /// This does not check that the intersection was empty. Use
    /// [`Self::try_place_stone()`] for moves made by players.
    pub fn place_stone(&mut self, x: usize, y: usize, stone: Stone) -> Result<(), BoardError> {
        let idx = self.index(x, y)?;
        self.intersections[idx].set_owner(Some(stone));
        Ok(())
    }

    /// Puts a stone on the given intersection if it is on the board and empty.
    ///
    /// The board is left untouched when an error is returned.
    pub fn try_place_stone(
        &mut self,
        x: usize,
        y: usize,
        stone: Stone,
    ) -> Result<(), IllegalPlacement> {
        let idx = self.index(x, y)?;
        let intersection = &mut self.intersections[idx];
        if let Some(owner) = intersection.owner() {
            return Err(IllegalPlacement::Occupied { x, y, owner });
        }
        intersection.set_owner(Some(stone));
        Ok(())
    }

    /// Does the player with the given stone have five (or more) in a row?
    pub fn is_won_by(&self, stone: Stone) -> bool {
        self.find_run(Some(stone)).is_some()
    }

    /// The five intersections of the first winning run found on the board,
    /// regardless of which stone it belongs to.
    ///
    /// Axes are scanned in the order of [`Axis::ALL`], and the intersections
    /// are returned in the order they were scanned.
    pub fn winning_row(&self) -> Option<Vec<Intersection>> {
        self.find_run(None)
    }

    /// Like [`Self::winning_row()`], but only considers runs of the given stone.
    pub fn winning_row_of(&self, stone: Stone) -> Option<Vec<Intersection>> {
        self.find_run(Some(stone))
    }

    // Walks every line of every axis, keeping track of the current run of
    // same-owner intersections. A run is broken by an empty intersection, by
    // a change of owner, or (when `target` is set) by any other stone.
    fn find_run(&self, target: Option<Stone>) -> Option<Vec<Intersection>> {
        let mut run: Vec<Intersection> = Vec::with_capacity(WINNING_RUN_LENGTH);
        for axis in Axis::ALL {
            for line in axis.lines(self.size) {
                run.clear();
                for Coordinate { x, y } in line {
                    let intersection = self.intersections[y * self.size + x];
                    match intersection.owner() {
                        Some(owner) if target.map_or(true, |stone| stone == owner) => {
                            if run.last().and_then(Intersection::owner) != Some(owner) {
                                run.clear();
                            }
                            run.push(intersection);
                            if run.len() == WINNING_RUN_LENGTH {
                                return Some(run);
                            }
                        }
                        _ => run.clear(),
                    }
                }
            }
        }
        None
    }

    /// All coordinates of the board, in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.intersections.iter().map(Intersection::coordinate)
    }

    /// The coordinates where a stone may still be placed, in row-major order.
    pub fn empty_coordinates(&self) -> Vec<Coordinate> {
        self.intersections
            .iter()
            .filter(|intersection| !intersection.is_occupied())
            .map(Intersection::coordinate)
            .collect()
    }

    /// The occupied intersections, in row-major order.
    pub fn to_stones_vec(&self) -> Vec<PlacedStone> {
        self.intersections
            .iter()
            .filter_map(|intersection| {
                intersection.owner().map(|stone| PlacedStone {
                    x: intersection.x(),
                    y: intersection.y(),
                    stone,
                })
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE)
    }
}

impl Deref for Board {
    type Target = [Intersection];

    fn deref(&self) -> &Self::Target {
        &self.intersections
    }
}
