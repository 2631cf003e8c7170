use crate::{BoardError, Stone};

/// The error type for [`Board::try_place_stone()`](crate::Board::try_place_stone),
/// i.e. for a candidate coordinate that cannot take a stone.
///
/// This is an expected condition during play: the turn loop reports it and
/// asks the same player again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalPlacement {
    Occupied { x: usize, y: usize, owner: Stone },
    OffTheBoard(BoardError),
}

impl std::error::Error for IllegalPlacement {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalPlacement::OffTheBoard(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::Occupied { x, y, owner } => write!(
                f,
                "Intersection ({}, {}) is already occupied by a {} stone",
                x, y, owner
            ),
            IllegalPlacement::OffTheBoard(_) => {
                write!(f, "Tried to place a stone off the board")
            }
        }
    }
}

impl From<BoardError> for IllegalPlacement {
    fn from(err: BoardError) -> Self {
        IllegalPlacement::OffTheBoard(err)
    }
}
