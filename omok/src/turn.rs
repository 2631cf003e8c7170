use tracing::trace;

use crate::{Board, Coordinate, IllegalPlacement, Intersection, Stone};

/// Summarizes the outcome of placing a stone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The game goes on with the other player.
    Normal,
    /// The stone completed five in a row.
    Won { winning_row: Vec<Intersection> },
    /// The stone filled the last intersection without completing five in a row.
    Drawn,
}

/// Places the stone and determines whether the game is over.
///
/// If the coordinate is off the board or already occupied, the board is not
/// changed and the same player should be asked again.
pub fn execute_turn(
    board: &mut Board,
    stone: Stone,
    coordinate: Coordinate,
) -> Result<TurnOutcome, IllegalPlacement> {
    board.try_place_stone(coordinate.x, coordinate.y, stone)?;
    trace!(%stone, %coordinate, "Placed stone");

    if let Some(winning_row) = board.winning_row_of(stone) {
        return Ok(TurnOutcome::Won { winning_row });
    }
    if board.is_full() {
        return Ok(TurnOutcome::Drawn);
    }
    Ok(TurnOutcome::Normal)
}
