use omok::{Board, Coordinate, Stone};
use tracing::trace;

/// Whether a player's moves come from a person or from a program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Interactive,
    Automated,
}

/// One side of a game.
pub trait Player {
    fn name(&self) -> &str;
    fn stone(&self) -> Stone;
    fn kind(&self) -> PlayerKind;

    /// Asks for the intersection where the next stone should go.
    ///
    /// The coordinate is not validated here. The turn loop rejects occupied
    /// or off-board coordinates and asks again.
    fn request_placement(&mut self, board: &Board) -> anyhow::Result<Coordinate>;

    /// Should this player be shown the advisor's suggestions?
    fn is_advisory_eligible(&self) -> bool {
        self.kind() == PlayerKind::Interactive
    }

    /// Called at the start of every game.
    fn new_game(&mut self, _board_size: usize) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Where an interactive player's coordinates come from.
pub trait Input {
    fn request_coordinate(
        &mut self,
        board: &Board,
        player_name: &str,
    ) -> anyhow::Result<Coordinate>;
}

/// Picks moves for an automated player, or suggests them in advisory mode.
pub trait Strategy {
    fn name(&self) -> &str;

    fn new_game(&mut self, _stone: Stone, _board_size: usize) -> anyhow::Result<()> {
        Ok(())
    }

    /// Picks an intersection for a stone of the given color.
    fn choose_move(&mut self, board: &Board, stone: Stone) -> anyhow::Result<Coordinate>;
}

pub struct InteractivePlayer<I> {
    name: String,
    stone: Stone,
    input: I,
}

impl<I: Input> InteractivePlayer<I> {
    pub fn new(name: impl Into<String>, stone: Stone, input: I) -> Self {
        Self {
            name: name.into(),
            stone,
            input,
        }
    }
}

impl<I: Input> Player for InteractivePlayer<I> {
    fn name(&self) -> &str {
        &self.name
    }

    fn stone(&self) -> Stone {
        self.stone
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Interactive
    }

    fn request_placement(&mut self, board: &Board) -> anyhow::Result<Coordinate> {
        self.input.request_coordinate(board, &self.name)
    }
}

pub struct AutomatedPlayer<S> {
    stone: Stone,
    strategy: S,
}

impl<S: Strategy> AutomatedPlayer<S> {
    pub fn new(stone: Stone, strategy: S) -> Self {
        Self { stone, strategy }
    }
}

impl<S: Strategy> Player for AutomatedPlayer<S> {
    fn name(&self) -> &str {
        self.strategy.name()
    }

    fn stone(&self) -> Stone {
        self.stone
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Automated
    }

    fn request_placement(&mut self, board: &Board) -> anyhow::Result<Coordinate> {
        let coordinate = self.strategy.choose_move(board, self.stone)?;
        trace!(player = self.strategy.name(), %coordinate, "Strategy chose");
        Ok(coordinate)
    }

    fn new_game(&mut self, board_size: usize) -> anyhow::Result<()> {
        self.strategy.new_game(self.stone, board_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedInput(Coordinate);

    impl Input for FixedInput {
        fn request_coordinate(&mut self, _: &Board, _: &str) -> anyhow::Result<Coordinate> {
            Ok(self.0)
        }
    }

    struct FirstEmpty {
        stones_seen: Vec<Stone>,
    }

    impl Strategy for FirstEmpty {
        fn name(&self) -> &str {
            "first-empty"
        }

        fn choose_move(&mut self, board: &Board, stone: Stone) -> anyhow::Result<Coordinate> {
            self.stones_seen.push(stone);
            board
                .empty_coordinates()
                .first()
                .copied()
                .ok_or_else(|| anyhow::anyhow!("Board is full"))
        }
    }

    #[test]
    fn interactive_player_delegates_to_input() {
        let input = FixedInput(Coordinate::new(2, 3));
        let mut player = InteractivePlayer::new("Tadeo", Stone::Black, input);
        let board = Board::new(5).unwrap();
        assert_eq!(player.name(), "Tadeo");
        assert_eq!(player.stone(), Stone::Black);
        assert!(player.is_advisory_eligible());
        assert_eq!(player.request_placement(&board).unwrap(), Coordinate::new(2, 3));
    }

    #[test]
    fn automated_player_passes_its_own_stone() {
        let mut player = AutomatedPlayer::new(Stone::White, FirstEmpty { stones_seen: vec![] });
        let mut board = Board::new(3).unwrap();
        board.place_stone(0, 0, Stone::Black).unwrap();
        assert_eq!(player.name(), "first-empty");
        assert!(!player.is_advisory_eligible());
        assert_eq!(player.request_placement(&board).unwrap(), Coordinate::new(1, 0));
        assert_eq!(player.strategy.stones_seen, vec![Stone::White]);
    }
}
