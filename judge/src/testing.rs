use std::collections::VecDeque;

use omok::{Board, Coordinate, Stone};

use crate::player::{Player, PlayerKind, Strategy};
use crate::ui::UserInterface;

pub fn coords(pairs: &[(usize, usize)]) -> Vec<Coordinate> {
    pairs.iter().map(|&(x, y)| Coordinate::new(x, y)).collect()
}

/// A player that answers from a fixed list of coordinates.
pub struct ScriptedPlayer {
    pub name: String,
    pub stone: Stone,
    pub kind: PlayerKind,
    pub moves: VecDeque<Coordinate>,
    pub requests: usize,
    pub new_games: usize,
}

impl ScriptedPlayer {
    pub fn human(name: &str, stone: Stone, moves: Vec<Coordinate>) -> Self {
        Self::new(name, stone, PlayerKind::Interactive, moves)
    }

    pub fn bot(name: &str, stone: Stone, moves: Vec<Coordinate>) -> Self {
        Self::new(name, stone, PlayerKind::Automated, moves)
    }

    fn new(name: &str, stone: Stone, kind: PlayerKind, moves: Vec<Coordinate>) -> Self {
        Self {
            name: String::from(name),
            stone,
            kind,
            moves: VecDeque::from(moves),
            requests: 0,
            new_games: 0,
        }
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn stone(&self) -> Stone {
        self.stone
    }

    fn kind(&self) -> PlayerKind {
        self.kind
    }

    fn request_placement(&mut self, _board: &Board) -> anyhow::Result<Coordinate> {
        self.requests += 1;
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("{} ran out of moves", self.name))
    }

    fn new_game(&mut self, _board_size: usize) -> anyhow::Result<()> {
        self.new_games += 1;
        Ok(())
    }
}

/// Always suggests the same coordinate.
pub struct FixedStrategy {
    pub name: String,
    pub coordinate: Coordinate,
    pub stones_seen: Vec<Stone>,
}

impl FixedStrategy {
    pub fn new(name: &str, coordinate: Coordinate) -> Self {
        Self {
            name: String::from(name),
            coordinate,
            stones_seen: Vec::new(),
        }
    }
}

impl Strategy for FixedStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, _board: &Board, stone: Stone) -> anyhow::Result<Coordinate> {
        self.stones_seen.push(stone);
        Ok(self.coordinate)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    Board(Board),
    Message(String),
    Victory(String),
    Defeat,
    Draw,
    GameModeRequested,
    NameRequested(usize),
}

/// Records everything that is shown, and answers mode/name requests from queues.
#[derive(Default)]
pub struct RecordingUi {
    pub events: Vec<UiEvent>,
    pub modes: VecDeque<i32>,
    pub names: VecDeque<String>,
}

impl RecordingUi {
    pub fn with_modes(modes: &[i32]) -> Self {
        Self {
            modes: modes.iter().copied().collect(),
            ..Default::default()
        }
    }

    pub fn rendered_boards(&self) -> Vec<&Board> {
        self.events
            .iter()
            .filter_map(|event| match event {
                UiEvent::Board(board) => Some(board),
                _ => None,
            })
            .collect()
    }

    pub fn final_board(&self) -> Option<&Board> {
        self.rendered_boards().last().copied()
    }
}

impl UserInterface for RecordingUi {
    fn render_board(&mut self, board: &Board) -> anyhow::Result<()> {
        self.events.push(UiEvent::Board(board.clone()));
        Ok(())
    }

    fn show_message(&mut self, message: &str) -> anyhow::Result<()> {
        self.events.push(UiEvent::Message(String::from(message)));
        Ok(())
    }

    fn show_victory(&mut self, winner_name: &str) -> anyhow::Result<()> {
        self.events.push(UiEvent::Victory(String::from(winner_name)));
        Ok(())
    }

    fn show_defeat(&mut self) -> anyhow::Result<()> {
        self.events.push(UiEvent::Defeat);
        Ok(())
    }

    fn show_draw(&mut self) -> anyhow::Result<()> {
        self.events.push(UiEvent::Draw);
        Ok(())
    }

    fn request_game_mode(&mut self) -> anyhow::Result<i32> {
        self.events.push(UiEvent::GameModeRequested);
        self.modes
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No more game modes"))
    }

    fn request_player_name(&mut self, slot: usize) -> anyhow::Result<String> {
        self.events.push(UiEvent::NameRequested(slot));
        Ok(self
            .names
            .pop_front()
            .unwrap_or_else(|| format!("Player {}", slot)))
    }
}
