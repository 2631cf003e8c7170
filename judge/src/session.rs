use omok::Stone;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::game::{play_game, GameResult};
use crate::mode::GameMode;
use crate::player::{Player, PlayerKind, Strategy};
use crate::ui::UserInterface;

/// Builds the players for each new game.
pub trait PlayerFactory {
    fn interactive(&mut self, name: String, stone: Stone) -> anyhow::Result<Box<dyn Player>>;
    fn automated(&mut self, stone: Stone) -> anyhow::Result<Box<dyn Player>>;
    /// The strategy consulted in advisory mode, if one is available.
    fn advisor(&mut self) -> anyhow::Result<Option<Box<dyn Strategy>>>;
}

pub struct SessionConfig {
    pub board_size: usize,
    /// Skip asking the display for a mode and always use this code.
    pub mode: Option<i32>,
    /// Stop after this many games. `None` means play until an error occurs.
    pub num_games: Option<usize>,
    /// Start with advisory mode already on.
    pub advisory: bool,
}

/// How the games of a run ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Wins of player 1 and player 2.
    pub wins: [usize; 2],
    pub draws: usize,
}

impl SessionSummary {
    pub fn games(&self) -> usize {
        self.wins[0] + self.wins[1] + self.draws
    }

    fn record(&mut self, result: &GameResult) {
        match result {
            GameResult::WonByPlayer { player_idx, .. } => self.wins[*player_idx] += 1,
            GameResult::Draw => self.draws += 1,
        }
    }
}

fn create_player(
    ui: &mut dyn UserInterface,
    factory: &mut dyn PlayerFactory,
    kind: PlayerKind,
    slot: usize,
    stone: Stone,
) -> anyhow::Result<Box<dyn Player>> {
    match kind {
        PlayerKind::Interactive => {
            let name = ui.request_player_name(slot)?;
            factory.interactive(name, stone)
        }
        PlayerKind::Automated => factory.automated(stone),
    }
}

/// Plays one game after another, each on a fresh board with fresh players.
///
/// Every game starts by selecting a mode. An unknown mode code ends the
/// whole run with an [`InvalidGameMode`](crate::InvalidGameMode) error.
pub fn run_sessions(
    rng: &mut StdRng,
    ui: &mut dyn UserInterface,
    factory: &mut dyn PlayerFactory,
    config: &SessionConfig,
) -> anyhow::Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let mut advisory = config.advisory;
    let mut advisor: Option<Box<dyn Strategy>> = None;

    while config.num_games.map_or(true, |n| summary.games() < n) {
        let mut preset_mode = config.mode;
        let (mode, [kind_1, kind_2]) = loop {
            let code = match preset_mode.take() {
                Some(code) => code,
                None => ui.request_game_mode()?,
            };
            let mode = GameMode::try_from(code)?;
            match mode.player_kinds() {
                Some(kinds) => break (mode, kinds),
                None => {
                    info!("Advisory mode enabled");
                    advisory = true;
                }
            }
        };

        let mut player_1 = create_player(ui, factory, kind_1, 1, Stone::Black)?;
        let mut player_2 = create_player(ui, factory, kind_2, 2, Stone::White)?;

        if advisory && advisor.is_none() {
            advisor = factory.advisor()?;
            if advisor.is_none() {
                warn!("Advisory mode is on, but no advisor is configured");
            }
        }

        let game_idx = summary.games();
        let result = play_game(
            rng,
            ui,
            [player_1.as_mut(), player_2.as_mut()],
            config.board_size,
            advisor.as_deref_mut(),
        )?;
        match &result {
            GameResult::WonByPlayer { player_idx, .. } => {
                let winner = if *player_idx == 0 { &player_1 } else { &player_2 };
                info!(game_idx, winner = winner.name(), ?mode, "Game over");
            }
            GameResult::Draw => info!(game_idx, ?mode, "Game over, draw"),
        }
        summary.record(&result);
    }
    Ok(summary)
}
