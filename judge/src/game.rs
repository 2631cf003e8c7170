use omok::{execute_turn, Board, Intersection, TurnOutcome};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::player::{Player, PlayerKind, Strategy};
use crate::ui::UserInterface;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    WonByPlayer {
        player_idx: usize,
        winning_row: Vec<Intersection>,
    },
    Draw,
}

// The state of a running game. The game is over once it's terminated.
enum Phase {
    InProgress { current_player_idx: usize },
    Terminated(GameResult),
}

/// Plays one game from an empty board until somebody wins or the board is full.
///
/// Returns an error only on structural problems (invalid board size, failing
/// players or display), not when a player picks an occupied intersection:
/// that player is simply asked again.
///
/// If an `advisor` is given, players eligible for advice are shown where the
/// advisor would play for their opponent before each of their moves.
pub fn play_game(
    rng: &mut StdRng,
    ui: &mut dyn UserInterface,
    mut players: [&mut (dyn Player + '_); 2],
    board_size: usize,
    mut advisor: Option<&mut (dyn Strategy + '_)>,
) -> anyhow::Result<GameResult> {
    let mut board = Board::new(board_size)?;
    for player in players.iter_mut() {
        player.new_game(board_size)?;
    }

    // Randomly pick a starting player
    let first_player_idx = if rng.gen::<bool>() { 1 } else { 0 };
    info!(
        first = players[first_player_idx].name(),
        second = players[1 - first_player_idx].name(),
        board_size,
        "New game"
    );

    let mut phase = Phase::InProgress {
        current_player_idx: first_player_idx,
    };
    let result = loop {
        let current_player_idx = match phase {
            Phase::InProgress { current_player_idx } => current_player_idx,
            Phase::Terminated(result) => break result,
        };
        let current_player = &mut players[current_player_idx];
        let stone = current_player.stone();

        ui.render_board(&board)?;
        if let Some(advisor) = advisor.as_deref_mut() {
            if current_player.is_advisory_eligible() {
                // Advice never affects the game, a failing advisor just gives no hint
                match advisor.choose_move(&board, stone.opponent()) {
                    Ok(hint) if board.intersection(hint.x, hint.y).is_ok() => {
                        ui.show_message(&format!(
                            "{} would play {}, {} here",
                            advisor.name(),
                            hint.x + 1,
                            hint.y + 1
                        ))?;
                    }
                    Ok(hint) => {
                        warn!(
                            advisor = advisor.name(),
                            %hint,
                            "Advisor suggested an intersection off the board"
                        );
                    }
                    Err(err) => {
                        warn!(
                            advisor = advisor.name(),
                            %err,
                            "Advisor failed to suggest a move"
                        );
                    }
                }
            }
        }

        // Ask until the player picks an empty intersection on the board
        let outcome = loop {
            let coordinate = current_player.request_placement(&board)?;
            match execute_turn(&mut board, stone, coordinate) {
                Ok(outcome) => {
                    debug!(player = current_player.name(), %coordinate, "Placed stone");
                    break outcome;
                }
                Err(err) => {
                    debug!(player = current_player.name(), %coordinate, %err, "Rejected placement");
                    ui.render_board(&board)?;
                    ui.show_message("Please enter a valid coordinate for your stone")?;
                }
            }
        };

        phase = match outcome {
            TurnOutcome::Normal => Phase::InProgress {
                current_player_idx: 1 - current_player_idx,
            },
            TurnOutcome::Won { winning_row } => Phase::Terminated(GameResult::WonByPlayer {
                player_idx: current_player_idx,
                winning_row,
            }),
            TurnOutcome::Drawn => Phase::Terminated(GameResult::Draw),
        };
    };

    // Report who won
    ui.render_board(&board)?;
    match &result {
        GameResult::WonByPlayer { player_idx, .. } => {
            let winner = &players[*player_idx];
            let loser = &players[1 - *player_idx];
            info!(winner = winner.name(), stones = board.stone_count(), "Game won");
            if winner.kind() == PlayerKind::Automated && loser.kind() == PlayerKind::Interactive {
                ui.show_defeat()?;
            } else {
                ui.show_victory(winner.name())?;
            }
        }
        GameResult::Draw => {
            info!(stones = board.stone_count(), "Draw");
            ui.show_draw()?;
        }
    }
    Ok(result)
}
