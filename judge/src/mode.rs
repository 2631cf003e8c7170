use crate::error::InvalidGameMode;
use crate::player::PlayerKind;

/// What kind of game to play, as selected by the operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// Two people taking turns at the same console.
    HumanVsHuman,
    /// A person against a bot.
    HumanVsComputer,
    /// Two bots, for watching.
    ComputerVsComputer,
    /// Turns on advisory mode, then asks for the mode again.
    Diagnostic,
}

impl GameMode {
    /// The kinds of player 1 and player 2, or `None` for a mode that
    /// doesn't start a game.
    pub fn player_kinds(self) -> Option<[PlayerKind; 2]> {
        use PlayerKind::*;
        match self {
            GameMode::HumanVsHuman => Some([Interactive, Interactive]),
            GameMode::HumanVsComputer => Some([Interactive, Automated]),
            GameMode::ComputerVsComputer => Some([Automated, Automated]),
            GameMode::Diagnostic => None,
        }
    }
}

impl TryFrom<i32> for GameMode {
    type Error = InvalidGameMode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(GameMode::HumanVsHuman),
            2 => Ok(GameMode::HumanVsComputer),
            3 => Ok(GameMode::ComputerVsComputer),
            -9 => Ok(GameMode::Diagnostic),
            _ => Err(InvalidGameMode { code }),
        }
    }
}
