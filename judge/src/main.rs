use std::path::PathBuf;

use clap::Parser;
use judge::{
    run_sessions, AutomatedPlayer, BotProcess, ConsoleInput, ConsoleUi, InteractivePlayer, Player,
    PlayerConfig, PlayerFactory, SessionConfig, Strategy,
};
use omok::{Stone, DEFAULT_BOARD_SIZE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Game mode: 1 = human vs human, 2 = human vs computer, 3 = computer vs computer.
    /// Asked for interactively before every game if omitted
    #[arg(short, long, allow_hyphen_values = true)]
    mode: Option<i32>,

    /// Number of intersections along each side of the board
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
    board_size: usize,

    /// Path to the config JSON file of the bot playing as the computer
    #[arg(long)]
    bot: Option<PathBuf>,

    /// Path to the config JSON file of the bot suggesting moves in advisory mode.
    /// Defaults to the same bot as --bot
    #[arg(long)]
    advisor: Option<PathBuf>,

    /// Show the advisor's suggestion before every human move
    #[arg(long, default_value_t = false)]
    advisory: bool,

    /// How many games to play. Plays forever if omitted
    #[arg(short, long)]
    num_games: Option<usize>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

/// Humans play at this terminal, computers are bot processes.
struct ConsolePlayers {
    bot: Option<PlayerConfig>,
    advisor: Option<PlayerConfig>,
}

impl PlayerFactory for ConsolePlayers {
    fn interactive(&mut self, name: String, stone: Stone) -> anyhow::Result<Box<dyn Player>> {
        Ok(Box::new(InteractivePlayer::new(
            name,
            stone,
            ConsoleInput::stdio(),
        )))
    }

    fn automated(&mut self, stone: Stone) -> anyhow::Result<Box<dyn Player>> {
        let config = self
            .bot
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("This game mode needs a bot, pass one with --bot"))?;
        Ok(Box::new(AutomatedPlayer::new(
            stone,
            BotProcess::spawn(config)?,
        )))
    }

    fn advisor(&mut self) -> anyhow::Result<Option<Box<dyn Strategy>>> {
        match self.advisor.as_ref().or(self.bot.as_ref()) {
            Some(config) => Ok(Some(Box::new(BotProcess::spawn(config)?))),
            None => Ok(None),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut players = ConsolePlayers {
        bot: args.bot.as_deref().map(PlayerConfig::load).transpose()?,
        advisor: args.advisor.as_deref().map(PlayerConfig::load).transpose()?,
    };
    let config = SessionConfig {
        board_size: args.board_size,
        mode: args.mode,
        num_games: args.num_games,
        advisory: args.advisory,
    };

    let mut ui = ConsoleUi::stdio();
    let summary = run_sessions(&mut rng, &mut ui, &mut players, &config)?;
    eprintln!(
        "End result:\n- {} wins by player 1\n- {} wins by player 2\n- {} draws",
        summary.wins[0], summary.wins[1], summary.draws
    );

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
