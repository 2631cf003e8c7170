use clap::Parser;
use omok::{Board, Coordinate, Stone};
use omok_bot_utils::Bot;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let rng = StdRng::seed_from_u64(seed);

    RandomBot { rng }.run()
}

/// Places its stone on any empty intersection.
struct RandomBot {
    rng: StdRng,
}

impl Bot for RandomBot {
    fn new_game(&mut self, _stone: Stone, _board_size: usize) {}

    fn place_stone(&mut self, _stone: Stone, board: &Board) -> Coordinate {
        // The judge never asks on a full board, the corner is only a placeholder
        board
            .empty_coordinates()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Coordinate::new(0, 0))
    }
}
