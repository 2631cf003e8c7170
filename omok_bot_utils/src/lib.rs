use std::io::{BufRead, Write};

use omok::{Board, Coordinate, Okay, Request, Stone};

/// A trait to simplify writing bots.
pub trait Bot {
    fn new_game(&mut self, stone: Stone, board_size: usize);
    fn place_stone(&mut self, stone: Stone, board: &Board) -> Coordinate;

    fn run(&mut self) -> anyhow::Result<()> {
        // Communication happens through stdin/stdout.
        // Stderr can be used for logging.
        let stdin = std::io::stdin().lock();
        let stdout = std::io::stdout().lock();
        self.serve(stdin, stdout)
    }

    /// Answers requests from `reader` on `writer` until a [`Request::Bye`]
    /// or the end of input.
    fn serve(&mut self, mut reader: impl BufRead, mut writer: impl Write) -> anyhow::Result<()> {
        let mut buf = String::new();

        loop {
            // Read the next line into buf
            buf.clear(); // because read_line() appends to the buffer
            let num_bytes_read = reader.read_line(&mut buf)?;
            if num_bytes_read == 0 {
                // 0 bytes read means EOF - the judge has exited.
                break Ok(());
            }

            let req = serde_json::from_str::<Request>(buf.trim_end())?;

            match req {
                Request::NewGame { stone, board_size } => {
                    self.new_game(stone, board_size);
                    serde_json::to_writer(&mut writer, &Okay())?;
                }
                Request::PlaceStone {
                    stone,
                    board_size,
                    stones,
                } => {
                    let board = Board::from_stones(board_size, &stones)?;
                    serde_json::to_writer(&mut writer, &self.place_stone(stone, &board))?
                }
                Request::Bye => break Ok(()),
            }
            writeln!(writer)?;
            writer.flush()?;
        }
    }
}
