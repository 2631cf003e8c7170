use std::io::{BufRead, Cursor, Stdin, Write};

use omok::{visualize_board, Board, Coordinate};

use crate::player::Input;
use crate::ui::UserInterface;

/// Something that can be read line by line.
///
/// This is implemented for [`Stdin`] directly instead of for its lock, so that
/// the display and several players can all read from the terminal without
/// holding the lock between prompts.
pub trait LineSource {
    /// Appends the next line to `buf` and returns the number of bytes read,
    /// 0 at end of input.
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize>;
}

impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

// Shows the prompt and reads lines until `parse` accepts one.
fn prompt_until<R, W, T>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    mut parse: impl FnMut(&str) -> Option<T>,
) -> anyhow::Result<T>
where
    R: LineSource,
    W: Write,
{
    let mut buf = String::new();
    loop {
        write!(writer, "{} ", prompt)?;
        writer.flush()?;
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            anyhow::bail!("Input ended while waiting for an answer to '{}'", prompt);
        }
        if let Some(value) = parse(buf.trim()) {
            return Ok(value);
        }
        writeln!(writer, "Could not understand '{}'", buf.trim())?;
    }
}

/// Parses "column row" (1-based, separated by whitespace or a comma) into a
/// 0-based coordinate.
///
/// Whether the coordinate is actually on the board is not checked here.
pub fn parse_coordinate(text: &str) -> Option<Coordinate> {
    let mut numbers = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<usize>().ok()?.checked_sub(1));
    let x = numbers.next()??;
    let y = numbers.next()??;
    if numbers.next().is_some() {
        return None;
    }
    Some(Coordinate::new(x, y))
}

/// A text display on a terminal.
pub struct ConsoleUi<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleUi<Stdin, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin(), std::io::stdout())
    }
}

impl<R: LineSource, W: Write> ConsoleUi<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: LineSource, W: Write> UserInterface for ConsoleUi<R, W> {
    fn render_board(&mut self, board: &Board) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", visualize_board(board))?;
        Ok(())
    }

    fn show_message(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }

    fn show_victory(&mut self, winner_name: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{} wins!", winner_name)?;
        Ok(())
    }

    fn show_defeat(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "You lost. Better luck next time!")?;
        Ok(())
    }

    fn request_game_mode(&mut self) -> anyhow::Result<i32> {
        writeln!(self.writer, "Select a game mode:")?;
        writeln!(self.writer, "  1) Human vs human")?;
        writeln!(self.writer, "  2) Human vs computer")?;
        writeln!(self.writer, "  3) Computer vs computer")?;
        prompt_until(&mut self.reader, &mut self.writer, ">", |text| {
            text.parse::<i32>().ok()
        })
    }

    fn request_player_name(&mut self, slot: usize) -> anyhow::Result<String> {
        let prompt = format!("Name of player {}:", slot);
        prompt_until(&mut self.reader, &mut self.writer, &prompt, |text| {
            (!text.is_empty()).then(|| String::from(text))
        })
    }
}

/// Reads a human player's moves from a terminal.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<Stdin, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin(), std::io::stdout())
    }
}

impl<R: LineSource, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: LineSource, W: Write> Input for ConsoleInput<R, W> {
    fn request_coordinate(
        &mut self,
        board: &Board,
        player_name: &str,
    ) -> anyhow::Result<Coordinate> {
        let prompt = format!(
            "{}, where do you place your stone? (column row, 1-{})",
            player_name,
            board.size()
        );
        prompt_until(&mut self.reader, &mut self.writer, &prompt, parse_coordinate)
    }
}
