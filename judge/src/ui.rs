use omok::Board;

/// The display side of the game: shows what happens and asks the operator
/// for the game setup.
pub trait UserInterface {
    fn render_board(&mut self, board: &Board) -> anyhow::Result<()>;
    fn show_message(&mut self, message: &str) -> anyhow::Result<()>;
    fn show_victory(&mut self, winner_name: &str) -> anyhow::Result<()>;
    /// Shown when a bot beats a person.
    fn show_defeat(&mut self) -> anyhow::Result<()>;

    fn show_draw(&mut self) -> anyhow::Result<()> {
        self.show_message("The board is full. The game is a draw.")
    }

    /// Returns the raw mode code, see [`GameMode`](crate::GameMode).
    fn request_game_mode(&mut self) -> anyhow::Result<i32>;

    /// Asks for the name of player 1 or 2.
    fn request_player_name(&mut self, slot: usize) -> anyhow::Result<String>;
}
