mod bot;
mod console;
mod error;
mod game;
mod mode;
mod player;
mod session;
#[cfg(test)]
mod testing;
mod ui;
pub use bot::*;
pub use console::*;
pub use error::*;
pub use game::*;
pub use mode::*;
pub use player::*;
pub use session::*;
pub use ui::*;
