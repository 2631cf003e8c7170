pub use board::*;
pub use errors::*;
pub use protocol::*;
pub use turn::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod protocol;
mod turn;
mod visualization;
