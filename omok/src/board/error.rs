/// The error type for structural misuse of a [`Board`](crate::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    InvalidDimension { size: usize },
    OutOfBounds { x: usize, y: usize, size: usize },
}

impl std::error::Error for BoardError {}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidDimension { size } => {
                write!(f, "A board must have a positive size, but {} was given", size)
            }
            BoardError::OutOfBounds { x, y, size } => write!(
                f,
                "Intersection ({}, {}) is outside of the {}x{} board",
                x, y, size, size
            ),
        }
    }
}
