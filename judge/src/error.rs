/// The error type for an unknown game mode code.
///
/// This is fatal: no session is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidGameMode {
    pub code: i32,
}

impl std::error::Error for InvalidGameMode {}

impl std::fmt::Display for InvalidGameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game mode cannot be {}", self.code)
    }
}
