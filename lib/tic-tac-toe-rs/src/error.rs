/// Library Error type.
///
/// Both kinds are caller contract violations.
/// The core never retries or recovers from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The cell index is out of range or the cell is already occupied.
    #[error("invalid move at tile index {index}")]
    InvalidMove { index: u8 },

    /// The game is already decided, or it is not the expected team's turn.
    #[error("invalid game state for this operation")]
    InvalidState,
}
