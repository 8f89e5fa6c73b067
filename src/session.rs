use crate::util::AsciiTable;
use tic_tac_toe::{
    Board,
    Error,
    Game,
    GameState,
    Team,
    WinnerInfo,
};

/// The team the human plays. The computer plays the other one.
pub const HUMAN_TEAM: Team = Team::X;

/// Wins and draws over a session.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Scores {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scores {
    /// Count a finished game. Running games are ignored.
    fn record(&mut self, state: GameState) {
        match state {
            GameState::Won(Team::X) => self.x_wins += 1,
            GameState::Won(Team::O) => self.o_wins += 1,
            GameState::Draw => self.draws += 1,
            GameState::Playing(_) => {}
        }
    }

    /// Render the scores as an ascii table.
    pub fn to_table(self) -> AsciiTable<'static> {
        let mut table = AsciiTable::new(3, 2);
        table.set_padding(1);

        table.set_cell(0, 0, "You (X)");
        table.set_cell(1, 0, "Computer (O)");
        table.set_cell(2, 0, "Draws");

        table.set_cell(0, 1, self.x_wins.to_string());
        table.set_cell(1, 1, self.o_wins.to_string());
        table.set_cell(2, 1, self.draws.to_string());

        table
    }
}

/// The result of a successful move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TryMoveResponse {
    /// The game goes on.
    NextTurn { next: Team },

    /// The move completed a line.
    Winner { info: WinnerInfo },

    /// The move filled the board.
    Tie,
}

/// A move that was turned down.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TryMoveError {
    #[error("the game is over, type `new` to play again")]
    GameOver,

    #[error("it is not {0}'s turn")]
    InvalidTurn(Team),

    #[error("tile {} is already taken", .0 + 1)]
    TileTaken(u8),
}

/// A run of games between the human and the computer.
///
/// The game rules live in [`Game`]. This adds scores and turn ownership on top.
#[derive(Debug, Default)]
pub struct Session {
    game: Game,
    scores: Scores,
}

impl Session {
    /// Make a new [`Session`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current board.
    pub fn board(&self) -> Board {
        self.game.board()
    }

    /// Get the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Get the scores so far.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Returns true if the human should move next.
    pub fn is_human_turn(&self) -> bool {
        self.game.turn() == Some(HUMAN_TEAM)
    }

    /// Throw away the current game. Scores are kept.
    pub fn new_game(&mut self) {
        self.game.reset();
    }

    /// Get the best tile for the human, if it is the human's turn.
    pub fn hint(&self) -> Option<u8> {
        if !self.is_human_turn() {
            return None;
        }

        tic_tac_toe::best_move_for(self.board(), HUMAN_TEAM).ok()
    }

    /// Try to play the human's move.
    pub fn try_move(&mut self, index: u8) -> Result<TryMoveResponse, TryMoveError> {
        self.try_move_for(HUMAN_TEAM, index)
    }

    /// Try to play a move chosen by the computer.
    pub fn try_computer_move(&mut self, index: u8) -> Result<TryMoveResponse, TryMoveError> {
        self.try_move_for(HUMAN_TEAM.inverse(), index)
    }

    fn try_move_for(&mut self, team: Team, index: u8) -> Result<TryMoveResponse, TryMoveError> {
        match self.game.turn() {
            Some(turn) if turn == team => {}
            Some(_) => return Err(TryMoveError::InvalidTurn(team)),
            None => return Err(TryMoveError::GameOver),
        }

        let state = self.game.play(index).map_err(|e| match e {
            Error::InvalidMove { index } => TryMoveError::TileTaken(index),
            Error::InvalidState => TryMoveError::GameOver,
        })?;

        match state {
            GameState::Playing(next) => Ok(TryMoveResponse::NextTurn { next }),
            GameState::Won(_) => {
                self.scores.record(state);
                // A won game always has a completed line.
                let info = self
                    .board()
                    .winning_line()
                    .ok_or(TryMoveError::GameOver)?;
                Ok(TryMoveResponse::Winner { info })
            }
            GameState::Draw => {
                self.scores.record(state);
                Ok(TryMoveResponse::Tie)
            }
        }
    }
}
