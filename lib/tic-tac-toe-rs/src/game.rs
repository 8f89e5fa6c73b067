use crate::{
    choose_ai_move,
    Board,
    Error,
    GameOutcome,
    Team,
};

/// Where a [`Game`] is in its lifecycle.
///
/// `Won` and `Draw` are terminal. Only [`Game::reset`] leaves them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GameState {
    /// The game is running and it is this team's turn.
    Playing(Team),

    /// This team completed a line.
    Won(Team),

    /// The board filled up with no line.
    Draw,
}

impl GameState {
    /// Get the state that follows a move by `team` that produced `outcome`.
    fn after_move(team: Team, outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::InProgress => Self::Playing(team.inverse()),
            GameOutcome::WinX => Self::Won(Team::X),
            GameOutcome::WinO => Self::Won(Team::O),
            GameOutcome::Draw => Self::Draw,
        }
    }
}

/// A single game of Tic-Tac-Toe.
///
/// The board and the state only change together, through [`Game::play`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    state: GameState,
    moves: Vec<u8>,
}

impl Game {
    /// Start a new game. X moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: GameState::Playing(Team::X),
            moves: Vec::with_capacity(usize::from(crate::NUM_TILES)),
        }
    }

    /// Get the current board.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Get the current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Get the outcome of the current board.
    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    /// Get the team whose turn it is, if the game is still running.
    pub fn turn(&self) -> Option<Team> {
        match self.state {
            GameState::Playing(team) => Some(team),
            GameState::Won(_) | GameState::Draw => None,
        }
    }

    /// Returns true if the game is won or drawn.
    pub fn is_finished(&self) -> bool {
        self.turn().is_none()
    }

    /// The tile indexes played so far, in order.
    pub fn moves(&self) -> &[u8] {
        &self.moves
    }

    /// Place a mark for the team to move at `index`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidState`] if the game is finished,
    /// and [`Error::InvalidMove`] if the tile is out of range or taken.
    /// The game is unchanged on error.
    pub fn play(&mut self, index: u8) -> Result<GameState, Error> {
        let team = self.turn().ok_or(Error::InvalidState)?;
        let board = self.board.apply(index, team)?;

        self.board = board;
        self.moves.push(index);
        self.state = GameState::after_move(team, board.outcome());

        Ok(self.state)
    }

    /// Let the computer play O's move.
    ///
    /// Returns the tile index that was played.
    ///
    /// # Errors
    /// Returns [`Error::InvalidState`] if the game is finished or it is X's turn.
    pub fn play_ai(&mut self) -> Result<u8, Error> {
        if self.state != GameState::Playing(Team::O) {
            return Err(Error::InvalidState);
        }

        let index = choose_ai_move(self.board)?;
        self.play(index)?;

        Ok(index)
    }

    /// Throw away this game and start over.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.state(), GameState::Playing(Team::X));
        assert_eq!(game.board(), Board::new());
        assert!(game.moves().is_empty());
        assert!(!game.is_finished());
    }

    #[test]
    fn turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.play(4), Ok(GameState::Playing(Team::O)));
        assert_eq!(game.play(0), Ok(GameState::Playing(Team::X)));
        assert_eq!(game.moves(), &[4, 0]);
        assert_eq!(game.board().to_string(), "O..\n.X.\n...");
    }

    #[test]
    fn rejected_move_keeps_state() {
        let mut game = Game::new();
        game.play(4).expect("valid move");
        let before = game.clone();

        assert_eq!(game.play(4), Err(Error::InvalidMove { index: 4 }));
        assert_eq!(game.play(9), Err(Error::InvalidMove { index: 9 }));
        assert_eq!(game, before);
    }

    #[test]
    fn win_is_terminal() {
        let mut game = Game::new();
        for index in [0, 3, 1, 4] {
            game.play(index).expect("valid move");
        }
        assert_eq!(game.play(2), Ok(GameState::Won(Team::X)));
        assert!(game.is_finished());
        assert_eq!(game.outcome(), GameOutcome::WinX);

        assert_eq!(game.play(8), Err(Error::InvalidState));
        assert_eq!(game.play_ai(), Err(Error::InvalidState));
    }

    #[test]
    fn draw_is_terminal() {
        let mut game = Game::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6] {
            game.play(index).expect("valid move");
        }
        assert_eq!(game.play(8), Ok(GameState::Draw));
        assert_eq!(game.outcome(), GameOutcome::Draw);
        assert_eq!(game.play(8), Err(Error::InvalidState));
    }

    #[test]
    fn ai_only_plays_o() {
        let mut game = Game::new();
        assert_eq!(game.play_ai(), Err(Error::InvalidState));

        game.play(0).expect("valid move");
        assert_eq!(game.play_ai(), Ok(4));
        assert_eq!(game.state(), GameState::Playing(Team::X));
    }

    #[test]
    fn reset() {
        let mut game = Game::new();
        game.play(0).expect("valid move");
        game.reset();
        assert_eq!(game, Game::new());
    }
}
