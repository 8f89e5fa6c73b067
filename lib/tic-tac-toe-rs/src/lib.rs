//! Tic-Tac-Toe rules and a perfect computer opponent.
//!
//! The computer always plays O and picks its move with an exhaustive minimax search.
//! Nothing here knows about timers, rendering or input; front-ends call in with a [`Board`].

mod board;
mod error;
mod game;
mod team;

pub use crate::{
    board::{
        Board,
        Cell,
        ChildrenIter,
        GameOutcome,
        ParseBoardError,
        WinLine,
        WinType,
        WinnerInfo,
        WIN_LINES,
    },
    error::Error,
    game::{
        Game,
        GameState,
    },
    team::{
        InvalidCharError,
        InvalidStrError,
        Team,
    },
};

/// The # of tic-tac-toe tiles
pub const NUM_TILES: u8 = 9;

/// The score of a board O has won. X wins score the negation.
///
/// Scores are not discounted by depth,
/// so a win in one move and a win in five moves look the same to the search.
pub const WIN_SCORE: i8 = 10;

/// A search result.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Scored {
    /// The chosen tile index.
    ///
    /// This is `None` for boards that are already decided.
    pub index: Option<u8>,

    /// The guaranteed score under perfect play. Positive favors O.
    pub score: i8,
}

impl Scored {
    fn terminal(score: i8) -> Self {
        Self { index: None, score }
    }
}

/// Get the outcome of a board.
pub fn winner_of(board: Board) -> GameOutcome {
    board.outcome()
}

/// Get the indexes of the empty tiles of a board, from least to greatest.
pub fn legal_moves(board: Board) -> Vec<u8> {
    board.legal_moves()
}

/// Place a mark on a copy of a board.
///
/// # Errors
/// Returns [`Error::InvalidMove`] if the index >= 9 or the tile is taken.
pub fn apply(board: Board, index: u8, team: Team) -> Result<Board, Error> {
    board.apply(index, team)
}

/// Run minimax on a board with `team` to move.
///
/// O maximizes and X minimizes.
/// Moves are tried from the lowest index up and a later move must be strictly better to replace the best,
/// so the lowest index wins ties.
pub fn minimax(board: Board, team: Team) -> Scored {
    match board.outcome() {
        GameOutcome::WinX => return Scored::terminal(-WIN_SCORE),
        GameOutcome::WinO => return Scored::terminal(WIN_SCORE),
        GameOutcome::Draw => return Scored::terminal(0),
        GameOutcome::InProgress => {}
    }

    let mut best = Scored {
        index: None,
        score: match team {
            Team::O => i8::MIN,
            Team::X => i8::MAX,
        },
    };
    for (index, child) in board.iter_children(team) {
        let score = minimax(child, team.inverse()).score;
        let is_better = match team {
            Team::O => score > best.score,
            Team::X => score < best.score,
        };

        if is_better {
            best = Scored {
                index: Some(index),
                score,
            };
        }
    }

    best
}

/// Search for the best move of `team`.
///
/// # Errors
/// Returns [`Error::InvalidState`] if the board is decided or it is not `team`'s turn.
pub fn evaluate_for(board: Board, team: Team) -> Result<Scored, Error> {
    if board.outcome().is_terminal() || board.turn() != team {
        return Err(Error::InvalidState);
    }

    Ok(minimax(board, team))
}

/// Search for the best move of `team`, returning just the tile index.
///
/// # Errors
/// Returns [`Error::InvalidState`] if the board is decided or it is not `team`'s turn.
pub fn best_move_for(board: Board, team: Team) -> Result<u8, Error> {
    evaluate_for(board, team)?.index.ok_or(Error::InvalidState)
}

/// Search for the computer's move along with the score it guarantees.
///
/// # Errors
/// Returns [`Error::InvalidState`] if the board is decided or it is X's turn.
pub fn evaluate(board: Board) -> Result<Scored, Error> {
    evaluate_for(board, Team::O)
}

/// Choose the computer's move. The computer always plays O.
///
/// # Errors
/// Returns [`Error::InvalidState`] if the board is decided or it is X's turn.
pub fn choose_ai_move(board: Board) -> Result<u8, Error> {
    best_move_for(board, Team::O)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    fn parse(s: &str) -> Board {
        s.parse().expect("invalid board")
    }

    /// Collect every board reachable by legal play, stopping at decided boards.
    fn reachable_boards() -> HashSet<Board> {
        let mut seen = HashSet::new();
        let mut stack = vec![Board::new()];
        while let Some(board) = stack.pop() {
            if !seen.insert(board) || board.outcome().is_terminal() {
                continue;
            }
            stack.extend(board.iter_children(board.turn()).map(|(_, child)| child));
        }
        seen
    }

    #[test]
    fn minimax_all() {
        let scored = minimax(Board::new(), Team::X);
        assert_eq!(scored.score, 0);
        assert_eq!(scored.index, Some(0));
    }

    #[test]
    fn minimax_terminal() {
        assert_eq!(
            minimax(parse("XXX OO. ..."), Team::O),
            Scored::terminal(-WIN_SCORE)
        );
        assert_eq!(
            minimax(parse("OOO XX. X.."), Team::X),
            Scored::terminal(WIN_SCORE)
        );
        assert_eq!(
            minimax(parse("XOX XOO OXX"), Team::O),
            Scored::terminal(0)
        );
    }

    #[test]
    fn completes_own_line() {
        let board = parse("XX. OO. X..");
        assert_eq!(board.turn(), Team::O);
        assert_eq!(choose_ai_move(board), Ok(5));
        assert_eq!(
            board.apply(5, Team::O).map(winner_of),
            Ok(GameOutcome::WinO)
        );
    }

    #[test]
    fn wins_are_not_depth_discounted() {
        // Equal mark counts make this X's turn, so only the raw search takes O here.
        let board = parse("XX. OO. ...");
        assert_eq!(evaluate(board), Err(Error::InvalidState));

        // 5 wins at once. 2 blocks X and forks 3-4-5 with 2-4-6,
        // which wins just as surely and is tried first.
        assert_eq!(
            minimax(board, Team::O),
            Scored {
                index: Some(2),
                score: WIN_SCORE,
            }
        );
    }

    #[test]
    fn blocks() {
        let board = parse("XX. O.. ...");
        assert_eq!(choose_ai_move(board), Ok(2));
    }

    #[test]
    fn takes_center_against_corner() {
        let board = parse("X.. ... ...");
        assert_eq!(
            evaluate(board),
            Ok(Scored {
                index: Some(4),
                score: 0,
            })
        );
    }

    #[test]
    fn x_finds_win() {
        let board = parse("XX. OO. ..O");
        assert_eq!(board.turn(), Team::X);
        assert_eq!(best_move_for(board, Team::X), Ok(2));
    }

    #[test]
    fn invalid_state() {
        // X's turn
        assert_eq!(choose_ai_move(Board::new()), Err(Error::InvalidState));
        assert_eq!(
            choose_ai_move(parse("XO. ... ...")),
            Err(Error::InvalidState)
        );

        // Decided boards
        assert_eq!(
            choose_ai_move(parse("XXX OO. ...")),
            Err(Error::InvalidState)
        );
        assert_eq!(
            evaluate(parse("XOX XOO OXX")),
            Err(Error::InvalidState)
        );
    }

    #[test]
    fn ai_move_is_always_legal() {
        for board in reachable_boards() {
            if board.outcome().is_terminal() || board.turn() != Team::O {
                continue;
            }

            let index = choose_ai_move(board).expect("O to move");
            assert!(
                legal_moves(board).contains(&index),
                "chose {index} on\n{board}"
            );
        }
    }

    #[test]
    fn perfect_play_draws() {
        let mut board = Board::new();
        while winner_of(board) == GameOutcome::InProgress {
            let index = match board.turn() {
                Team::X => best_move_for(board, Team::X),
                Team::O => choose_ai_move(board),
            }
            .expect("game in progress");
            board = apply(board, index, board.turn()).expect("legal move");
        }

        assert_eq!(winner_of(board), GameOutcome::Draw);
    }

    #[test]
    fn ai_never_loses() {
        // Try every X strategy against the computer.
        let mut stack = vec![Board::new()];
        while let Some(board) = stack.pop() {
            match winner_of(board) {
                GameOutcome::WinX => panic!("X beat the computer:\n{board}"),
                GameOutcome::WinO | GameOutcome::Draw => continue,
                GameOutcome::InProgress => {}
            }

            match board.turn() {
                Team::X => stack.extend(board.iter_children(Team::X).map(|(_, child)| child)),
                Team::O => {
                    let index = choose_ai_move(board).expect("O to move");
                    stack.push(apply(board, index, Team::O).expect("legal move"));
                }
            }
        }
    }

    #[test]
    fn pure_queries() {
        let board = parse("X.O .X. ...");
        assert_eq!(winner_of(board), winner_of(board));
        assert_eq!(legal_moves(board), legal_moves(board));
        assert_eq!(choose_ai_move(board), choose_ai_move(board));
        assert_eq!(board, parse("X.O .X. ..."));
    }
}
