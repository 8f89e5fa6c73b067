use crate::{
    Error,
    Team,
    NUM_TILES,
};

/// The 8 win lines, in scan order.
///
/// Rows top to bottom, then columns left to right, then both diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    WinLine::new([0, 1, 2], WinType::Horizontal),
    WinLine::new([3, 4, 5], WinType::Horizontal),
    WinLine::new([6, 7, 8], WinType::Horizontal),
    WinLine::new([0, 3, 6], WinType::Vertical),
    WinLine::new([1, 4, 7], WinType::Vertical),
    WinLine::new([2, 5, 8], WinType::Vertical),
    WinLine::new([0, 4, 8], WinType::Diagonal),
    WinLine::new([2, 4, 6], WinType::AntiDiagonal),
];

/// The win type
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum WinType {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

/// A triple of tile indexes that wins the game if one team holds all three.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WinLine {
    /// The tile indexes, sorted from least to greatest.
    pub tile_indexes: [u8; 3],

    /// The win type
    pub win_type: WinType,

    mask: u16,
}

impl WinLine {
    const fn new(tile_indexes: [u8; 3], win_type: WinType) -> Self {
        let mask = (1 << tile_indexes[0]) | (1 << tile_indexes[1]) | (1 << tile_indexes[2]);
        Self {
            tile_indexes,
            win_type,
            mask,
        }
    }

    /// Returns true if the given bitboard covers every tile of this line.
    fn is_held_by(self, state: u16) -> bool {
        (state & self.mask) == self.mask
    }
}

/// Winner Info
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WinnerInfo {
    /// The winning team
    pub team: Team,

    /// The completed line
    pub line: WinLine,
}

/// The contents of a single tile.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Get the team that marked this cell, if any.
    pub fn team(self) -> Option<Team> {
        match self {
            Self::Empty => None,
            Self::X => Some(Team::X),
            Self::O => Some(Team::O),
        }
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// The char used to print this cell.
    pub fn as_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

impl From<Team> for Cell {
    fn from(team: Team) -> Self {
        match team {
            Team::X => Self::X,
            Team::O => Self::O,
        }
    }
}

/// The state of a game, derived from a [`Board`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    WinX,
    WinO,
    Draw,
}

impl GameOutcome {
    /// Returns true if the game is decided.
    pub fn is_terminal(self) -> bool {
        self != Self::InProgress
    }

    /// Get the winning team, if there is one.
    pub fn winner(self) -> Option<Team> {
        match self {
            Self::WinX => Some(Team::X),
            Self::WinO => Some(Team::O),
            Self::InProgress | Self::Draw => None,
        }
    }
}

/// Failed to parse a [`Board`] from a [`str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    /// A char that is not a mark, an empty tile, or whitespace.
    #[error("'{0}' is not a valid tile")]
    InvalidChar(char),

    /// The wrong number of tiles.
    #[error("expected 9 tiles, got {0}")]
    InvalidLength(usize),
}

/// A Tic Tac Toe board.
///
/// Tiles are indexed 0 to 8, row-major, starting at the top left.
/// This is a plain value; every change produces a new board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    // the bitboard
    // 9 tiles, so it cannot fit in a u8 but can fit in a u16
    x_state: u16,
    o_state: u16,
}

impl Board {
    /// Make a new, empty [`Board`].
    pub fn new() -> Self {
        Board {
            x_state: 0,
            o_state: 0,
        }
    }

    /// Make a [`Board`] from its tiles.
    ///
    /// The mark counts are not checked,
    /// so this can build boards that are not reachable by legal play.
    pub fn from_cells(cells: [Cell; NUM_TILES as usize]) -> Self {
        cells
            .iter()
            .zip(0..NUM_TILES)
            .fold(Self::new(), |board, (cell, index)| match cell.team() {
                Some(team) => board.set(index, team),
                None => board,
            })
    }

    /// Get the team whose turn it is.
    ///
    /// X moves whenever both teams have placed the same number of marks.
    pub fn turn(self) -> Team {
        let num_x = self.x_state.count_ones();
        let num_o = self.o_state.count_ones();

        if num_x > num_o {
            Team::O
        } else {
            Team::X
        }
    }

    /// Returns true if every tile is marked.
    ///
    /// This does not check for wins.
    pub fn is_full(self) -> bool {
        (self.x_state | self.o_state).count_ones() >= u32::from(NUM_TILES)
    }

    /// Get the first completed line, in [`WIN_LINES`] order.
    ///
    /// If both teams somehow hold a line, the one scanned first is reported.
    pub fn winning_line(self) -> Option<WinnerInfo> {
        WIN_LINES.iter().find_map(|&line| {
            if line.is_held_by(self.x_state) {
                Some(WinnerInfo {
                    team: Team::X,
                    line,
                })
            } else if line.is_held_by(self.o_state) {
                Some(WinnerInfo {
                    team: Team::O,
                    line,
                })
            } else {
                None
            }
        })
    }

    /// Get the outcome of this board.
    ///
    /// Wins are checked before draws, so a full board with a line is a win.
    pub fn outcome(self) -> GameOutcome {
        match self.winning_line().map(|info| info.team) {
            Some(Team::X) => GameOutcome::WinX,
            Some(Team::O) => GameOutcome::WinO,
            None if self.is_full() => GameOutcome::Draw,
            None => GameOutcome::InProgress,
        }
    }

    /// Get the tile at the index.
    ///
    /// # Panics
    /// Panics if the index >= 9.
    pub fn get(self, index: u8) -> Cell {
        assert!(index < NUM_TILES);
        let index_mask = 1 << index;
        if self.x_state & index_mask != 0 {
            Cell::X
        } else if self.o_state & index_mask != 0 {
            Cell::O
        } else {
            Cell::Empty
        }
    }

    /// Get the indexes of all empty tiles, from least to greatest.
    pub fn legal_moves(self) -> Vec<u8> {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Place a mark for `team` at `index`, returning the new board.
    ///
    /// # Errors
    /// Returns [`Error::InvalidMove`] if the index >= 9 or the tile is taken.
    pub fn apply(self, index: u8, team: Team) -> Result<Self, Error> {
        if index >= NUM_TILES || !self.get(index).is_empty() {
            return Err(Error::InvalidMove { index });
        }

        Ok(self.set(index, team))
    }

    /// Set an empty tile. The caller checks the index.
    #[must_use]
    fn set(mut self, index: u8, team: Team) -> Self {
        match team {
            Team::X => self.x_state |= 1 << index,
            Team::O => self.o_state |= 1 << index,
        }
        self
    }

    /// Get an iterator over child board states for a team.
    ///
    /// # Returns
    /// Returns an Iterator where Items are tuples.
    /// The first item is the index of the placed tile.
    /// The second is the resulting board state.
    pub fn iter_children(self, team: Team) -> ChildrenIter {
        ChildrenIter::new(self, team)
    }

    /// Get an iterator over the tiles.
    ///
    /// The iterator starts at 0 at the top left and ends at 8 at the bottom right.
    ///
    /// # Returns
    /// Returns a tuple pair, where the first element is the index and the second is the tile value.
    pub fn iter(self) -> impl Iterator<Item = (u8, Cell)> {
        (0..NUM_TILES).map(move |index| (index, self.get(index)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, cell) in self.iter() {
            write!(f, "{}", cell.as_char())?;
            if index % 3 == 2 && index + 1 < NUM_TILES {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    /// Parse a board from 9 tile chars, ignoring whitespace.
    ///
    /// `X` and `O` are marks in either case. `.`, `_` and `-` are empty tiles.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; NUM_TILES as usize];
        let mut len = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match c {
                'x' | 'X' => Cell::X,
                'o' | 'O' => Cell::O,
                '.' | '_' | '-' => Cell::Empty,
                c => return Err(ParseBoardError::InvalidChar(c)),
            };
            if let Some(slot) = cells.get_mut(len) {
                *slot = cell;
            }
            len += 1;
        }

        if len != cells.len() {
            return Err(ParseBoardError::InvalidLength(len));
        }

        Ok(Self::from_cells(cells))
    }
}

/// An iterator over the boards reachable by one move of a team.
#[derive(Debug)]
pub struct ChildrenIter {
    board: Board,
    team: Team,
    index: u8,
}

impl ChildrenIter {
    fn new(board: Board, team: Team) -> Self {
        Self {
            board,
            team,
            index: 0,
        }
    }
}

impl Iterator for ChildrenIter {
    type Item = (u8, Board);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < NUM_TILES {
            let index = self.index;
            self.index += 1;

            let index_mask = 1 << index;
            let tile_is_empty = ((self.board.x_state | self.board.o_state) & index_mask) == 0;
            if tile_is_empty {
                return Some((index, self.board.set(index, self.team)));
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(usize::from(NUM_TILES - self.index)))
    }
}

impl std::iter::FusedIterator for ChildrenIter {}
