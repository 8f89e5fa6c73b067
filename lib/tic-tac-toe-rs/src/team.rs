/// Failed to parse a [`Team`] from a [`char`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid Tic-Tac-Toe team")]
pub struct InvalidCharError(pub char);

/// Failed to parse a [`Team`] from a [`str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidStrError {
    /// The string is the wrong length. It must contain exactly one char.
    ///
    /// The length is in bytes.
    #[error("a Tic-Tac-Toe team cannot be made from inputs of length {0}")]
    InvalidLength(usize),

    /// The char is not valid.
    #[error(transparent)]
    InvalidChar(#[from] InvalidCharError),
}

/// A Tic Tac Toe Team.
///
/// X always moves first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Team {
    X,
    O,
}

impl Team {
    /// Invert the teams
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Get the mark this team places on the board.
    pub fn as_char(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }

    /// Try to parse a [`Team`] from a [`char`].
    pub fn from_char(c: char) -> Result<Self, InvalidCharError> {
        match c {
            'x' | 'X' => Ok(Self::X),
            'o' | 'O' => Ok(Self::O),
            c => Err(InvalidCharError(c)),
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for Team {
    type Err = InvalidStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::from_char(c)?),
            _ => Err(InvalidStrError::InvalidLength(s.len())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn inverse_swaps() {
        assert_eq!(Team::X.inverse(), Team::O);
        assert_eq!(Team::O.inverse(), Team::X);
    }

    #[test]
    fn parse() {
        assert_eq!("x".parse::<Team>(), Ok(Team::X));
        assert_eq!("O".parse::<Team>(), Ok(Team::O));
        assert_eq!(
            "xo".parse::<Team>(),
            Err(InvalidStrError::InvalidLength(2))
        );
        assert_eq!("".parse::<Team>(), Err(InvalidStrError::InvalidLength(0)));
        assert_eq!(
            "z".parse::<Team>(),
            Err(InvalidStrError::InvalidChar(InvalidCharError('z')))
        );
    }
}
