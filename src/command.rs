use tic_tac_toe::NUM_TILES;

/// A line typed by the player.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place an X on this tile index.
    Move(u8),

    /// Abandon the current game and start a new one.
    NewGame,

    /// Show the best move for X.
    Hint,

    /// Show the scoreboard.
    Scores,

    /// Show the commands.
    Help,

    /// Leave.
    Quit,
}

/// Failed to parse a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCommandError {
    #[error("tile {0} does not exist, pick a tile from 1 to 9")]
    OutOfRange(u32),

    #[error("unknown command \"{0}\", type `help` for a list of commands")]
    Unknown(String),

    #[error("type a tile number from 1 to 9, or `help`")]
    Empty,
}

impl std::str::FromStr for Command {
    type Err = InvalidCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InvalidCommandError::Empty);
        }

        match s.to_ascii_lowercase().as_str() {
            "n" | "new" | "restart" => return Ok(Self::NewGame),
            "hint" => return Ok(Self::Hint),
            "s" | "scores" => return Ok(Self::Scores),
            "h" | "?" | "help" => return Ok(Self::Help),
            "q" | "quit" | "exit" => return Ok(Self::Quit),
            _ => {}
        }

        let tile: u32 = s
            .parse()
            .map_err(|_| InvalidCommandError::Unknown(s.to_string()))?;

        // Tiles are shown to the player as 1 to 9
        match u8::try_from(tile) {
            Ok(tile @ 1..=NUM_TILES) => Ok(Self::Move(tile - 1)),
            _ => Err(InvalidCommandError::OutOfRange(tile)),
        }
    }
}

/// The help text for the commands.
pub const HELP: &str = "\
Commands:
  1-9      place an X on that tile
  hint     show the best move
  scores   show the scoreboard
  new      start a new game
  help     show this message
  quit     leave";

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn moves() {
        assert_eq!("1".parse::<Command>(), Ok(Command::Move(0)));
        assert_eq!(" 9 \n".parse::<Command>(), Ok(Command::Move(8)));
        assert_eq!(
            "0".parse::<Command>(),
            Err(InvalidCommandError::OutOfRange(0))
        );
        assert_eq!(
            "10".parse::<Command>(),
            Err(InvalidCommandError::OutOfRange(10))
        );
        assert_eq!(
            "300".parse::<Command>(),
            Err(InvalidCommandError::OutOfRange(300))
        );
    }

    #[test]
    fn words() {
        assert_eq!("NEW".parse::<Command>(), Ok(Command::NewGame));
        assert_eq!("restart".parse::<Command>(), Ok(Command::NewGame));
        assert_eq!("hint".parse::<Command>(), Ok(Command::Hint));
        assert_eq!("scores".parse::<Command>(), Ok(Command::Scores));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn invalid() {
        assert_eq!("".parse::<Command>(), Err(InvalidCommandError::Empty));
        assert_eq!("   ".parse::<Command>(), Err(InvalidCommandError::Empty));
        assert_eq!(
            "-1".parse::<Command>(),
            Err(InvalidCommandError::Unknown("-1".to_string()))
        );
        assert_eq!(
            "center".parse::<Command>(),
            Err(InvalidCommandError::Unknown("center".to_string()))
        );
    }
}
