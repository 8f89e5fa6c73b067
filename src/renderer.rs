use tic_tac_toe::{
    Board,
    Cell,
    WinnerInfo,
};

const ROW_SEPARATOR: &str = "---+---+---";

/// Render a Tic-Tac-Toe board as text
#[derive(Debug, Clone)]
pub(crate) struct Renderer {
    /// Show the tile number on empty tiles.
    pub(crate) show_numbers: bool,
}

#[allow(clippy::new_without_default)]
impl Renderer {
    /// Make a new [`Renderer`].
    pub(crate) fn new() -> Self {
        Self { show_numbers: true }
    }

    /// Render a board.
    ///
    /// Tiles of the winning line, if given, are wrapped in `*`.
    pub(crate) fn render_board(&self, board: Board, winner_info: Option<WinnerInfo>) -> String {
        let mut out = String::with_capacity(64);

        for row in 0..3u8 {
            if row != 0 {
                out.push_str(ROW_SEPARATOR);
                out.push('\n');
            }

            for column in 0..3u8 {
                if column != 0 {
                    out.push('|');
                }

                let index = row * 3 + column;
                let cell = board.get(index);
                let is_highlighted = winner_info
                    .is_some_and(|info| info.line.tile_indexes.contains(&index));
                let edge = if is_highlighted { '*' } else { ' ' };

                let c = match cell {
                    Cell::Empty if self.show_numbers => char::from(b'1' + index),
                    cell => cell.as_char(),
                };

                out.push(edge);
                out.push(c);
                out.push(edge);
            }

            // No trailing spaces
            let row_len = out.trim_end_matches(' ').len();
            out.truncate(row_len);
            out.push('\n');
        }

        out
    }
}
