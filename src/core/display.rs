use std::fmt;
use colored::Colorize;

use super::{
    board::{Board, Square},
    loc::{Loc, BOARD_HEIGHT, BOARD_WIDTH, COLUMN_NAMES},
    map::{is_camp, is_headquarters},
    side::Side,
};

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for column in COLUMN_NAMES {
            write!(f, " {} ", column)?;
        }
        writeln!(f)?;

        write!(f, "   ")?;
        writeln!(f, "{}", "─".repeat(16))?;

        // Enemy back rank first, so this side reads from the bottom
        for y in (0..BOARD_HEIGHT).rev() {
            write!(f, "{:2} │", y + 1)?;

            for x in 0..BOARD_WIDTH {
                let loc = Loc::new(x, y);
                let square = self.square(loc);
                if square.is_empty() {
                    let mark = if is_camp(loc) {
                        "○"
                    } else if is_headquarters(loc) {
                        "□"
                    } else {
                        "·"
                    };
                    write!(f, " {} ", mark)?;
                } else {
                    write!(f, " {} ", square)?;
                }
            }
            writeln!(f)?;

            if y == BOARD_HEIGHT / 2 {
                writeln!(f, "   │{}", " ~ ".repeat(BOARD_WIDTH as usize))?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.rank.to_code().to_string();

        let colored_symbol = match self.owner {
            Some(Side::Ally) => symbol.bright_blue(),
            Some(Side::Enemy) => symbol.bright_red(),
            None => symbol.normal(),
        };

        write!(f, "{}", colored_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_display_lists_every_row() {
        colored::control::set_override(false);
        let text = Board::new_match().to_string();

        assert!(text.starts_with("     E  D  C  B  A"));
        assert!(text.contains(" 1 │ 2  F  2  2  3"));
        assert!(text.contains(" 3 │ 7  ○  9  ○  4"));
        assert!(text.contains("12 │ U  U  U  U  U"));
        assert_eq!(text.lines().count(), 2 + 12 + 1);
    }
}
