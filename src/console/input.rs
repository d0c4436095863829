//! Line-based human input.

use std::io::{self, BufRead, Write};

use crate::agents::MoveInput;
use crate::board::{Board, BOARD_SIZE};
use crate::core::Symbol;
use crate::error::{InputError, MoveError};

fn prompt(symbol: Symbol) -> String {
    format!(
        "Player {symbol}, enter row and column (0-{max}), e.g. 1,2: ",
        max = BOARD_SIZE - 1
    )
}

fn rejection(error: &InputError) -> String {
    match error {
        InputError::Illegal(MoveError::CellOccupied { .. }) => {
            "That spot is already taken. Try again.".to_string()
        }
        other => format!("Invalid input! {other}."),
    }
}

/// Prompts on a writer and reads one entry per line from a reader.
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> MoveInput for ConsoleInput<R, W> {
    fn request_move(&mut self, _board: &Board, symbol: Symbol) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt(symbol))?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn reject(&mut self, error: &InputError) -> io::Result<()> {
        writeln!(self.writer, "{}", rejection(error))
    }
}

/// Console input on the process's stdin and stdout.
///
/// Locks stdin per line only, so several human seats can share it.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdioInput;

impl MoveInput for StdioInput {
    fn request_move(&mut self, _board: &Board, symbol: Symbol) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt(symbol))?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn reject(&mut self, error: &InputError) -> io::Result<()> {
        println!("{}", rejection(error));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{Agent, HumanAgent};
    use crate::core::Coord;

    #[test]
    fn test_prompts_and_reads_lines() {
        let mut input = ConsoleInput::new("2,1\n".as_bytes(), Vec::new());

        let line = input.request_move(&Board::new(), Symbol::O).unwrap();
        assert_eq!(line.as_deref(), Some("2,1\n"));
        assert_eq!(input.request_move(&Board::new(), Symbol::O).unwrap(), None);

        let (_, written) = input.into_parts();
        let written = String::from_utf8(written).unwrap();
        assert_eq!(written.matches("Player O, enter row and column (0-2)").count(), 2);
    }

    #[test]
    fn test_human_over_console() {
        let board = Board::from_rows(["X..", "...", "..."]).unwrap();
        let input = ConsoleInput::new("zz\n0,0\n4,4\n0 1\n".as_bytes(), Vec::new());
        let mut human = HumanAgent::new(input);

        let coord = human.propose_move(&board, Symbol::O).unwrap();
        assert_eq!(coord, Coord::new(0, 1));

        let (_, written) = human.into_input().into_parts();
        let written = String::from_utf8(written).unwrap();
        assert!(written.contains("Invalid input! 'zz' is not a move"));
        assert!(written.contains("That spot is already taken. Try again."));
        assert!(written.contains("Invalid input! (4, 4) is off the board"));
    }
}
