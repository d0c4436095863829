//! Prints the game as it is played.

use std::io::{self, Write};

use super::render::render_board;
use crate::board::Board;
use crate::core::{AgentKind, MoveRecord, Seat, Symbol};
use crate::referee::{GameObserver, Outcome};

/// Writes the board after every move and the final result.
#[derive(Debug)]
pub struct ConsoleObserver<W> {
    writer: W,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsoleObserver<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> GameObserver for ConsoleObserver<W> {
    fn on_start(&mut self, board: &Board) -> io::Result<()> {
        writeln!(self.writer, "{}\n", render_board(board))
    }

    fn on_turn(&mut self, _seat: Seat, symbol: Symbol, kind: AgentKind) -> io::Result<()> {
        match kind {
            AgentKind::Random => writeln!(self.writer, "AI {symbol} is making a move..."),
            AgentKind::Human => Ok(()),
        }
    }

    fn on_move(&mut self, _record: &MoveRecord, board: &Board) -> io::Result<()> {
        writeln!(self.writer, "{}\n", render_board(board))
    }

    fn on_finish(&mut self, outcome: Outcome, _board: &Board) -> io::Result<()> {
        match outcome {
            Outcome::Win(symbol) => writeln!(self.writer, "Player {symbol} wins!")?,
            Outcome::Draw => writeln!(self.writer, "It's a draw!")?,
            Outcome::InProgress => {}
        }
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{HumanAgent, RandomAgent, ScriptedInput};
    use crate::referee::Referee;

    #[test]
    fn test_transcript_of_a_won_game() {
        let mut referee = Referee::with_agents(
            HumanAgent::new(ScriptedInput::new(["0,0", "0,1", "0,2"])),
            HumanAgent::new(ScriptedInput::new(["1,0", "1,1"])),
        );
        let mut console = ConsoleObserver::new(Vec::new());

        let outcome = referee.play(&mut console).unwrap();
        let text = String::from_utf8(console.into_inner()).unwrap();

        assert_eq!(outcome, Outcome::Win(Symbol::X));
        assert!(text.starts_with("  |   |  \n"));
        assert!(text.contains("X | X | X"));
        assert!(text.trim_end().ends_with("Player X wins!"));
        assert!(!text.contains("AI "));
        // Opening board plus one per move.
        assert_eq!(text.matches("---------").count(), 2 * 6);
    }

    #[test]
    fn test_announces_automated_turns() {
        let mut referee = Referee::with_agents(RandomAgent::new(3), RandomAgent::new(4));
        let mut console = ConsoleObserver::new(Vec::new());

        let outcome = referee.play(&mut console).unwrap();
        let text = String::from_utf8(console.into_inner()).unwrap();

        assert!(text.contains("AI X is making a move..."));
        let plies = referee.history().len();
        assert_eq!(text.matches("is making a move").count(), plies);
        match outcome {
            Outcome::Win(symbol) => assert!(text.contains(&format!("Player {symbol} wins!"))),
            Outcome::Draw => assert!(text.contains("It's a draw!")),
            Outcome::InProgress => panic!("play returned before the game ended"),
        }
    }
}
