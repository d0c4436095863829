//! Agent behavior against the board's legality rule.

use proptest::prelude::*;
use rust_ttt::agents::{Agent, HumanAgent, RandomAgent, ScriptedInput};
use rust_ttt::board::{is_legal, Board, CELL_COUNT};
use rust_ttt::core::{Coord, GameRng, Symbol};
use rust_ttt::error::{AgentError, InputError, MoveError};

#[test]
fn test_human_retries_off_board_entry() {
    let mut human = HumanAgent::new(ScriptedInput::new(["5,5", "1,1"]));

    let coord = human.propose_move(&Board::new(), Symbol::X).unwrap();

    assert_eq!(coord, Coord::new(1, 1));
    assert_eq!(
        human.input().rejections(),
        &[InputError::Illegal(MoveError::OutOfRange { row: 5, col: 5 })]
    );
    assert_eq!(human.input().remaining(), 0);
}

#[test]
fn test_human_rejects_taken_cell_then_accepts() {
    let board = Board::from_rows(["X..", "...", "..."]).unwrap();
    let mut human = HumanAgent::new(ScriptedInput::new(["0 0", "hello", "0 1", "2,2"]));

    assert_eq!(human.propose_move(&board, Symbol::O).unwrap(), Coord::new(0, 1));

    let input = human.into_input();
    assert_eq!(input.rejections().len(), 2);
    assert!(matches!(
        input.rejections()[0],
        InputError::Illegal(MoveError::CellOccupied { row: 0, col: 0 })
    ));
    assert!(matches!(input.rejections()[1], InputError::Malformed { .. }));
    assert_eq!(input.remaining(), 1);
}

#[test]
fn test_human_gives_up_when_input_ends() {
    let mut human = HumanAgent::new(ScriptedInput::new(["nope"]));

    assert!(matches!(
        human.propose_move(&Board::new(), Symbol::X),
        Err(AgentError::InputClosed)
    ));
}

#[test]
fn test_human_retry_cap() {
    let mut human =
        HumanAgent::new(ScriptedInput::new(["a", "b", "c", "1,1"])).with_max_retries(Some(2));

    assert!(matches!(
        human.propose_move(&Board::new(), Symbol::X),
        Err(AgentError::RetriesExhausted { attempts: 3 })
    ));
}

#[test]
fn test_random_takes_the_only_empty_cell() {
    let board = Board::from_rows(["XOX", "OXO", "O.X"]).unwrap();

    for seed in 0..20 {
        let mut agent = RandomAgent::new(seed);
        assert_eq!(agent.propose_move(&board, Symbol::O).unwrap(), Coord::new(2, 1));
    }
}

#[test]
fn test_random_on_full_board() {
    let board = Board::from_rows(["XOX", "XOX", "OXO"]).unwrap();
    let mut agent = RandomAgent::new(0);

    assert!(matches!(
        agent.propose_move(&board, Symbol::X),
        Err(AgentError::NoLegalMove)
    ));
}

proptest! {
    #[test]
    fn prop_random_moves_are_always_legal(
        seed in any::<u64>(),
        prefill in prop::collection::vec(0..CELL_COUNT, 0..CELL_COUNT),
    ) {
        let mut board = Board::new();
        let mut symbol = Symbol::X;
        for i in prefill {
            if board.set(i / 3, i % 3, symbol).is_ok() {
                symbol = symbol.opponent();
            }
        }
        prop_assume!(!board.is_full());

        let mut agent = RandomAgent::from_rng(GameRng::new(seed));
        let coord = agent.propose_move(&board, symbol).unwrap();

        prop_assert!(is_legal(&board, coord));
    }
}
