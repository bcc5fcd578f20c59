//! Scripted sessions through the terminal front end.

use gridtoe::{GameStatus, Outcome, Player, Score};
use gridtoe_play::repl;
use gridtoe_play::{MemoryBlobStore, PlaySession, ScoreRepository};
use std::io::Cursor;

fn run_script(session: &mut PlaySession<MemoryBlobStore>, script: &str) -> String {
    let mut output = Vec::new();
    repl::run(session, Cursor::new(script.to_string()), &mut output).expect("REPL failed");
    String::from_utf8(output).expect("Output not UTF-8")
}

#[test]
fn test_full_game_is_won_and_saved() {
    let store = MemoryBlobStore::new();
    let mut session = PlaySession::new(3, ScoreRepository::new(store.clone()));

    let output = run_script(&mut session, "1 1\n2 1\n1 2\n3 1\nmove 1 3\nquit\n");

    assert!(output.contains("X wins!"));
    assert!(output.contains("Player 1 (X): 1"));
    assert!(output.ends_with("Bye!\n"));
    assert_eq!(session.state().status(), GameStatus::Won(Player::X));
    assert_eq!(ScoreRepository::new(store).load_score(), Score { x: 1, o: 0 });
}

#[test]
fn test_rejected_moves_are_reported() {
    let mut session = PlaySession::new(3, ScoreRepository::new(MemoryBlobStore::new()));

    let output = run_script(&mut session, "2 2\n2 2\n9 9\n0 1\n");

    assert!(output.contains("Ignored: Cell (1, 1) is already occupied"));
    assert!(output.contains("Ignored: Cell (8, 8) is off the board"));
    assert!(output.contains("Rows and columns count from 1"));
    assert_eq!(session.state().move_count(), 1);
}

#[test]
fn test_new_game_resizes_and_keeps_history() {
    let mut session = PlaySession::new(3, ScoreRepository::new(MemoryBlobStore::new()));

    let output = run_script(
        &mut session,
        "1 1\n2 1\n1 2\n3 1\n1 3\nnew 4\nhistory\nnew 1\n",
    );

    assert!(output.contains("1. X wins"));
    assert_eq!(session.state().size(), 3);
    assert_eq!(session.state().move_count(), 0);
    assert_eq!(session.history().entries(), &[Outcome::Won(Player::X)]);
    assert_eq!(session.score(), &Score { x: 1, o: 0 });
}

#[test]
fn test_reset_score_command() {
    let store = MemoryBlobStore::new();
    ScoreRepository::new(store.clone())
        .save_score(&Score { x: 5, o: 5 })
        .expect("Save failed");
    let mut session = PlaySession::new(3, ScoreRepository::new(store.clone()));

    let output = run_script(&mut session, "score\nreset-score\n");

    assert!(output.contains("Player 1 (X): 5"));
    assert!(output.contains("Player 1 (X): 0\nPlayer 2 (O): 0"));
    assert_eq!(ScoreRepository::new(store).load_score(), Score::new());
}

#[test]
fn test_unknown_command_hint() {
    let mut session = PlaySession::new(3, ScoreRepository::new(MemoryBlobStore::new()));
    let output = run_script(&mut session, "dance\n");
    assert!(output.contains("Unknown command 'dance', type 'help'"));
}
