//! End-to-end gameplay through the public API

use anniverswordle::config::{FileConfig, Overrides, parse_config, resolve};
use anniverswordle::core::{
    Game, GameStatus, Key, LetterStatus, NOT_ENOUGH_LETTERS, Rules, SubmitError, TileStatus,
    Word, evaluate,
};
use anniverswordle::output::share_text;

fn gossip_game() -> Game {
    Game::new(Rules::default(), Word::new("GOSSIP").unwrap()).unwrap()
}

fn type_guess(game: &mut Game, guess: &str) {
    for c in guess.chars() {
        game.edit_input(Key::Char(c));
    }
}

#[test]
fn three_guess_win() {
    let mut game = gossip_game();

    type_guess(&mut game, "player");
    game.submit_guess().unwrap();
    type_guess(&mut game, "bridge");
    game.submit_guess().unwrap();
    type_guess(&mut game, "gossip");
    let outcome = game.submit_guess().unwrap();

    assert_eq!(outcome.row, 2);
    assert!(outcome.feedback.is_perfect());
    let state = game.state();
    assert_eq!(state.status(), GameStatus::Won);
    assert_eq!(state.current_row(), 3);
    let last_row = state.board().row(2).unwrap();
    assert!(last_row.iter().all(|t| t.status == TileStatus::Correct));
    assert_eq!(
        share_text(state),
        "ANNIVERSWORDLE 3/6\n\n🟨⬜⬜⬜⬜⬜\n⬜⬜🟨⬜🟨⬜\n🟩🟩🟩🟩🟩🟩"
    );

    let keys = game.key_statuses();
    assert_eq!(keys.get('G'), TileStatus::Correct);
    assert_eq!(keys.get('L'), TileStatus::Absent);
    assert_eq!(keys.get('Z'), TileStatus::Empty);
}

#[test]
fn six_misses_lose() {
    let mut game = gossip_game();
    for _ in 0..6 {
        game.enter_guess("bridge").unwrap();
    }

    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.state().message(), "The word was GOSSIP");
    assert!(matches!(
        game.enter_guess("gossip"),
        Err(SubmitError::GameOver(GameStatus::Lost))
    ));
}

#[test]
fn short_guess_is_rejected_without_consuming_a_row() {
    let mut game = gossip_game();
    type_guess(&mut game, "goss");

    assert!(matches!(
        game.submit_guess(),
        Err(SubmitError::NotEnoughLetters { have: 4, need: 6 })
    ));
    assert_eq!(game.state().current_row(), 0);
    assert_eq!(game.state().message(), NOT_ENOUGH_LETTERS);
    assert_eq!(game.pending_input(), "GOSS");

    game.clear_transient_message();
    assert_eq!(game.state().message(), "");
}

#[test]
fn duplicate_letters_are_not_over_reported() {
    let feedback = evaluate("GOSSIP", "OOGGGG").unwrap();
    assert_eq!(
        feedback.statuses(),
        &[
            LetterStatus::Absent,
            LetterStatus::Correct,
            LetterStatus::Present,
            LetterStatus::Absent,
            LetterStatus::Absent,
            LetterStatus::Absent,
        ]
    );
    assert!(evaluate("GOSSIP", "CRANE").is_err());
}

#[test]
fn configured_game_from_toml() {
    let file = parse_config(
        r#"
[game]
target_word = "bridge"
max_rows = 4
win_message = "Nice!"
"#,
    )
    .unwrap();
    let config = resolve(&file, &Overrides::default()).unwrap();
    let mut game = Game::new(config.rules, config.target.clone())
        .unwrap()
        .with_win_message(&config.win_message);

    assert_eq!(game.state().board().row_count(), 4);
    game.enter_guess("bridge").unwrap();
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.state().message(), "Nice!");
}

#[test]
fn overrides_beat_file() {
    let overrides = Overrides {
        target_word: Some("player".into()),
        max_rows: Some(3),
    };
    let config = resolve(&FileConfig::default(), &overrides).unwrap();
    assert_eq!(config.target.text(), "PLAYER");
    assert_eq!(config.rules.max_rows, 3);
}
