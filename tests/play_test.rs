use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use wordle_game::commands::{GameOutcome, PlayConfig, play_game};
use wordle_game::core::{LetterResult, MAX_GUESSES, Word, score};
use wordle_game::game::{GameSession, GameState, Row};
use wordle_game::output::{BoardRenderer, PlainRenderer, Screen};
use wordle_game::wordlists::WordStore;

fn plain_config() -> PlayConfig<'static> {
    PlayConfig {
        renderer: &PlainRenderer,
        screen: Screen::scrolling(),
        show_share: false,
    }
}

#[test]
fn game_from_files_plays_to_a_win() {
    let dir = std::env::temp_dir();
    let allowed = dir.join(format!("wordle_game_it_{}_allowed.txt", std::process::id()));
    let answers = dir.join(format!("wordle_game_it_{}_answers.txt", std::process::id()));
    fs::write(&allowed, "crane\nllama\nSLATE\n").unwrap();
    fs::write(&answers, "alloy\n").unwrap();

    let store = WordStore::load(&allowed, &answers).unwrap();
    let mut session = GameSession::new(&store, &mut StdRng::seed_from_u64(9));
    assert_eq!(session.answer().text(), "alloy");

    let mut output = Vec::new();
    let outcome = play_game(
        &mut session,
        &plain_config(),
        "nope\nslate\nllama\nalloy\n".as_bytes(),
        &mut output,
    )
    .unwrap();

    assert_eq!(outcome, GameOutcome::Won { guesses: 3 });
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\"nope\" is not on the word list."));
    assert!(text.contains("Congratulations! 3/6"));
}

#[test]
fn final_board_shows_every_guess_in_order() {
    let store = WordStore::from_words(&["crane", "llama", "slate"], &["alloy"]).unwrap();
    let mut session = GameSession::with_answer(&store, Word::new("alloy").unwrap());

    let mut output = Vec::new();
    let input = "crane\nllama\nslate\ncrane\nllama\nslate\n";
    let outcome = play_game(&mut session, &plain_config(), input.as_bytes(), &mut output).unwrap();

    assert!(matches!(outcome, GameOutcome::Lost { .. }));
    assert_eq!(session.state(), GameState::Lost);

    let played: Vec<&str> = session
        .board()
        .rows()
        .map(|row| match row {
            Row::Filled(guess) => guess.word().text(),
            Row::Empty => "",
        })
        .collect();
    assert_eq!(
        played,
        vec!["crane", "llama", "slate", "crane", "llama", "slate"]
    );

    let board = PlainRenderer.render(session.board());
    assert_eq!(board.lines().count(), MAX_GUESSES);
    assert!(!board.contains("[ ]"));
}

#[test]
fn embedded_answers_score_perfectly_against_themselves() {
    let store = WordStore::embedded();
    for answer in store.answers().iter().take(200) {
        let results = score(answer.chars(), answer.chars());
        assert!(results.iter().all(|&r| r == LetterResult::ExactMatch));
    }
}

#[test]
fn absent_letters_never_light_up() {
    let store = WordStore::embedded();
    let words = &store.answers()[..100];

    for answer in words {
        for guess in words {
            let results = score(guess.chars(), answer.chars());
            for (&letter, result) in guess.chars().iter().zip(results) {
                if !answer.has_letter(letter) {
                    assert_eq!(result, LetterResult::Absent, "{guess} vs {answer}");
                }
            }
        }
    }
}
