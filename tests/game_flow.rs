//! Whole games played through the public API with the embedded word lists

use rand::SeedableRng;
use rand::rngs::StdRng;
use wolfle::GameError;
use wolfle::core::{Alphabet, Grid, Status};
use wolfle::game::{GameEngine, GameState, ROWS};
use wolfle::wordlists::Dictionary;

fn dictionary() -> Dictionary {
    Dictionary::embedded().unwrap()
}

fn row_statuses(game: &GameEngine<'_>, row: usize) -> Vec<Status> {
    game.grid().row(row).unwrap().iter().map(|l| l.status()).collect()
}

fn alphabet_status(game: &GameEngine<'_>, c: char) -> Status {
    game.letter_status(Alphabet::index_of(c).unwrap()).unwrap()
}

#[test]
fn win_on_any_row() {
    let dictionary = dictionary();
    for row in 0..ROWS {
        let mut game = GameEngine::new(&dictionary, "CRANE").unwrap();
        assert!(game.process_guess("CRANE", row).unwrap());
        assert_eq!(game.state(), GameState::WonGame);
        assert_eq!(row_statuses(&game, row), [Status::InPosition; 5]);
    }
}

#[test]
fn six_misses_exhaust_the_board() {
    let dictionary = dictionary();
    let mut game = GameEngine::new(&dictionary, "CRANE").unwrap();

    let guesses = ["SLATE", "MOIST", "PLUMB", "GHOST", "TOWEL", "NYMPH"];
    for (row, guess) in guesses.iter().enumerate() {
        assert!(!game.is_over());
        assert!(game.process_guess(guess, row).unwrap());
    }

    assert_eq!(game.state(), GameState::ExhaustedGuesses);
    assert!(!game.is_won());

    // A later guess is still recorded but the outcome stands
    assert!(game.process_guess("CRANE", 0).unwrap());
    assert_eq!(row_statuses(&game, 0), [Status::InPosition; 5]);
    assert_eq!(game.state(), GameState::ExhaustedGuesses);
}

#[test]
fn react_against_crane() {
    use Status::{InPosition, InWord, NotGuessed, NotInWord};

    let dictionary = dictionary();
    let mut game = GameEngine::new(&dictionary, "CRANE").unwrap();
    assert!(game.process_guess("REACT", 0).unwrap());

    assert_eq!(
        row_statuses(&game, 0),
        [InWord, InWord, InPosition, InWord, NotInWord]
    );
    assert_eq!(alphabet_status(&game, 'R'), InWord);
    assert_eq!(alphabet_status(&game, 'A'), InPosition);
    assert_eq!(alphabet_status(&game, 'T'), NotInWord);
    assert_eq!(alphabet_status(&game, 'Z'), NotGuessed);
    assert_eq!(game.state(), GameState::InProgress);
}

#[test]
fn rejected_guess_changes_nothing() {
    let dictionary = dictionary();
    let mut game = GameEngine::new(&dictionary, "CRANE").unwrap();
    assert!(game.process_guess("SLATE", 0).unwrap());
    let before = (game.alphabet().clone(), game.grid().clone());

    // Lookups are exact: no trimming or case folding
    for guess in ["QQQQQ", "", "     ", "crane", "Crane", " CRANE", "CRANE ", "CRAN", "CRANES"] {
        assert_eq!(game.evaluate_guess(guess).unwrap(), None, "{guess:?}");
        assert!(!game.process_guess(guess, 1).unwrap(), "{guess:?}");

        assert_eq!(game.alphabet(), &before.0, "{guess:?}");
        assert_eq!(game.grid(), &before.1, "{guess:?}");
        assert_eq!(game.state(), GameState::InProgress, "{guess:?}");
    }
}

#[test]
fn invalid_arguments_are_errors() {
    let dictionary = dictionary();
    let mut game = GameEngine::new(&dictionary, "CRANE").unwrap();

    let err = game.process_guess("CRANE", ROWS).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(matches!(err, GameError::InvalidRow { row: 6, rows: 6 }));

    assert!(!game.process_guess("", 0).unwrap());
    assert!(matches!(
        game.grid_letter_status(0, 5),
        Err(GameError::InvalidCoordinates { .. })
    ));
    assert!(matches!(game.letter_status(26), Err(GameError::InvalidIndex(26))));
    assert!(!game.is_over());
}

#[test]
fn identical_construction_is_equal() {
    assert_eq!(Alphabet::new(), Alphabet::new());
    assert_eq!(Grid::new(6, 5).unwrap(), Grid::new(6, 5).unwrap());

    let dictionary = dictionary();
    let a = GameEngine::new(&dictionary, "CRANE").unwrap();
    let b = GameEngine::new(&dictionary, "CRANE").unwrap();
    assert_eq!(a.alphabet(), b.alphabet());
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.secret_word(), b.secret_word());

    assert!(matches!(
        GameEngine::new(&dictionary, "crane"),
        Err(GameError::SecretNotInList(_))
    ));
}

#[test]
fn seeded_sessions_repeat() {
    let dictionary = dictionary();
    let mut first = StdRng::seed_from_u64(42);
    let mut second = StdRng::seed_from_u64(42);

    for _ in 0..5 {
        let a = GameEngine::with_random_secret(&dictionary, &mut first).unwrap();
        let b = GameEngine::with_random_secret(&dictionary, &mut second).unwrap();
        assert_eq!(a.secret_word(), b.secret_word());
        assert!(dictionary.is_secret(a.secret_word()));
    }
}
