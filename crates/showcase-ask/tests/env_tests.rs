use showcase_ask::env::{load_dotenv_from, API_KEY_ENV};
use std::fs;

#[test]
fn env_file_supplies_variables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    fs::write(
        &path,
        "# credentials\nSHOWCASE_ASK_TEST_KEY=from-dotenv-123\nSHOWCASE_ASK_TEST_QUOTED=\"two words\"\n",
    )
    .unwrap();

    load_dotenv_from(&path).unwrap();
    assert_eq!(std::env::var("SHOWCASE_ASK_TEST_KEY").unwrap(), "from-dotenv-123");
    assert_eq!(std::env::var("SHOWCASE_ASK_TEST_QUOTED").unwrap(), "two words");
}

#[test]
fn env_file_does_not_override_existing_variables() {
    std::env::set_var("SHOWCASE_ASK_TEST_PRESET", "from-shell");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "SHOWCASE_ASK_TEST_PRESET=from-dotenv\n").unwrap();

    load_dotenv_from(&path).unwrap();
    assert_eq!(std::env::var("SHOWCASE_ASK_TEST_PRESET").unwrap(), "from-shell");
}

#[test]
fn api_key_line_parses_like_the_cli_expects() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, format!("{}=abc-key\n", API_KEY_ENV)).unwrap();

    let pairs: Vec<(String, String)> = dotenvy::from_path_iter(&path)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(pairs, vec![(API_KEY_ENV.to_string(), "abc-key".to_string())]);
}

#[test]
fn missing_env_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_dotenv_from(&dir.path().join("absent.env")).unwrap_err();
    assert!(err.not_found());
}
