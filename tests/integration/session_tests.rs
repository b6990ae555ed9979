use sizedupe::config::SessionConfig;
use sizedupe::error::ExitCode;
use sizedupe::session::{Prompter, Session, SessionError, NO_DUPLICATES, WRONG_FORMAT, WRONG_OPTION};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn scenario() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"abcd").unwrap();
    fs::write(dir.path().join("b.txt"), b"abcd").unwrap();
    fs::write(dir.path().join("c.txt"), b"wxyz").unwrap();
    fs::write(dir.path().join("d.log"), b"abcd").unwrap();
    dir
}

fn run(root: &Path, input: &str) -> (Result<ExitCode, SessionError>, String) {
    let mut session = Session::new(SessionConfig::new(root.to_path_buf()));
    let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let result = session.run(&mut prompter).map(|o| o.exit_code());
    let output = String::from_utf8(prompter.into_inner().1).unwrap();
    (result, output)
}

#[test]
fn test_session_transcript() {
    let dir = scenario();
    let (result, output) = run(dir.path(), "txt\n1\nyes\nyes\n1\n");

    assert_eq!(result.unwrap(), ExitCode::Success);

    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    let c = dir.path().join("c.txt");
    let expected_listing = format!(
        "4 bytes\n{}\n{}\n{}\n\n",
        a.display(),
        b.display(),
        c.display()
    );
    assert!(output.contains(&expected_listing));
    assert!(output.contains(&format!("1. {}\n2. {}\n", a.display(), b.display())));
    assert!(output.contains("Hash: "));
    assert!(output.ends_with("Total freed up space: 4 bytes\n"));

    assert!(!a.exists());
    assert!(b.exists());
    assert!(c.exists());
}

#[test]
fn test_session_reprompts_on_bad_answers() {
    let dir = scenario();
    let (result, output) = run(dir.path(), "txt\nup\n1\nsure\nyes\nyes\n9\nabc\n2\n");

    assert_eq!(result.unwrap(), ExitCode::Success);
    assert_eq!(output.matches(WRONG_OPTION).count(), 2);
    assert_eq!(output.matches(WRONG_FORMAT).count(), 2);
    assert!(dir.path().join("a.txt").exists());
    assert!(!dir.path().join("b.txt").exists());
}

#[test]
fn test_session_no_delete() {
    let dir = scenario();
    let (result, output) = run(dir.path(), "\n2\nyes\nno\n");

    assert_eq!(result.unwrap(), ExitCode::Success);
    assert!(!output.contains("Enter file numbers to delete:"));
    assert!(output.contains("3. "));
    for name in ["a.txt", "b.txt", "c.txt", "d.log"] {
        assert!(dir.path().join(name).exists());
    }
}

#[test]
fn test_session_empty_directory() {
    let dir = tempdir().unwrap();
    let (result, output) = run(dir.path(), "\n1\nyes\n");

    assert_eq!(result.unwrap(), ExitCode::Success);
    assert!(output.contains(NO_DUPLICATES));
}

#[test]
fn test_session_input_closed() {
    let dir = scenario();
    let (result, _) = run(dir.path(), "txt\n1\n");
    assert!(matches!(result, Err(SessionError::Prompt(_))));
}
