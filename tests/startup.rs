//! Starts the real binary on the memory engine and reads what it writes to stdout.

use std::{
    env, fs,
    io::{BufRead, BufReader},
    path::PathBuf,
    process::{Command, Stdio},
    sync::mpsc,
    thread,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};

const STARTUP_TIMEOUT: Duration = Duration::from_secs(20);

/// Empty working directory per test, so no stray .env is picked up
fn working_directory(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();

    let dir: PathBuf = env::temp_dir()
        .join("people-api")
        .join(format!("{}-{}-{}", name, std::process::id(), nanos));

    fs::create_dir_all(&dir).unwrap();

    dir
}

/// Collects stdout lines until one contains `until`, or the timeout passes. The server is killed
/// afterwards either way
fn stdout_lines(dir: &PathBuf, until: &str) -> Vec<String> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_people-api"))
        .current_dir(dir)
        .env("STORAGE_ENGINE", "memory")
        .env("ADDRESS", "127.0.0.1")
        .env("PORT", "0")
        .env("RUST_LOG", "info")
        .env_remove("DATABASE_URL")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("should start the server");

    let stdout = child.stdout.take().unwrap();
    let (sender, receiver) = mpsc::channel();

    thread::spawn(move || {
        for line in BufReader::new(stdout).lines().map_while(Result::ok) {
            if sender.send(line).is_err() {
                break;
            }
        }
    });

    let deadline = Instant::now() + STARTUP_TIMEOUT;
    let mut lines = vec![];

    while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
        match receiver.recv_timeout(remaining) {
            Ok(line) => {
                let done = line.contains(until);
                lines.push(line);

                if done {
                    break;
                }
            }
            Err(_) => break,
        }
    }

    let _ = child.kill();
    let _ = child.wait();

    lines
}

#[test]
fn logs_are_written_to_stdout() {
    let dir = working_directory("stdout");

    let lines = stdout_lines(&dir, "Listening on");

    assert!(
        lines.iter().any(|line| line.contains("Storage engine: memory")),
        "stdout was: {:?}",
        lines
    );
    assert!(
        lines.iter().any(|line| line.contains("Listening on 127.0.0.1:0")),
        "stdout was: {:?}",
        lines
    );
}

#[test]
fn malformed_env_file_is_reported() {
    // Given a .env file that cannot be parsed
    let dir = working_directory("dotenv");
    fs::write(dir.join(".env"), "not a valid line\n").unwrap();

    // When the server starts
    let lines = stdout_lines(&dir, "Listening on");

    // Then it warns and still starts
    assert!(
        lines
            .iter()
            .any(|line| line.contains("Unable to load .env file")),
        "stdout was: {:?}",
        lines
    );
    assert!(lines.iter().any(|line| line.contains("Listening on")));
}
