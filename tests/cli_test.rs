use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn sim_prints_json_summary() {
    let output = Command::new(env!("CARGO_BIN_EXE_salvo"))
        .args(["sim", "--seed", "12345", "--quiet"])
        .output()
        .expect("failed to run salvo");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    let outcome = v["outcome"].as_str().unwrap();
    assert!(outcome == "Won" || outcome == "Lost");
    assert_eq!(v["total_ships"], 3);
    assert!(v["shots_fired"].as_u64().unwrap() <= 50);
}

#[test]
fn sim_is_reproducible_with_seed() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_salvo"))
            .args(["sim", "--seed", "99", "--shots", "100"])
            .output()
            .expect("failed to run salvo")
            .stdout
    };
    let first = run();
    assert_eq!(first, run());
    let text = String::from_utf8(first).unwrap();
    assert!(text.contains("Congrats you won!"));
}

#[test]
fn play_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_salvo"))
        .args(["play", "--seed", "1", "--shots", "1"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to run salvo");
    child.stdin.take().unwrap().write_all(b"A0\n").unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Sorry, you lost! You ran out of bullets, try again next time!"));
}

#[test]
fn invalid_config_fails_at_startup() {
    let output = Command::new(env!("CARGO_BIN_EXE_salvo"))
        .args(["sim", "--size", "2"])
        .output()
        .expect("failed to run salvo");
    assert!(!output.status.success());
}
