use std::process::Command;

fn seedseek() -> Command {
    Command::new(env!("CARGO_BIN_EXE_seedseek"))
}

#[test]
fn test_count_collapses_duplicate_words() {
    let output = seedseek()
        .args(["count", "alpha", "alpha", "beta"])
        .output()
        .expect("failed to execute seedseek");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "3");
}

#[test]
fn test_count_distinct_words_is_factorial() {
    let output = seedseek()
        .args(["count", "w", "x", "y", "z"])
        .output()
        .expect("failed to execute seedseek");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "24");
}

#[test]
fn test_count_without_words_is_rejected() {
    let output = seedseek()
        .arg("count")
        .output()
        .expect("failed to execute seedseek");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no words"), "stderr: {}", stderr);
}

#[test]
fn test_count_rejects_oversized_space() {
    let words: Vec<String> = (0..21).map(|i| format!("w{}", i)).collect();
    let output = seedseek()
        .arg("count")
        .args(&words)
        .output()
        .expect("failed to execute seedseek");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exceeds"), "stderr: {}", stderr);
}

#[test]
fn test_recover_rejects_wrong_word_count() {
    let output = seedseek()
        .args(["recover", "--words", "one two three", "--target", "TXYZ"])
        .output()
        .expect("failed to execute seedseek");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("expected 12, 15, 18, 21 or 24 words"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_recover_rejects_empty_target() {
    let words = vec!["abandon"; 12].join(" ");
    let output = seedseek()
        .args(["recover", "--words", &words, "--target", "  "])
        .output()
        .expect("failed to execute seedseek");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("target address"), "stderr: {}", stderr);
}

#[test]
fn test_recover_rejects_malformed_derivation_path() {
    let words = vec!["abandon"; 12].join(" ");
    let output = seedseek()
        .args([
            "recover",
            "--words",
            &words,
            "--target",
            "TXYZ",
            "--path",
            "not-a-path",
        ])
        .output()
        .expect("failed to execute seedseek");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error"));
}

#[test]
fn test_recover_exhausts_a_single_ordering_space() {
    // Twelve identical words have exactly one distinct ordering, and it
    // fails the BIP-39 checksum, so the search exhausts deterministically.
    let words = vec!["abandon"; 12].join(" ");
    let output = seedseek()
        .args(["recover", "--words", &words, "--target", "TXYZ", "--quiet"])
        .output()
        .expect("failed to execute seedseek");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Distinct orderings to check: 1"),
        "stdout: {}",
        stdout
    );
    assert!(
        stdout.contains("No ordering of these words derives the target address."),
        "stdout: {}",
        stdout
    );
}

#[test]
fn test_help_lists_subcommands() {
    let output = seedseek()
        .arg("--help")
        .output()
        .expect("failed to execute seedseek");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("recover"));
    assert!(stdout.contains("count"));
}
