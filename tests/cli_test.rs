use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const SCENARIO: &str = r#"[
  {"type": "dad", "setup": "Why did the chicken cross the road?", "punchline": "To get to the other side."},
  {"type": "tech", "setup": "Why do programmers prefer dark mode?", "punchline": "Because light attracts bugs."}
]"#;

fn write_file(dir: &TempDir, name: &str, content: &str) -> Result<String> {
    let path = dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok(path.to_str().unwrap().to_string())
}

fn joker() -> Command {
    let mut cmd = Command::cargo_bin("joker").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_category_prints_matching_joke() -> Result<()> {
    let dir = TempDir::new()?;
    let dataset = write_file(&dir, "jokes.json", SCENARIO)?;

    joker()
        .args(["--dataset", &dataset, "dad"])
        .assert()
        .success()
        .stdout("Why did the chicken cross the road?\n\nTo get to the other side.\n\n");
    Ok(())
}

#[test]
fn test_unknown_category_is_not_an_error() -> Result<()> {
    let dir = TempDir::new()?;
    let dataset = write_file(&dir, "jokes.json", SCENARIO)?;

    joker()
        .args(["--dataset", &dataset, "sports"])
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("No jokes found for category: sports"))
        .stdout(predicate::str::contains("joker -l"));
    Ok(())
}

#[test]
fn test_list_prints_each_category_once() -> Result<()> {
    let dir = TempDir::new()?;
    let dataset = write_file(&dir, "jokes.json", SCENARIO)?;

    let output = joker().args(["--dataset", &dataset, "-l"]).output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut lines: Vec<&str> = stdout.lines().collect();
    lines.sort_unstable();
    assert_eq!(lines, vec!["dad", "tech"]);
    Ok(())
}

#[test]
fn test_malformed_dataset_exits_one() -> Result<()> {
    let dir = TempDir::new()?;
    let dataset = write_file(&dir, "broken.json", r#"[{"type": "dad", "setup": "#)?;

    joker()
        .args(["--dataset", &dataset])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("malformed"));
    Ok(())
}

#[test]
fn test_missing_dataset_exits_one() -> Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.path().join("nowhere.json");

    joker()
        .args(["--dataset", missing.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_empty_dataset_exits_one() -> Result<()> {
    let dir = TempDir::new()?;
    let dataset = write_file(&dir, "empty.json", "[]")?;

    joker()
        .args(["--dataset", &dataset])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_bundled_dataset_tells_a_joke() {
    joker()
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not())
        .stdout(predicate::str::ends_with("\n\n"));
}

#[test]
fn test_bundled_categories() {
    joker()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("dad\n"))
        .stdout(predicate::str::contains("programming\n"));
}

#[test]
fn test_same_seed_same_joke() -> Result<()> {
    let first = joker().args(["--seed", "1234"]).output()?;
    let second = joker().args(["--seed", "1234"]).output()?;
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    Ok(())
}

#[test]
fn test_config_file_supplies_dataset() -> Result<()> {
    let dir = TempDir::new()?;
    let dataset = write_file(&dir, "jokes.json", SCENARIO)?;
    let config = write_file(
        &dir,
        "joker.toml",
        &format!(
            "[dataset]\npath = \"{}\"\n\n[selection]\nseed = 5\n",
            dataset.replace('\\', "/")
        ),
    )?;

    joker()
        .args(["--config", &config, "tech"])
        .assert()
        .success()
        .stdout("Why do programmers prefer dark mode?\n\nBecause light attracts bugs.\n\n");
    Ok(())
}

#[test]
fn test_missing_config_file_exits_one() {
    joker()
        .args(["--config", Path::new("definitely/not/here.toml").to_str().unwrap()])
        .assert()
        .code(1);
}

#[test]
fn test_whitespace_category_reports_no_match() {
    joker()
        .arg(" ")
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("No jokes found for category:  \n"))
        .stdout(predicate::str::contains("joker -l"));
}

#[test]
fn test_empty_category_tells_any_joke() {
    joker()
        .arg("")
        .assert()
        .code(0)
        .stdout(predicate::str::ends_with("\n\n"))
        .stdout(predicate::str::contains("No jokes found").not());
}

#[test]
fn test_list_with_empty_category() {
    joker()
        .args(["-l", ""])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("dad\n"));
}

#[test]
fn test_failure_reports_once_without_log_line() -> Result<()> {
    let dir = TempDir::new()?;
    let dataset = write_file(&dir, "broken.json", "{")?;

    let output = joker().args(["--dataset", &dataset]).output()?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(stderr.matches("malformed").count(), 1);
    assert!(!stderr.contains("joker failed"));
    assert!(!stderr.contains("ERROR"));
    Ok(())
}
