use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PAGE: &str = r#"<html><body>
<nav id="toc-container"><h3>Table of Contents</h3></nav>
<main>
  <h1>Teaching</h1>
  <h2>STAT 812</h2>
  <h3>R demos</h3>
  <h2>STAT 845</h2>
  <h1>Software</h1>
</main>
</body></html>"#;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("fixture to be written");
    path
}

#[test]
fn prints_treeviz_outline_by_default() {
    let dir = TempDir::new().unwrap();
    let page = write_fixture(&dir, "index.html", PAGE);

    let mut cmd = cargo_bin_cmd!("toc");
    cmd.current_dir(dir.path()).arg(&page);

    cmd.assert().success().stdout(
        predicate::str::contains("⧉ Outline (5 sections, 2 roots)")
            .and(predicate::str::contains("h3 R demos #r-demos"))
            .and(predicate::str::contains("Table of Contents").not()),
    );
}

#[test]
fn prints_json_outline() {
    let dir = TempDir::new().unwrap();
    let page = write_fixture(&dir, "index.html", PAGE);

    let mut cmd = cargo_bin_cmd!("toc");
    cmd.current_dir(dir.path()).arg(&page).arg("--to").arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""id":"stat-812""#));
}

#[test]
fn prints_active_path() {
    let dir = TempDir::new().unwrap();
    let page = write_fixture(&dir, "index.html", PAGE);

    let mut cmd = cargo_bin_cmd!("toc");
    cmd.current_dir(dir.path())
        .arg(&page)
        .arg("--active")
        .arg("r-demos");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("Teaching > STAT 812 > R demos\n"));
}

#[test]
fn unknown_active_id_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    let page = write_fixture(&dir, "index.html", PAGE);

    let mut cmd = cargo_bin_cmd!("toc");
    cmd.current_dir(dir.path())
        .arg(&page)
        .arg("--active")
        .arg("missing");

    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn level_flags_narrow_the_outline() {
    let dir = TempDir::new().unwrap();
    let page = write_fixture(&dir, "index.html", PAGE);

    let mut cmd = cargo_bin_cmd!("toc");
    cmd.current_dir(dir.path())
        .arg(&page)
        .arg("--min-level")
        .arg("2")
        .arg("--max-level")
        .arg("2");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("⧉ Outline (2 sections, 2 roots)"));
}

#[test]
fn local_config_file_is_layered() {
    let dir = TempDir::new().unwrap();
    let page = write_fixture(&dir, "index.html", PAGE);
    write_fixture(&dir, ".toc.toml", "[output]\nformat = \"json\"\n");

    let mut cmd = cargo_bin_cmd!("toc");
    cmd.current_dir(dir.path()).arg(&page);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""roots""#));
}

#[test]
fn markdown_input_is_detected() {
    let dir = TempDir::new().unwrap();
    let notes = write_fixture(&dir, "notes.md", "# Intro\n\n## Intro\n\n## Intro\n");

    let mut cmd = cargo_bin_cmd!("toc");
    cmd.current_dir(dir.path()).arg(&notes);

    cmd.assert().success().stdout(
        predicate::str::contains("#intro-2").and(predicate::str::contains("#intro-3")),
    );
}

#[test]
fn undetectable_format_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "notes.txt", "# Intro\n");

    let mut cmd = cargo_bin_cmd!("toc");
    cmd.current_dir(dir.path()).arg(&file);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--from"));
}

#[test]
fn explicit_input_format_overrides_detection() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "notes.txt", "# Intro\n");

    let mut cmd = cargo_bin_cmd!("toc");
    cmd.current_dir(dir.path())
        .arg(&file)
        .arg("--from")
        .arg("markdown");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("h1 Intro #intro"));
}

#[test]
fn output_only_format_rejected_as_input() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "notes.md", "# Intro\n");

    let mut cmd = cargo_bin_cmd!("toc");
    cmd.current_dir(dir.path())
        .arg(&file)
        .arg("--from")
        .arg("treeviz");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("does not support extraction"));
}

#[test]
fn deep_heading_list_is_printed() {
    let dir = TempDir::new().unwrap();
    let entries: Vec<String> = (1..=20_000)
        .map(|level| format!(r#"{{"level":{},"text":"H{}"}}"#, level, level))
        .collect();
    let list = write_fixture(&dir, "deep.json", &format!("[{}]", entries.join(",")));

    let mut cmd = cargo_bin_cmd!("toc");
    cmd.current_dir(dir.path())
        .arg(&list)
        .arg("--max-level")
        .arg("100000")
        .arg("--to")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""id":"h20000""#));
}

#[test]
fn lists_formats() {
    let mut cmd = cargo_bin_cmd!("toc");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("html (input)")
            .and(predicate::str::contains("json (input, output)"))
            .and(predicate::str::contains("treeviz (output)")),
    );
}
