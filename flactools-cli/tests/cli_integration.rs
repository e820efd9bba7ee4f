// flactools-cli/tests/cli_integration.rs
//
// Runs the compiled binaries against small shell scripts standing in for
// metaflac, flac, lame and sox.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Writes an executable script and returns its path.
fn fake_tool(dir: &Path, name: &str, body: &str) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n"))?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    Ok(path)
}

fn bin(name: &str) -> Command {
    let mut cmd = Command::cargo_bin(name).expect("Failed to find binary");
    for var in [
        "FLACTOOLS_METAFLAC",
        "FLACTOOLS_FLAC",
        "FLACTOOLS_LAME",
        "FLACTOOLS_SOX",
        "FLACTOOLS_TMPDIR",
        "FLACTOOLS_LAME_OPTIONS",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_flacted_prints_tag_value() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let metaflac = fake_tool(tmp.path(), "metaflac", "echo 'ARTIST=Pink Floyd'")?;

    bin("flacted")
        .args(["artist", "song.flac"])
        .env("FLACTOOLS_METAFLAC", &metaflac)
        .assert()
        .success()
        .stdout("Pink Floyd\n");
    Ok(())
}

#[test]
fn test_personality_takes_tag_from_program_name() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let log = tmp.path().join("args.txt");
    let metaflac = fake_tool(
        tmp.path(),
        "metaflac",
        &format!("printf '%s\\n' \"$@\" > '{}'; echo 'ARTIST=Pink Floyd'", log.display()),
    )?;
    let personality = tmp.path().join("flac-artist");
    std::os::unix::fs::symlink(assert_cmd::cargo::cargo_bin("flacted"), &personality)?;

    let mut cmd = Command::new(&personality);
    cmd.env_remove("FLACTOOLS_METAFLAC").env_remove("RUST_LOG");
    cmd.arg("song.flac")
        .arg("--metaflac")
        .arg(&metaflac)
        .assert()
        .success()
        .stdout("Pink Floyd\n");

    assert_eq!(fs::read_to_string(&log)?, "--show-tag=artist\nsong.flac\n");
    Ok(())
}

#[test]
fn test_flacted_missing_tag_exit_code() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let metaflac = fake_tool(tmp.path(), "metaflac", "exit 0")?;

    bin("flacted")
        .args(["title", "song.flac"])
        .arg("--metaflac")
        .arg(&metaflac)
        .assert()
        .code(1)
        .stderr(contains("Tag \"title\" not found"));
    Ok(())
}

#[test]
fn test_flacted_json_output() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let metaflac = fake_tool(tmp.path(), "metaflac", "printf 'genre=\\n'")?;

    let output = bin("flacted")
        .args(["GENRE", "song.flac", "--json"])
        .env("FLACTOOLS_METAFLAC", &metaflac)
        .output()?;
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["value"], "");
    assert_eq!(parsed["tag"], "genre");
    Ok(())
}

#[test]
fn test_flacted_write_passes_arguments() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let log = tmp.path().join("args.txt");
    let metaflac = fake_tool(
        tmp.path(),
        "metaflac",
        &format!("printf '%s\\n' \"$@\" > '{}'", log.display()),
    )?;

    bin("flacted")
        .args(["Title", "song.flac", "Us and Them"])
        .env("FLACTOOLS_METAFLAC", &metaflac)
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        fs::read_to_string(&log)?,
        "--remove-tag=title\n--set-tag=title=Us and Them\nsong.flac\n"
    );
    Ok(())
}

#[test]
fn test_flacted_missing_metaflac() {
    bin("flacted")
        .args(["artist", "song.flac", "--metaflac", "surely-no-such-metaflac-42"])
        .assert()
        .code(2)
        .stderr(contains("not found"));
}

#[test]
fn test_flac2mp3_converts_and_moves_source() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let tools = tmp.path().join("tools");
    fs::create_dir(&tools)?;
    let metaflac = fake_tool(&tools, "metaflac", "exit 0")?;
    // flac -f -d <file>: write <stem>.wav
    let flac = fake_tool(&tools, "flac", "touch \"${3%.*}.wav\"")?;
    // lame ... <input> <output>: write the last argument
    let lame = fake_tool(&tools, "lame", "for last; do :; done; echo mp3 > \"$last\"")?;

    let source = tmp.path().join("song.flac");
    fs::write(&source, b"flac")?;
    let done = tmp.path().join("done");

    bin("flac2mp3")
        .arg(&source)
        .arg("--move-to")
        .arg(&done)
        .arg("--metaflac")
        .arg(&metaflac)
        .arg("--flac")
        .arg(&flac)
        .arg("--lame")
        .arg(&lame)
        .assert()
        .success()
        .stdout(contains("song.mp3"));

    assert!(tmp.path().join("song.mp3").exists());
    assert!(!tmp.path().join("song.wav").exists());
    assert!(done.join("song.flac").exists());
    assert!(!source.exists());
    Ok(())
}

#[test]
fn test_flac2mp3_output_with_multiple_inputs_fails() {
    bin("flac2mp3")
        .args(["a.flac", "b.flac", "-o", "x.mp3"])
        .assert()
        .code(2)
        .stderr(contains("--output needs exactly one input file"));
}

#[test]
fn test_flac2mp3_check_reports_missing_tool() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let ok = fake_tool(tmp.path(), "ok", "exit 0")?;

    bin("flac2mp3")
        .arg("--check")
        .arg("unused.flac")
        .arg("--metaflac")
        .arg(&ok)
        .arg("--flac")
        .arg(&ok)
        .args(["--lame", "surely-no-such-lame-42"])
        .assert()
        .code(2)
        .stderr(contains("surely-no-such-lame-42"));
    Ok(())
}

#[test]
fn test_flacs2mp3_cue_requires_output() {
    bin("flacs2mp3-cue")
        .arg("a.flac")
        .assert()
        .failure()
        .stderr(contains("--output"));
}
