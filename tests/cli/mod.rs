use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pngchunks() -> Command {
  let mut cmd = Command::new(env!("CARGO_BIN_EXE_pngchunks"));
  cmd.env_remove("PNGCHUNKS_CHUNK_TABLE").env_remove("RUST_LOG").env("NO_COLOR", "1");
  cmd
}

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
  let path = dir.path().join(name);
  std::fs::write(&path, bytes).unwrap();
  path
}

fn no_table(dir: &TempDir) -> PathBuf {
  dir.path().join("missing_table.json")
}

fn run_on(path: &Path, table: &Path, extra: &[&str]) -> assert_cmd::assert::Assert {
  pngchunks().arg("-i").arg(path).arg("--chunk-table").arg(table).args(extra).assert()
}

#[test]
fn test_no_args_prints_usage() {
  pngchunks().assert().success().stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_filename() {
  pngchunks()
    .arg("--print-text")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("No filename specified."));
}

#[test]
fn test_input_flag_without_a_value() {
  for args in [&["-i"][..], &["--print-text", "-i"], &["-i", "--print-text"]] {
    pngchunks()
      .args(args)
      .assert()
      .code(1)
      .stderr(predicate::str::contains("No filename specified."));
  }
}

#[test]
fn test_missing_file() {
  let dir = TempDir::new().unwrap();
  run_on(&dir.path().join("nope.png"), &no_table(&dir), &[])
    .code(1)
    .stderr(predicate::str::contains("Failed to open"));
}

#[test]
fn test_empty_file() {
  let dir = TempDir::new().unwrap();
  let path = write_file(&dir, "empty.png", &[]);
  run_on(&path, &no_table(&dir), &[])
    .code(1)
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("The file is empty."));
}

#[test]
fn test_not_a_png() {
  let dir = TempDir::new().unwrap();
  let path = write_file(&dir, "fake.png", b"GIF89a\x01\x00\x01\x00");
  run_on(&path, &no_table(&dir), &[])
    .code(1)
    .stderr(predicate::str::contains("The file does not start with a PNG header."));
}

#[test]
fn test_minimal_png() {
  let dir = TempDir::new().unwrap();
  let png = super::png_bytes(&[super::chunk(b"IHDR", &[], 0), super::chunk(b"IEND", &[], 0)]);
  let path = write_file(&dir, "min.png", &png);
  run_on(&path, &no_table(&dir), &[]).success().stdout(
    "PNG header - OK\n\
     Chunk \"IHDR\", 0     bytes, CRC = 00000000\n\
     Chunk \"IEND\", 0     bytes, CRC = 00000000\n",
  );
}

#[test]
fn test_descriptions_and_stop_at_iend() {
  let dir = TempDir::new().unwrap();
  let table = write_file(&dir, "table.json", br#"{"IHDR": "Image header"}"#);
  let png = super::png_bytes(&[
    super::chunk(b"IHDR", &[0; 13], 0x1F15_C489),
    super::chunk(b"IEND", &[], 0xAE42_6082),
    super::chunk(b"bOGs", &[], 0),
  ]);
  let path = write_file(&dir, "a.png", &png);
  run_on(&path, &table, &[]).success().stdout(
    "PNG header - OK\n\
     Chunk \"IHDR\", 13    bytes, CRC = 1F15C489 (Image header)\n\
     Chunk \"IEND\", 0     bytes, CRC = AE426082\n",
  );
}

#[test]
fn test_print_text() {
  let dir = TempDir::new().unwrap();
  let png = super::png_bytes(&[super::chunk(b"tEXt", b"Hello", 0x1234_5678), super::chunk(b"IEND", &[], 0)]);
  let path = write_file(&dir, "text.png", &png);

  let with_text = run_on(&path, &no_table(&dir), &["--print-text"]).success();
  let stdout = String::from_utf8(with_text.get_output().stdout.clone()).unwrap();
  let lines: Vec<&str> = stdout.lines().collect();
  assert_eq!(lines[1], "Chunk \"tEXt\", 5     bytes, CRC = 12345678");
  assert_eq!(lines[2], "Hello");
  assert_eq!(lines.len(), 4);

  let without_text = run_on(&path, &no_table(&dir), &[]).success();
  let stdout = String::from_utf8(without_text.get_output().stdout.clone()).unwrap();
  assert!(!stdout.lines().any(|l| l == "Hello"));
  assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn test_truncated_chunk_fails() {
  let dir = TempDir::new().unwrap();
  let mut png = super::png_bytes(&[super::chunk(b"IHDR", &[0; 13], 0)]);
  png.extend_from_slice(&super::chunk(b"IDAT", &[0; 64], 0)[..20]);
  let path = write_file(&dir, "cut.png", &png);
  run_on(&path, &no_table(&dir), &[])
    .code(1)
    .stdout(predicate::str::contains("Chunk \"IHDR\""))
    .stderr(predicate::str::contains("truncated"));
}

#[test]
fn test_clean_end_without_iend() {
  let dir = TempDir::new().unwrap();
  let png = super::png_bytes(&[super::chunk(b"IHDR", &[0; 13], 0)]);
  let path = write_file(&dir, "no_end.png", &png);
  run_on(&path, &no_table(&dir), &[]).success();
}
