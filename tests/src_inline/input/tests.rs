use super::*;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_pathwayreport_input_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

#[test]
fn test_open_maybe_gz_plain_and_gz() {
    let dir = make_temp_dir();
    let plain = dir.join("a.csv");
    write_file(&plain, "x,y\n1,2\n");

    let gz = dir.join("a.csv.gz");
    let mut enc = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
    enc.write_all(b"x,y\n1,2\n").unwrap();
    enc.finish().unwrap();

    for path in [&plain, &gz] {
        let mut text = String::new();
        open_maybe_gz(path).unwrap().read_to_string(&mut text).unwrap();
        assert_eq!(text, "x,y\n1,2\n");
    }
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = make_temp_dir();
    let err = open_maybe_gz(&dir.join("absent.csv")).err().unwrap();
    assert!(err.is_not_found());
}

#[test]
fn test_open_csv_resolves_columns() {
    let dir = make_temp_dir();
    let path = dir.join("t.csv");
    write_file(&path, ",b,a\nG,2,1\n");
    let (_, idx) = open_csv(&path, &["a", ""]).unwrap();
    assert_eq!(idx, vec![2, 0]);
}

#[test]
fn test_open_csv_missing_column() {
    let dir = make_temp_dir();
    let path = dir.join("t.csv");
    write_file(&path, "a,b\n1,2\n");
    let err = open_csv(&path, &["c"]).err().unwrap();
    assert!(matches!(err, InputError::Parse(_)));
    assert!(!err.is_not_found());
}
