//! End-to-end tests for the stream-sample binary.

use std::fs;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stream-sample"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run stream-sample")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_no_command_runs_filter() {
    let out = run(&[]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "张三、李四、王五、赵六\n");
}

#[test]
fn test_filter_school() {
    let out = run(&["filter", "--school", "北京大学"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "田七、小明、小红\n");
}

#[test]
fn test_distinct_with_delimiter() {
    let out = run(&["-d", ",", "distinct"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "10,12,15,25,16,14,17\n");
}

#[test]
fn test_limit_and_skip_defaults() {
    assert_eq!(stdout(&run(&["limit"])), "张三、李四\n");
    assert_eq!(
        stdout(&run(&["skip"])),
        "王五、赵六、田七、小明、小红、小华、小丽、小何\n"
    );
}

#[test]
fn test_sorted() {
    let out = run(&["--delimiter", " ", "sorted"]);
    assert_eq!(
        stdout(&out),
        "田七 小丽 小明 王五 小红 小华 李四 赵六 张三 小何\n"
    );
}

#[test]
fn test_negative_count_fails() {
    let out = run(&["skip", "-n", "-1"]);
    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.contains("skip: count must be non-negative, got -1"));
}

#[test]
fn test_verbose_reports_on_stderr() {
    let out = run(&["-v", "limit", "-n", "3"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "张三、李四、赵六\n");
    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.contains("First 3 records with an even age"));
    assert!(err.contains("Processed 10 -> 3 records"));
}

#[test]
fn test_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("skip.txt");
    let out = run(&["-o", path.to_str().unwrap(), "skip", "-n", "8"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "小丽、小何\n");
}
