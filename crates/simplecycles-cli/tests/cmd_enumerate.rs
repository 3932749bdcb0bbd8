//! Integration tests for `simplecycles enumerate`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to the compiled `simplecycles` binary.
fn simplecycles_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("simplecycles");
    path
}

fn graph_file(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    f.write_all(contents.as_bytes()).expect("write fixture");
    f
}

fn run(args: &[&str], file: &tempfile::NamedTempFile) -> Output {
    let path = file.path().to_str().expect("utf-8 path");
    let mut argv = vec!["enumerate", path];
    argv.extend_from_slice(args);
    Command::new(simplecycles_bin())
        .args(&argv)
        .output()
        .expect("run simplecycles enumerate")
}

fn stdout_json(out: &Output) -> serde_json::Value {
    serde_json::from_slice(&out.stdout).expect("stdout is JSON")
}

const DIRECTED_K3: &str =
    r#"{"directed": true, "vertices": 3, "edges": [[0,1],[1,0],[0,2],[2,0],[1,2],[2,1]]}"#;

const UNDIRECTED_K4: &str = r#"{"directed": false, "vertices": 4,
    "edges": [[0,1],[0,2],[0,3],[1,2],[1,3],[2,3]]}"#;

// ---------------------------------------------------------------------------
// Human output
// ---------------------------------------------------------------------------

#[test]
fn directed_triangle_prints_one_line() {
    let f = graph_file(r#"{"directed": true, "vertices": 3, "edges": [[0,1],[1,2],[2,0]]}"#);
    let out = run(&[], &f);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "0 -> 1 -> 2\n");
}

#[test]
fn labels_replace_ids() {
    let f = graph_file(
        r#"{"directed": true, "vertices": 2, "edges": [[0,1],[1,0]], "labels": ["a", "b"]}"#,
    );
    let out = run(&[], &f);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "a -> b\n");
}

#[test]
fn acyclic_graph_prints_nothing_and_succeeds() {
    let f = graph_file(r#"{"directed": true, "vertices": 3, "edges": [[0,1],[1,2]]}"#);
    let out = run(&[], &f);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn count_flag_prints_only_the_number() {
    let f = graph_file(DIRECTED_K3);
    let out = run(&["--count"], &f);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "5");
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[test]
fn complete_directed_k3_has_five_cycles() {
    let f = graph_file(DIRECTED_K3);
    let out = run(&["-f", "json"], &f);
    assert!(out.status.success());
    let value = stdout_json(&out);
    assert_eq!(value["count"], 5);
    assert_eq!(value["status"], "complete");
    assert_eq!(value["cycles"].as_array().map(Vec::len), Some(5));
}

#[test]
fn undirected_k4_vertex_set_and_sequence_dedup() {
    let f = graph_file(UNDIRECTED_K4);
    let by_set = stdout_json(&run(&["-f", "json"], &f));
    assert_eq!(by_set["count"], 5);
    let by_sequence = stdout_json(&run(&["-f", "json", "--dedup", "sequence"], &f));
    assert_eq!(by_sequence["count"], 7);
}

#[test]
fn max_cycles_reports_limit_reached() {
    let f = graph_file(DIRECTED_K3);
    let out = run(&["-f", "json", "--max-cycles", "2"], &f);
    assert!(out.status.success());
    let value = stdout_json(&out);
    assert_eq!(value["count"], 2);
    assert_eq!(value["status"], "limit_reached");
}

#[test]
fn in_mode_reverses_cycle_direction() {
    let f = graph_file(r#"{"directed": true, "vertices": 3, "edges": [[0,1],[1,2],[2,0]]}"#);
    let value = stdout_json(&run(&["-f", "json", "--mode", "in"], &f));
    assert_eq!(value["cycles"], serde_json::json!([[0, 2, 1]]));
}

#[test]
fn all_mode_treats_directed_graph_as_undirected() {
    let f = graph_file(r#"{"directed": true, "vertices": 3, "edges": [[0,1],[1,2],[0,2]]}"#);
    let value = stdout_json(&run(&["-f", "json", "--mode", "all"], &f));
    assert_eq!(value["count"], 1);
}

// ---------------------------------------------------------------------------
// Edge-list input and timeouts
// ---------------------------------------------------------------------------

#[test]
fn edge_list_input_is_supported() {
    let f = graph_file("# ring\n0 1\n1 2\n2 3\n3 0\n");
    let out = run(&["--input-format", "edgelist", "-f", "json"], &f);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let value = stdout_json(&out);
    assert_eq!(value["cycles"], serde_json::json!([[0, 1, 2, 3]]));
}

#[test]
fn undirected_edge_list_drops_two_cycles() {
    let f = graph_file("0 1\n1 2\n2 0\n");
    let out = run(&["--input-format", "edgelist", "--undirected", "--count"], &f);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "1");
}

#[test]
fn zero_timeout_exits_1() {
    let f = graph_file(DIRECTED_K3);
    let out = run(&["--timeout-ms", "0"], &f);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("timed out"), "stderr: {stderr}");
}
