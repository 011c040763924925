//! End-to-end tests driving the compiled `cymetric` binary, exercising
//! the report formats and the `-i`/exit-code contract that unit tests
//! inside `src/` can't reach.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn project_with(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).expect("write fixture");
    }
    dir
}

#[test]
fn tabular_report_lists_functions_and_exits_zero() {
    let dir = project_with(&[("simple.c", "int fun(){ if (a) { b; } }\n")]);

    let output = Command::cargo_bin("cymetric")
        .unwrap()
        .arg(dir.path())
        .output()
        .expect("run cymetric");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("fun@"));
}

#[test]
fn warnings_only_flag_suppresses_the_function_table() {
    let dir = project_with(&[("plain.c", "int fun(){}\n")]);

    let output = Command::cargo_bin("cymetric")
        .unwrap()
        .args(["-w"])
        .arg(dir.path())
        .output()
        .expect("run cymetric");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("NLOC"));
}

#[test]
fn low_ccn_threshold_produces_warnings_and_exit_code_one() {
    let dir = project_with(&[(
        "complex.c",
        "int fun(){ if(a){} if(b){} if(c){} }\n",
    )]);

    let output = Command::cargo_bin("cymetric")
        .unwrap()
        .args(["-C", "1", "-w"])
        .arg(dir.path())
        .output()
        .expect("run cymetric");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("warning:"));
}

#[test]
fn ignore_warnings_tolerance_restores_exit_code_zero() {
    let dir = project_with(&[(
        "complex.c",
        "int fun(){ if(a){} if(b){} if(c){} }\n",
    )]);

    let output = Command::cargo_bin("cymetric")
        .unwrap()
        .args(["-C", "1", "-i", "10"])
        .arg(dir.path())
        .output()
        .expect("run cymetric");

    assert!(output.status.success());
}

#[test]
fn xml_flag_emits_cppncss_schema() {
    let dir = project_with(&[("simple.c", "int fun(){}\n")]);

    let output = Command::cargo_bin("cymetric")
        .unwrap()
        .args(["-X"])
        .arg(dir.path())
        .output()
        .expect("run cymetric");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("<cppncss>"));
    assert!(stdout.contains("measure type=\"Function\""));
}

#[test]
fn exclude_glob_drops_matching_files_from_the_report() {
    let dir = project_with(&[
        ("keep.c", "int keep(){}\n"),
        ("skip.c", "int skip(){}\n"),
    ]);

    let output = Command::cargo_bin("cymetric")
        .unwrap()
        .args(["-x", "**/skip.c"])
        .arg(dir.path())
        .output()
        .expect("run cymetric");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("keep@"));
    assert!(!stdout.contains("skip@"));
}

#[test]
fn nonexistent_single_file_argument_exits_zero_with_empty_report() {
    let output = Command::cargo_bin("cymetric")
        .unwrap()
        .arg("/no/such/path.c")
        .output()
        .expect("run cymetric");

    assert!(output.status.success());
}
