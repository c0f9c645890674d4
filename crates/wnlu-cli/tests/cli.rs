//! End-to-end runs of the binaries.

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use wnlu_test_utils::{two_pair_scenario, write_fixture, write_records, SAMPLE_WSC_XML};

/// Run a binary from an empty directory so no stray `wnlu.toml` is picked up.
fn run_bin(bin: &str, args: &[&Path], config: Option<&Path>) -> Output {
    let cwd = tempfile::tempdir().unwrap();
    let mut cmd = Command::new(bin);
    cmd.args(args)
        .current_dir(cwd.path())
        .env_remove("WNLU_CONFIG")
        .env("RUST_LOG", "warn");
    if let Some(path) = config {
        cmd.env("WNLU_CONFIG", path);
    }
    cmd.output().unwrap()
}

fn score(input: &Path, config: Option<&Path>) -> Output {
    run_bin(env!("CARGO_BIN_EXE_wnlu-score"), &[input], config)
}

#[test]
fn prints_text_report() {
    let fixture = write_records(&two_pair_scenario());
    let out = score(&fixture.path, None);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let expected = "\nTotal # of Winograd Schemas:  2\n\
Entailment only - #correct:  1  #discarded:  1\n\
Entailment+neutral - #correct:  1  #discarded:  1\n\
Contradiction only - #correct:  1  #discarded:  1\n\
Contradiction+neutral - #correct:  1  #discarded:  1\n\
\n\
Entailment only - %acc:  1.0  %net_acc:  0.75\n\
Entailment+neutral - %acc:  1.0  %net_acc:  0.75\n\
Contradiction only - %acc:  1.0  %net_acc:  0.75\n\
Contradiction+neutral - %acc:  1.0  %net_acc:  0.75\n\
\n";
    assert_eq!(stdout, expected);
}

#[test]
fn json_report_from_config() {
    let fixture = write_records(&two_pair_scenario());
    let config = write_fixture("wnlu.json", r#"{"report": {"format": "json"}}"#);
    let out = score(&fixture.path, Some(config.path.as_path()));
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["total_pairs"], 2);
    assert_eq!(json["rules"][3]["rule"], "contradiction_neutral");
    assert_eq!(json["rules"][3]["strict_accuracy"], 1.0);
}

#[test]
fn unknown_gold_label_fails_naming_pair() {
    let body = concat!(
        r#"{"pairID":"wsc-9","premise":"p","hypothesis":"h","gold_label":"foo","entailment_confidence":0.5,"neutral_confidence":0.3,"contradiction_confidence":0.2}"#,
        "\n",
    );
    let fixture = write_fixture("bad_label.jsonl", body);
    let out = score(&fixture.path, None);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("wsc-9"), "stderr: {stderr}");
    assert!(stderr.contains("foo"), "stderr: {stderr}");
}

#[test]
fn malformed_line_fails_naming_line() {
    let body = concat!(
        r#"{"pairID":"a","premise":"p","hypothesis":"h","gold_label":"entailment","entailment_confidence":0.5,"neutral_confidence":0.3,"contradiction_confidence":0.2}"#,
        "\n",
        "{not json\n",
    );
    let fixture = write_fixture("broken.jsonl", body);
    let out = score(&fixture.path, None);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line 2"), "stderr: {stderr}");
}

#[test]
fn invalid_utf8_fails_naming_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.jsonl");
    let mut body = br#"{"pairID":"a","premise":"p","hypothesis":"h","gold_label":"entailment","entailment_confidence":0.5,"neutral_confidence":0.3,"contradiction_confidence":0.2}"#.to_vec();
    body.extend_from_slice(b"\n{\"pairID\":\"\xff\"}\n");
    std::fs::write(&path, body).unwrap();

    let out = score(&path, None);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line 2"), "stderr: {stderr}");
}

#[test]
fn empty_bucket_fails() {
    let body = concat!(
        r#"{"pairID":"half","premise":"p","hypothesis":"h","gold_label":"entailment","entailment_confidence":0.5,"neutral_confidence":0.3,"contradiction_confidence":0.2}"#,
        "\n",
    );
    let fixture = write_fixture("half.jsonl", body);
    let out = score(&fixture.path, None);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("half"), "stderr: {stderr}");
    assert!(stderr.contains("neutral"), "stderr: {stderr}");
}

#[test]
fn missing_argument_is_usage_error() {
    let out = Command::new(env!("CARGO_BIN_EXE_wnlu-score")).output().unwrap();
    assert!(!out.status.success());
}

#[test]
fn translate_writes_examples() {
    let xml = write_fixture("WSCollection.xml", SAMPLE_WSC_XML);
    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("wsc_nli.jsonl");

    let out = run_bin(env!("CARGO_BIN_EXE_wnlu-translate"), &[xml.path.as_path(), output.as_path()], None);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), 4);
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Wrote 4 examples"));
    assert!(stdout.contains("1 schemata skipped"));
}
