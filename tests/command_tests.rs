use profile_stats::commands::{execute_report, validate_args, ReportArgs};
use profile_stats::output::ResponseFormat;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

const PAYLOAD: &str = r#"{
    "results": [
        {"gender": "female", "name": {"first": "Ada", "last": "Lovelace"}, "location": {"state": "CA"}, "dob": {"age": 36}},
        {"gender": "male", "name": {"first": "Zed", "last": "Young"}, "location": {"state": "NY"}, "dob": {"age": 81}}
    ]
}"#;

#[test]
fn test_report_to_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("users.json");
    let output = dir.path().join("out/report.txt");
    fs::write(&input, PAYLOAD).unwrap();

    let args = ReportArgs {
        input,
        format: ResponseFormat::Text,
        output: Some(output.clone()),
    };
    validate_args(&args).unwrap();

    let rendered = execute_report(args).unwrap();
    let written = fs::read_to_string(&output).unwrap();

    assert_eq!(rendered, written);
    assert!(written.starts_with("Percentage female versus male: 50.0%.\n\n"));
    assert!(written.contains(" 21-40: 50.0%, 81-100: 50.0%"));
}

#[test]
fn test_report_json_to_stdout() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("users.json");
    fs::write(&input, PAYLOAD).unwrap();

    let rendered = execute_report(ReportArgs {
        input,
        format: ResponseFormat::Json,
        output: None,
    })
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(
        value["6"],
        "Percentage of males in each state, up to the top 10 most populous states: NY: 100.0%"
    );
}

#[test]
fn test_report_empty_results_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("users.json");
    fs::write(&input, r#"{"results": []}"#).unwrap();

    let result = execute_report(ReportArgs {
        input,
        format: ResponseFormat::Xml,
        output: None,
    });

    assert!(result.is_err());
}

#[test]
fn test_validate_args_missing_input() {
    let args = ReportArgs {
        input: PathBuf::from("/definitely/not/here/users.json"),
        format: ResponseFormat::Json,
        output: None,
    };
    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_output_overwrites_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("users.json");
    fs::write(&input, PAYLOAD).unwrap();

    let args = ReportArgs {
        input: input.clone(),
        format: ResponseFormat::Json,
        output: Some(input),
    };
    assert!(validate_args(&args).is_err());
}
