//! Integration tests for the gateway-requests CLI.
//!
//! These tests run the actual binary against CSV files written to a temp dir.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const HEADER: &str =
    "type,amount,order_id,customer_id,payment_method_token,merchant_account_id,submit_for_settlement";

/// Write `body` under the standard header into a temp file
fn write_csv(dir: &TempDir, body: &str) -> String {
    let path = dir.path().join("input.csv");
    fs::write(&path, format!("{}\n{}", HEADER, body)).unwrap();
    path.to_string_lossy().into_owned()
}

/// Run the binary with the given arguments and return stdout
fn run_cli(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("gateway-requests").unwrap();
    let assert = cmd.args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_xml_output_one_line_per_row() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(
        &dir,
        "sale,10.00,order-1,cust-1,,,true\n\
         credit,2.5,,,tok_9,,\n",
    );

    let output = run_cli(&[&input]);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "<transaction><amount>10.00</amount><customer-id>cust-1</customer-id>\
         <order-id>order-1</order-id>\
         <options><submit-for-settlement>true</submit-for-settlement></options>\
         <type>sale</type></transaction>"
    );
    assert_eq!(
        lines[1],
        "<transaction><amount>2.50</amount><payment-method-token>tok_9</payment-method-token>\
         <type>credit</type></transaction>"
    );
}

#[test]
fn test_query_output() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "sale,1,,,,merchant_a,\n");

    let output = run_cli(&[&input, "query"]);
    assert_eq!(
        output.trim_end(),
        "transaction%5Bamount%5D=1.00&transaction%5Bmerchant_account_id%5D=merchant_a&\
         transaction%5Btype%5D=sale"
    );
}

#[test]
fn test_invalid_rows_do_not_fail_the_run() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(
        &dir,
        "void,1,,,,,\n\
         sale,0.001,,,,,\n\
         sale,4,,,,,\n",
    );

    let output = run_cli(&[&input]);
    assert_eq!(output.lines().count(), 1);
    assert!(output.contains("<amount>4.00</amount>"));
}

#[test]
fn test_header_only_input_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "");

    let output = run_cli(&[&input]);
    assert!(output.is_empty());
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("gateway-requests").unwrap();
    cmd.arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("gateway-requests").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}

#[test]
fn test_unknown_format_error() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "sale,1,,,,,\n");

    let mut cmd = Command::cargo_bin("gateway-requests").unwrap();
    cmd.args([input.as_str(), "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format"));
}
