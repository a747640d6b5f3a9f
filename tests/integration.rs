//! Integration tests for the shift payroll engine.
//!
//! This test suite covers the end-to-end flow:
//! - Reading the employee log in both read modes
//! - Parsing both record layouts
//! - Single-tier and split-shift pricing
//! - Degraded intervals and rejected records
//! - Error cases

use rust_decimal::Decimal;
use std::io::Write;
use std::str::FromStr;
use tempfile::NamedTempFile;

use shift_payroll::calculation::TierResolution;
use shift_payroll::config::{ConfigLoader, PayrollConfig};
use shift_payroll::error::EngineError;
use shift_payroll::ingest::ReadMode;
use shift_payroll::models::WarningKind;
use shift_payroll::service::{OutputFormat, PayrollService};

// =============================================================================
// Test Helpers
// =============================================================================

const FIXTURE: &str = "tests/fixtures/employees_data.txt";

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn service() -> PayrollService {
    let loader = ConfigLoader::load("./config/pay_tiers.yaml").expect("Failed to load config");
    PayrollService::from(loader)
}

fn write_log(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn expected_summaries() -> Vec<&'static str> {
    vec![
        "The amount to pay RENE is: 215.00 USD",
        "The amount to pay ASTRID is: 85.00 USD",
        "The amount to pay JULIA is: 328.80 USD",
    ]
}

// =============================================================================
// Fixture log
// =============================================================================

#[tokio::test]
async fn test_fixture_non_blocking() {
    let report = service().amount_to_pay(FIXTURE).await.unwrap();

    assert_eq!(report.summaries(), expected_summaries());
    assert!(report.rejected.is_empty());
}

#[test]
fn test_fixture_blocking() {
    let report = service().amount_to_pay_sync(FIXTURE).unwrap();

    assert_eq!(report.summaries(), expected_summaries());
}

#[tokio::test]
async fn test_read_modes_agree() {
    let service = service();

    let blocking = service
        .amount_to_pay_with(FIXTURE, ReadMode::Blocking)
        .await
        .unwrap();
    let non_blocking = service
        .amount_to_pay_with(FIXTURE, ReadMode::NonBlocking)
        .await
        .unwrap();

    assert_eq!(blocking, non_blocking);
}

#[test]
fn test_fixture_breakdown() {
    let report = service().amount_to_pay_sync(FIXTURE).unwrap();
    let julia = &report.payments[2];

    let amounts: Vec<Decimal> = julia.intervals.iter().map(|p| p.amount).collect();
    assert_eq!(
        amounts,
        vec![decimal("142.10"), decimal("32.10"), decimal("154.60")]
    );
    assert_eq!(
        julia.intervals[0].resolution,
        TierResolution::Split { tier: 1 }
    );
    assert_eq!(report.grand_total(), decimal("628.80"));
}

// =============================================================================
// Degraded input
// =============================================================================

#[test]
fn test_invalid_minute_priced_at_zero() {
    let file = write_log("ASTRID=MO10:00-12:00,TH12:00-14:00,SU20:00-21:60\n");

    let report = service().amount_to_pay_sync(file.path()).unwrap();

    assert_eq!(
        report.summaries(),
        vec!["The amount to pay ASTRID is: 60.00 USD"]
    );
    assert_eq!(
        report.payments[0].warnings[0].kind,
        WarningKind::InvalidTimeValue
    );
    assert!(report.has_issues());
}

#[tokio::test]
async fn test_malformed_record_is_rejected_and_batch_continues() {
    let file = write_log(
        "RENE=MO10:00-12:00\n\
         NOT A RECORD 12\n\
         ASTRID=SU20:00-21:00\n",
    );

    let report = service().amount_to_pay(file.path()).await.unwrap();

    assert_eq!(
        report.summaries(),
        vec![
            "The amount to pay RENE is: 30.00 USD",
            "The amount to pay ASTRID is: 25.00 USD",
        ]
    );
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].line_number, 2);
}

#[test]
fn test_empty_log_produces_no_output() {
    let file = write_log("\n\n");

    let report = service().amount_to_pay_sync(file.path()).unwrap();

    assert!(report.payments.is_empty());
    assert_eq!(report.render(OutputFormat::Text).unwrap(), "");
}

#[test]
fn test_custom_configuration_changes_rates() {
    let config_file = write_log(
        r#"
weekday_codes: [MO, TU, WE, TH, FR]
weekday:
  - { start: "00:01", end: "09:00", rate: 50 }
  - { start: "09:01", end: "18:00", rate: 30 }
  - { start: "18:01", end: "00:00", rate: 40 }
weekend:
  - { start: "00:01", end: "09:00", rate: 60 }
  - { start: "09:01", end: "18:00", rate: 40 }
  - { start: "18:01", end: "00:00", rate: 50 }
"#,
    );
    let loader = ConfigLoader::load(config_file.path()).unwrap();
    let service = PayrollService::from(loader);

    let report = service.calculate(&["ASTRID=MO10:00-12:00,SU20:00-21:00"]);
    assert_eq!(report.payments[0].total_amount, decimal("110.00"));
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_missing_file_non_blocking() {
    let result = service().amount_to_pay("employees_data1.txt").await;

    match result {
        Err(EngineError::FileNotFound { path }) => assert_eq!(path, "employees_data1.txt"),
        other => panic!("Expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn test_missing_file_blocking() {
    let result = PayrollService::new(PayrollConfig::standard()).amount_to_pay_sync("employees_data1.txt");

    let err = result.unwrap_err();
    assert!(matches!(err, EngineError::FileNotFound { .. }));
    assert!(err.to_string().contains("employees_data1.txt"));
}
