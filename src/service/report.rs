//! Batch payroll report.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::PaymentResult;

/// A log line that could not be parsed into an employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRecord {
    /// 1-based position of the line among the non-blank lines of the log.
    pub line_number: usize,
    /// The line as read.
    pub record: String,
    /// Why the line was rejected.
    pub reason: String,
}

/// How a [`PayrollReport`] is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One summary line per employee.
    #[default]
    Text,
    /// The whole report, including breakdowns and warnings, as JSON.
    Json,
}

/// The outcome of pricing a whole employee log.
///
/// Payments keep the order of the log. A rejected line never stops the
/// batch; it is recorded here instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// One result per accepted record, in log order.
    pub payments: Vec<PaymentResult>,
    /// Lines that were skipped.
    #[serde(default)]
    pub rejected: Vec<RejectedRecord>,
}

impl PayrollReport {
    /// Returns the summary line of every payment, in log order.
    ///
    /// ```
    /// use shift_payroll::service::PayrollService;
    /// use shift_payroll::config::PayrollConfig;
    ///
    /// let service = PayrollService::new(PayrollConfig::standard());
    /// let report = service.calculate(&["ASTRID=MO10:00-12:00,TH12:00-14:00,SU20:00-21:00"]);
    /// assert_eq!(report.summaries(), vec!["The amount to pay ASTRID is: 85.00 USD"]);
    /// ```
    pub fn summaries(&self) -> Vec<String> {
        self.payments.iter().map(ToString::to_string).collect()
    }

    /// Sum of every employee's total.
    pub fn grand_total(&self) -> Decimal {
        self.payments.iter().map(|p| p.total_amount).sum()
    }

    /// Returns true if any line was rejected or any interval raised a warning.
    pub fn has_issues(&self) -> bool {
        !self.rejected.is_empty() || self.payments.iter().any(PaymentResult::has_warnings)
    }

    /// Renders the summaries as newline-separated text.
    pub fn to_text(&self) -> String {
        self.summaries().join("\n")
    }

    /// Renders the full report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Renders the report in the requested format.
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => self.to_json(),
        }
    }
}
