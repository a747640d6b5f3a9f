//! Payroll service.
//!
//! Ties ingestion, parsing and calculation together. The service holds the
//! tier configuration behind an [`Arc`] so clones can be handed to tasks
//! cheaply.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_employee_payment;
use crate::config::{ConfigLoader, PayrollConfig};
use crate::error::EngineResult;
use crate::ingest::{ReadMode, load_lines, parse_record, read_lines, read_lines_async};

use super::report::{PayrollReport, RejectedRecord};

/// Prices employee logs against a tier configuration.
///
/// # Example
///
/// ```no_run
/// use shift_payroll::service::PayrollService;
///
/// # async fn run() -> shift_payroll::error::EngineResult<()> {
/// let service = PayrollService::default();
/// let report = service.amount_to_pay("employees_data.txt").await?;
/// for line in report.summaries() {
///     println!("{}", line);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PayrollService {
    config: Arc<PayrollConfig>,
}

impl PayrollService {
    /// Creates a service for the given configuration.
    pub fn new(config: PayrollConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the configuration the service prices against.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Prices every line of an already-read log.
    ///
    /// Lines that fail to parse are logged and recorded in
    /// [`PayrollReport::rejected`]; the rest of the batch is still priced.
    pub fn calculate<S: AsRef<str>>(&self, lines: &[S]) -> PayrollReport {
        let run_id = Uuid::new_v4();
        let start_time = Instant::now();
        info!(run_id = %run_id, records = lines.len(), "Processing employee log");

        let mut report = PayrollReport::default();
        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            match parse_record(line) {
                Ok(record) => {
                    report
                        .payments
                        .push(calculate_employee_payment(&record, &self.config));
                }
                Err(err) => {
                    warn!(
                        run_id = %run_id,
                        line_number = index + 1,
                        error = %err,
                        "Skipping malformed employee record"
                    );
                    report.rejected.push(RejectedRecord {
                        line_number: index + 1,
                        record: line.to_string(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        info!(
            run_id = %run_id,
            employees = report.payments.len(),
            rejected = report.rejected.len(),
            grand_total = %report.grand_total(),
            duration_us = start_time.elapsed().as_micros(),
            "Payroll calculation completed"
        );
        if report.has_issues() {
            warn!(
                run_id = %run_id,
                rejected = report.rejected.len(),
                degraded = report.payments.iter().filter(|p| p.has_warnings()).count(),
                "Payroll completed with rejected records or degraded intervals"
            );
        }

        report
    }

    /// Reads the log at `path` without blocking and prices it.
    ///
    /// Returns `FileNotFound` or `FileReadError` if the file cannot be read.
    pub async fn amount_to_pay<P: AsRef<Path>>(&self, path: P) -> EngineResult<PayrollReport> {
        let lines = read_lines_async(path).await?;
        Ok(self.calculate(&lines))
    }

    /// Reads the log at `path` with a blocking call and prices it.
    pub fn amount_to_pay_sync<P: AsRef<Path>>(&self, path: P) -> EngineResult<PayrollReport> {
        let lines = read_lines(path)?;
        Ok(self.calculate(&lines))
    }

    /// Reads the log at `path` in the given mode and prices it.
    pub async fn amount_to_pay_with<P: AsRef<Path>>(
        &self,
        path: P,
        mode: ReadMode,
    ) -> EngineResult<PayrollReport> {
        let lines = load_lines(path, mode).await?;
        Ok(self.calculate(&lines))
    }
}

impl Default for PayrollService {
    fn default() -> Self {
        Self::new(PayrollConfig::standard())
    }
}

impl From<ConfigLoader> for PayrollService {
    fn from(loader: ConfigLoader) -> Self {
        Self::new(loader.into_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    const LOG: [&str; 3] = [
        "RENE=MO10:00-12:00,TU10:00-12:00,TH01:00-03:00,SA14:00-18:00,SU20:00-21:00",
        "ASTRID=MO10:00-12:00,TH12:00-14:00,SU20:00-21:00",
        "JULIA,MO=10:30-19:30,SA=08:45-10:15,SU=09:00-16:45",
    ];

    #[test]
    fn test_calculate_log() {
        let service = PayrollService::default();
        let report = service.calculate(&LOG);

        assert_eq!(
            report.summaries(),
            vec![
                "The amount to pay RENE is: 215.00 USD",
                "The amount to pay ASTRID is: 85.00 USD",
                "The amount to pay JULIA is: 328.80 USD",
            ]
        );
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn test_malformed_line_does_not_stop_batch() {
        let service = PayrollService::default();
        let lines = vec![
            LOG[0].to_string(),
            "1234=MO10:00".to_string(),
            LOG[1].to_string(),
        ];

        let report = service.calculate(&lines);

        assert_eq!(report.payments.len(), 2);
        assert_eq!(report.payments[1].employee_name, "ASTRID");
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].line_number, 2);
        assert_eq!(report.rejected[0].record, "1234=MO10:00");
    }

    #[test]
    fn test_lowercase_day_code_is_priced_as_weekend() {
        let service = PayrollService::default();
        let report = service.calculate(&["X=mo10:00-12:00", "Y=SA10:00-12:00", "Z=MO10:00-12:00"]);

        assert_eq!(
            report.summaries(),
            vec![
                "The amount to pay X is: 40.00 USD",
                "The amount to pay Y is: 40.00 USD",
                "The amount to pay Z is: 30.00 USD",
            ]
        );
    }

    #[test]
    fn test_empty_log() {
        let service = PayrollService::default();
        let report = service.calculate::<&str>(&[]);
        assert!(report.payments.is_empty());
    }

    #[test]
    fn test_amount_to_pay_sync_missing_file() {
        let service = PayrollService::default();
        match service.amount_to_pay_sync("employees_data1.txt") {
            Err(EngineError::FileNotFound { path }) => assert_eq!(path, "employees_data1.txt"),
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_amount_to_pay_missing_file() {
        let service = PayrollService::default();
        let result = service.amount_to_pay("employees_data1.txt").await;
        assert!(matches!(result, Err(EngineError::FileNotFound { .. })));
    }

    #[test]
    fn test_service_from_loader() {
        let service = PayrollService::from(ConfigLoader::standard());
        assert_eq!(service.config(), &PayrollConfig::standard());
    }

    #[test]
    fn test_service_is_clone_and_send() {
        fn assert_traits<T: Clone + Send + Sync>() {}
        assert_traits::<PayrollService>();
    }
}
