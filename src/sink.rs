use anyhow::{anyhow, Result};
use log::{LevelFilter, Log, Record};

use crate::pool::Severity;

/// Lowest level, so every severity in the pool reaches the console.
pub const THRESHOLD: LevelFilter = LevelFilter::Trace;

/// Installs the console logger. Only the first call in a process succeeds.
pub fn init() -> Result<()> {
	simple_logger::SimpleLogger::new()
		.with_level(THRESHOLD)
		.init()
		.map_err(|e| anyhow!("failed to install logger: {}", e))
}

pub fn emit(logger: &dyn Log, severity: Severity, message: &str) {
	logger.log(
		&Record::builder()
			.args(format_args!("{}", message))
			.level(severity.level())
			.target(severity.target())
			.module_path_static(Some(module_path!()))
			.file_static(Some(file!()))
			.line(Some(line!()))
			.build(),
	);
}

#[cfg(test)]
pub(crate) mod capture {
	use std::sync::Mutex;

	use log::{Log, Metadata, Record};
	use tokio::time::Instant;

	use crate::pool::Severity;

	#[derive(Debug, Clone)]
	pub struct Captured {
		pub severity: Option<Severity>,
		pub msg: String,
		pub at: Instant,
	}

	#[derive(Default)]
	pub struct CaptureLogger {
		records: Mutex<Vec<Captured>>,
	}

	impl CaptureLogger {
		pub fn records(&self) -> Vec<Captured> {
			self.records.lock().unwrap().clone()
		}
	}

	impl Log for CaptureLogger {
		fn enabled(&self, metadata: &Metadata) -> bool {
			metadata.level() <= super::THRESHOLD
		}

		fn log(&self, record: &Record) {
			if !self.enabled(record.metadata()) {
				return;
			}
			self.records.lock().unwrap().push(Captured {
				severity: Severity::from_record(record.level(), record.target()),
				msg: record.args().to_string(),
				at: Instant::now(),
			});
		}

		fn flush(&self) {}
	}
}

#[cfg(test)]
mod tests {
	use super::capture::CaptureLogger;
	use super::*;
	use crate::pool::{MESSAGES, SEVERITIES};

	#[test]
	fn emit_keeps_message_and_severity() {
		let logger = CaptureLogger::default();
		for severity in SEVERITIES {
			emit(&logger, severity, MESSAGES[2]);
		}
		let records = logger.records();
		assert_eq!(records.len(), SEVERITIES.len());
		for (record, severity) in records.iter().zip(SEVERITIES) {
			assert_eq!(record.msg, MESSAGES[2]);
			assert_eq!(record.severity, Some(severity));
		}
	}

	#[test]
	fn init_sets_lowest_threshold_once() {
		init().unwrap();
		assert_eq!(log::max_level(), LevelFilter::Trace);
		assert!(init().is_err());
	}
}
