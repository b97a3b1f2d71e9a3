use std::time::Duration;

use log::Log;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::config::EmitterConfig;
use crate::draw::Draw;
use crate::pool::{Severity, MESSAGES, SEVERITIES};
use crate::sink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
	pub message: &'static str,
	pub severity: Severity,
}

pub struct Emitter<'a, D> {
	draw: D,
	logger: &'a dyn Log,
	config: EmitterConfig,
}

impl<'a, D: Draw> Emitter<'a, D> {
	pub fn new(draw: D, logger: &'a dyn Log, config: EmitterConfig) -> Self {
		Emitter {
			draw,
			logger,
			config,
		}
	}

	pub fn next_line(&mut self) -> Line {
		let message = MESSAGES[self.draw.index(MESSAGES.len())];
		let severity = SEVERITIES[self.draw.index(SEVERITIES.len())];
		Line { message, severity }
	}

	pub fn next_delay(&mut self) -> Duration {
		let units = self.draw.delay(&self.config.delay);
		match u32::try_from(units) {
			Ok(units) => self.config.delay_unit.saturating_mul(units),
			Err(_) => Duration::MAX,
		}
	}

	/// Emits lines until `cancel` fires or `max_lines` is reached and returns
	/// how many were written.
	pub async fn run(&mut self, cancel: CancellationToken) -> u64 {
		let mut emitted = 0u64;
		loop {
			if cancel.is_cancelled() {
				break;
			}
			if let Some(limit) = self.config.max_lines {
				if emitted >= limit {
					break;
				}
			}
			let line = self.next_line();
			sink::emit(self.logger, line.severity, line.message);
			emitted += 1;

			if self.config.max_lines == Some(emitted) {
				break;
			}

			let delay = self.next_delay();
			tokio::select! {
				_ = cancel.cancelled() => break,
				_ = sleep(delay) => {}
			}
		}
		emitted
	}
}
