use std::ops::Range;
use std::time::Duration;

use anyhow::{ensure, Result};
use clap::Parser;
use rand::rngs::StdRng;

use crate::draw::Entropy;

#[derive(Parser, Debug, Clone)]
#[command(
	author,
	version,
	about = "Emit random sample log lines at random intervals until interrupted"
)]
pub struct Args {
	/// Shortest pause between lines (seconds, inclusive).
	#[arg(long, default_value_t = 1)]
	pub min_delay: u64,
	/// Longest pause between lines (seconds, exclusive).
	#[arg(long, default_value_t = 3)]
	pub max_delay: u64,
	/// Seed for a reproducible run. Seeded from the OS if omitted.
	#[arg(long)]
	pub seed: Option<u64>,
	/// Optional upper bound on lines before exiting.
	#[arg(long)]
	pub max_lines: Option<u64>,
}

impl Args {
	pub fn emitter_config(&self) -> Result<EmitterConfig> {
		ensure!(
			self.min_delay < self.max_delay,
			"--min-delay ({}) must be below --max-delay ({})",
			self.min_delay,
			self.max_delay
		);
		Ok(EmitterConfig {
			delay: self.min_delay..self.max_delay,
			max_lines: self.max_lines,
			..EmitterConfig::default()
		})
	}

	pub fn draw(&self) -> Entropy<StdRng> {
		match self.seed {
			Some(seed) => Entropy::seeded(seed),
			None => Entropy::from_os(),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmitterConfig {
	/// Pause between lines in `delay_unit`s, upper bound exclusive.
	pub delay: Range<u64>,
	pub delay_unit: Duration,
	pub max_lines: Option<u64>,
}

impl Default for EmitterConfig {
	fn default() -> Self {
		EmitterConfig {
			delay: 1..3,
			delay_unit: Duration::from_secs(1),
			max_lines: None,
		}
	}
}
