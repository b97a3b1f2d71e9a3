use std::fmt;

use log::Level;

pub const TARGET: &str = "logdrip";
pub const CRITICAL_TARGET: &str = "logdrip::critical";

pub const MESSAGES: [&str; 4] = [
	"Maecenas placerat turpis diam, ut venenatis tellus commodo non. Ut vel sapien ut lorem pharetra feugiat non quis lorem.",
	"Integer varius ipsum lobortis dolor faucibus, in malesuada lectus venenatis. Pellentesque vulputate orci scelerisque tincidunt convallis.",
	"Pellentesque habitant morbi tristique senectus et netus et malesuada fames ac turpis egestas. In elementum tempor magna eget tincidunt.",
	"Ut vel sapien ut lorem pharetra feugiat non quis lorem. Sed volutpat erat ut sapien venenatis sollicitudin. Pellentesque et rutrum eros.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
	Info,
	Warning,
	Error,
	Critical,
}

pub const SEVERITIES: [Severity; 4] = [
	Severity::Info,
	Severity::Error,
	Severity::Warning,
	Severity::Critical,
];

impl Severity {
	/// `log` has no critical rank, so critical records share `Level::Error`
	/// and are told apart by their target.
	pub fn level(self) -> Level {
		match self {
			Severity::Info => Level::Info,
			Severity::Warning => Level::Warn,
			Severity::Error | Severity::Critical => Level::Error,
		}
	}

	pub fn target(self) -> &'static str {
		match self {
			Severity::Critical => CRITICAL_TARGET,
			_ => TARGET,
		}
	}

	pub fn from_record(level: Level, target: &str) -> Option<Self> {
		match (level, target) {
			(Level::Info, TARGET) => Some(Severity::Info),
			(Level::Warn, TARGET) => Some(Severity::Warning),
			(Level::Error, TARGET) => Some(Severity::Error),
			(Level::Error, CRITICAL_TARGET) => Some(Severity::Critical),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Severity::Info => "INFO",
			Severity::Warning => "WARNING",
			Severity::Error => "ERROR",
			Severity::Critical => "CRITICAL",
		}
	}
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn severities_are_distinct() {
		let set: HashSet<_> = SEVERITIES.iter().collect();
		assert_eq!(set.len(), SEVERITIES.len());
	}

	#[test]
	fn severity_mapping_round_trips_through_record_fields() {
		for severity in SEVERITIES {
			let back = Severity::from_record(severity.level(), severity.target());
			assert_eq!(back, Some(severity));
		}
	}

	#[test]
	fn critical_is_separate_from_error() {
		assert_eq!(Severity::Critical.level(), Severity::Error.level());
		assert_ne!(Severity::Critical.target(), Severity::Error.target());
		assert_eq!(Severity::from_record(Level::Debug, TARGET), None);
		assert_eq!(Severity::from_record(Level::Info, "other"), None);
	}

	#[test]
	fn display_names() {
		assert_eq!(Severity::Warning.to_string(), "WARNING");
		assert_eq!(Severity::Critical.to_string(), "CRITICAL");
	}

	#[test]
	fn message_pool_is_not_empty() {
		assert!(!MESSAGES.is_empty());
		assert!(MESSAGES.iter().all(|m| !m.is_empty()));
	}
}
