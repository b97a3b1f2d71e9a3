use std::collections::VecDeque;
use std::ops::Range;

use anyhow::{ensure, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the uniform draws the emitter makes each iteration.
pub trait Draw {
	/// Uniform index in `0..len`. `len` is never zero.
	fn index(&mut self, len: usize) -> usize;
	/// Uniform value in `range`. The range is never empty.
	fn delay(&mut self, range: &Range<u64>) -> u64;
}

pub struct Entropy<R> {
	rng: R,
}

impl<R: Rng> Entropy<R> {
	pub fn new(rng: R) -> Self {
		Entropy { rng }
	}
}

impl Entropy<StdRng> {
	pub fn from_os() -> Self {
		Entropy::new(StdRng::from_os_rng())
	}

	pub fn seeded(seed: u64) -> Self {
		Entropy::new(StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> Draw for Entropy<R> {
	fn index(&mut self, len: usize) -> usize {
		self.rng.random_range(0..len)
	}

	fn delay(&mut self, range: &Range<u64>) -> u64 {
		self.rng.random_range(range.clone())
	}
}

/// Replays a fixed sequence of draws, starting over once it runs out.
#[derive(Debug, Clone)]
pub struct Scripted {
	values: VecDeque<u64>,
}

impl Scripted {
	pub fn new<I: IntoIterator<Item = u64>>(values: I) -> Result<Self> {
		let values: VecDeque<u64> = values.into_iter().collect();
		ensure!(!values.is_empty(), "scripted draws need at least one value");
		Ok(Scripted { values })
	}

	fn next(&mut self) -> u64 {
		// never empty, checked in new
		let value = self.values.pop_front().unwrap_or_default();
		self.values.push_back(value);
		value
	}
}

impl Draw for Scripted {
	fn index(&mut self, len: usize) -> usize {
		self.next() as usize % len
	}

	fn delay(&mut self, range: &Range<u64>) -> u64 {
		let value = self.next();
		if range.contains(&value) {
			value
		} else {
			range.start + value % (range.end - range.start)
		}
	}
}
