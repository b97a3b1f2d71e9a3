pub mod config;
pub mod draw;
pub mod emitter;
pub mod pool;
pub mod sink;

pub use config::{Args, EmitterConfig};
pub use draw::{Draw, Entropy, Scripted};
pub use emitter::{Emitter, Line};
pub use pool::{Severity, MESSAGES, SEVERITIES};
