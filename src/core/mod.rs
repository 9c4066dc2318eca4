//! Core business logic
//!
//! # Components
//!
//! - `directory` - in-memory account collection keyed by account number
//! - `engine` - transaction dispatch and the per-operation business rules
//! - `reporter` - constraint event sinks

pub mod directory;
pub mod engine;
pub mod reporter;

pub use directory::AccountDirectory;
pub use engine::TransactionEngine;
pub use reporter::{ConstraintSink, LogReporter, MemoryReporter};
