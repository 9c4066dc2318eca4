//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account state, status, and plan types
//! - `transaction`: Transaction codes and decoded log records
//! - `event`: Structured constraint-rejection events
//! - `error`: Line-scoped decode errors and run-fatal errors

pub mod account;
pub mod error;
pub mod event;
pub mod transaction;

pub use account::{Account, AccountId, AccountStatus, Plan};
pub use error::{DecodeError, ReconError};
pub use event::{ConstraintEvent, ConstraintKind};
pub use transaction::{TransactionCode, TransactionRecord};
