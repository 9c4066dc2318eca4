//! Bank Reconciliation Engine Library
//! # Overview
//!
//! This library implements the end-of-day batch that reconciles a bank's
//! master accounts file against the day's merged transaction log, producing
//! a new master file and a current accounts file in fixed-width text form.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, TransactionRecord, events, errors)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::directory`] - In-memory account collection for one run
//!   - [`core::engine`] - Transaction dispatch and business rules
//!   - [`core::reporter`] - Structured constraint event sinks
//! - [`io`] - Fixed-width record codec and streaming file readers
//! - [`batch`] - End-to-end orchestration of one reconciliation run
//!
//! # Transaction Codes
//!
//! The engine dispatches on the numeric code of each transaction line:
//!
//! - **01 Withdraw**: Debit funds (requires sufficient balance)
//! - **02 Transfer**: One leg of a transfer, send (`SD`) or receive (`RV`)
//! - **03 Paybill**: Debit funds toward a bill payment
//! - **04 Deposit**: Credit funds (capped at the 99999.99 balance limit)
//! - **05 Create**: Open a new account with an initial balance and plan
//! - **06 Delete**: Close an account whose balance is exactly zero
//! - **07 Disable**: Set an account's status to active or disabled
//! - **08 Changeplan**: Switch an account between the NP and SP plans
//! - **00**: End-of-session marker, skipped
//!
//! Rejected transactions never mutate state; each produces one structured
//! [`types::ConstraintEvent`] and processing continues with the next record.

// Module declarations
pub mod batch;
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{
    AccountDirectory, ConstraintSink, LogReporter, MemoryReporter, TransactionEngine,
};
pub use batch::{BatchRun, BatchSummary};
pub use types::{
    Account, AccountId, AccountStatus, ConstraintEvent, ConstraintKind, DecodeError, Plan,
    ReconError, TransactionCode, TransactionRecord,
};
