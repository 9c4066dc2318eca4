//! End-of-day batch orchestration
//!
//! `BatchRun` ties the pipeline together: load the old master snapshot,
//! replay the merged transaction log through the engine, then write the
//! new master and current accounts files. Malformed input lines and
//! duplicate snapshot entries are reported as "Fatal error" events and
//! skipped; only I/O failures and output invariant violations abort the
//! run.

use crate::core::{AccountDirectory, ConstraintSink, TransactionEngine};
use crate::io::line_reader::ReadError;
use crate::io::{write_current_accounts, write_master_accounts, AccountReader, TransactionReader};
use crate::types::{ConstraintEvent, ConstraintKind, ReconError, TransactionRecord};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Paths for one reconciliation run
#[derive(Debug, Clone)]
pub struct BatchRun {
    /// Yesterday's master accounts file
    pub old_master: PathBuf,
    /// Merged transaction log for the day
    pub transactions: PathBuf,
    /// Destination for the new master accounts file
    pub new_master: PathBuf,
    /// Destination for the current accounts file
    pub current_accounts: PathBuf,
}

/// Counters describing a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub accounts_loaded: usize,
    pub transactions_read: usize,
    pub accounts_written: usize,
}

impl BatchRun {
    /// Execute the full pipeline, reporting rejections through `sink`
    pub fn execute(&self, sink: &mut dyn ConstraintSink) -> Result<BatchSummary, ReconError> {
        let directory = self.load_accounts(sink)?;
        let accounts_loaded = directory.len();

        let transactions = self.load_transactions(sink)?;
        let transactions_read = transactions.len();

        let mut engine = TransactionEngine::with_directory(directory);
        engine.apply(&transactions, sink);
        let accounts = engine.into_directory().into_accounts();

        let mut master = BufWriter::new(File::create(&self.new_master)?);
        write_master_accounts(&accounts, &mut master)?;
        master.flush()?;

        let mut current = BufWriter::new(File::create(&self.current_accounts)?);
        write_current_accounts(&accounts, &mut current)?;
        current.flush()?;

        Ok(BatchSummary {
            accounts_loaded,
            transactions_read,
            accounts_written: accounts.len(),
        })
    }

    fn load_accounts(&self, sink: &mut dyn ConstraintSink) -> Result<AccountDirectory, ReconError> {
        let mut directory = AccountDirectory::new();
        for result in AccountReader::open(&self.old_master)? {
            match result {
                Ok(account) => {
                    let number = account.number;
                    if !directory.insert(account) {
                        sink.report(ConstraintEvent::new(
                            ConstraintKind::FatalError,
                            format!("Duplicate account number {:05} in snapshot", number),
                        ));
                    }
                }
                Err(ReadError::Decode { line, error }) => {
                    sink.report(ConstraintEvent::fatal(line, error));
                }
                Err(ReadError::Io(e)) => return Err(ReconError::Io(e)),
            }
        }
        Ok(directory)
    }

    fn load_transactions(
        &self,
        sink: &mut dyn ConstraintSink,
    ) -> Result<Vec<TransactionRecord>, ReconError> {
        let mut transactions = Vec::new();
        for result in TransactionReader::open(&self.transactions)? {
            match result {
                Ok(record) => transactions.push(record),
                Err(ReadError::Decode { line, error }) => {
                    sink.report(ConstraintEvent::fatal(line, error));
                }
                Err(ReadError::Io(e)) => return Err(ReconError::Io(e)),
            }
        }
        Ok(transactions)
    }
}
