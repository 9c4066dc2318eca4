//! Bank Reconciliation Engine CLI
//!
//! Command-line interface for the end-of-day account reconciliation batch.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- old_master.txt transactions.txt new_master.txt current.txt
//! ```
//!
//! The program loads the old master accounts file, applies the merged
//! transaction log, and writes the new master accounts file and the current
//! accounts file. Rejected lines and transactions are reported on the
//! error log; they never abort the run.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, output not writable, etc.)

use bank_recon_engine::batch::BatchRun;
use bank_recon_engine::cli;
use bank_recon_engine::core::LogReporter;
use std::process;

fn main() {
    env_logger::init();

    let args = cli::parse_args();
    let run = BatchRun {
        old_master: args.old_master,
        transactions: args.transactions,
        new_master: args.new_master,
        current_accounts: args.current_accounts,
    };

    let mut reporter = LogReporter;
    match run.execute(&mut reporter) {
        Ok(summary) => {
            log::info!(
                "Reconciled {} accounts against {} transactions, wrote {} accounts",
                summary.accounts_loaded,
                summary.transactions_read,
                summary.accounts_written
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
