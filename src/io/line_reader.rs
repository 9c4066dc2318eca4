//! File-backed readers with iterator interfaces
//!
//! `AccountReader` and `TransactionReader` stream decoded records from the
//! snapshot and transaction files one line at a time. Decode failures are
//! yielded as `ReadError::Decode` carrying the 1-based line number so the
//! caller can turn them into "Fatal error" events and keep going; I/O
//! failures are yielded as `ReadError::Io` and abort the run. The file
//! handle is released when the reader is dropped, on every exit path.

use crate::io::fixed_format::{decode_account_line, decode_transaction_line};
use crate::types::{Account, DecodeError, ReconError, TransactionRecord};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use thiserror::Error;

/// Failure while reading one line of an input file
#[derive(Debug, Error)]
pub enum ReadError {
    /// Line-scoped format failure; the line is skipped
    #[error("Line {line}: {error}")]
    Decode { line: u64, error: DecodeError },

    /// I/O failure; the run cannot continue
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Streaming reader over master/snapshot account lines
#[derive(Debug)]
pub struct AccountReader {
    lines: Lines<BufReader<File>>,
    line_num: u64,
}

impl AccountReader {
    pub fn open(path: &Path) -> Result<Self, ReconError> {
        let file = File::open(path)?;
        Ok(AccountReader {
            lines: BufReader::new(file).lines(),
            line_num: 0,
        })
    }
}

impl Iterator for AccountReader {
    type Item = Result<Account, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_num += 1;
        Some(match line {
            Ok(line) => decode_account_line(&line).map_err(|error| ReadError::Decode {
                line: self.line_num,
                error,
            }),
            Err(e) => Err(ReadError::Io(e)),
        })
    }
}

/// Streaming reader over merged transaction log lines
#[derive(Debug)]
pub struct TransactionReader {
    lines: Lines<BufReader<File>>,
    line_num: u64,
}

impl TransactionReader {
    pub fn open(path: &Path) -> Result<Self, ReconError> {
        let file = File::open(path)?;
        Ok(TransactionReader {
            lines: BufReader::new(file).lines(),
            line_num: 0,
        })
    }
}

impl Iterator for TransactionReader {
    type Item = Result<TransactionRecord, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_num += 1;
        Some(match line {
            Ok(line) => decode_transaction_line(&line).map_err(|error| ReadError::Decode {
                line: self.line_num,
                error,
            }),
            Err(e) => Err(ReadError::Io(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionCode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_account_reader_open_fails_on_missing_file() {
        let result = AccountReader::open(Path::new("nonexistent.txt"));
        assert!(matches!(result, Err(ReconError::Io(_))));
    }

    #[test]
    fn test_account_reader_reads_valid_lines() {
        let content = "00001 John Doe             A 00100.00 0001\n\
                       00002 Jane Roe             D 00050.00 0000\n";
        let file = create_temp_file(content);

        let reader = AccountReader::open(file.path()).unwrap();
        let accounts: Vec<_> = reader.map(Result::unwrap).collect();

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].number, 1);
        assert_eq!(accounts[1].number, 2);
    }

    #[test]
    fn test_account_reader_skips_bad_lines_with_line_numbers() {
        let content = "00001 John Doe             A 00100.00 0001\n\
                       this line is not a valid account record!!!\n\
                       00003 Jane Roe             A 00050.00 0000\n";
        let file = create_temp_file(content);

        let reader = AccountReader::open(file.path()).unwrap();
        let results: Vec<_> = reader.collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[2].is_ok());

        match &results[1] {
            Err(ReadError::Decode { line, .. }) => assert_eq!(*line, 2),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_transaction_reader_reads_valid_lines() {
        let content = "01 John Doe             00001 00010.00   \n\
                       00                      00000 00000.00   \n";
        let file = create_temp_file(content);

        let reader = TransactionReader::open(file.path()).unwrap();
        let records: Vec<_> = reader.map(Result::unwrap).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code, TransactionCode::Withdraw);
        assert_eq!(records[1].code, TransactionCode::EndOfSession);
    }

    #[test]
    fn test_transaction_reader_continues_after_error() {
        let content = "01 John Doe             00001 00010.00   \n\
                       99 John Doe             00001 00010.00   \n\
                       04 John Doe             00001 00020.00   \n";
        let file = create_temp_file(content);

        let reader = TransactionReader::open(file.path()).unwrap();
        let results: Vec<_> = reader.collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());

        let error = results[1].as_ref().unwrap_err();
        assert_eq!(
            error.to_string(),
            "Line 2: Invalid transaction code '99'"
        );
    }

    #[test]
    fn test_transaction_reader_empty_file() {
        let file = create_temp_file("");
        let reader = TransactionReader::open(file.path()).unwrap();
        assert_eq!(reader.count(), 0);
    }
}
