//! Error types for the reconciliation engine
//!
//! Two tiers, mirroring the error-handling design of the batch run:
//!
//! - [`DecodeError`] - line-scoped input-format failures. These are
//!   recoverable: the reader turns each one into a "Fatal error" event
//!   and skips the line.
//! - [`ReconError`] - run-aborting conditions: I/O failures and
//!   output-invariant violations discovered while serializing. An
//!   in-memory account should never fail re-validation at write time if
//!   the parser and engine are correct, so these signal an engine bug
//!   rather than bad input.

use rust_decimal::Decimal;
use thiserror::Error;

/// A single snapshot or transaction line failed format validation
///
/// The `Display` text is the reason embedded in the emitted
/// "Fatal error" event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Line length differs from the fixed record width
    #[error("Invalid length ({0} chars)")]
    InvalidLength(usize),

    /// Account number field contains a non-digit
    #[error("Invalid account number format")]
    InvalidAccountNumber,

    /// Status field is not 'A' or 'D'
    #[error("Invalid status '{0}'")]
    InvalidStatus(char),

    /// Balance field does not match DDDDD.DD
    #[error("Invalid balance format")]
    InvalidBalanceFormat,

    /// Decoded balance is below zero
    #[error("Negative balance")]
    NegativeBalance,

    /// Transaction count field contains a non-digit
    #[error("Invalid transaction count format")]
    InvalidTransactionCount,

    /// Transaction code field contains a non-digit
    #[error("Invalid transaction code format")]
    InvalidCodeFormat,

    /// Transaction code parsed but is outside 0-8
    #[error("Invalid transaction code '{0}'")]
    CodeOutOfRange(String),

    /// Amount field does not match DDDDD.DD
    #[error("Invalid transaction amount format")]
    InvalidAmountFormat,

    /// Decoded amount is below zero
    #[error("Negative amount")]
    NegativeAmount,
}

/// Fatal error for a batch run
#[derive(Debug, Error)]
pub enum ReconError {
    /// I/O failure while reading input or writing output files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An in-memory account number no longer fits the 5-digit field
    #[error("Account number out of range: {number}")]
    AccountNumberOutOfRange { number: u32 },

    /// An in-memory account name no longer fits the 20-character field
    #[error("Name exceeds 20 characters: {name}")]
    NameTooLong { name: String },

    /// An in-memory balance left [0, 99999.99]
    #[error("Balance out of range: {balance}")]
    BalanceOutOfRange { balance: Decimal },

    /// An in-memory transaction counter left 0-9999
    #[error("Transaction count out of range: {count}")]
    TransactionCountOutOfRange { count: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DecodeError::InvalidLength(39), "Invalid length (39 chars)")]
    #[case(DecodeError::InvalidAccountNumber, "Invalid account number format")]
    #[case(DecodeError::InvalidStatus('X'), "Invalid status 'X'")]
    #[case(DecodeError::InvalidBalanceFormat, "Invalid balance format")]
    #[case(DecodeError::InvalidTransactionCount, "Invalid transaction count format")]
    #[case(DecodeError::InvalidCodeFormat, "Invalid transaction code format")]
    #[case(DecodeError::CodeOutOfRange("99".to_string()), "Invalid transaction code '99'")]
    #[case(DecodeError::InvalidAmountFormat, "Invalid transaction amount format")]
    fn test_decode_error_display(#[case] error: DecodeError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case(
        ReconError::NameTooLong { name: "An Unreasonably Long Account Name".to_string() },
        "Name exceeds 20 characters: An Unreasonably Long Account Name"
    )]
    #[case(
        ReconError::BalanceOutOfRange { balance: Decimal::new(10000000, 2) },
        "Balance out of range: 100000.00"
    )]
    #[case(
        ReconError::TransactionCountOutOfRange { count: 10000 },
        "Transaction count out of range: 10000"
    )]
    fn test_recon_error_display(#[case] error: ReconError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error: ReconError = io_error.into();
        assert!(matches!(error, ReconError::Io(_)));
        assert_eq!(error.to_string(), "I/O error: no such file");
    }
}
