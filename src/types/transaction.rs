//! Transaction-related types for the reconciliation engine
//!
//! A transaction is one 41-character line of the merged daily log. It
//! carries a numeric operation code, a display name (only meaningful for
//! create), the target account number, an amount, and a two-character
//! misc code whose meaning depends on the operation.

use super::account::AccountId;
use rust_decimal::Decimal;

/// Operation selector decoded from the two-digit code field
///
/// Codes 1-8 map to the eight business operations. Code 0 is the
/// end-of-session marker written by the front end; it is skipped without
/// an event. Any other value is kept as a distinct `Unrecognized` variant
/// rather than being aliased to the terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionCode {
    Withdraw,
    Transfer,
    PayBill,
    Deposit,
    Create,
    Delete,
    Disable,
    ChangePlan,
    /// Code 0, the session terminator
    EndOfSession,
    /// Any code outside 0-8
    Unrecognized(u8),
}

impl TransactionCode {
    /// Map a numeric code to its operation
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => TransactionCode::EndOfSession,
            1 => TransactionCode::Withdraw,
            2 => TransactionCode::Transfer,
            3 => TransactionCode::PayBill,
            4 => TransactionCode::Deposit,
            5 => TransactionCode::Create,
            6 => TransactionCode::Delete,
            7 => TransactionCode::Disable,
            8 => TransactionCode::ChangePlan,
            other => TransactionCode::Unrecognized(other),
        }
    }

    /// The numeric code for this operation
    pub fn code(self) -> u8 {
        match self {
            TransactionCode::EndOfSession => 0,
            TransactionCode::Withdraw => 1,
            TransactionCode::Transfer => 2,
            TransactionCode::PayBill => 3,
            TransactionCode::Deposit => 4,
            TransactionCode::Create => 5,
            TransactionCode::Delete => 6,
            TransactionCode::Disable => 7,
            TransactionCode::ChangePlan => 8,
            TransactionCode::Unrecognized(code) => code,
        }
    }
}

/// One decoded line of the merged transaction log
///
/// Transactions are applied strictly in file order and each touches at
/// most one account; a transfer appears as two independent records (one
/// "SD" send side, one "RV" receive side).
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// The operation to perform
    pub code: TransactionCode,

    /// Account holder name; used as the new account's name for create
    pub name: String,

    /// Canonical target account number
    pub account: AccountId,

    /// Non-negative amount with 2 fractional digits
    pub amount: Decimal,

    /// Operation-specific sub-field: plan code for create/changeplan,
    /// direction for transfer ("SD"/"RV"), status letter for disable
    pub misc: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, TransactionCode::EndOfSession)]
    #[case(1, TransactionCode::Withdraw)]
    #[case(2, TransactionCode::Transfer)]
    #[case(3, TransactionCode::PayBill)]
    #[case(4, TransactionCode::Deposit)]
    #[case(5, TransactionCode::Create)]
    #[case(6, TransactionCode::Delete)]
    #[case(7, TransactionCode::Disable)]
    #[case(8, TransactionCode::ChangePlan)]
    #[case(9, TransactionCode::Unrecognized(9))]
    #[case(99, TransactionCode::Unrecognized(99))]
    fn test_from_code(#[case] code: u8, #[case] expected: TransactionCode) {
        assert_eq!(TransactionCode::from_code(code), expected);
    }

    #[test]
    fn test_code_round_trips() {
        for code in 0..=10u8 {
            assert_eq!(TransactionCode::from_code(code).code(), code);
        }
    }

    #[test]
    fn test_unrecognized_is_distinct_from_terminator() {
        assert_ne!(
            TransactionCode::from_code(9),
            TransactionCode::EndOfSession
        );
    }
}
