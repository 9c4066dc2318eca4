//! Structured rejection events
//!
//! The engine and readers never print; every rejected line or transaction
//! becomes one `ConstraintEvent` pushed through a sink. Events are terminal
//! for the record that produced them and processing continues, so they are
//! plain data rather than control-flow errors.

use std::fmt;

/// Category of a rejection event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// A snapshot or transaction line failed format validation
    FatalError,
    /// The target account does not exist in the directory
    AccountNotFound,
    /// The target account is disabled and the operation needs it active
    AccountDisabled,
    /// Withdraw/paybill/transfer-send amount exceeds the balance
    InsufficientFunds,
    /// Deposit/transfer-receive would push the balance past 99999.99
    BalanceLimitExceeded,
    /// The misc sub-field is not valid for the operation
    InvalidCode,
    /// Create targeted an account number that is already taken
    AccountAlreadyExists,
    /// Disable targeted an account already in the requested status
    AccountAlreadyDisabled,
    /// Changeplan targeted an account already on the requested plan
    PlanUnchanged,
    /// Delete targeted an account whose balance is not exactly zero
    NonZeroBalance,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ConstraintKind::FatalError => "Fatal error",
            ConstraintKind::AccountNotFound => "Account Not Found",
            ConstraintKind::AccountDisabled => "Account Disabled",
            ConstraintKind::InsufficientFunds => "Insufficient Funds",
            ConstraintKind::BalanceLimitExceeded => "Balance Limit Exceeded",
            ConstraintKind::InvalidCode => "Invalid Code",
            ConstraintKind::AccountAlreadyExists => "Account Already Exists",
            ConstraintKind::AccountAlreadyDisabled => "Account Already Disabled",
            ConstraintKind::PlanUnchanged => "Plan Unchanged",
            ConstraintKind::NonZeroBalance => "Non-Zero Balance",
        };
        f.write_str(text)
    }
}

/// One rejection: a category plus a human-readable description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintEvent {
    pub kind: ConstraintKind,
    pub message: String,
}

impl ConstraintEvent {
    pub fn new(kind: ConstraintKind, message: impl Into<String>) -> Self {
        ConstraintEvent {
            kind,
            message: message.into(),
        }
    }

    /// A line-scoped input-format failure, tagged with its 1-based line number
    pub fn fatal(line: u64, reason: impl fmt::Display) -> Self {
        ConstraintEvent {
            kind: ConstraintKind::FatalError,
            message: format!("Line {}: {}", line, reason),
        }
    }
}

impl fmt::Display for ConstraintEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ConstraintKind::FatalError, "Fatal error")]
    #[case(ConstraintKind::AccountNotFound, "Account Not Found")]
    #[case(ConstraintKind::InsufficientFunds, "Insufficient Funds")]
    #[case(ConstraintKind::BalanceLimitExceeded, "Balance Limit Exceeded")]
    #[case(ConstraintKind::NonZeroBalance, "Non-Zero Balance")]
    fn test_kind_display(#[case] kind: ConstraintKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }

    #[test]
    fn test_event_display() {
        let event = ConstraintEvent::new(
            ConstraintKind::AccountNotFound,
            "Account 00042 does not exist",
        );
        assert_eq!(
            event.to_string(),
            "Account Not Found: Account 00042 does not exist"
        );
    }

    #[test]
    fn test_fatal_event_carries_line_number() {
        let event = ConstraintEvent::fatal(7, "Invalid balance format");
        assert_eq!(event.kind, ConstraintKind::FatalError);
        assert_eq!(event.message, "Line 7: Invalid balance format");
    }
}
