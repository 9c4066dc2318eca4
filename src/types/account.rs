//! Account-related types for the reconciliation engine
//!
//! This module defines the Account structure and the enumerations for
//! account status and banking plan.

use rust_decimal::Decimal;

/// Account identifier
///
/// The canonical account number is its numeric value: stripping leading
/// zeros from the 5-digit file field is exactly integer parsing, and
/// all-zero input canonicalizes to 0. Valid ids fit in 5 digits (0-99999).
pub type AccountId = u32;

/// Account status as stored in the master file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    /// Account accepts all transactions
    Active,

    /// Account rejects balance-changing transactions
    ///
    /// A disabled account can still be the target of a disable transaction
    /// flipping it back to active.
    Disabled,
}

impl AccountStatus {
    /// The single-character file representation ('A' or 'D')
    pub fn as_char(self) -> char {
        match self {
            AccountStatus::Active => 'A',
            AccountStatus::Disabled => 'D',
        }
    }

    /// Parse the file representation; anything but 'A'/'D' is invalid
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(AccountStatus::Active),
            'D' => Some(AccountStatus::Disabled),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Banking plan selected at account creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// Normal plan ("NP")
    Normal,

    /// Student plan ("SP")
    Student,
}

impl Plan {
    /// The two-character misc code for this plan
    pub fn code(self) -> &'static str {
        match self {
            Plan::Normal => "NP",
            Plan::Student => "SP",
        }
    }

    /// Parse a misc code; anything but "NP"/"SP" is invalid
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "NP" => Some(Plan::Normal),
            "SP" => Some(Plan::Student),
            _ => None,
        }
    }
}

/// State of a single bank account during a batch run
///
/// Accounts come from two sources: the prior master snapshot (which carries
/// no plan field, hence `plan: None`) and create transactions in the
/// day's stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Canonical account number (0-99999)
    pub number: AccountId,

    /// Display name, at most 20 characters, stored trimmed
    pub name: String,

    /// Active or Disabled
    pub status: AccountStatus,

    /// Current balance; always within [0, 99999.99] with 2 fractional digits
    pub balance: Decimal,

    /// Lifetime transaction counter; must stay within 0-9999 for the
    /// master file format
    pub total_transactions: u32,

    /// Plan code; `None` for accounts sourced only from the legacy snapshot
    pub plan: Option<Plan>,
}

impl Account {
    /// Create a fresh account as the create transaction does: active,
    /// zero transaction counter, opening balance taken from the transaction
    /// amount.
    pub fn open(number: AccountId, name: impl Into<String>, balance: Decimal, plan: Plan) -> Self {
        Account {
            number,
            name: name.into(),
            status: AccountStatus::Active,
            balance,
            total_transactions: 0,
            plan: Some(plan),
        }
    }

    /// Zero-padded 5-digit display form of the account number
    pub fn padded_number(&self) -> String {
        format!("{:05}", self.number)
    }
}
