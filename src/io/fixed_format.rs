//! Fixed-width record format handling
//!
//! This module centralizes the text layouts of the three bank files:
//!
//! - master account record (42 chars): `AAAAA NNNNNNNNNNNNNNNNNNNN S BBBBB.BB TTTT`
//! - current account record (37 chars): the master layout without the
//!   transaction count, terminated by a sentinel line
//! - transaction record (41 chars): `CC NNNNNNNNNNNNNNNNNNNN AAAAA BBBBB.BB MM`
//!
//! Decoding validates every field positionally and reports the first
//! failure; separator columns are not inspected. Encoding re-validates the
//! domain invariants before formatting, because an in-memory account that
//! fails them indicates an engine bug rather than bad input.
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{
    Account, AccountId, AccountStatus, DecodeError, ReconError, TransactionCode, TransactionRecord,
};
use rust_decimal::Decimal;
use std::io::Write;
use std::str::FromStr;

/// Width of a master/snapshot account line
pub const ACCOUNT_LINE_LEN: usize = 42;

/// Width of a transaction log line
pub const TRANSACTION_LINE_LEN: usize = 41;

/// Largest value the 4-digit transaction count field can hold
pub const MAX_TRANSACTION_COUNT: u32 = 9999;

/// Largest value the 5-digit account number field can hold
pub const MAX_ACCOUNT_NUMBER: AccountId = 99999;

/// Trailer line of the current accounts file
pub const END_OF_FILE_SENTINEL: &str = "00000 END_OF_FILE          A 00000.00";

/// Largest representable balance, 99999.99
pub fn balance_limit() -> Decimal {
    Decimal::new(9_999_999, 2)
}

fn all_digits(s: &[char]) -> bool {
    !s.is_empty() && s.iter().all(|c| c.is_ascii_digit())
}

/// Parse an 8-character `DDDDD.DD` money field
fn parse_money(chars: &[char], format_error: DecodeError) -> Result<Decimal, DecodeError> {
    if chars.len() != 8
        || chars[5] != '.'
        || !all_digits(&chars[0..5])
        || !all_digits(&chars[6..8])
    {
        return Err(format_error.clone());
    }
    let text: String = chars.iter().collect();
    Decimal::from_str(&text).map_err(|_| format_error)
}

/// Decode one 42-character master/snapshot account line
///
/// The account number is canonicalized by numeric parsing (leading zeros
/// stripped; all-zero input becomes 0) and the name is trimmed.
pub fn decode_account_line(line: &str) -> Result<Account, DecodeError> {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() != ACCOUNT_LINE_LEN {
        return Err(DecodeError::InvalidLength(chars.len()));
    }

    let number = &chars[0..5];
    if !all_digits(number) {
        return Err(DecodeError::InvalidAccountNumber);
    }
    let number: AccountId = number
        .iter()
        .collect::<String>()
        .parse()
        .map_err(|_| DecodeError::InvalidAccountNumber)?;

    let name: String = chars[6..26].iter().collect::<String>().trim().to_string();

    let status =
        AccountStatus::from_char(chars[27]).ok_or(DecodeError::InvalidStatus(chars[27]))?;

    let balance = parse_money(&chars[29..37], DecodeError::InvalidBalanceFormat)?;

    let count = &chars[38..42];
    if !all_digits(count) {
        return Err(DecodeError::InvalidTransactionCount);
    }
    let total_transactions: u32 = count
        .iter()
        .collect::<String>()
        .parse()
        .map_err(|_| DecodeError::InvalidTransactionCount)?;

    if balance.is_sign_negative() {
        return Err(DecodeError::NegativeBalance);
    }

    Ok(Account {
        number,
        name,
        status,
        balance,
        total_transactions,
        plan: None,
    })
}

/// Decode one 41-character transaction log line
///
/// Field checks run in the same order as the legacy reader: code format,
/// account number format, amount format, then value-range checks on the
/// amount and the code.
pub fn decode_transaction_line(line: &str) -> Result<TransactionRecord, DecodeError> {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() != TRANSACTION_LINE_LEN {
        return Err(DecodeError::InvalidLength(chars.len()));
    }

    let code_field = &chars[0..2];
    if !all_digits(code_field) {
        return Err(DecodeError::InvalidCodeFormat);
    }

    let account_field = &chars[24..29];
    if !all_digits(account_field) {
        return Err(DecodeError::InvalidAccountNumber);
    }

    let amount = parse_money(&chars[30..38], DecodeError::InvalidAmountFormat)?;
    if amount.is_sign_negative() {
        return Err(DecodeError::NegativeAmount);
    }

    let code_text: String = code_field.iter().collect();
    let code: u8 = code_text
        .parse()
        .map_err(|_| DecodeError::InvalidCodeFormat)?;
    if code > 8 {
        return Err(DecodeError::CodeOutOfRange(code_text));
    }

    let account: AccountId = account_field
        .iter()
        .collect::<String>()
        .parse()
        .map_err(|_| DecodeError::InvalidAccountNumber)?;

    Ok(TransactionRecord {
        code: TransactionCode::from_code(code),
        name: chars[3..23].iter().collect::<String>().trim().to_string(),
        account,
        amount,
        misc: chars[39..41].iter().collect(),
    })
}

/// Re-validate the invariants every serialized account must satisfy
fn validate_record(account: &Account) -> Result<(), ReconError> {
    if account.number > MAX_ACCOUNT_NUMBER {
        return Err(ReconError::AccountNumberOutOfRange {
            number: account.number,
        });
    }
    if account.name.chars().count() > 20 {
        return Err(ReconError::NameTooLong {
            name: account.name.clone(),
        });
    }
    if account.balance.is_sign_negative() || account.balance > balance_limit() {
        return Err(ReconError::BalanceOutOfRange {
            balance: account.balance,
        });
    }
    Ok(())
}

fn format_balance(balance: Decimal) -> String {
    format!("{:0>8}", format!("{:.2}", balance))
}

/// Encode an account in the current-accounts form (no transaction count)
pub fn encode_current_line(account: &Account) -> Result<String, ReconError> {
    validate_record(account)?;
    Ok(format!(
        "{:05} {:<20} {} {}",
        account.number,
        account.name,
        account.status,
        format_balance(account.balance),
    ))
}

/// Encode an account in the master form (with transaction count)
pub fn encode_master_line(account: &Account) -> Result<String, ReconError> {
    validate_record(account)?;
    if account.total_transactions > MAX_TRANSACTION_COUNT {
        return Err(ReconError::TransactionCountOutOfRange {
            count: account.total_transactions,
        });
    }
    Ok(format!(
        "{:05} {:<20} {} {} {:04}",
        account.number,
        account.name,
        account.status,
        format_balance(account.balance),
        account.total_transactions,
    ))
}

/// Write the current accounts file: records in ascending numeric account
/// order, terminated by the `END_OF_FILE` sentinel
pub fn write_current_accounts(
    accounts: &[Account],
    output: &mut dyn Write,
) -> Result<(), ReconError> {
    let mut sorted: Vec<&Account> = accounts.iter().collect();
    sorted.sort_by_key(|account| account.number);

    for account in sorted {
        writeln!(output, "{}", encode_current_line(account)?)?;
    }
    writeln!(output, "{}", END_OF_FILE_SENTINEL)?;
    Ok(())
}

/// Write the new master accounts file: records in ascending numeric
/// account order, no sentinel
pub fn write_master_accounts(
    accounts: &[Account],
    output: &mut dyn Write,
) -> Result<(), ReconError> {
    let mut sorted: Vec<&Account> = accounts.iter().collect();
    sorted.sort_by_key(|account| account.number);

    for account in sorted {
        writeln!(output, "{}", encode_master_line(account)?)?;
    }
    Ok(())
}
