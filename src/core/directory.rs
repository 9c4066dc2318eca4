//! Account directory
//!
//! This module provides the `AccountDirectory` struct, the in-memory
//! collection of accounts for one batch run, keyed by canonical account
//! number. The directory exclusively owns its accounts for the run.
//!
//! Iteration order of the underlying map is never relied upon: output
//! ordering is always re-derived by sorting (see `sorted_accounts`).

use crate::types::{Account, AccountId};
use std::collections::HashMap;

/// In-memory collection of accounts keyed by canonical account number
#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: HashMap<AccountId, Account>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        AccountDirectory {
            accounts: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn contains(&self, number: AccountId) -> bool {
        self.accounts.contains_key(&number)
    }

    pub fn get(&self, number: AccountId) -> Option<&Account> {
        self.accounts.get(&number)
    }

    pub fn get_mut(&mut self, number: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(&number)
    }

    /// Insert an account under its own number
    ///
    /// Returns false (and leaves the existing entry untouched) if the
    /// number is already taken.
    pub fn insert(&mut self, account: Account) -> bool {
        use std::collections::hash_map::Entry;
        match self.accounts.entry(account.number) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(account);
                true
            }
        }
    }

    /// Remove an account, which is only permitted while its balance is
    /// exactly zero
    ///
    /// Returns None if the account is missing or holds a non-zero balance.
    pub fn remove(&mut self, number: AccountId) -> Option<Account> {
        match self.accounts.get(&number) {
            Some(account) if account.balance.is_zero() => self.accounts.remove(&number),
            _ => None,
        }
    }

    /// All accounts in ascending numeric account-number order
    pub fn sorted_accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by_key(|account| account.number);
        accounts
    }

    /// Consume the directory, yielding owned accounts in ascending
    /// numeric order
    pub fn into_accounts(self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self.accounts.into_values().collect();
        accounts.sort_by_key(|account| account.number);
        accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccountStatus, Plan};
    use rust_decimal::Decimal;

    fn account(number: AccountId, balance: Decimal) -> Account {
        Account {
            number,
            name: format!("Holder {}", number),
            status: AccountStatus::Active,
            balance,
            total_transactions: 0,
            plan: Some(Plan::Normal),
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut directory = AccountDirectory::new();
        assert!(directory.insert(account(1, Decimal::ZERO)));

        assert!(directory.contains(1));
        assert_eq!(directory.get(1).unwrap().number, 1);
        assert!(directory.get(2).is_none());
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_insert_rejects_duplicate_number() {
        let mut directory = AccountDirectory::new();
        let mut first = account(1, Decimal::ZERO);
        first.name = "Original".to_string();
        assert!(directory.insert(first));

        assert!(!directory.insert(account(1, Decimal::new(500, 2))));
        assert_eq!(directory.get(1).unwrap().name, "Original");
    }

    #[test]
    fn test_remove_requires_zero_balance() {
        let mut directory = AccountDirectory::new();
        directory.insert(account(1, Decimal::new(1, 2)));

        assert!(directory.remove(1).is_none());
        assert!(directory.contains(1));

        directory.get_mut(1).unwrap().balance = Decimal::ZERO;
        assert!(directory.remove(1).is_some());
        assert!(!directory.contains(1));
    }

    #[test]
    fn test_remove_missing_account() {
        let mut directory = AccountDirectory::new();
        assert!(directory.remove(7).is_none());
    }

    #[test]
    fn test_sorted_accounts_numeric_order() {
        let mut directory = AccountDirectory::new();
        directory.insert(account(10, Decimal::ZERO));
        directory.insert(account(9, Decimal::ZERO));
        directory.insert(account(2, Decimal::ZERO));

        let numbers: Vec<AccountId> = directory
            .sorted_accounts()
            .iter()
            .map(|account| account.number)
            .collect();
        assert_eq!(numbers, vec![2, 9, 10]);
    }

    #[test]
    fn test_into_accounts_sorted() {
        let mut directory = AccountDirectory::new();
        directory.insert(account(9, Decimal::ZERO));
        directory.insert(account(2, Decimal::ZERO));

        let numbers: Vec<AccountId> = directory
            .into_accounts()
            .iter()
            .map(|account| account.number)
            .collect();
        assert_eq!(numbers, vec![2, 9]);
    }
}
