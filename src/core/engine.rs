//! Transaction dispatch and application
//!
//! The `TransactionEngine` owns the account directory for the duration of
//! one batch run. Each transaction record is dispatched by its numeric
//! code to the matching business rule; a failed precondition emits exactly
//! one `ConstraintEvent` through the sink and leaves all state untouched.
//! Failure is terminal for that transaction only, and the engine proceeds
//! with the next record in file order.
//!
//! The end-of-session code (0) and unrecognized codes are intentional
//! no-ops: the reader already rejects out-of-range codes on file input,
//! so a silent skip here cannot hide a malformed line.

use crate::core::directory::AccountDirectory;
use crate::core::reporter::ConstraintSink;
use crate::io::fixed_format::balance_limit;
use crate::types::{
    Account, AccountId, AccountStatus, ConstraintEvent, ConstraintKind, Plan, TransactionCode,
    TransactionRecord,
};

fn padded(number: AccountId) -> String {
    format!("{:05}", number)
}

fn not_found(number: AccountId) -> ConstraintEvent {
    ConstraintEvent::new(
        ConstraintKind::AccountNotFound,
        format!("Account {} does not exist", padded(number)),
    )
}

/// Applies the daily transaction sequence to the account directory
pub struct TransactionEngine {
    directory: AccountDirectory,
}

impl TransactionEngine {
    /// Create an engine over an empty directory
    pub fn new() -> Self {
        TransactionEngine {
            directory: AccountDirectory::new(),
        }
    }

    /// Create an engine over a directory loaded from the snapshot
    pub fn with_directory(directory: AccountDirectory) -> Self {
        TransactionEngine { directory }
    }

    pub fn directory(&self) -> &AccountDirectory {
        &self.directory
    }

    pub fn into_directory(self) -> AccountDirectory {
        self.directory
    }

    /// Apply a sequence of transactions in order
    pub fn apply(&mut self, transactions: &[TransactionRecord], sink: &mut dyn ConstraintSink) {
        for record in transactions {
            self.process(record, sink);
        }
    }

    /// Dispatch one transaction by its code
    pub fn process(&mut self, record: &TransactionRecord, sink: &mut dyn ConstraintSink) {
        let result = match record.code {
            TransactionCode::Withdraw => self.withdraw(record),
            TransactionCode::Transfer => self.transfer(record),
            TransactionCode::PayBill => self.paybill(record),
            TransactionCode::Deposit => self.deposit(record),
            TransactionCode::Create => self.create(record),
            TransactionCode::Delete => self.delete(record),
            TransactionCode::Disable => self.disable(record),
            TransactionCode::ChangePlan => self.changeplan(record),
            // End-of-session marker and unrecognized codes are skipped
            // without an event
            TransactionCode::EndOfSession | TransactionCode::Unrecognized(_) => return,
        };

        if let Err(event) = result {
            sink.report(event);
        }
    }

    fn withdraw(&mut self, record: &TransactionRecord) -> Result<(), ConstraintEvent> {
        let Some(account) = self.directory.get_mut(record.account) else {
            return Err(not_found(record.account));
        };

        if account.status == AccountStatus::Disabled {
            return Err(ConstraintEvent::new(
                ConstraintKind::AccountDisabled,
                format!(
                    "Cannot withdraw from disabled account {}",
                    account.padded_number()
                ),
            ));
        }

        if record.amount > account.balance {
            return Err(ConstraintEvent::new(
                ConstraintKind::InsufficientFunds,
                format!(
                    "Cannot withdraw {:.2} from account {}",
                    record.amount,
                    account.padded_number()
                ),
            ));
        }

        account.balance -= record.amount;
        account.total_transactions += 1;
        Ok(())
    }

    fn transfer(&mut self, record: &TransactionRecord) -> Result<(), ConstraintEvent> {
        let Some(account) = self.directory.get_mut(record.account) else {
            return Err(not_found(record.account));
        };

        if record.misc != "SD" && record.misc != "RV" {
            return Err(ConstraintEvent::new(
                ConstraintKind::InvalidCode,
                format!("{} is not a valid transfer code", record.misc),
            ));
        }

        if account.status == AccountStatus::Disabled {
            return Err(ConstraintEvent::new(
                ConstraintKind::AccountDisabled,
                "Cannot transfer involving disabled account".to_string(),
            ));
        }

        if record.misc == "SD" {
            if record.amount > account.balance {
                return Err(ConstraintEvent::new(
                    ConstraintKind::InsufficientFunds,
                    format!(
                        "Cannot transfer {:.2} from account {}",
                        record.amount,
                        account.padded_number()
                    ),
                ));
            }
            account.balance -= record.amount;
        } else {
            if account.balance + record.amount > balance_limit() {
                return Err(ConstraintEvent::new(
                    ConstraintKind::BalanceLimitExceeded,
                    format!(
                        "Cannot deposit {:.2} into account {}",
                        record.amount,
                        account.padded_number()
                    ),
                ));
            }
            account.balance += record.amount;
        }
        account.total_transactions += 1;
        Ok(())
    }

    fn paybill(&mut self, record: &TransactionRecord) -> Result<(), ConstraintEvent> {
        let Some(account) = self.directory.get_mut(record.account) else {
            return Err(not_found(record.account));
        };

        if account.status == AccountStatus::Disabled {
            return Err(ConstraintEvent::new(
                ConstraintKind::AccountDisabled,
                format!(
                    "Cannot pay bills from disabled account {}",
                    account.padded_number()
                ),
            ));
        }

        if record.amount > account.balance {
            return Err(ConstraintEvent::new(
                ConstraintKind::InsufficientFunds,
                format!(
                    "Cannot pay bill of {:.2} from account {}",
                    record.amount,
                    account.padded_number()
                ),
            ));
        }

        account.balance -= record.amount;
        account.total_transactions += 1;
        Ok(())
    }

    fn deposit(&mut self, record: &TransactionRecord) -> Result<(), ConstraintEvent> {
        let Some(account) = self.directory.get_mut(record.account) else {
            return Err(not_found(record.account));
        };

        if account.status == AccountStatus::Disabled {
            return Err(ConstraintEvent::new(
                ConstraintKind::AccountDisabled,
                format!(
                    "Cannot deposit into disabled account {}",
                    account.padded_number()
                ),
            ));
        }

        if account.balance + record.amount > balance_limit() {
            return Err(ConstraintEvent::new(
                ConstraintKind::BalanceLimitExceeded,
                format!(
                    "Cannot deposit {:.2} into account {}",
                    record.amount,
                    account.padded_number()
                ),
            ));
        }

        account.balance += record.amount;
        account.total_transactions += 1;
        Ok(())
    }

    fn create(&mut self, record: &TransactionRecord) -> Result<(), ConstraintEvent> {
        if self.directory.contains(record.account) {
            return Err(ConstraintEvent::new(
                ConstraintKind::AccountAlreadyExists,
                format!("Account {} already exists", padded(record.account)),
            ));
        }

        let Some(plan) = Plan::from_code(&record.misc) else {
            return Err(ConstraintEvent::new(
                ConstraintKind::InvalidCode,
                format!("{} is not a valid plan", record.misc),
            ));
        };

        self.directory.insert(Account::open(
            record.account,
            record.name.clone(),
            record.amount,
            plan,
        ));
        Ok(())
    }

    fn delete(&mut self, record: &TransactionRecord) -> Result<(), ConstraintEvent> {
        let Some(account) = self.directory.get(record.account) else {
            return Err(not_found(record.account));
        };

        if !account.balance.is_zero() {
            return Err(ConstraintEvent::new(
                ConstraintKind::NonZeroBalance,
                format!(
                    "Cannot delete account {} with non-zero balance",
                    account.padded_number()
                ),
            ));
        }

        self.directory.remove(record.account);
        Ok(())
    }

    fn disable(&mut self, record: &TransactionRecord) -> Result<(), ConstraintEvent> {
        let Some(account) = self.directory.get_mut(record.account) else {
            return Err(not_found(record.account));
        };

        // Permitted regardless of current status so a disabled account
        // can be flipped back to active
        let target = match record.misc.trim() {
            "A" => AccountStatus::Active,
            "D" => AccountStatus::Disabled,
            _ => {
                return Err(ConstraintEvent::new(
                    ConstraintKind::InvalidCode,
                    format!("{} is not a valid status", record.misc),
                ));
            }
        };

        if account.status == target {
            return Err(ConstraintEvent::new(
                ConstraintKind::AccountAlreadyDisabled,
                format!("Account {} is already disabled", account.padded_number()),
            ));
        }

        account.status = target;
        Ok(())
    }

    fn changeplan(&mut self, record: &TransactionRecord) -> Result<(), ConstraintEvent> {
        let Some(account) = self.directory.get_mut(record.account) else {
            return Err(ConstraintEvent::new(
                ConstraintKind::AccountNotFound,
                format!(
                    "Cannot change plan of non-existent account {}",
                    padded(record.account)
                ),
            ));
        };

        let Some(plan) = Plan::from_code(&record.misc) else {
            return Err(ConstraintEvent::new(
                ConstraintKind::InvalidCode,
                format!("{} is not a valid plan", record.misc),
            ));
        };

        if account.status == AccountStatus::Disabled {
            return Err(ConstraintEvent::new(
                ConstraintKind::AccountDisabled,
                format!(
                    "Cannot change plan for disabled account {}",
                    account.padded_number()
                ),
            ));
        }

        if account.plan == Some(plan) {
            return Err(ConstraintEvent::new(
                ConstraintKind::PlanUnchanged,
                format!(
                    "Account {} is already on plan {}",
                    account.padded_number(),
                    plan.code()
                ),
            ));
        }

        account.plan = Some(plan);
        Ok(())
    }
}

impl Default for TransactionEngine {
    fn default() -> Self {
        Self::new()
    }
}
