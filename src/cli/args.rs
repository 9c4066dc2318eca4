use clap::Parser;
use std::path::PathBuf;

/// Reconcile bank accounts against the daily transaction log
#[derive(Parser, Debug)]
#[command(name = "bank-recon-engine")]
#[command(about = "Reconcile bank accounts against the daily transaction log", long_about = None)]
pub struct CliArgs {
    /// Yesterday's master accounts file
    #[arg(value_name = "OLD_MASTER", help = "Path to the old master accounts file")]
    pub old_master: PathBuf,

    /// Merged transaction log for the day
    #[arg(
        value_name = "TRANSACTIONS",
        help = "Path to the merged transaction log"
    )]
    pub transactions: PathBuf,

    /// Destination for the new master accounts file
    #[arg(
        value_name = "NEW_MASTER",
        help = "Path to write the new master accounts file"
    )]
    pub new_master: PathBuf,

    /// Destination for the current accounts file
    #[arg(
        value_name = "CURRENT_ACCOUNTS",
        help = "Path to write the current accounts file"
    )]
    pub current_accounts: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_all_four_paths_parsed_in_order() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "old_master.txt",
            "transactions.txt",
            "new_master.txt",
            "current.txt",
        ])
        .unwrap();

        assert_eq!(parsed.old_master, PathBuf::from("old_master.txt"));
        assert_eq!(parsed.transactions, PathBuf::from("transactions.txt"));
        assert_eq!(parsed.new_master, PathBuf::from("new_master.txt"));
        assert_eq!(parsed.current_accounts, PathBuf::from("current.txt"));
    }

    #[rstest]
    #[case::no_args(&["program"])]
    #[case::one_path(&["program", "a.txt"])]
    #[case::three_paths(&["program", "a.txt", "b.txt", "c.txt"])]
    #[case::five_paths(&["program", "a.txt", "b.txt", "c.txt", "d.txt", "e.txt"])]
    fn test_wrong_arity_rejected(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
