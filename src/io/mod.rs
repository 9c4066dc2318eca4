//! I/O module
//!
//! Handles fixed-width record parsing and output.
//!
//! # Components
//!
//! - `fixed_format` - record layouts, pure decode/encode functions
//! - `line_reader` - file-backed streaming readers with iterator interfaces

pub mod fixed_format;
pub mod line_reader;

pub use fixed_format::{
    decode_account_line, decode_transaction_line, encode_current_line, encode_master_line,
    write_current_accounts, write_master_accounts, END_OF_FILE_SENTINEL,
};
pub use line_reader::{AccountReader, ReadError, TransactionReader};
