//! Menu command handlers.
//!
//! Each handler prompts for what it needs, calls into [`crate::core`], and prints the
//! outcome. End of input during a prompt abandons the command quietly.
//!
//! # Errors
//! User mistakes are printed and the handler returns `Ok(())`. Only faults come back as
//! `Err`: console I/O failures and `Error::Io` from saving a record file.

pub mod order;
pub mod product;
pub mod report;
pub mod supplier;
