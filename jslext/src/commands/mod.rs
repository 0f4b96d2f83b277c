//! Command modules for the jslext CLI.
//!
//! Each subcommand lives in its own file with an `Args` struct and a
//! `run_*` entry point.

pub mod common;

pub mod classes;
pub mod classify;
pub mod summary;
pub mod table;

pub use classes::{run_classes, ClassesArgs};
pub use classify::{run_classify, ClassifyArgs};
pub use summary::{run_summary, SummaryArgs};
pub use table::{run_table, TableArgs};
