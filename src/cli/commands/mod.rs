//! Command implementations for the hookmaster CLI
//!
//! Each subcommand lives in its own module with its clap arguments and an
//! `execute` entry point.

pub mod add;
pub mod ls;
pub mod prepare_commit_msg;
pub mod remove;
pub mod run;
