//! Text-command dispatch for the robot operator console.
//!
//! Takes one line of operator input at a time (`left 120`, `solenoid 2 on`),
//! resolves the leading token against a fixed command table and hands the
//! rest of the line to the matching hardware handler. Every call answers with
//! a human-readable status string, so the transport layer stays a dumb
//! read-line/write-string loop.
//!
//! # Architecture
//!
//! - `command.rs` - Command container and line splitting
//! - `registry.rs` - Table construction, lookup and dispatch
//! - `driver.rs` - Hardware collaborator interface
//! - `error.rs` - Crate-wide result alias
//!
//! # Adding a New Command
//!
//! 1. Add the hardware method to the `HardwareDriver` trait
//! 2. Add a `Cmd` entry to `registry::command_table` (keep alphabetical order)
//! 3. Bump `registry::COMMAND_COUNT`
//!
//! The crate is `no_std` (with `alloc`) outside of tests; the host binary
//! owns the transport, the driver implementation and the logger.
#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

extern crate alloc;

pub mod command;
pub mod driver;
pub mod error;
pub mod registry;

pub use command::{Cmd, Handler, split_line};
pub use driver::HardwareDriver;
pub use error::ConsoleResult;
pub use registry::{
    COMMAND_COUNT, Console, HELP_GREETING, HELP_SENTINEL, INVALID_COMMAND, UNKNOWN_COMMAND,
    command_table, validate_table,
};
