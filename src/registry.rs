//! Command registry - table construction, lookup and dispatch.

use alloc::string::String;

use crate::command::{Cmd, split_line};
use crate::driver::HardwareDriver;
use crate::error::ConsoleResult;

/// Response to a token that matches no table entry.
pub const UNKNOWN_COMMAND: &str = "unknown command\n\r";

/// Reserved for handlers reporting malformed arguments through the status
/// channel; the dispatcher itself never produces it.
pub const INVALID_COMMAND: &str = "invalid command enter '?' for help\n\r";

/// First line of the help listing.
pub const HELP_GREETING: &str = "CCNY Robotics Lab Welcomes You, human..\n\r";

/// Leading character that requests the help listing.
pub const HELP_SENTINEL: char = '?';

/// Number of entries in the command table.
pub const COMMAND_COUNT: usize = 9;

// Line terminator of the serial protocol, LF before CR.
const LINE_END: &str = "\n\r";

/// Build the command table for a driver implementation.
///
/// To add a new command:
/// 1. Add the hardware method to the [`HardwareDriver`] trait
/// 2. Add a `Cmd` entry to this array. Please keep alphabetical order.
/// 3. Bump [`COMMAND_COUNT`]
///
/// Help strings carry the tab/`\n\r` layout the operator frontends render.
pub fn command_table<D: HardwareDriver>() -> [Cmd<D>; COMMAND_COUNT] {
    [
        Cmd::new(
            "current",
            " \t-- print suction motor current:\n\r\t\t\t\t1) current",
            D::suction_current,
        ),
        Cmd::new(
            "led",
            " \t\t-- set led current:\n\r\t\t\t\t1) led [#channel 0-3] [current 0-1500] -- set led current in mA",
            D::led,
        ),
        Cmd::new(
            "left",
            "\t\t-- set left motor speed:\n\r\t\t\t\t1) left [speed] -- speed to be loaded into the left motor driver.",
            D::left,
        ),
        Cmd::new(
            "right",
            "\t\t-- set right motor speed:\n\r\t\t\t\t1) right [speed] -- speed to be loaded into the right motor driver.",
            D::right,
        ),
        Cmd::new(
            "servo",
            " \t\t-- set servo angle:\n\r\t\t\t\t1) servo [#channel 0-1] [0,180]",
            D::servo,
        ),
        Cmd::new(
            "solenoid",
            " \t-- manage impactor solenoids:\n\r\t\t\t\t1) solenoid [#channel] [off]\n\r\t\t\t\t2) solenoid [#channel] [on_time_ms] [off_time_ms]",
            D::solenoid,
        ),
        Cmd::new(
            "straight",
            "\t-- set and synchronize motor speed:\n\r\t\t\t\t1) straight [speed] -- speed to be loaded into both right and left motor driver synchronously.",
            D::straight,
        ),
        Cmd::new(
            "suction",
            " \t-- manage suction:\n\r\t\t\t\t1) suction [on/off] -- enable disable suction\n\r\t\t\t\t2) suction [0-100] -- set suction power",
            D::suction,
        ),
        Cmd::new(
            "uart",
            "\t\t-- uart forwarding:\n\r\t\t\t\t1) uart [forward] [\"Command\"] -- forward a string via uart\n\r\t\t\t\t2) uart [reply] [on/off] -- print incoming feedback",
            D::uart,
        ),
    ]
}

/// Check table configuration: every token non-empty, space-free and unique.
///
/// Duplicate tokens would make lookup resolve to whichever entry happens to
/// come first, so a bad table is rejected here at test time rather than
/// patched at runtime.
pub fn validate_table<D>(table: &[Cmd<D>]) -> ConsoleResult<()> {
    for (i, cmd) in table.iter().enumerate() {
        anyhow::ensure!(!cmd.token.is_empty(), "empty command token at index {}", i);
        anyhow::ensure!(
            !cmd.token.contains(' '),
            "command token {:?} contains whitespace",
            cmd.token
        );
        for other in &table[i + 1..] {
            anyhow::ensure!(
                cmd.token != other.token,
                "duplicate command token {:?}",
                cmd.token
            );
        }
    }
    Ok(())
}

/// Operator console: owns the hardware driver and the command table.
///
/// The table is built once in [`Console::new`] and never changes afterwards;
/// the console keeps no other state between commands.
pub struct Console<D: HardwareDriver> {
    driver: D,
    table: [Cmd<D>; COMMAND_COUNT],
}

impl<D: HardwareDriver> Console<D> {
    /// Create a console over a driver.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            table: command_table(),
        }
    }

    /// Registered commands in table order.
    pub fn commands(&self) -> &[Cmd<D>] {
        &self.table
    }

    /// Shared access to the driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Consume the console and hand the driver back.
    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Execute one command line and return the response text.
    ///
    /// A line starting with [`HELP_SENTINEL`] answers with the help listing
    /// and touches nothing else. Any other line is split into token and
    /// argument remainder; an exact table match runs the bound handler and
    /// answers with the driver status, an unknown token answers with
    /// [`UNKNOWN_COMMAND`] without touching the hardware.
    ///
    /// Empty input is a transport bug and is answered like an unknown token.
    pub fn execute(&mut self, line: &str) -> String {
        if line.is_empty() {
            warn!("rejecting empty command line");
            return String::from(UNKNOWN_COMMAND);
        }

        if line.starts_with(HELP_SENTINEL) {
            return self.render_help();
        }

        let (token, arg) = split_line(line);

        let Some(cmd) = self.table.iter().find(|cmd| cmd.token == token) else {
            debug!("unknown command token {:?}", token);
            return String::from(UNKNOWN_COMMAND);
        };

        trace!("dispatching {:?} with arg {:?}", cmd.token, arg);
        cmd.execute(&mut self.driver, arg);

        // Whatever the command did is reported through the driver status.
        self.driver.status()
    }

    /// Render the help listing: the greeting, then one `token help` line per
    /// table entry, in table order.
    pub fn render_help(&self) -> String {
        let mut help = String::from(HELP_GREETING);

        for cmd in &self.table {
            help.push_str(cmd.token);
            help.push_str(cmd.help);
            help.push_str(LINE_END);
        }

        help
    }
}
