//! Hardware collaborator interface.

use alloc::string::String;

/// Interface to the hardware layer behind the console.
///
/// One method per hardware action. Each handler receives the raw argument
/// remainder of the command line and owns its interpretation (numbers,
/// sub-tokens, comma lists) as well as its failure behavior; a handler that
/// wants to report a malformed argument does so through [`status`], e.g. with
/// [`crate::registry::INVALID_COMMAND`].
///
/// Handler calls are synchronous and expected to return in bounded time
/// (direct register/peripheral writes on the target). Mutual exclusion around
/// shared device state is the implementor's discipline, not the console's.
///
/// [`status`]: HardwareDriver::status
pub trait HardwareDriver {
    /// Print suction motor current.
    fn suction_current(&mut self, arg: &str);

    /// Set LED current: `[#channel 0-3] [current 0-1500]` in mA.
    fn led(&mut self, arg: &str);

    /// Set left motor speed.
    fn left(&mut self, arg: &str);

    /// Set right motor speed.
    fn right(&mut self, arg: &str);

    /// Set servo angle: `[#channel 0-1] [0,180]`.
    fn servo(&mut self, arg: &str);

    /// Manage impactor solenoids: `[#channel] [off]` or
    /// `[#channel] [on_time_ms] [off_time_ms]`.
    fn solenoid(&mut self, arg: &str);

    /// Set and synchronize both motor speeds.
    fn straight(&mut self, arg: &str);

    /// Enable/disable suction or set suction power.
    fn suction(&mut self, arg: &str);

    /// UART forwarding: forward a string or toggle reply printing.
    fn uart(&mut self, arg: &str);

    /// Snapshot of the current hardware/driver state, returned to the
    /// operator after every dispatched command.
    fn status(&self) -> String;
}
