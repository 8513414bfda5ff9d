//! Shared test double for the hardware layer.
#![allow(dead_code)]

use robot_console::HardwareDriver;

/// Records every handler invocation under its command token and mirrors the
/// last one in its status string, the way the firmware reports the effect of
/// the previous command.
pub struct RecordingDriver {
    pub calls: Vec<(&'static str, String)>,
    pub status: String,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            status: String::from("all systems nominal"),
        }
    }

    fn record(&mut self, token: &'static str, arg: &str) {
        self.calls.push((token, arg.to_string()));
        self.status = format!("{} applied {:?}", token, arg);
    }
}

impl HardwareDriver for RecordingDriver {
    fn suction_current(&mut self, arg: &str) {
        self.record("current", arg);
    }

    fn led(&mut self, arg: &str) {
        self.record("led", arg);
    }

    fn left(&mut self, arg: &str) {
        self.record("left", arg);
    }

    fn right(&mut self, arg: &str) {
        self.record("right", arg);
    }

    fn servo(&mut self, arg: &str) {
        self.record("servo", arg);
    }

    fn solenoid(&mut self, arg: &str) {
        self.record("solenoid", arg);
    }

    fn straight(&mut self, arg: &str) {
        self.record("straight", arg);
    }

    fn suction(&mut self, arg: &str) {
        self.record("suction", arg);
    }

    fn uart(&mut self, arg: &str) {
        self.record("uart", arg);
    }

    fn status(&self) -> String {
        self.status.clone()
    }
}
