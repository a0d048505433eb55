//! Formatting specs
//!
//! Verify the phrases printed for durations and formatting flags.

use crate::prelude::*;

#[test]
fn formats_sample_duration() {
    cli()
        .args(&["354h22m3.24s"])
        .passes()
        .stdout_eq("2 weeks 18 hours 22 minutes 3 seconds 240 milliseconds\n");
}

#[test]
fn formats_each_argument_on_its_own_line() {
    cli()
        .args(&["1h", "90s", "1500ms"])
        .passes()
        .stdout_eq("1 hour\n1 minute 30 seconds\n1 second 500 milliseconds\n");
}

#[test]
fn short_keeps_largest_unit() {
    cli()
        .args(&["--short", "354h22m3.24s"])
        .passes()
        .stdout_eq("2 weeks\n");
}

#[test]
fn limit_keeps_first_pairs() {
    cli()
        .args(&["-n", "2", "354h22m3s"])
        .passes()
        .stdout_eq("2 weeks 18 hours\n");
}

#[test]
fn max_unit_folds_larger_units() {
    cli()
        .args(&["--max-unit", "hours", "354h22m3s"])
        .passes()
        .stdout_eq("354 hours 22 minutes 3 seconds\n");
}

#[test]
fn negative_duration() {
    cli()
        .args(&["--", "-1h30m"])
        .passes()
        .stdout_eq("-1 hour 30 minutes\n");
}

#[test]
fn negative_below_a_microsecond_prints_sign() {
    cli()
        .args(&["--", "-500ns"])
        .passes()
        .stdout_eq("-\n");
}

#[test]
fn zero_with_unit_is_shown() {
    cli()
        .args(&["0s", "0h", "0ns"])
        .passes()
        .stdout_eq("0 seconds\n0 hours\n\n");
}

#[test]
fn nanosecond_counts() {
    cli()
        .args(&["--nanos", "-n", "2", "1275723000000000", "0"])
        .passes()
        .stdout_eq("2 weeks 18 hours\n0 seconds\n");
}

#[test]
fn json_output() {
    cli()
        .args(&["-o", "json", "90m"])
        .passes()
        .stdout_eq(
            "{\"input\":\"90m\",\"nanos\":5400000000000,\"text\":\"1 hour 30 minutes\"}\n",
        );
}
