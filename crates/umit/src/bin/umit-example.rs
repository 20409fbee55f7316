//! Example test program.
//!
//! The second testcase trips an assertion, so the third never runs and
//! the process exits with the number of failed checks.

#![allow(clippy::eq_op)]

use std::process::ExitCode;
use umit::{umit_assert, umit_expect, umit_register, Checker, Registry};

fn testcase_1(t: &mut Checker<'_>) {
    umit_expect!(t, 4 > 10); // fails
    umit_expect!(t, 5 == 5); // passes
}

fn testcase_2(t: &mut Checker<'_>) {
    umit_assert!(t, 5 == 5); // passes, evaluation continues
    umit_assert!(t, 5 != 5); // fails, nothing else is evaluated
    umit_expect!(t, 5 != 5); // skipped
}

// Never invoked: the run is latched by the time it would start.
fn testcase_3(t: &mut Checker<'_>) {
    umit_expect!(t, 4 == 4);
}

fn init_tests(registry: &mut Registry) {
    umit_register!(registry, testcase_1);
    umit_register!(registry, testcase_2);
    umit_register!(registry, testcase_3);
}

fn cleanup_tests() {}

fn main() -> ExitCode {
    umit::harness::main(init_tests, cleanup_tests)
}
