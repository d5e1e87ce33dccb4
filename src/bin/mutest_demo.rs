// Sample mutest suite: a few passing checks, one failure per assertion kind
// and a deliberately slow test. Usage: mutest_demo [--junit <path>] [--json <path>] [--no-color]

use mutest::{
    mut_assert, mut_assert_eq, mut_assert_float_eq, mut_assert_neq, mut_assert_str_eq, mut_fail,
    mut_pass, mut_run_test, Harness, TestContext, TestOutcome,
};

fn test_addition(ctx: &mut TestContext) -> TestOutcome {
    mut_assert!(ctx, 1 + 1 == 2, "1 + 1 should equal 2");
    mut_pass!()
}

fn test_subtraction(ctx: &mut TestContext) -> TestOutcome {
    mut_assert!(ctx, 1 - 1 == 0, "1 - 1 should equal 0");
    mut_pass!()
}

fn test_float_eq(ctx: &mut TestContext) -> TestOutcome {
    mut_assert_float_eq!(ctx, 1.0005f32, 1.0f32, 0.01);
    mut_pass!()
}

fn test_failure(ctx: &mut TestContext) -> TestOutcome {
    mut_fail!(ctx, "this will fail");
    mut_pass!()
}

fn test_eq_failure(ctx: &mut TestContext) -> TestOutcome {
    mut_assert_eq!(ctx, 1 + 1, 3);
    mut_pass!()
}

fn test_neq_failure(ctx: &mut TestContext) -> TestOutcome {
    mut_assert_neq!(ctx, 1 + 1, 2);
    mut_pass!()
}

fn test_str_eq_failure(ctx: &mut TestContext) -> TestOutcome {
    let s = "some other string";
    mut_assert_str_eq!(ctx, s, "some string");
    mut_pass!()
}

fn test_float_eq_failure(ctx: &mut TestContext) -> TestOutcome {
    let f = 1.01f32;
    mut_assert_float_eq!(ctx, f, 1.0f32, 0.0001);
    mut_pass!()
}

// No timeout exists; this simply blocks the run until it is done.
fn test_long_computation(ctx: &mut TestContext) -> TestOutcome {
    let mut d = 0.0f64;
    for i in 0..1_000_000_000u64 {
        d += i as f64;
    }
    mut_assert_float_eq!(ctx, d, 499999999067108992.0, 0.01);
    mut_pass!()
}

fn main() {
    let mut harness = Harness::from_env();

    mut_run_test!(harness, test_addition);
    mut_run_test!(harness, test_subtraction);
    mut_run_test!(harness, test_float_eq);
    mut_run_test!(harness, test_failure);
    mut_run_test!(harness, test_eq_failure);
    mut_run_test!(harness, test_neq_failure);
    mut_run_test!(harness, test_str_eq_failure);
    mut_run_test!(harness, test_float_eq_failure);
    mut_run_test!(harness, test_long_computation);

    std::process::exit(harness.finish());
}
