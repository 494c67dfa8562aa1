//! Deterministic simulation tests for the linked stack.
//!
//! Each run replays a seeded workload against a `RecordedStack` and checks
//! every stack invariant after the run. Reproduce a failure with the
//! printed seed: `DST_SEED=<seed> cargo test -p ps-stack --test dst_stack`.

use ps_core::{Point, PropertyChecker, StackProperties, StackPropertyChecker};
use ps_dst::{DeterministicRng, StackOp, WorkloadConfig, WorkloadGenerator};
use ps_stack::RecordedStack;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Apply a workload, checking size bookkeeping after every step.
fn run_workload(ops: &[StackOp], seed: u64) -> RecordedStack {
    let mut stack = RecordedStack::new();
    let mut expected_size: u64 = 0;

    for (i, op) in ops.iter().enumerate() {
        match *op {
            StackOp::Push(p) => {
                stack.push(p);
                expected_size += 1;
            }
            StackOp::Pop => {
                let popped = stack.pop();
                assert_eq!(
                    popped.is_none(),
                    expected_size == 0,
                    "DST_SEED={} step {}: pop result disagrees with emptiness",
                    seed,
                    i + 1
                );
                expected_size = expected_size.saturating_sub(1);
            }
        }
        assert_eq!(stack.size(), expected_size, "DST_SEED={} step {}", seed, i + 1);
    }

    stack
}

fn check_seeded_runs(config: WorkloadConfig) {
    init_tracing();

    let seed = ps_dst::get_or_generate_seed();
    let iterations = ps_dst::iterations_from_env();
    let mut master = DeterministicRng::new(seed);

    for _ in 0..iterations {
        let run_rng = master.fork();
        let run_seed = run_rng.seed();
        let ops = WorkloadGenerator::new(run_rng, config.clone())
            .expect("preset config is valid")
            .generate();

        let stack = run_workload(&ops, run_seed);
        let checker = StackPropertyChecker::new(&stack).with_seed(run_seed);
        if let Err(failure) = checker.verify_all() {
            panic!(
                "DST_SEED={} (run seed {}): {}\n{}",
                seed,
                run_seed,
                failure.format_status(),
                checker.summary().format_report()
            );
        }
    }
}

#[test]
fn test_dst_default_workload() {
    check_seeded_runs(WorkloadConfig::default());
}

#[test]
fn test_dst_push_heavy_workload() {
    check_seeded_runs(WorkloadConfig::push_heavy());
}

#[test]
fn test_dst_pop_heavy_workload() {
    check_seeded_runs(WorkloadConfig::pop_heavy());
}

#[test]
fn test_dst_origin_only_workload() {
    check_seeded_runs(WorkloadConfig::origin_only());
}

#[test]
fn test_fixed_seed_is_reproducible() {
    let config = WorkloadConfig::default();
    let ops_a = WorkloadGenerator::from_seed(2024, config.clone()).unwrap().generate();
    let ops_b = WorkloadGenerator::from_seed(2024, config).unwrap().generate();
    assert_eq!(ops_a, ops_b);

    let a = run_workload(&ops_a, 2024);
    let b = run_workload(&ops_b, 2024);
    assert_eq!(a.current_contents(), b.current_contents());
    assert_eq!(a.history().operations, b.history().operations);
}

#[test]
fn test_origin_pushes_and_empty_pops_are_distinguished() {
    let ops = [
        StackOp::Push(Point::ORIGIN),
        StackOp::Pop,
        StackOp::Pop,
        StackOp::Push(Point::ORIGIN),
        StackOp::Push(Point::ORIGIN),
        StackOp::Pop,
    ];
    let stack = run_workload(&ops, 1);

    let results: Vec<Option<Point>> = stack
        .history()
        .operations
        .iter()
        .filter(|op| op.op_type != ps_core::StackOpType::Push)
        .map(|op| op.element)
        .collect();
    assert_eq!(
        results,
        vec![Some(Point::ORIGIN), None, Some(Point::ORIGIN)]
    );
    assert!(StackPropertyChecker::new(&stack).all_hold());
}
