use std::cell::RefCell;

use result_rail::{failure, from_fn, sequence, Computation, Failure};

use super::{double, failed};

type Log = RefCell<Vec<&'static str>>;

fn logged<'a, A>(
    log: &'a Log,
    label: &'static str,
    outcome: Result<A, Failure>,
) -> impl Computation<Output = A, Error = Failure> + 'a
where
    A: Clone + 'a,
{
    from_fn(move || {
        log.borrow_mut().push(label);
        outcome.clone()
    })
}

#[test]
fn ap_runs_function_side_before_argument_side() {
    let log = Log::default();
    let c = logged(&log, "function", Ok(double as fn(i32) -> i32))
        .ap(logged(&log, "argument", Ok(21)));

    assert!(log.borrow().is_empty());
    assert_eq!(c.run(), Ok(42));
    assert_eq!(*log.borrow(), ["function", "argument"]);
}

#[test]
fn ap_failing_function_never_invokes_argument() {
    let log = Log::default();
    let c = logged(&log, "function", Err::<fn(i32) -> i32, _>(failed()))
        .ap(logged(&log, "argument", Ok(21)));

    assert_eq!(c.run(), Err(failed()));
    assert_eq!(*log.borrow(), ["function"]);
}

#[test]
fn ap_failing_argument_propagates_its_error() {
    let log = Log::default();
    let c = logged(&log, "function", Ok(double as fn(i32) -> i32))
        .ap(logged::<i32>(&log, "argument", Err(failure!("bad argument"))));

    assert_eq!(c.run(), Err(Failure::new("bad argument")));
    assert_eq!(*log.borrow(), ["function", "argument"]);
}

#[test]
fn ap_first_keeps_first_value() {
    let log = Log::default();
    let c = logged(&log, "first", Ok(1)).ap_first(logged(&log, "second", Ok(2)));

    assert_eq!(c.run(), Ok(1));
    assert_eq!(*log.borrow(), ["first", "second"]);
}

#[test]
fn ap_first_failure_short_circuits() {
    let log = Log::default();
    let c = logged::<i32>(&log, "first", Err(failed())).ap_first(logged(&log, "second", Ok(2)));

    assert_eq!(c.run(), Err(failed()));
    assert_eq!(*log.borrow(), ["first"]);
}

#[test]
fn ap_first_propagates_second_failure() {
    let log = Log::default();
    let c = logged(&log, "first", Ok(1)).ap_first(logged::<i32>(&log, "second", Err(failed())));

    assert_eq!(c.run(), Err(failed()));
    assert_eq!(*log.borrow(), ["first", "second"]);
}

#[test]
fn ap_second_keeps_second_value() {
    let log = Log::default();
    let c = logged(&log, "first", Ok(1)).ap_second(logged(&log, "second", Ok(2)));

    assert_eq!(c.run(), Ok(2));
    assert_eq!(*log.borrow(), ["first", "second"]);
}

#[test]
fn ap_second_propagates_second_failure() {
    let log = Log::default();
    let c = logged(&log, "first", Ok(1)).ap_second(logged::<i32>(&log, "second", Err(failed())));

    assert_eq!(c.run(), Err(failed()));
}

#[test]
fn ap_second_failing_first_skips_second() {
    let log = Log::default();
    let c = logged::<i32>(&log, "first", Err(failed())).ap_second(logged(&log, "second", Ok(2)));

    assert_eq!(c.run(), Err(failed()));
    assert_eq!(*log.borrow(), ["first"]);
}

#[test]
fn and_then_skips_continuation_on_failure() {
    let log = Log::default();
    let c = logged::<i32>(&log, "source", Err(failed()))
        .and_then(|n| logged(&log, "continuation", Ok(n + 1)));

    assert_eq!(c.run(), Err(failed()));
    assert_eq!(*log.borrow(), ["source"]);
}

#[test]
fn and_then_runs_continuation_after_source() {
    let log = Log::default();
    let c = logged(&log, "source", Ok(41)).and_then(|n| logged(&log, "continuation", Ok(n + 1)));

    assert_eq!(c.run(), Ok(42));
    assert_eq!(*log.borrow(), ["source", "continuation"]);
}

#[test]
fn chain_first_keeps_first_value_and_runs_second() {
    let log = Log::default();
    let c = logged(&log, "source", Ok(7))
        .chain_first(|n| logged(&log, "audit", Ok(format!("saw {}", n))));

    assert_eq!(c.run(), Ok(7));
    assert_eq!(*log.borrow(), ["source", "audit"]);
}

#[test]
fn chain_first_propagates_either_failure() {
    let log = Log::default();
    let second_fails = logged(&log, "source", Ok(7))
        .chain_first(|_| logged::<()>(&log, "audit", Err(failure!("audit rejected"))));
    assert_eq!(second_fails.run(), Err(Failure::new("audit rejected")));

    let first_fails = logged::<i32>(&log, "source", Err(failed()))
        .chain_first(|_| logged(&log, "audit", Ok(())));
    assert_eq!(first_fails.run(), Err(failed()));

    assert_eq!(*log.borrow(), ["source", "audit", "source"]);
}

#[test]
fn sequence_stops_at_first_failure() {
    let log = Log::default();
    let steps = vec![
        logged(&log, "one", Ok(1)).boxed(),
        logged::<i32>(&log, "two", Err(failure!("two broke"))).boxed(),
        logged(&log, "three", Ok(3)).boxed(),
    ];
    let all = sequence(steps);

    assert_eq!(all.len(), 3);
    assert_eq!(all.run(), Err(Failure::new("two broke")));
    assert_eq!(*log.borrow(), ["one", "two"]);
}

#[test]
fn sequence_collects_in_order() {
    let log = Log::default();
    let all: result_rail::computation::Sequence<_> =
        ["a", "b", "c"].into_iter().map(|label| logged(&log, label, Ok(label))).collect();

    assert_eq!(all.run(), Ok(vec!["a", "b", "c"]));
    assert_eq!(*log.borrow(), ["a", "b", "c"]);
}

#[test]
fn empty_sequence_succeeds_with_nothing() {
    let all = sequence(Vec::<result_rail::computation::Succeed<i32, Failure>>::new());
    assert!(all.is_empty());
    assert_eq!(all.run(), Ok(vec![]));
}
