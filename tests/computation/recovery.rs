use std::cell::Cell;

use result_rail::{error, from_fn, ok, Computation, Failure};

use super::{failed, is_positive, wrapped};

#[test]
fn map_err_on_success_never_calls_mapper() {
    let calls = Cell::new(0);
    let c = ok::<_, Failure>(42).map_err(|e| {
        calls.set(calls.get() + 1);
        wrapped(e)
    });

    assert_eq!(c.run(), Ok(42));
    assert_eq!(calls.get(), 0);
}

#[test]
fn map_err_wraps_failure() {
    let err = error::<i32, _>(failed()).map_err(wrapped).run().unwrap_err();

    assert_eq!(err.to_string(), "wrapped: failed");
    assert_eq!(err.cause(), Some(&failed()));
}

#[test]
fn map_err_can_change_error_type() {
    let c = error::<i32, _>(404u16).map_err(|code| Failure::new(format!("HTTP {}", code)));
    assert_eq!(c.run(), Err(Failure::new("HTTP 404")));
}

#[test]
fn bimap_applies_success_function() {
    let c = ok::<_, Failure>(-1).bimap(wrapped, |n| if is_positive(&n) { 1 } else { 2 });
    assert_eq!(c.run(), Ok(2));
}

#[test]
fn bimap_applies_error_function() {
    let c = error::<i32, _>(failed()).bimap(wrapped, |n| n > 0);
    assert_eq!(c.run().unwrap_err().to_string(), "wrapped: failed");
}

#[test]
fn bimap_invokes_source_once() {
    let calls = Cell::new(0);
    let c = from_fn(|| {
        calls.set(calls.get() + 1);
        Err::<i32, _>(failed())
    })
    .bimap(wrapped, |n| n + 1);

    let _ = c.run();
    assert_eq!(calls.get(), 1);
}

#[test]
fn or_else_keeps_success_without_calling_handler() {
    let handled = Cell::new(0);
    let c = ok::<_, Failure>(5).or_else(|_| {
        handled.set(handled.get() + 1);
        ok::<_, Failure>(0)
    });

    assert_eq!(c.run(), Ok(5));
    assert_eq!(handled.get(), 0);
}

#[test]
fn or_else_switches_to_handler_computation_on_failure() {
    let c = error::<i32, _>(failed()).or_else(|e| {
        assert_eq!(e, failed());
        ok::<_, Failure>(7)
    });
    assert_eq!(c.run(), Ok(7));

    let still_failing = error::<i32, _>(failed()).or_else(|e| error::<i32, _>(wrapped(e)));
    assert_eq!(still_failing.run().unwrap_err().to_string(), "wrapped: failed");
}

#[test]
fn or_else_invokes_source_once_per_run() {
    let calls = Cell::new(0);
    let c = from_fn(|| {
        calls.set(calls.get() + 1);
        Ok::<_, Failure>(calls.get())
    })
    .or_else(|_| ok::<_, Failure>(0));

    assert_eq!(c.run(), Ok(1));
    assert_eq!(calls.get(), 1);
}

#[test]
fn filter_or_else_rejects_with_value() {
    let mk_err = |n: i32| Failure::new(format!("{} is not positive", n));

    assert_eq!(
        ok(-1).filter_or_else(is_positive, mk_err).run(),
        Err(Failure::new("-1 is not positive"))
    );
    assert_eq!(ok(5).filter_or_else(is_positive, mk_err).run(), Ok(5));
}

#[test]
fn filter_or_else_propagates_existing_failure() {
    let predicate_calls = Cell::new(0);
    let c = error::<i32, _>(failed()).filter_or_else(
        |_| {
            predicate_calls.set(predicate_calls.get() + 1);
            true
        },
        |_| Failure::new("unreachable"),
    );

    assert_eq!(c.run(), Err(failed()));
    assert_eq!(predicate_calls.get(), 0);
}

#[test]
fn get_or_else_returns_value_or_recovers() {
    assert_eq!(ok::<_, Failure>(3).get_or_else(|_| 0), 3);
    assert_eq!(error::<i32, _>(failed()).get_or_else(|e| e.message().len() as i32), 6);
}

#[test]
fn context_wraps_any_convertible_error() {
    let err = error::<(), _>("socket closed").context("sending heartbeat").run().unwrap_err();

    assert_eq!(err.message(), "sending heartbeat");
    assert_eq!(err.root_cause().message(), "socket closed");
    assert_eq!(err.chain().count(), 2);
}

#[test]
fn context_leaves_success_untouched() {
    assert_eq!(ok::<_, &str>(1).context("unused").run(), Ok(1));
}
