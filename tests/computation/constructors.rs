use std::cell::Cell;

use result_rail::convert::from_io;
use result_rail::{error, from_fn, from_nilable, ok, zero, Computation, Failure};

use super::{double, failed, is_positive, wrapped};

#[test]
fn ok_yields_value_on_every_run() {
    let c = ok::<_, Failure>(42);
    assert_eq!(c.run(), Ok(42));
    assert_eq!(c.run(), Ok(42));
}

#[test]
fn error_yields_failure_on_every_run() {
    let c = error::<i32, _>(failed());
    assert_eq!(c.run(), Err(failed()));
    assert_eq!(c.run(), Err(failed()));
}

#[test]
fn zero_yields_default_value() {
    assert_eq!(zero::<i32, Failure>().run(), Ok(0));
    assert_eq!(zero::<Vec<u8>, Failure>().run(), Ok(Vec::new()));
    assert_eq!(zero::<Option<String>, Failure>().run(), Ok(None));
}

#[test]
fn from_fn_reruns_closure_on_each_invocation() {
    let calls = Cell::new(0);
    let counted = from_fn(|| {
        calls.set(calls.get() + 1);
        Ok::<_, Failure>(calls.get() * 10)
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(counted.run(), Ok(10));
    assert_eq!(counted.run(), Ok(20));
    assert_eq!(calls.get(), 2);
}

#[test]
fn building_a_pipeline_invokes_nothing() {
    let calls = Cell::new(0);
    let source = from_fn(|| {
        calls.set(calls.get() + 1);
        Ok::<i32, Failure>(1)
    });

    let pipeline = source
        .map(double)
        .map_err(wrapped)
        .and_then(|n| ok(n + 1))
        .chain_first(|_| ok::<(), Failure>(()))
        .filter_or_else(is_positive, |_| failed())
        .or_else(|_| ok::<i32, Failure>(0))
        .zip(ok(1));

    assert_eq!(calls.get(), 0);
    assert_eq!(pipeline.run(), Ok((3, 1)));
    assert_eq!(calls.get(), 1);
    assert_eq!(pipeline.run(), Ok((3, 1)));
    assert_eq!(calls.get(), 2);
}

#[test]
fn map_transforms_success_and_keeps_failure() {
    assert_eq!(ok::<_, Failure>(1).map(double).run(), Ok(2));
    assert_eq!(error::<i32, _>(failed()).map(double).run(), Err(failed()));
}

#[test]
fn zip_pairs_values_and_keeps_first_failure() {
    assert_eq!(ok::<_, Failure>(1).zip(ok("one")).run(), Ok((1, "one")));

    let first = error::<i32, _>(Failure::new("first"));
    let second = error::<i32, _>(Failure::new("second"));
    assert_eq!(first.zip(second).run(), Err(Failure::new("first")));
}

#[test]
fn clones_rerun_independently() {
    let value = ok::<_, Failure>(String::from("kept"));
    assert_eq!(value.clone().run(), value.run());

    let failing = error::<i32, _>(failed());
    assert_eq!(failing.clone().run(), Err(failed()));
    assert_eq!(failing.run(), Err(failed()));

    let default = zero::<u8, Failure>();
    assert_eq!(default.clone().run(), default.run());

    let reads = Cell::new(0);
    let io = from_io::<_, _, Failure>(|| {
        reads.set(reads.get() + 1);
        reads.get()
    });
    let io_copy = io.clone();
    assert_eq!(io.run(), Ok(1));
    assert_eq!(io_copy.run(), Ok(2));

    let port = 8080u16;
    let present = from_nilable(Some(&port), failed);
    assert_eq!(present.clone().run(), Ok(8080));
    assert_eq!(present.run(), Ok(8080));

    let pipeline = ok::<_, Failure>(4).map(double).and_then(|n| ok(n + 1));
    let copy = pipeline.clone();
    assert_eq!(copy.run(), Ok(9));
    assert_eq!(pipeline.run(), Ok(9));
}
