//! Tests for tracing integration.

use std::cell::Cell;

use result_rail::tracing_ext::{instrument_error, ResultSpanExt, TracedExt};
use result_rail::{error, from_fn, ok, Computation, Failure};
use tracing::{info_span, Span};

#[test]
fn traced_passes_outcome_through() {
    assert_eq!(ok::<_, Failure>(3).in_span(Span::none()).run(), Ok(3));
    assert_eq!(
        error::<i32, _>(Failure::new("down")).in_span(Span::none()).run(),
        Err(Failure::new("down"))
    );
}

#[test]
fn traced_runs_inner_once_per_invocation() {
    let runs = Cell::new(0);
    let traced = from_fn(|| {
        runs.set(runs.get() + 1);
        Ok::<_, Failure>(())
    })
    .in_span(info_span!("tick"));

    assert_eq!(runs.get(), 0);
    traced.run().unwrap();
    traced.run().unwrap();
    assert_eq!(runs.get(), 2);
}

#[test]
fn in_current_span_captures_span_at_composition() {
    let traced = ok::<_, Failure>(1).in_current_span();
    assert!(traced.span().is_none());
    assert_eq!(traced.run(), Ok(1));
}

#[test]
fn with_span_none_reports_unknown() {
    let err = Err::<(), _>("disk full").with_span(&Span::none()).unwrap_err();
    assert_eq!(err.to_string(), "in span 'unknown': disk full");
}

#[test]
fn with_current_span_wraps_error() {
    let err = Err::<(), _>("failed").with_current_span().unwrap_err();

    assert!(err.message().starts_with("in span '"));
    assert_eq!(err.root_cause().message(), "failed");
}

#[test]
fn with_current_span_ok_passes_through() {
    assert_eq!(Ok::<_, &str>(42).with_current_span(), Ok(42));
}

#[test]
fn instrument_error_keeps_existing_chain() {
    let inner = Failure::new("timeout").context("calling billing");
    let err = instrument_error(inner, &Span::none());

    assert_eq!(err.messages().as_slice(), ["in span 'unknown'", "calling billing", "timeout"]);
}
