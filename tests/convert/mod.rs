use std::cell::Cell;

use result_rail::convert::{from_io, from_result, to_option, IntoComputation};
use result_rail::{error, ok, Computation, Failure};

#[test]
fn from_io_always_succeeds_and_reruns() {
    let reads = Cell::new(0);
    let io = from_io::<_, _, Failure>(|| {
        reads.set(reads.get() + 1);
        reads.get()
    });

    assert_eq!(reads.get(), 0);
    assert_eq!(io.run(), Ok(1));
    assert_eq!(io.run(), Ok(2));
}

#[test]
fn from_result_replays_the_same_outcome() {
    let settled = from_result::<u8, _>(Err(Failure::new("parse failed")));

    assert_eq!(settled.run(), Err(Failure::new("parse failed")));
    assert_eq!(settled.run(), Err(Failure::new("parse failed")));
    assert_eq!(settled.into_inner(), Err(Failure::new("parse failed")));
}

#[test]
fn results_convert_into_computations() {
    let c = "7".parse::<i32>().into_computation().map(|n| n * 3);
    assert_eq!(c.run(), Ok(21));
}

#[test]
fn to_option_discards_the_error() {
    assert_eq!(to_option(&ok::<_, Failure>("ready")), Some("ready"));
    assert_eq!(to_option(&error::<u8, _>(Failure::new("gone"))), None);
}
