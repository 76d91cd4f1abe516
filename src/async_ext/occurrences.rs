use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::Stream;
use pin_project_lite::pin_project;

use crate::computation::Computation;

/// Extension trait for streams whose items are computations.
pub trait OccurrencesExt: Stream + Sized
where
    Self::Item: Computation,
{
    /// Runs each computation as it arrives and yields its outcome.
    fn run_each(self) -> Occurrences<Self> {
        Occurrences { inner: self }
    }
}

impl<S> OccurrencesExt for S
where
    S: Stream,
    S::Item: Computation,
{
}

pin_project! {
    /// Stream of computation outcomes.
    ///
    /// Created by [`OccurrencesExt::run_each`]. Every item of the inner stream
    /// is run exactly once, in arrival order; a failing occurrence does not end
    /// the stream.
    #[must_use = "streams do nothing unless polled"]
    pub struct Occurrences<S> {
        #[pin]
        inner: S,
    }
}

impl<S> Occurrences<S> {
    /// Consumes the adapter, returning the inner stream.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S> Stream for Occurrences<S>
where
    S: Stream,
    S::Item: Computation,
{
    type Item = Result<<S::Item as Computation>::Output, <S::Item as Computation>::Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        match this.inner.poll_next(cx) {
            Poll::Ready(Some(computation)) => Poll::Ready(Some(computation.run())),
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
