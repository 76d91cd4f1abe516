use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use crate::computation::Computation;

/// Extension trait that turns a computation into a future.
pub trait ComputationFutureExt: Computation + Sized {
    /// Returns a future that runs the computation when first polled.
    ///
    /// Nothing is invoked until the future is polled, and the future is
    /// ready on its first poll.
    fn ready(self) -> ComputationFuture<Self> {
        ComputationFuture { computation: self }
    }
}

impl<C> ComputationFutureExt for C where C: Computation {}

/// Future that resolves to the outcome of a computation.
///
/// Created by [`ComputationFutureExt::ready`]. Polling again after completion
/// runs the computation again.
#[must_use = "futures do nothing unless polled"]
#[derive(Clone, Debug)]
pub struct ComputationFuture<C> {
    computation: C,
}

impl<C> ComputationFuture<C> {
    /// Returns the wrapped computation without running it.
    #[inline]
    pub fn into_inner(self) -> C {
        self.computation
    }
}

impl<C> Future for ComputationFuture<C>
where
    C: Computation,
{
    type Output = Result<C::Output, C::Error>;

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        Poll::Ready(self.computation.run())
    }
}
