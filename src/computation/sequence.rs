use super::Computation;
use crate::types::alloc_type::Vec;

/// Collects computations into one that runs them in order.
///
/// The resulting computation yields every value in input order, or the first
/// failure; computations after a failing one are not invoked.
///
/// # Examples
///
/// ```
/// use result_rail::{error, ok, sequence, BoxComputation, Computation};
///
/// let all_ok = sequence(vec![ok::<_, &str>(1), ok(2), ok(3)]);
/// assert_eq!(all_ok.run(), Ok(vec![1, 2, 3]));
///
/// let steps: Vec<BoxComputation<'_, i32, &str>> =
///     vec![ok(1).boxed(), error("step 2 failed").boxed(), ok(3).boxed()];
/// assert_eq!(sequence(steps).run(), Err("step 2 failed"));
/// ```
pub fn sequence<I>(computations: I) -> Sequence<I::Item>
where
    I: IntoIterator,
    I::Item: Computation,
{
    Sequence { computations: computations.into_iter().collect() }
}

/// Computation returned by [`sequence`].
#[derive(Clone, Debug)]
pub struct Sequence<C> {
    computations: Vec<C>,
}

impl<C> Sequence<C> {
    /// Number of computations that a successful run invokes.
    #[inline]
    pub fn len(&self) -> usize {
        self.computations.len()
    }

    /// Returns `true` if there is nothing to run; such a sequence yields an empty `Vec`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.computations.is_empty()
    }
}

impl<C> Computation for Sequence<C>
where
    C: Computation,
{
    type Output = Vec<C::Output>;
    type Error = C::Error;

    fn run(&self) -> Result<Self::Output, Self::Error> {
        self.computations.iter().map(|c| c.run()).collect()
    }
}

impl<C> FromIterator<C> for Sequence<C>
where
    C: Computation,
{
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        sequence(iter)
    }
}
