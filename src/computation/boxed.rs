use super::Computation;
use crate::types::alloc_type::Box;

/// A type-erased computation, for heterogeneous collections or recursive pipelines.
///
/// Created with [`Computation::boxed`]. `Box<C>` implements [`Computation`]
/// itself, so every combinator is still available on the boxed value.
///
/// # Examples
///
/// ```
/// use result_rail::{error, ok, BoxComputation, Computation};
///
/// fn lookup(id: u32) -> BoxComputation<'static, &'static str, &'static str> {
///     match id {
///         1 => ok("admin").boxed(),
///         _ => error("unknown user").boxed(),
///     }
/// }
///
/// assert_eq!(lookup(1).map(str::len).run(), Ok(5));
/// assert_eq!(lookup(9).run(), Err("unknown user"));
/// ```
pub type BoxComputation<'a, A, E> = Box<dyn Computation<Output = A, Error = E> + 'a>;
