//! Adapter types returned by the combinators on [`Computation`].
//!
//! Constructing any of these never invokes the wrapped computations; all
//! work happens inside `run`.
use core::fmt;

use super::Computation;
use crate::traits::IntoFailure;
use crate::types::alloc_type::Cow;
use crate::types::Failure;

/// Computation returned by [`Computation::map`].
#[derive(Clone)]
pub struct Map<C, F> {
    inner: C,
    f: F,
}

impl<C, F> Map<C, F> {
    pub(super) fn new(inner: C, f: F) -> Self {
        Self { inner, f }
    }
}

impl<C, F, B> Computation for Map<C, F>
where
    C: Computation,
    F: Fn(C::Output) -> B,
{
    type Output = B;
    type Error = C::Error;

    #[inline]
    fn run(&self) -> Result<B, C::Error> {
        self.inner.run().map(&self.f)
    }
}

impl<C: fmt::Debug, F> fmt::Debug for Map<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("inner", &self.inner).finish_non_exhaustive()
    }
}

/// Computation returned by [`Computation::map_err`].
#[derive(Clone)]
pub struct MapErr<C, F> {
    inner: C,
    f: F,
}

impl<C, F> MapErr<C, F> {
    pub(super) fn new(inner: C, f: F) -> Self {
        Self { inner, f }
    }
}

impl<C, F, G> Computation for MapErr<C, F>
where
    C: Computation,
    F: Fn(C::Error) -> G,
{
    type Output = C::Output;
    type Error = G;

    #[inline]
    fn run(&self) -> Result<C::Output, G> {
        self.inner.run().map_err(&self.f)
    }
}

impl<C: fmt::Debug, F> fmt::Debug for MapErr<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapErr").field("inner", &self.inner).finish_non_exhaustive()
    }
}

/// Computation returned by [`Computation::bimap`].
#[derive(Clone)]
pub struct Bimap<C, FE, FS> {
    inner: C,
    on_error: FE,
    on_success: FS,
}

impl<C, FE, FS> Bimap<C, FE, FS> {
    pub(super) fn new(inner: C, on_error: FE, on_success: FS) -> Self {
        Self { inner, on_error, on_success }
    }
}

impl<C, FE, FS, G, B> Computation for Bimap<C, FE, FS>
where
    C: Computation,
    FE: Fn(C::Error) -> G,
    FS: Fn(C::Output) -> B,
{
    type Output = B;
    type Error = G;

    #[inline]
    fn run(&self) -> Result<B, G> {
        match self.inner.run() {
            Ok(value) => Ok((self.on_success)(value)),
            Err(error) => Err((self.on_error)(error)),
        }
    }
}

impl<C: fmt::Debug, FE, FS> fmt::Debug for Bimap<C, FE, FS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bimap").field("inner", &self.inner).finish_non_exhaustive()
    }
}

/// Computation returned by [`Computation::ap`].
#[derive(Clone, Debug)]
pub struct Ap<CF, CA> {
    function: CF,
    argument: CA,
}

impl<CF, CA> Ap<CF, CA> {
    pub(super) fn new(function: CF, argument: CA) -> Self {
        Self { function, argument }
    }
}

impl<CF, CA, B> Computation for Ap<CF, CA>
where
    CF: Computation,
    CA: Computation<Error = CF::Error>,
    CF::Output: FnOnce(CA::Output) -> B,
{
    type Output = B;
    type Error = CF::Error;

    #[inline]
    fn run(&self) -> Result<B, CF::Error> {
        // The argument side must not run when the function side fails.
        let function = self.function.run()?;
        let argument = self.argument.run()?;
        Ok(function(argument))
    }
}

/// Computation returned by [`Computation::and_then`].
#[derive(Clone)]
pub struct AndThen<C, F> {
    inner: C,
    f: F,
}

impl<C, F> AndThen<C, F> {
    pub(super) fn new(inner: C, f: F) -> Self {
        Self { inner, f }
    }
}

impl<C, F, N> Computation for AndThen<C, F>
where
    C: Computation,
    N: Computation<Error = C::Error>,
    F: Fn(C::Output) -> N,
{
    type Output = N::Output;
    type Error = C::Error;

    #[inline]
    fn run(&self) -> Result<N::Output, C::Error> {
        let value = self.inner.run()?;
        (self.f)(value).run()
    }
}

impl<C: fmt::Debug, F> fmt::Debug for AndThen<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndThen").field("inner", &self.inner).finish_non_exhaustive()
    }
}

/// Computation returned by [`Computation::chain_first`].
#[derive(Clone)]
pub struct ChainFirst<C, F> {
    inner: C,
    f: F,
}

impl<C, F> ChainFirst<C, F> {
    pub(super) fn new(inner: C, f: F) -> Self {
        Self { inner, f }
    }
}

impl<C, F, N> Computation for ChainFirst<C, F>
where
    C: Computation,
    N: Computation<Error = C::Error>,
    F: Fn(&C::Output) -> N,
{
    type Output = C::Output;
    type Error = C::Error;

    #[inline]
    fn run(&self) -> Result<C::Output, C::Error> {
        let value = self.inner.run()?;
        (self.f)(&value).run()?;
        Ok(value)
    }
}

impl<C: fmt::Debug, F> fmt::Debug for ChainFirst<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainFirst").field("inner", &self.inner).finish_non_exhaustive()
    }
}

/// Computation returned by [`Computation::ap_first`].
#[derive(Clone, Debug)]
pub struct ApFirst<C1, C2> {
    first: C1,
    second: C2,
}

impl<C1, C2> ApFirst<C1, C2> {
    pub(super) fn new(first: C1, second: C2) -> Self {
        Self { first, second }
    }
}

impl<C1, C2> Computation for ApFirst<C1, C2>
where
    C1: Computation,
    C2: Computation<Error = C1::Error>,
{
    type Output = C1::Output;
    type Error = C1::Error;

    #[inline]
    fn run(&self) -> Result<C1::Output, C1::Error> {
        let kept = self.first.run()?;
        self.second.run()?;
        Ok(kept)
    }
}

/// Computation returned by [`Computation::ap_second`].
#[derive(Clone, Debug)]
pub struct ApSecond<C1, C2> {
    first: C1,
    second: C2,
}

impl<C1, C2> ApSecond<C1, C2> {
    pub(super) fn new(first: C1, second: C2) -> Self {
        Self { first, second }
    }
}

impl<C1, C2> Computation for ApSecond<C1, C2>
where
    C1: Computation,
    C2: Computation<Error = C1::Error>,
{
    type Output = C2::Output;
    type Error = C1::Error;

    #[inline]
    fn run(&self) -> Result<C2::Output, C1::Error> {
        self.first.run()?;
        self.second.run()
    }
}

/// Computation returned by [`Computation::zip`].
#[derive(Clone, Debug)]
pub struct Zip<C1, C2> {
    first: C1,
    second: C2,
}

impl<C1, C2> Zip<C1, C2> {
    pub(super) fn new(first: C1, second: C2) -> Self {
        Self { first, second }
    }
}

impl<C1, C2> Computation for Zip<C1, C2>
where
    C1: Computation,
    C2: Computation<Error = C1::Error>,
{
    type Output = (C1::Output, C2::Output);
    type Error = C1::Error;

    #[inline]
    fn run(&self) -> Result<Self::Output, C1::Error> {
        let first = self.first.run()?;
        let second = self.second.run()?;
        Ok((first, second))
    }
}

/// Computation returned by [`Computation::filter_or_else`].
#[derive(Clone)]
pub struct FilterOrElse<C, P, F> {
    inner: C,
    predicate: P,
    on_false: F,
}

impl<C, P, F> FilterOrElse<C, P, F> {
    pub(super) fn new(inner: C, predicate: P, on_false: F) -> Self {
        Self { inner, predicate, on_false }
    }
}

impl<C, P, F> Computation for FilterOrElse<C, P, F>
where
    C: Computation,
    P: Fn(&C::Output) -> bool,
    F: Fn(C::Output) -> C::Error,
{
    type Output = C::Output;
    type Error = C::Error;

    #[inline]
    fn run(&self) -> Result<C::Output, C::Error> {
        let value = self.inner.run()?;
        if (self.predicate)(&value) {
            Ok(value)
        } else {
            Err((self.on_false)(value))
        }
    }
}

impl<C: fmt::Debug, P, F> fmt::Debug for FilterOrElse<C, P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterOrElse").field("inner", &self.inner).finish_non_exhaustive()
    }
}

/// Computation returned by [`Computation::or_else`].
#[derive(Clone)]
pub struct OrElse<C, F> {
    inner: C,
    on_error: F,
}

impl<C, F> OrElse<C, F> {
    pub(super) fn new(inner: C, on_error: F) -> Self {
        Self { inner, on_error }
    }
}

impl<C, F, N> Computation for OrElse<C, F>
where
    C: Computation,
    N: Computation<Output = C::Output>,
    F: Fn(C::Error) -> N,
{
    type Output = C::Output;
    type Error = N::Error;

    #[inline]
    fn run(&self) -> Result<C::Output, N::Error> {
        match self.inner.run() {
            Ok(value) => Ok(value),
            Err(error) => (self.on_error)(error).run(),
        }
    }
}

impl<C: fmt::Debug, F> fmt::Debug for OrElse<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrElse").field("inner", &self.inner).finish_non_exhaustive()
    }
}

/// Computation returned by [`Computation::context`].
#[derive(Clone, Debug)]
pub struct Context<C> {
    inner: C,
    message: Cow<'static, str>,
}

impl<C> Context<C> {
    pub(super) fn new(inner: C, message: Cow<'static, str>) -> Self {
        Self { inner, message }
    }
}

impl<C> Computation for Context<C>
where
    C: Computation,
    C::Error: IntoFailure,
{
    type Output = C::Output;
    type Error = Failure;

    #[inline]
    fn run(&self) -> Result<C::Output, Failure> {
        self.inner.run().map_err(|e| e.into_failure().context(self.message.clone()))
    }
}
