//! Tracing integration for result-rail.
//!
//! Computations never log on their own. This module lets callers opt in:
//! [`TracedExt`] runs a computation inside a span and records its outcome as an
//! event, and [`ResultSpanExt`] wraps failures with the name of the span they
//! happened in.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! result-rail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::computation::Computation;
use crate::traits::IntoFailure;
use crate::types::Failure;

/// Extension trait that instruments computations with a tracing span.
///
/// # Example
///
/// ```rust,ignore
/// use result_rail::tracing_ext::TracedExt;
/// use tracing::info_span;
///
/// let load = fetch_profile(user_id)
///     .map(Profile::display_name)
///     .in_span(info_span!("load_profile", user_id));
///
/// // Each run enters `load_profile` and emits one outcome event.
/// let name = load.run()?;
/// ```
pub trait TracedExt: Computation + Sized {
    /// Runs every invocation inside `span`.
    fn in_span(self, span: Span) -> Traced<Self> {
        Traced { inner: self, span }
    }

    /// Runs every invocation inside the span that is current at composition time.
    fn in_current_span(self) -> Traced<Self> {
        Traced { inner: self, span: Span::current() }
    }
}

impl<C> TracedExt for C where C: Computation {}

/// Computation wrapper that enters a span for each invocation.
///
/// Created by [`TracedExt::in_span`] or [`TracedExt::in_current_span`].
#[derive(Clone, Debug)]
pub struct Traced<C> {
    inner: C,
    span: Span,
}

impl<C> Traced<C> {
    /// Returns the span entered on every run.
    #[inline]
    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl<C> Computation for Traced<C>
where
    C: Computation,
    C::Error: core::fmt::Debug,
{
    type Output = C::Output;
    type Error = C::Error;

    fn run(&self) -> Result<C::Output, C::Error> {
        let _entered = self.span.enter();
        match self.inner.run() {
            Ok(value) => {
                tracing::trace!("computation succeeded");
                Ok(value)
            },
            Err(error) => {
                tracing::debug!(error = ?error, "computation failed");
                Err(error)
            },
        }
    }
}

/// Extension trait for `Result` types to wrap failures with span context.
pub trait ResultSpanExt<T, E> {
    /// Wraps an error under the name of the current span.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use result_rail::tracing_ext::ResultSpanExt;
    ///
    /// fn apply(patch: Patch) -> Result<(), Failure> {
    ///     store.write(patch).with_current_span()
    /// }
    /// ```
    fn with_current_span(self) -> Result<T, Failure>;

    /// Wraps an error under the name of `span`.
    fn with_span(self, span: &Span) -> Result<T, Failure>;
}

impl<T, E> ResultSpanExt<T, E> for Result<T, E>
where
    E: IntoFailure,
{
    fn with_current_span(self) -> Result<T, Failure> {
        self.map_err(|e| instrument_error(e, &Span::current()))
    }

    fn with_span(self, span: &Span) -> Result<T, Failure> {
        self.map_err(|e| instrument_error(e, span))
    }
}

/// Wraps `error` under a message naming `span`.
///
/// Spans without metadata, such as [`Span::none`], are reported as `unknown`.
pub fn instrument_error<E>(error: E, span: &Span) -> Failure
where
    E: IntoFailure,
{
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    error.into_failure().context(alloc::format!("in span '{}'", name))
}
