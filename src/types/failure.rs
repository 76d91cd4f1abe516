//! The default error value carried by computations.
//!
//! [`Failure`] is deliberately opaque: a message, an optional numeric code, and
//! an optional cause. Wrapping one failure inside another builds a diagnostic
//! chain that survives `map_err`, `bimap`, `filter_or_else` and the nilable
//! bridge.
//!
//! # Examples
//!
//! ```
//! use result_rail::Failure;
//!
//! let err = Failure::new("connection refused")
//!     .context("loading user 42")
//!     .with_code(503);
//!
//! assert_eq!(err.to_string(), "loading user 42 (code: 503): connection refused");
//! assert_eq!(err.root_cause().message(), "connection refused");
//! ```
use core::fmt::{self, Display};
use core::iter::FusedIterator;

use crate::types::alloc_type::{Box, Cow, String, ToString, Vec};
use crate::types::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An opaque failure value with an optional cause.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Failure {
    message: Cow<'static, str>,
    code: Option<u32>,
    cause: Option<Box<Failure>>,
}

impl Failure {
    /// Creates a failure without code or cause.
    #[inline]
    pub fn new<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { message: message.into(), code: None, cause: None }
    }

    /// Creates a failure from pre-formatted arguments.
    ///
    /// Static format strings are stored without allocating.
    #[inline]
    pub fn from_args(args: fmt::Arguments<'_>) -> Self {
        match args.as_str() {
            Some(text) => Self::new(text),
            None => Self::new(alloc::fmt::format(args)),
        }
    }

    /// Flattens any error and its `source()` chain into a failure chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Failure;
    ///
    /// let parse = "x1".parse::<u8>().unwrap_err();
    /// let failure = Failure::from_error(&parse);
    /// assert_eq!(failure.message(), parse.to_string());
    /// assert!(failure.cause().is_none());
    /// ```
    pub fn from_error(error: &dyn core::error::Error) -> Self {
        let mut messages: Vec<String> = Vec::new();
        let mut current: Option<&dyn core::error::Error> = Some(error);
        while let Some(err) = current {
            messages.push(err.to_string());
            current = err.source();
        }

        let mut chain: Option<Failure> = None;
        for message in messages.into_iter().rev() {
            chain = Some(Failure {
                message: Cow::Owned(message),
                code: None,
                cause: chain.map(Box::new),
            });
        }
        // `messages` always holds at least `error` itself.
        chain.unwrap_or_else(|| Failure::new(""))
    }

    /// Wraps `self` as the cause of a new failure with `message`.
    #[inline]
    pub fn context<M>(self, message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { message: message.into(), code: None, cause: Some(Box::new(self)) }
    }

    /// Sets (or overrides) the numeric code of this link of the chain.
    #[inline]
    pub fn with_code(mut self, code: u32) -> Self {
        self.code = Some(code);
        self
    }

    /// Returns the message of this link.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the code of this link, if any.
    #[inline]
    pub fn code(&self) -> Option<u32> {
        self.code
    }

    /// Returns the direct cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&Failure> {
        self.cause.as_deref()
    }

    /// Returns the innermost failure of the chain.
    pub fn root_cause(&self) -> &Failure {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }

    /// Iterates over `self` followed by every cause, outermost first.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Collects the messages of the whole chain, outermost first.
    pub fn messages(&self) -> ErrorVec<&str> {
        self.chain().map(Failure::message).collect()
    }

    /// Returns `true` if any link of the chain carries `message`.
    pub fn contains(&self, message: &str) -> bool {
        self.chain().any(|link| link.message() == message)
    }

    fn fmt_link(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(code) = self.code {
            write!(f, " (code: {})", code)?;
        }
        Ok(())
    }
}

/// Iterator over a failure and its causes. Created by [`Failure::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a Failure>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Failure;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

impl Display for Failure {
    /// `{}` joins the chain with `": "`; `{:#}` puts each cause on its own line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_link(f)?;
        let alternate = f.alternate();
        for cause in self.chain().skip(1) {
            if alternate {
                f.write_str("\n  caused by: ")?;
            } else {
                f.write_str(": ")?;
            }
            cause.fmt_link(f)?;
        }
        Ok(())
    }
}

impl core::error::Error for Failure {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}

impl From<&'static str> for Failure {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Failure {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<Cow<'static, str>> for Failure {
    #[inline]
    fn from(message: Cow<'static, str>) -> Self {
        Self::new(message)
    }
}
