//! Error accumulation for mutations.
//!
//! Writes through the navigator never return an error. Each failed write
//! is recorded into a [`Sink`] supplied by the caller and the write becomes
//! a no-op. [`transaction`] owns an [`ErrorSink`] for the duration of a
//! closure and reports the first recorded error, if any, when it closes.
//!
//! ## Examples
//!
//! ```rust
//! use serde_kata::{from_str, transaction, Error, Format, Node, Schema};
//!
//! let schema = Schema::new()
//!     .field("name", Format::string())
//!     .field("age", Format::int());
//! let mut doc = from_str(r#"{"name": "Ada", "age": 36}"#, &schema).unwrap();
//!
//! let result = transaction(|sink| {
//!     let root = doc.root_mut();
//!     root.set("name", Node::value("Grace"), sink);
//!     root.set("age", Node::value("old"), sink);
//! });
//!
//! assert!(matches!(result, Err(Error::TypeMismatch { .. })));
//! assert_eq!(doc.get("name").as_str().unwrap(), "Grace");
//! assert_eq!(doc.get("age").as_int().unwrap(), 36);
//! ```

use crate::{Error, Result};
use tracing::{debug, trace};

/// Destination for errors recorded by mutations.
pub trait Sink {
    /// Records one failed operation.
    fn record(&mut self, error: Error);
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn record(&mut self, error: Error) {
        (**self).record(error);
    }
}

/// Ordered collection of the errors recorded during a batch of writes.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ErrorSink {
    errors: Vec<Error>,
}

impl ErrorSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The earliest recorded error.
    #[must_use]
    pub fn first(&self) -> Option<&Error> {
        self.errors.first()
    }

    /// All recorded errors in the order they occurred.
    #[must_use]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Consumes the sink, returning the first recorded error if there was one.
    ///
    /// # Errors
    ///
    /// The earliest error recorded into this sink.
    pub fn finish(self) -> Result<()> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Sink for ErrorSink {
    fn record(&mut self, error: Error) {
        trace!(error = %error, pending = self.errors.len() + 1, "recorded mutation error");
        self.errors.push(error);
    }
}

/// A sink that drops every error.
///
/// Useful for best-effort writes where failures are uninteresting.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl Sink for Discard {
    fn record(&mut self, error: Error) {
        trace!(error = %error, "discarded mutation error");
    }
}

/// Runs `f` with a fresh [`ErrorSink`] and reports its first error.
///
/// Every write in `f` runs even after an earlier one failed, unless `f`
/// checks the sink and returns early.
///
/// # Errors
///
/// The first error recorded while `f` ran.
///
/// # Examples
///
/// ```rust
/// use serde_kata::{transaction, Error, Sink};
///
/// let value = transaction(|_| 5).unwrap();
/// assert_eq!(value, 5);
///
/// let result = transaction(|sink| {
///     sink.record(Error::not_array("a"));
///     sink.record(Error::not_array("b"));
/// });
/// assert_eq!(result, Err(Error::not_array("a")));
/// ```
pub fn transaction<T, F>(f: F) -> Result<T>
where
    F: FnOnce(&mut ErrorSink) -> T,
{
    let mut sink = ErrorSink::new();
    let value = f(&mut sink);
    if !sink.is_empty() {
        debug!(errors = sink.len(), "transaction closed with errors");
    }
    sink.finish().map(|()| value)
}
