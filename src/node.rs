//! The validated in-memory document tree.
//!
//! A [`Node`] is one validated value together with the field name it lives
//! under and the [`Format`] it was validated against. The format is fixed
//! for the node's lifetime; writes swap the payload ([`Data`]) in place
//! after re-validating against that format.
//!
//! Besides realized payloads, [`Data`] has three transient variants:
//!
//! - [`Data::Error`]: the sentinel returned by a failed read;
//! - [`Data::Assignment`]: a raw value waiting to be assigned, built with
//!   [`Node::value`] or [`Node::null`];
//! - [`Data::Empty`]: a skeleton placeholder that must be assigned before
//!   the document can be encoded.
//!
//! ## Reading
//!
//! ```rust
//! use serde_kata::{from_str, Format, Schema};
//!
//! let schema = Schema::new()
//!     .field("name", Format::string())
//!     .field("age", Format::int().or_null());
//! let doc = from_str(r#"{"name": "Ada", "age": null}"#, &schema).unwrap();
//!
//! assert_eq!(doc.get("name").as_str().unwrap(), "Ada");
//! assert!(doc.get("age").is_null());
//! assert!(doc.get("age").as_int().is_err());
//! assert_eq!(doc.get("age").value_or(18i64), 18);
//! assert!(!doc.get("missing").exists());
//! ```

use crate::format::Format;
use crate::value::Value;
use crate::{ser, Error, Result};
use indexmap::IndexMap;

/// The payload of a [`Node`].
#[derive(Clone, Debug, PartialEq)]
pub enum Data {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Array(Vec<Node>),
    Object(IndexMap<String, Node>),
    Null,
    /// Sentinel produced by a read that could not be satisfied
    Error(Error),
    /// Raw value waiting to be validated by an assignment
    Assignment(Value),
    /// Skeleton placeholder awaiting a value
    Empty,
}

impl Data {
    /// `true` for realized payloads, including `Null`.
    #[inline]
    #[must_use]
    pub const fn exists(&self) -> bool {
        !matches!(self, Data::Error(_) | Data::Assignment(_) | Data::Empty)
    }

    /// Short name of the payload variant, used in diagnostics.
    #[must_use]
    pub const fn state_name(&self) -> &'static str {
        match self {
            Data::String(_) => "string",
            Data::Int(_) => "int",
            Data::Float(_) => "float",
            Data::Bool(_) => "bool",
            Data::Array(_) => "array",
            Data::Object(_) => "object",
            Data::Null => "null",
            Data::Error(_) => "error",
            Data::Assignment(_) => "pending assignment",
            Data::Empty => "empty",
        }
    }
}

/// A node of a validated document.
///
/// # Examples
///
/// ```rust
/// use serde_kata::{skeleton, Format, Node, Schema};
///
/// let mut doc = skeleton(&Schema::new().field("count", Format::int())).unwrap();
/// assert!(!doc.get("count").exists());
///
/// doc.update(|root, sink| root.set("count", Node::value(3), sink)).unwrap();
/// assert_eq!(doc.get("count").as_int().unwrap(), 3);
/// assert_eq!(doc.get("count").format(), &Format::int());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub(crate) key: String,
    pub(crate) format: Format,
    pub(crate) data: Data,
}

impl Node {
    pub(crate) fn new(key: impl Into<String>, format: Format, data: Data) -> Self {
        Node {
            key: key.into(),
            format,
            data,
        }
    }

    pub(crate) fn sentinel(key: impl Into<String>, error: Error) -> Self {
        Node::new(key, Format::wrapper(), Data::Error(error))
    }

    /// Wraps a raw value for assignment with [`Node::set`] or [`Node::set_at`].
    ///
    /// The wrapper carries no format of its own; it is validated against the
    /// destination's format when assigned.
    #[must_use]
    pub fn value(raw: impl Into<Value>) -> Self {
        Node::new(String::new(), Format::wrapper(), Data::Assignment(raw.into()))
    }

    /// The assignment value for `null`.
    #[must_use]
    pub fn null() -> Self {
        Node::value(Value::Null)
    }

    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    #[must_use]
    pub fn format(&self) -> &Format {
        &self.format
    }

    #[inline]
    #[must_use]
    pub fn data(&self) -> &Data {
        &self.data
    }

    /// `true` for any realized payload, including `null`; `false` for
    /// sentinels, pending assignments and skeleton placeholders.
    #[inline]
    #[must_use]
    pub fn exists(&self) -> bool {
        self.data.exists()
    }

    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self.data, Data::Null)
    }

    /// The error carried by a sentinel node.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        match &self.data {
            Data::Error(e) => Some(e),
            _ => None,
        }
    }

    /// The array's elements, or an empty slice for any other node.
    #[must_use]
    pub fn elements(&self) -> &[Node] {
        match &self.data {
            Data::Array(items) => items,
            _ => &[],
        }
    }

    /// The object's fields in order, or nothing for any other node.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Node)> {
        let fields = match &self.data {
            Data::Object(fields) => Some(fields.iter()),
            _ => None,
        };
        fields
            .into_iter()
            .flatten()
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Number of elements or fields; zero for scalars.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.data {
            Data::Array(items) => items.len(),
            Data::Object(fields) => fields.len(),
            _ => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the string payload.
    ///
    /// # Errors
    ///
    /// The node's own error if it is a sentinel, otherwise
    /// [`Error::TypeMismatch`].
    pub fn as_str(&self) -> Result<&str> {
        match &self.data {
            Data::String(s) => Ok(s),
            _ => Err(self.extraction_error()),
        }
    }

    /// Returns the integer payload.
    ///
    /// # Errors
    ///
    /// The node's own error if it is a sentinel, otherwise
    /// [`Error::TypeMismatch`].
    pub fn as_int(&self) -> Result<i64> {
        match self.data {
            Data::Int(i) => Ok(i),
            _ => Err(self.extraction_error()),
        }
    }

    /// Returns the float payload.
    ///
    /// # Errors
    ///
    /// The node's own error if it is a sentinel, otherwise
    /// [`Error::TypeMismatch`].
    pub fn as_float(&self) -> Result<f64> {
        match self.data {
            Data::Float(f) => Ok(f),
            _ => Err(self.extraction_error()),
        }
    }

    /// Returns the boolean payload.
    ///
    /// # Errors
    ///
    /// The node's own error if it is a sentinel, otherwise
    /// [`Error::TypeMismatch`].
    pub fn as_bool(&self) -> Result<bool> {
        match self.data {
            Data::Bool(b) => Ok(b),
            _ => Err(self.extraction_error()),
        }
    }

    /// Typed extraction that falls back to `default` on any failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_kata::{from_str, Format, Schema};
    ///
    /// let schema = Schema::new().field("n", Format::int());
    /// let doc = from_str(r#"{"n": 7}"#, &schema).unwrap();
    ///
    /// assert_eq!(doc.get("n").value_or(0i64), 7);
    /// assert_eq!(doc.get("n").value_or(String::from("none")), "none");
    /// assert_eq!(doc.get("other").value_or(false), false);
    /// ```
    pub fn value_or<T>(&self, default: T) -> T
    where
        T: for<'a> TryFrom<&'a Node>,
    {
        T::try_from(self).unwrap_or(default)
    }

    /// Typed extraction that falls back to `T::default()`.
    pub fn value_or_default<T>(&self) -> T
    where
        T: for<'a> TryFrom<&'a Node> + Default,
    {
        T::try_from(self).unwrap_or_default()
    }

    /// Best-effort rendering of the payload for diagnostics.
    pub(crate) fn describe(&self) -> String {
        match &self.data {
            Data::Assignment(raw) => raw.to_string(),
            Data::Error(_) | Data::Empty => self.data.state_name().to_string(),
            _ => ser::flatten(self)
                .map(|v| v.to_string())
                .unwrap_or_else(|_| self.data.state_name().to_string()),
        }
    }

    fn extraction_error(&self) -> Error {
        match &self.data {
            Data::Error(e) => e.clone(),
            _ => Error::type_mismatch(&self.key, &self.format, self.describe()),
        }
    }
}

impl TryFrom<&Node> for String {
    type Error = Error;

    fn try_from(node: &Node) -> Result<Self> {
        node.as_str().map(str::to_string)
    }
}

impl TryFrom<&Node> for i64 {
    type Error = Error;

    fn try_from(node: &Node) -> Result<Self> {
        node.as_int()
    }
}

impl TryFrom<&Node> for f64 {
    type Error = Error;

    fn try_from(node: &Node) -> Result<Self> {
        node.as_float()
    }
}

impl TryFrom<&Node> for bool {
    type Error = Error;

    fn try_from(node: &Node) -> Result<Self> {
        node.as_bool()
    }
}
