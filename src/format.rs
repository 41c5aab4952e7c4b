//! Declared shapes for document values.
//!
//! A [`Format`] pairs a [`Kind`] (what a value is) with a [`NullPolicy`]
//! (how null and absence are treated). A [`Schema`] is the ordered list of
//! named fields an object format declares; the document root is always an
//! object, so a document is described by a `Schema`.
//!
//! ## Null policies
//!
//! | Policy | value present | value `null` | key absent |
//! |---|---|---|---|
//! | `Required` | validated | error | error |
//! | `Nullable` | validated | kept as `null` | becomes `null` |
//! | `Omittable` | validated | dropped | dropped |
//!
//! Omittable values dropped on input are also left out on output, so a
//! round trip never invents or loses information.
//!
//! ## Examples
//!
//! ```rust
//! use serde_kata::{Format, Schema};
//!
//! let schema = Schema::new()
//!     .field("name", Format::string())
//!     .field("age", Format::int().or_null())
//!     .field("tags", Format::array(Format::string().or_nothing()));
//!
//! assert_eq!(schema.len(), 3);
//! assert_eq!(schema.get("age").unwrap().to_string(), "int or null");
//! ```

use indexmap::IndexMap;
use std::fmt;
use std::ops::{Add, AddAssign};

/// How a format treats `null` and missing keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NullPolicy {
    /// Absence or null is a type mismatch.
    #[default]
    Required,
    /// Null is a valid value; absence is read as null.
    Nullable,
    /// Null and absence both mean "not present".
    Omittable,
}

/// What a value is allowed to be.
#[derive(Clone, Debug, PartialEq)]
pub enum Kind {
    String,
    Int,
    Float,
    Bool,
    Array(Box<Format>),
    Object(Schema),
    /// Tags synthetic nodes (sentinels, pending assignments). Never
    /// matches real input.
    Wrapper,
}

/// A schema node: a [`Kind`] plus a [`NullPolicy`].
///
/// # Examples
///
/// ```rust
/// use serde_kata::{Format, NullPolicy};
///
/// let format = Format::array(Format::int()).or_nothing();
/// assert_eq!(format.policy(), NullPolicy::Omittable);
/// assert_eq!(format.element(), Some(&Format::int()));
/// assert_eq!(format.to_string(), "array<int> or nothing");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Format {
    kind: Kind,
    policy: NullPolicy,
}

impl Format {
    /// A format with an explicit kind and policy.
    ///
    /// A wrapper never matches input, so its policy is always
    /// [`NullPolicy::Required`].
    #[must_use]
    pub const fn new(kind: Kind, policy: NullPolicy) -> Self {
        let policy = if matches!(kind, Kind::Wrapper) {
            NullPolicy::Required
        } else {
            policy
        };
        Format { kind, policy }
    }

    #[must_use]
    pub const fn string() -> Self {
        Format::new(Kind::String, NullPolicy::Required)
    }

    #[must_use]
    pub const fn int() -> Self {
        Format::new(Kind::Int, NullPolicy::Required)
    }

    #[must_use]
    pub const fn float() -> Self {
        Format::new(Kind::Float, NullPolicy::Required)
    }

    #[must_use]
    pub const fn bool() -> Self {
        Format::new(Kind::Bool, NullPolicy::Required)
    }

    /// An array whose every element matches `element`.
    #[must_use]
    pub fn array(element: Format) -> Self {
        Format::new(Kind::Array(Box::new(element)), NullPolicy::Required)
    }

    /// An object with the fields declared by `schema`.
    #[must_use]
    pub fn object(schema: impl Into<Schema>) -> Self {
        Format::new(Kind::Object(schema.into()), NullPolicy::Required)
    }

    /// The format of synthetic nodes.
    #[must_use]
    pub const fn wrapper() -> Self {
        Format::new(Kind::Wrapper, NullPolicy::Required)
    }

    /// Same kind, but `null` is a valid value.
    #[must_use]
    pub fn or_null(self) -> Self {
        self.with_policy(NullPolicy::Nullable)
    }

    /// Same kind, but `null` and absence mean "not present".
    #[must_use]
    pub fn or_nothing(self) -> Self {
        self.with_policy(NullPolicy::Omittable)
    }

    /// Same kind with `policy`. A wrapper stays required.
    #[must_use]
    pub fn with_policy(self, policy: NullPolicy) -> Self {
        Format::new(self.kind, policy)
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> &Kind {
        &self.kind
    }

    #[inline]
    #[must_use]
    pub const fn policy(&self) -> NullPolicy {
        self.policy
    }

    #[inline]
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self.policy, NullPolicy::Nullable)
    }

    #[inline]
    #[must_use]
    pub const fn is_omittable(&self) -> bool {
        matches!(self.policy, NullPolicy::Omittable)
    }

    /// `true` when `null` may occupy a node of this format.
    #[inline]
    #[must_use]
    pub const fn accepts_null(&self) -> bool {
        !matches!(self.policy, NullPolicy::Required)
    }

    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self.kind,
            Kind::String | Kind::Int | Kind::Float | Kind::Bool
        )
    }

    /// The element format, if this is an array format.
    #[must_use]
    pub fn element(&self) -> Option<&Format> {
        match &self.kind {
            Kind::Array(element) => Some(element),
            _ => None,
        }
    }

    /// The declared fields, if this is an object format.
    #[must_use]
    pub fn schema(&self) -> Option<&Schema> {
        match &self.kind {
            Kind::Object(schema) => Some(schema),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::String => write!(f, "string")?,
            Kind::Int => write!(f, "int")?,
            Kind::Float => write!(f, "float")?,
            Kind::Bool => write!(f, "bool")?,
            Kind::Array(element) => write!(f, "array<{}>", element)?,
            Kind::Object(schema) => write!(f, "object{}", schema)?,
            Kind::Wrapper => write!(f, "wrapper")?,
        }
        match self.policy {
            NullPolicy::Required => Ok(()),
            NullPolicy::Nullable => write!(f, " or null"),
            NullPolicy::Omittable => write!(f, " or nothing"),
        }
    }
}

/// The ordered field declarations of an object format.
///
/// Two schemas can be merged with [`Schema::merge`] or `+`; on duplicate
/// names the right-hand declaration wins.
///
/// # Examples
///
/// ```rust
/// use serde_kata::{Format, Schema};
///
/// let base = Schema::new()
///     .field("id", Format::int())
///     .field("name", Format::string());
/// let patch = Schema::from([("name", Format::string().or_null())]);
///
/// let merged = base + patch;
/// assert_eq!(merged.len(), 2);
/// assert!(merged.get("name").unwrap().is_nullable());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Schema(IndexMap<String, Format>);

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Schema(IndexMap::new())
    }

    /// Builder form of [`Schema::insert`].
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, format: Format) -> Self {
        self.insert(name, format);
        self
    }

    /// Declares a field, replacing any previous declaration of `name`.
    pub fn insert(&mut self, name: impl Into<String>, format: Format) -> Option<Format> {
        self.0.insert(name.into(), format)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Format> {
        self.0.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the declared fields in declaration order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Format> {
        self.0.iter()
    }

    /// Unions two schemas; declarations in `other` take precedence.
    #[must_use]
    pub fn merge(mut self, other: Schema) -> Self {
        self += other;
        self
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, format)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, format)?;
        }
        write!(f, "}}")
    }
}

impl Add for Schema {
    type Output = Schema;

    fn add(self, rhs: Schema) -> Schema {
        self.merge(rhs)
    }
}

impl AddAssign for Schema {
    fn add_assign(&mut self, rhs: Schema) {
        for (name, format) in rhs.0 {
            self.0.insert(name, format);
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Format)> for Schema {
    fn from_iter<T: IntoIterator<Item = (K, Format)>>(iter: T) -> Self {
        Schema(iter.into_iter().map(|(k, f)| (k.into(), f)).collect())
    }
}

impl<K: Into<String>, const N: usize> From<[(K, Format); N]> for Schema {
    fn from(fields: [(K, Format); N]) -> Self {
        fields.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = (&'a String, &'a Format);
    type IntoIter = indexmap::map::Iter<'a, String, Format>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
