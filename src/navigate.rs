//! Reading and writing paths through a document tree.
//!
//! Reads never fail. [`Node::get`] and [`Node::at`] return a [`NodeRef`]
//! that either borrows the child or owns a sentinel node carrying the
//! reason the child could not be reached. Chained reads through a
//! sentinel produce further sentinels, so the typed accessors at the end
//! of a chain are the only place an error surfaces.
//!
//! Writes never fail either. Every mutator takes a [`Sink`]; a write that
//! cannot be applied records its error there and leaves the tree as it was.
//!
//! ## Examples
//!
//! ```rust
//! use serde_kata::{from_str, transaction, Format, Node, Schema};
//!
//! let schema = Schema::new()
//!     .field("user", Format::object(Schema::new().field("name", Format::string())))
//!     .field("tags", Format::array(Format::string()));
//! let mut doc = from_str(r#"{"user": {"name": "Ada"}, "tags": ["a"]}"#, &schema).unwrap();
//!
//! assert_eq!(doc.get("user").get("name").as_str().unwrap(), "Ada");
//! assert_eq!(doc.get("tags").at_or(0, String::new()), "a");
//!
//! transaction(|sink| {
//!     let root = doc.root_mut();
//!     root.get_mut("user").set("name", Node::value("Grace"), sink);
//!     root.get_mut("tags").append_elements(vec!["b".into(), "c".into()], sink);
//! })
//! .unwrap();
//!
//! assert_eq!(doc.get("user").get("name").as_str().unwrap(), "Grace");
//! assert_eq!(doc.get("tags").len(), 3);
//! ```

use crate::format::Format;
use crate::node::{Data, Node};
use crate::sink::Sink;
use crate::validate::validate;
use crate::value::Value;
use crate::Error;
use std::borrow::Cow;
use std::ops::Deref;

/// Result of a read: a borrowed child, or an owned sentinel.
///
/// Dereferences to [`Node`], so every accessor of `Node` is available.
/// [`NodeRef::get`] and [`NodeRef::at`] consume the reference to keep the
/// borrow of the original document across a chain.
#[derive(Clone, Debug)]
pub struct NodeRef<'a>(Cow<'a, Node>);

impl<'a> NodeRef<'a> {
    fn borrowed(node: &'a Node) -> Self {
        NodeRef(Cow::Borrowed(node))
    }

    fn sentinel(key: impl Into<String>, error: Error) -> Self {
        NodeRef(Cow::Owned(Node::sentinel(key, error)))
    }

    /// Reads the field `key` of this node.
    #[must_use]
    pub fn get(self, key: &str) -> NodeRef<'a> {
        match self.0 {
            Cow::Borrowed(node) => node.get(key),
            Cow::Owned(node) => NodeRef(Cow::Owned(node.get(key).into_owned())),
        }
    }

    /// Reads the element at `index` of this node.
    #[must_use]
    pub fn at(self, index: usize) -> NodeRef<'a> {
        match self.0 {
            Cow::Borrowed(node) => node.at(index),
            Cow::Owned(node) => NodeRef(Cow::Owned(node.at(index).into_owned())),
        }
    }

    /// `true` if the read reached a node of the document.
    #[must_use]
    pub fn is_borrowed(&self) -> bool {
        matches!(self.0, Cow::Borrowed(_))
    }

    /// Detaches the result from the document.
    #[must_use]
    pub fn into_owned(self) -> Node {
        self.0.into_owned()
    }
}

impl Deref for NodeRef<'_> {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.0
    }
}

impl PartialEq<Node> for NodeRef<'_> {
    fn eq(&self, other: &Node) -> bool {
        **self == *other
    }
}

/// Write path to a node.
///
/// A `NodeMut` either holds the node it reached or the error that stopped
/// it. In the second case every mutation records that error and does
/// nothing else; further [`get_mut`](NodeMut::get_mut) and
/// [`at_mut`](NodeMut::at_mut) calls keep the first error.
#[derive(Debug)]
pub struct NodeMut<'a>(Reach<'a>);

#[derive(Debug)]
enum Reach<'a> {
    Live(&'a mut Node),
    Sentinel(Node),
}

impl<'a> NodeMut<'a> {
    fn reached(node: &'a mut Node) -> Self {
        NodeMut(Reach::Live(node))
    }

    fn sentinel(key: impl Into<String>, error: Error) -> Self {
        NodeMut(Reach::Sentinel(Node::sentinel(key, error)))
    }

    /// Follows the field `key`.
    #[must_use]
    pub fn get_mut(self, key: &str) -> NodeMut<'a> {
        match self.0 {
            Reach::Live(node) => node.get_mut(key),
            sentinel @ Reach::Sentinel(_) => NodeMut(sentinel),
        }
    }

    /// Follows the element at `index`.
    #[must_use]
    pub fn at_mut(self, index: usize) -> NodeMut<'a> {
        match self.0 {
            Reach::Live(node) => node.at_mut(index),
            sentinel @ Reach::Sentinel(_) => NodeMut(sentinel),
        }
    }

    /// See [`Node::set`].
    pub fn set<S: Sink + ?Sized>(&mut self, key: &str, value: Node, sink: &mut S) {
        if let Some(node) = self.live(sink) {
            node.set(key, value, sink);
        }
    }

    /// See [`Node::set_at`].
    pub fn set_at<S: Sink + ?Sized>(&mut self, index: usize, value: Node, sink: &mut S) {
        if let Some(node) = self.live(sink) {
            node.set_at(index, value, sink);
        }
    }

    /// See [`Node::append_field`].
    pub fn append_field<S: Sink + ?Sized>(
        &mut self,
        key: &str,
        format: Format,
        raw: impl Into<Value>,
        sink: &mut S,
    ) {
        if let Some(node) = self.live(sink) {
            node.append_field(key, format, raw, sink);
        }
    }

    /// See [`Node::append_elements`].
    pub fn append_elements<S: Sink + ?Sized>(&mut self, values: Vec<Value>, sink: &mut S) {
        if let Some(node) = self.live(sink) {
            node.append_elements(values, sink);
        }
    }

    /// See [`Node::remove_field`].
    pub fn remove_field<S: Sink + ?Sized>(&mut self, key: &str, sink: &mut S) -> Option<Node> {
        self.live(sink)?.remove_field(key, sink)
    }

    /// See [`Node::remove_at`].
    pub fn remove_at<S: Sink + ?Sized>(&mut self, index: usize, sink: &mut S) -> Option<Node> {
        self.live(sink)?.remove_at(index, sink)
    }

    /// See [`Node::remove_all`].
    pub fn remove_all<S: Sink + ?Sized>(&mut self, sink: &mut S) {
        if let Some(node) = self.live(sink) {
            node.remove_all(sink);
        }
    }

    /// The reached node, or `None` after recording why there is none.
    fn live<S: Sink + ?Sized>(&mut self, sink: &mut S) -> Option<&mut Node> {
        match &mut self.0 {
            Reach::Live(node) => Some(&mut **node),
            Reach::Sentinel(node) => {
                if let Data::Error(cause) = &node.data {
                    sink.record(cause.clone());
                }
                None
            }
        }
    }
}

impl Deref for NodeMut<'_> {
    type Target = Node;

    fn deref(&self) -> &Node {
        match &self.0 {
            Reach::Live(node) => &**node,
            Reach::Sentinel(node) => node,
        }
    }
}

/// Error label of the element at `index` under `parent`.
fn element_key(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

impl Node {
    /// Reads the field `key`.
    ///
    /// Returns a sentinel carrying [`Error::NotFound`] if the field is
    /// absent, or [`Error::NotObject`] if this node is not an object.
    #[must_use]
    pub fn get(&self, key: &str) -> NodeRef<'_> {
        match &self.data {
            Data::Object(fields) => match fields.get(key) {
                Some(child) => NodeRef::borrowed(child),
                None => NodeRef::sentinel(key, Error::not_found(&self.key, key)),
            },
            _ => NodeRef::sentinel(key, Error::not_object(&self.key, key)),
        }
    }

    /// Reads the element at `index`.
    ///
    /// Returns a sentinel carrying [`Error::OutOfRange`] past the end, or
    /// [`Error::NotArray`] if this node is not an array.
    #[must_use]
    pub fn at(&self, index: usize) -> NodeRef<'_> {
        let error = match &self.data {
            Data::Array(items) => match items.get(index) {
                Some(child) => return NodeRef::borrowed(child),
                None => Error::out_of_range(&self.key, index, items.len()),
            },
            _ => Error::not_array(&self.key),
        };
        NodeRef::sentinel(element_key(&self.key, index), error)
    }

    /// Typed read of the field `key`, falling back to `default`.
    pub fn get_or<T>(&self, key: &str, default: T) -> T
    where
        T: for<'b> TryFrom<&'b Node>,
    {
        self.get(key).value_or(default)
    }

    /// Typed read of the element at `index`, falling back to `default`.
    pub fn at_or<T>(&self, index: usize, default: T) -> T
    where
        T: for<'b> TryFrom<&'b Node>,
    {
        self.at(index).value_or(default)
    }

    /// Write path to the field `key`.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> NodeMut<'_> {
        match &mut self.data {
            Data::Object(fields) => match fields.get_mut(key) {
                Some(child) => NodeMut::reached(child),
                None => NodeMut::sentinel(key, Error::not_found(&self.key, key)),
            },
            _ => NodeMut::sentinel(key, Error::not_object(&self.key, key)),
        }
    }

    /// Write path to the element at `index`.
    #[must_use]
    pub fn at_mut(&mut self, index: usize) -> NodeMut<'_> {
        match &mut self.data {
            Data::Array(items) => {
                let len = items.len();
                match items.get_mut(index) {
                    Some(child) => NodeMut::reached(child),
                    None => NodeMut::sentinel(
                        element_key(&self.key, index),
                        Error::out_of_range(&self.key, index, len),
                    ),
                }
            }
            _ => NodeMut::sentinel(element_key(&self.key, index), Error::not_array(&self.key)),
        }
    }

    /// Assigns a new value to the existing field `key`.
    ///
    /// `value` must come from [`Node::value`] or [`Node::null`]. It is
    /// validated against the field's own format; `null` is accepted only
    /// by nullable and omittable fields.
    ///
    /// Records [`Error::NotObject`], [`Error::NotFound`] or
    /// [`Error::TypeMismatch`] and changes nothing on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_kata::{from_str, ErrorSink, Format, Node, Schema};
    ///
    /// let schema = Schema::new().field("age", Format::int().or_null());
    /// let mut doc = from_str(r#"{"age": 3}"#, &schema).unwrap();
    /// let mut sink = ErrorSink::new();
    ///
    /// doc.root_mut().set("age", Node::null(), &mut sink);
    /// assert!(doc.get("age").is_null());
    ///
    /// doc.root_mut().set("age", Node::value(1.5), &mut sink);
    /// assert_eq!(sink.len(), 1);
    /// assert!(doc.get("age").is_null());
    /// ```
    pub fn set<S: Sink + ?Sized>(&mut self, key: &str, value: Node, sink: &mut S) {
        let Data::Object(fields) = &mut self.data else {
            return sink.record(Error::not_object(&self.key, key));
        };
        let Some(child) = fields.get_mut(key) else {
            return sink.record(Error::not_found(&self.key, key));
        };
        let label = child.key.clone();
        child.assign(&label, value, sink);
    }

    /// Assigns a new value to the existing element at `index`.
    ///
    /// Same rules as [`Node::set`]; records [`Error::NotArray`] or
    /// [`Error::OutOfRange`] when the element cannot be reached.
    pub fn set_at<S: Sink + ?Sized>(&mut self, index: usize, value: Node, sink: &mut S) {
        let Data::Array(items) = &mut self.data else {
            return sink.record(Error::not_array(&self.key));
        };
        let len = items.len();
        let Some(child) = items.get_mut(index) else {
            return sink.record(Error::out_of_range(&self.key, index, len));
        };
        child.assign(&element_key(&self.key, index), value, sink);
    }

    /// Adds or replaces the field `key` with its own `format`.
    ///
    /// `raw` is validated against `format`, so `null` is stored when the
    /// format is nullable or omittable. Records [`Error::NotObject`] or
    /// [`Error::TypeMismatch`] and changes nothing on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_kata::{from_str, transaction, Format, Schema, Value};
    ///
    /// let mut doc = from_str("{}", &Schema::new()).unwrap();
    /// transaction(|sink| {
    ///     doc.root_mut().append_field("id", Format::int(), 7, sink);
    ///     doc.root_mut().append_field("note", Format::string().or_nothing(), Value::Null, sink);
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(doc.get("id").as_int().unwrap(), 7);
    /// assert!(doc.get("note").is_null());
    /// assert_eq!(serde_kata::to_string(&doc).unwrap(), r#"{"id":7}"#);
    /// ```
    pub fn append_field<S: Sink + ?Sized>(
        &mut self,
        key: &str,
        format: Format,
        raw: impl Into<Value>,
        sink: &mut S,
    ) {
        let Data::Object(fields) = &mut self.data else {
            return sink.record(Error::not_object(&self.key, key));
        };
        match validate(key, &format, &raw.into()) {
            Ok(data) => {
                fields.insert(key.to_string(), Node::new(key, format, data));
            }
            Err(e) => sink.record(e),
        }
    }

    /// Appends `values` to an array, all or nothing.
    ///
    /// Each value is validated against the array's element format. Nulls
    /// are skipped for omittable elements and kept for nullable ones. A
    /// `null` array becomes a new array holding the appended elements.
    ///
    /// Records [`Error::NotArray`] or the first element's
    /// [`Error::TypeMismatch`]; nothing is appended on failure.
    pub fn append_elements<S: Sink + ?Sized>(&mut self, values: Vec<Value>, sink: &mut S) {
        let Some(element) = self.format.element() else {
            return sink.record(Error::not_array(&self.key));
        };
        let start = match &self.data {
            Data::Array(items) => items.len(),
            Data::Null => 0,
            _ => return sink.record(Error::not_array(&self.key)),
        };

        let mut appended = Vec::with_capacity(values.len());
        for (offset, raw) in values.iter().enumerate() {
            if raw.is_null() && element.is_omittable() {
                continue;
            }
            match validate(&element_key(&self.key, start + offset), element, raw) {
                Ok(data) => appended.push(Node::new(String::new(), element.clone(), data)),
                Err(e) => return sink.record(e),
            }
        }

        match &mut self.data {
            Data::Array(items) => items.extend(appended),
            data => *data = Data::Array(appended),
        }
    }

    /// Removes the field `key` and returns it.
    ///
    /// Records [`Error::NotObject`] or [`Error::NotFound`] on failure.
    pub fn remove_field<S: Sink + ?Sized>(&mut self, key: &str, sink: &mut S) -> Option<Node> {
        let Data::Object(fields) = &mut self.data else {
            sink.record(Error::not_object(&self.key, key));
            return None;
        };
        let removed = fields.shift_remove(key);
        if removed.is_none() {
            sink.record(Error::not_found(&self.key, key));
        }
        removed
    }

    /// Removes the element at `index` and returns it.
    ///
    /// Records [`Error::NotArray`] or [`Error::OutOfRange`] on failure.
    pub fn remove_at<S: Sink + ?Sized>(&mut self, index: usize, sink: &mut S) -> Option<Node> {
        let Data::Array(items) = &mut self.data else {
            sink.record(Error::not_array(&self.key));
            return None;
        };
        if index >= items.len() {
            sink.record(Error::out_of_range(&self.key, index, items.len()));
            return None;
        }
        Some(items.remove(index))
    }

    /// Removes every field of an object or every element of an array.
    ///
    /// Records [`Error::UnsupportedOperation`] for any other node.
    pub fn remove_all<S: Sink + ?Sized>(&mut self, sink: &mut S) {
        match &mut self.data {
            Data::Object(fields) => fields.clear(),
            Data::Array(items) => items.clear(),
            _ => sink.record(Error::unsupported(&self.key, "remove all")),
        }
    }

    /// Replaces the payload with `value`'s pending raw value, re-validated
    /// against this node's format.
    fn assign<S: Sink + ?Sized>(&mut self, label: &str, value: Node, sink: &mut S) {
        match value.data {
            Data::Assignment(raw) => match validate(label, &self.format, &raw) {
                Ok(data) => self.data = data,
                Err(e) => sink.record(e),
            },
            Data::Error(cause) => sink.record(cause),
            _ => sink.record(Error::type_mismatch(label, &self.format, value.describe())),
        }
    }
}
