//! The document: a validated root object and its schema.
//!
//! A [`Document`] is built in one of two ways:
//!
//! - from raw input matched against a [`Schema`] ([`Document::from_value`]
//!   and the `from_*` functions of the crate root), which fails as a whole
//!   if any declared field does not fit;
//! - from the schema alone ([`Document::skeleton`]), leaving required
//!   scalars empty until they are assigned.
//!
//! ## Examples
//!
//! ```rust
//! use serde_kata::{raw, Document, Format, Node, Schema};
//!
//! let schema = Schema::new()
//!     .field("name", Format::string())
//!     .field("tags", Format::array(Format::string()));
//!
//! let mut draft = Document::skeleton(&schema).unwrap();
//! assert!(draft.to_value().is_err());
//!
//! draft
//!     .update(|root, sink| {
//!         root.set("name", Node::value("Ada"), sink);
//!         root.get_mut("tags").set_at(0, Node::value("rust"), sink);
//!     })
//!     .unwrap();
//!
//! assert_eq!(draft.to_value().unwrap(), raw!({"name": "Ada", "tags": ["rust"]}));
//! ```

use crate::format::{Format, Schema};
use crate::node::{Data, Node};
use crate::navigate::{NodeMut, NodeRef};
use crate::sink::{transaction, ErrorSink};
use crate::{ser, validate, Result, Value};
use tracing::debug;

/// Key of the root node in error messages.
pub const ROOT_KEY: &str = "root";

/// A validated document.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    schema: Schema,
    root: Node,
}

impl Document {
    /// Matches `raw` against `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`](crate::Error::TypeMismatch) for the
    /// innermost value that does not fit, including a non-object root.
    pub fn from_value(raw: &Value, schema: &Schema) -> Result<Self> {
        let format = Format::object(schema.clone());
        match validate::validate(ROOT_KEY, &format, raw) {
            Ok(data) => Ok(Document {
                schema: schema.clone(),
                root: Node::new(ROOT_KEY, format, data),
            }),
            Err(e) => {
                debug!(error = %e, "document rejected");
                Err(e)
            }
        }
    }

    /// Builds an unfilled document shaped by `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`](crate::Error::TypeMismatch) if the
    /// schema declares a wrapper format anywhere.
    pub fn skeleton(schema: &Schema) -> Result<Self> {
        let format = Format::object(schema.clone());
        match validate::skeleton(ROOT_KEY, &format) {
            Ok(data) => Ok(Document {
                schema: schema.clone(),
                root: Node::new(ROOT_KEY, format, data),
            }),
            Err(e) => {
                debug!(error = %e, "skeleton rejected");
                Err(e)
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    #[inline]
    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// The schema the document was built from.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Reads the top-level field `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> NodeRef<'_> {
        self.root.get(key)
    }

    /// Write path to the top-level field `key`.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> NodeMut<'_> {
        self.root.get_mut(key)
    }

    /// Typed read of the top-level field `key`, falling back to `default`.
    pub fn get_or<T>(&self, key: &str, default: T) -> T
    where
        T: for<'a> TryFrom<&'a Node>,
    {
        self.root.get_or(key, default)
    }

    /// Runs a batch of writes against the root in a [`transaction`].
    ///
    /// # Errors
    ///
    /// The first error recorded by `f`. Writes that succeeded stay applied.
    pub fn update<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Node, &mut ErrorSink) -> T,
    {
        transaction(|sink| f(&mut self.root, sink))
    }

    /// Copies the named top-level fields from `source`, payload and format,
    /// without re-validating them.
    ///
    /// A field that `source` lacks is removed from this document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_kata::{from_str, Format, Schema};
    ///
    /// let schema = Schema::new()
    ///     .field("a", Format::int())
    ///     .field("b", Format::int().or_nothing());
    /// let mut target = from_str(r#"{"a": 1, "b": 2}"#, &schema).unwrap();
    /// let source = from_str(r#"{"a": 10}"#, &schema).unwrap();
    ///
    /// target.copy_fields(&source, &["a", "b"]);
    /// assert_eq!(target.get("a").as_int().unwrap(), 10);
    /// assert!(!target.get("b").exists());
    /// ```
    pub fn copy_fields<K: AsRef<str>>(&mut self, source: &Document, keys: &[K]) {
        let Data::Object(fields) = &mut self.root.data else {
            return;
        };
        let source = match &source.root.data {
            Data::Object(source) => Some(source),
            _ => None,
        };
        for key in keys {
            let key = key.as_ref();
            match source.and_then(|source| source.get(key)) {
                Some(node) => {
                    fields.insert(key.to_string(), node.clone());
                }
                None => {
                    fields.shift_remove(key);
                }
            }
        }
    }

    /// Flattens the document into a generic [`Value`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedData`](crate::Error::UnresolvedData) if
    /// any node is still unresolved.
    pub fn to_value(&self) -> Result<Value> {
        ser::flatten(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{raw, Error, Node};

    fn schema() -> Schema {
        Schema::new()
            .field("name", Format::string())
            .field("age", Format::int().or_null())
            .field("tags", Format::array(Format::string().or_nothing()))
    }

    #[test]
    fn test_from_value_requires_an_object_root() {
        let err = Document::from_value(&raw!([1]), &schema()).unwrap_err();
        match err {
            Error::TypeMismatch { key, .. } => assert_eq!(key, ROOT_KEY),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_schema_is_kept() {
        let doc = Document::from_value(&raw!({"name": "Ada", "tags": []}), &schema()).unwrap();
        assert_eq!(doc.schema(), &schema());
        assert_eq!(doc.root().key(), ROOT_KEY);
        assert!(doc.get("age").is_null());
    }

    #[test]
    fn test_skeleton_shape() {
        let doc = Document::skeleton(&schema()).unwrap();
        assert_eq!(doc.get("name").data(), &Data::Empty);
        assert!(doc.get("age").is_null());
        assert_eq!(doc.get("tags").len(), 0);
        assert_eq!(doc.to_value(), Err(Error::unresolved("name", "empty")));
    }

    #[test]
    fn test_update_keeps_successful_writes() {
        let mut doc = Document::skeleton(&schema()).unwrap();
        let result = doc.update(|root, sink| {
            root.set("name", Node::value("Ada"), sink);
            root.set("age", Node::value("old"), sink);
            root.set("height", Node::value(1), sink);
            sink.len()
        });
        assert!(matches!(result, Err(Error::TypeMismatch { .. })));
        assert_eq!(doc.get("name").as_str().unwrap(), "Ada");
        assert_eq!(doc.to_value().unwrap(), raw!({"name": "Ada", "age": null, "tags": []}));
    }

    #[test]
    fn test_copy_fields_takes_format_along() {
        let mut target = Document::from_value(&raw!({"name": "A"}), &schema()).unwrap();
        let other = Schema::new().field("name", Format::int());
        let source = Document::from_value(&raw!({"name": 3}), &other).unwrap();

        target.copy_fields(&source, &["name"]);
        assert_eq!(target.get("name").as_int().unwrap(), 3);
        assert_eq!(target.get("name").format(), &Format::int());
    }
}
