//! Encoding a validated tree back into text.
//!
//! Encoding happens in two steps:
//!
//! - [`flatten`] turns a [`Node`] into a generic [`Value`], dropping
//!   omittable nodes that hold `null` and refusing any node that still
//!   holds a sentinel, a pending assignment or a skeleton placeholder;
//! - [`Serializer`] writes that `Value` as text with `serde_json` and
//!   converts the text to the configured [`Encoding`](crate::Encoding).
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_kata::{from_str, to_string, to_string_with_options, DocumentOptions, Format, Schema};
//!
//! let schema = Schema::new()
//!     .field("name", Format::string())
//!     .field("nick", Format::string().or_nothing());
//! let doc = from_str(r#"{"name": "Ada", "nick": null}"#, &schema).unwrap();
//!
//! // Compact format
//! assert_eq!(to_string(&doc).unwrap(), r#"{"name":"Ada"}"#);
//!
//! // Pretty format
//! let pretty = to_string_with_options(&doc, DocumentOptions::pretty()).unwrap();
//! assert_eq!(pretty, "{\n  \"name\": \"Ada\"\n}");
//! ```

use crate::node::{Data, Node};
use crate::{DocumentOptions, Error, Map, Number, Result, Value};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

/// Converts a node and its descendants into a generic [`Value`].
///
/// Children that hold `null` under an omittable format are left out.
///
/// # Errors
///
/// Returns [`Error::UnresolvedData`] naming the innermost node that holds
/// a sentinel, a pending assignment or a skeleton placeholder.
///
/// # Examples
///
/// ```rust
/// use serde_kata::{flatten, skeleton, Error, Format, Schema};
///
/// let doc = skeleton(&Schema::new().field("id", Format::int())).unwrap();
/// assert_eq!(flatten(doc.root()), Err(Error::unresolved("id", "empty")));
/// ```
pub fn flatten(node: &Node) -> Result<Value> {
    match &node.data {
        Data::String(s) => Ok(Value::String(s.clone())),
        Data::Int(i) => Ok(Value::Number(Number::Integer(*i))),
        Data::Float(f) => Ok(Value::Number(Number::Float(*f))),
        Data::Bool(b) => Ok(Value::Bool(*b)),
        Data::Null => Ok(Value::Null),
        Data::Array(items) => items
            .iter()
            .filter(|item| !is_omitted(item))
            .map(flatten)
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Data::Object(fields) => {
            let mut map = Map::with_capacity(fields.len());
            for (name, child) in fields {
                if is_omitted(child) {
                    continue;
                }
                map.insert(name.clone(), flatten(child)?);
            }
            Ok(Value::Object(map))
        }
        Data::Error(_) | Data::Assignment(_) | Data::Empty => {
            debug!(key = %node.key, state = node.data.state_name(), "unresolved node in flatten");
            Err(Error::unresolved(&node.key, node.data.state_name()))
        }
    }
}

#[inline]
fn is_omitted(node: &Node) -> bool {
    node.is_null() && node.format.is_omittable()
}

/// Writes generic values as text in a configured encoding.
///
/// # Examples
///
/// ```rust
/// use serde_kata::{raw, DocumentOptions, Encoding, Serializer};
///
/// let serializer = Serializer::new(DocumentOptions::new().with_encoding(Encoding::Ascii));
/// assert_eq!(serializer.to_vec(&raw!({"a": [1, 2]})).unwrap(), br#"{"a":[1,2]}"#.to_vec());
/// assert!(serializer.to_vec(&raw!({"a": "あ"})).is_err());
/// ```
pub struct Serializer {
    options: DocumentOptions,
}

impl Serializer {
    pub fn new(options: DocumentOptions) -> Self {
        Serializer { options }
    }

    /// Renders `value` as text, honoring the pretty-printing options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Custom`] if `serde_json` fails to write the value.
    pub fn to_text(&self, value: &Value) -> Result<String> {
        let mut output = Vec::with_capacity(256);
        if self.options.pretty {
            let indent = " ".repeat(self.options.indent);
            let formatter = PrettyFormatter::with_indent(indent.as_bytes());
            let mut ser = serde_json::Serializer::with_formatter(&mut output, formatter);
            value.serialize(&mut ser).map_err(Error::custom)?;
        } else {
            let mut ser = serde_json::Serializer::new(&mut output);
            value.serialize(&mut ser).map_err(Error::custom)?;
        }
        String::from_utf8(output).map_err(Error::custom)
    }

    /// Renders `value` as text and encodes it.
    ///
    /// # Errors
    ///
    /// As [`Serializer::to_text`], plus [`Error::Encoding`] when the text
    /// cannot be represented in the configured encoding.
    pub fn to_vec(&self, value: &Value) -> Result<Vec<u8>> {
        let text = self.to_text(value)?;
        self.options.encoding.encode(&text)
    }
}
