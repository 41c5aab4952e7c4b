//! # serde_kata
//!
//! Schema-validated dynamic documents on top of Serde.
//!
//! ## What is it?
//!
//! A document is untyped text (objects, arrays, strings, numbers, booleans
//! and null) read against a declared shape, its [`Schema`]. Reading either
//! produces a fully validated tree or fails as a whole. The tree offers
//! type-checked reads that never panic, writes that re-validate against
//! the declared format, and encoding that keeps the schema's null and
//! absence rules.
//!
//! ## Key Features
//!
//! - **Three null policies**: every [`Format`] is required, nullable
//!   (`or_null`) or omittable (`or_nothing`)
//! - **Total reads**: missing keys, wrong containers and out-of-range
//!   indexes produce sentinel nodes instead of panics; the typed accessors
//!   report why the read failed
//! - **Accumulated write errors**: writes record failures into a [`Sink`];
//!   [`transaction`] collects them and reports the first
//! - **Skeletons**: build an empty document from a schema and fill it in
//! - **Encodings**: UTF-8, ASCII and UTF-16 on both input and output
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_kata = "0.1"
//! ```
//!
//! ### Reading
//!
//! ```rust
//! use serde_kata::{from_str, Format, Schema};
//!
//! let schema = Schema::new()
//!     .field("name", Format::string())
//!     .field("age", Format::int().or_null())
//!     .field("tags", Format::array(Format::string().or_nothing()));
//!
//! let doc = from_str(r#"{"name": "Ada", "tags": ["math", null, "engines"]}"#, &schema).unwrap();
//!
//! assert_eq!(doc.get("name").as_str().unwrap(), "Ada");
//! assert!(doc.get("age").is_null());
//! assert_eq!(doc.get("tags").len(), 2);
//! assert_eq!(doc.get("tags").at(1).as_str().unwrap(), "engines");
//!
//! // Defaulted reads never fail
//! assert_eq!(doc.get("age").value_or(0i64), 0);
//! assert_eq!(doc.get("missing").get("deeper").value_or(String::from("-")), "-");
//! ```
//!
//! ### Writing
//!
//! ```rust
//! use serde_kata::{from_str, to_string, Format, Node, Schema};
//!
//! let schema = Schema::new()
//!     .field("name", Format::string())
//!     .field("age", Format::int().or_null());
//! let mut doc = from_str(r#"{"name": "Ada", "age": null}"#, &schema).unwrap();
//!
//! let result = doc.update(|root, sink| {
//!     root.set("age", Node::value(36), sink);
//!     root.set("name", Node::value(false), sink);
//! });
//!
//! assert!(result.is_err());
//! assert_eq!(to_string(&doc).unwrap(), r#"{"name":"Ada","age":36}"#);
//! ```
//!
//! ### Building from a Schema
//!
//! ```rust
//! use serde_kata::{skeleton, to_string, Format, Node, Schema};
//!
//! let mut doc = skeleton(&Schema::new().field("id", Format::int())).unwrap();
//! assert!(to_string(&doc).is_err());
//!
//! doc.update(|root, sink| root.set("id", Node::value(1), sink)).unwrap();
//! assert_eq!(to_string(&doc).unwrap(), r#"{"id":1}"#);
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Reads never panic; all array indexing is bounds-checked
//! - No global state: errors are collected in caller-owned sinks

pub mod de;
pub mod document;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod navigate;
pub mod node;
pub mod options;
pub mod ser;
pub mod sink;
pub mod validate;
pub mod value;

pub use de::Deserializer;
pub use document::Document;
pub use error::{Error, Result};
pub use format::{Format, Kind, NullPolicy, Schema};
pub use map::Map;
pub use navigate::{NodeMut, NodeRef};
pub use node::{Data, Node};
pub use options::{DocumentOptions, Encoding};
pub use ser::{flatten, Serializer};
pub use sink::{transaction, Discard, ErrorSink, Sink};
pub use value::{Number, Value};

use std::io;

/// Reads a document from bytes in UTF-8.
///
/// # Examples
///
/// ```rust
/// use serde_kata::{from_slice, Format, Schema};
///
/// let schema = Schema::new().field("x", Format::int());
/// let doc = from_slice(br#"{"x": 1}"#, &schema).unwrap();
/// assert_eq!(doc.get("x").as_int().unwrap(), 1);
/// ```
///
/// # Errors
///
/// Returns [`Error::Encoding`] for invalid UTF-8, [`Error::Parse`] for
/// malformed text, or [`Error::TypeMismatch`] if the input does not fit
/// `schema`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(bytes: &[u8], schema: &Schema) -> Result<Document> {
    from_slice_with_options(bytes, schema, DocumentOptions::default())
}

/// Reads a document from bytes in the encoding chosen by `options`.
///
/// # Errors
///
/// As [`from_slice`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice_with_options(
    bytes: &[u8],
    schema: &Schema,
    options: DocumentOptions,
) -> Result<Document> {
    let raw = Deserializer::new(options).parse_slice(bytes)?;
    Document::from_value(&raw, schema)
}

/// Reads a document from text.
///
/// # Examples
///
/// ```rust
/// use serde_kata::{from_str, Error, Format, Schema};
///
/// let schema = Schema::new().field("x", Format::int());
/// assert!(from_str(r#"{"x": 1}"#, &schema).is_ok());
/// assert!(matches!(from_str(r#"{"x": 1.0}"#, &schema), Err(Error::TypeMismatch { .. })));
/// assert!(matches!(from_str(r#"{"x": "#, &schema), Err(Error::Parse(_))));
/// ```
///
/// # Errors
///
/// As [`from_slice`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(text: &str, schema: &Schema) -> Result<Document> {
    from_str_with_options(text, schema, DocumentOptions::default())
}

/// Reads a document from text, first encoding it as chosen by `options`.
///
/// # Examples
///
/// ```rust
/// use serde_kata::{from_str_with_options, DocumentOptions, Encoding, Error, Format, Schema};
///
/// let schema = Schema::new().field("k", Format::string());
/// let ascii = DocumentOptions::new().with_encoding(Encoding::Ascii);
///
/// assert!(from_str_with_options(r#"{"k": "abc"}"#, &schema, ascii.clone()).is_ok());
/// assert!(matches!(
///     from_str_with_options(r#"{"k": "あいうえお"}"#, &schema, ascii),
///     Err(Error::Encoding { .. })
/// ));
/// ```
///
/// # Errors
///
/// Returns [`Error::Encoding`] if `text` cannot be represented in the
/// chosen encoding; otherwise as [`from_slice`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(
    text: &str,
    schema: &Schema,
    options: DocumentOptions,
) -> Result<Document> {
    let raw = Deserializer::new(options).parse_str(text)?;
    Document::from_value(&raw, schema)
}

/// Reads a document from an I/O stream in UTF-8.
///
/// # Examples
///
/// ```rust
/// use serde_kata::{from_reader, Format, Schema};
/// use std::io::Cursor;
///
/// let schema = Schema::new().field("x", Format::bool());
/// let doc = from_reader(Cursor::new(br#"{"x": true}"#), &schema).unwrap();
/// assert!(doc.get("x").as_bool().unwrap());
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails; otherwise as [`from_slice`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(reader: R, schema: &Schema) -> Result<Document>
where
    R: io::Read,
{
    from_reader_with_options(reader, schema, DocumentOptions::default())
}

/// Reads a document from an I/O stream in the encoding chosen by `options`.
///
/// # Errors
///
/// As [`from_reader`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R>(
    reader: R,
    schema: &Schema,
    options: DocumentOptions,
) -> Result<Document>
where
    R: io::Read,
{
    let raw = Deserializer::new(options).parse_reader(reader)?;
    Document::from_value(&raw, schema)
}

/// Matches an already parsed [`Value`] against `schema`.
///
/// # Examples
///
/// ```rust
/// use serde_kata::{from_value, raw, Format, Schema};
///
/// let schema = Schema::new().field("n", Format::float().or_null());
/// let doc = from_value(&raw!({"n": 2.5}), &schema).unwrap();
/// assert_eq!(doc.get("n").as_float().unwrap(), 2.5);
/// ```
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `raw` does not fit `schema`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value(raw: &Value, schema: &Schema) -> Result<Document> {
    Document::from_value(raw, schema)
}

/// Builds an unfilled document shaped by `schema`.
///
/// Required scalars are left empty and must be assigned before the
/// document can be encoded.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `schema` contains a wrapper format.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn skeleton(schema: &Schema) -> Result<Document> {
    Document::skeleton(schema)
}

/// Encodes a document as UTF-8 text.
///
/// # Errors
///
/// Returns [`Error::UnresolvedData`] if the document still holds empty or
/// sentinel nodes.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(doc: &Document) -> Result<String> {
    to_string_with_options(doc, DocumentOptions::default())
}

/// Encodes a document as text with custom options.
///
/// The encoding in `options` only restricts which characters may appear;
/// the returned `String` is always UTF-8.
///
/// # Examples
///
/// ```rust
/// use serde_kata::{from_str, to_string_with_options, DocumentOptions, Format, Schema};
///
/// let doc = from_str(r#"{"a": [1, 2]}"#, &Schema::new().field("a", Format::array(Format::int()))).unwrap();
/// let text = to_string_with_options(&doc, DocumentOptions::pretty().with_indent(4)).unwrap();
/// assert_eq!(text, "{\n    \"a\": [\n        1,\n        2\n    ]\n}");
/// ```
///
/// # Errors
///
/// As [`to_vec_with_options`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(doc: &Document, options: DocumentOptions) -> Result<String> {
    let serializer = Serializer::new(options.clone());
    let text = serializer.to_text(&doc.to_value()?)?;
    options.encoding.encode(&text)?;
    Ok(text)
}

/// Encodes a document as UTF-8 bytes.
///
/// # Errors
///
/// As [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec(doc: &Document) -> Result<Vec<u8>> {
    to_vec_with_options(doc, DocumentOptions::default())
}

/// Encodes a document as bytes in the encoding chosen by `options`.
///
/// # Examples
///
/// ```rust
/// use serde_kata::{from_str, to_vec_with_options, DocumentOptions, Encoding, Format, Schema};
///
/// let doc = from_str(r#"{"k": "v"}"#, &Schema::new().field("k", Format::string())).unwrap();
/// let bytes = to_vec_with_options(&doc, DocumentOptions::new().with_encoding(Encoding::Utf16Le)).unwrap();
/// assert_eq!(bytes.len(), 2 * r#"{"k":"v"}"#.len());
/// ```
///
/// # Errors
///
/// Returns [`Error::UnresolvedData`] if the document still holds empty or
/// sentinel nodes, or [`Error::Encoding`] if the text cannot be
/// represented in the chosen encoding.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec_with_options(doc: &Document, options: DocumentOptions) -> Result<Vec<u8>> {
    Serializer::new(options).to_vec(&doc.to_value()?)
}

/// Encodes a document to a writer as UTF-8.
///
/// # Examples
///
/// ```rust
/// use serde_kata::{from_str, to_writer, Format, Schema};
///
/// let doc = from_str(r#"{"x": 1}"#, &Schema::new().field("x", Format::int())).unwrap();
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, br#"{"x":1}"#.to_vec());
/// ```
///
/// # Errors
///
/// As [`to_vec`], plus [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, doc: &Document) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, doc, DocumentOptions::default())
}

/// Encodes a document to a writer with custom options.
///
/// # Errors
///
/// As [`to_vec_with_options`], plus [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(
    mut writer: W,
    doc: &Document,
    options: DocumentOptions,
) -> Result<()>
where
    W: io::Write,
{
    let bytes = to_vec_with_options(doc, options)?;
    writer
        .write_all(&bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
