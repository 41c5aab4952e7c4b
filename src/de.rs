//! Decoding text into the generic tree.
//!
//! The [`Deserializer`] is the parse primitive of the crate: it converts
//! bytes in the configured [`Encoding`](crate::Encoding) to text and hands
//! the text to `serde_json`, which drives the `Deserialize` impl of
//! [`Value`]. Matching against a schema happens afterwards, in
//! [`Document::from_value`](crate::Document::from_value).
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_kata::{from_slice_with_options, DocumentOptions, Encoding, Format, Schema};
//!
//! let schema = Schema::new().field("k", Format::string());
//! let bytes: Vec<u8> = "{\"k\":\"v\"}".encode_utf16().flat_map(u16::to_be_bytes).collect();
//! let options = DocumentOptions::new().with_encoding(Encoding::Utf16Be);
//!
//! let doc = from_slice_with_options(&bytes, &schema, options).unwrap();
//! assert_eq!(doc.get("k").as_str().unwrap(), "v");
//! ```
//!
//! ## Direct Deserializer Usage
//!
//! ```rust
//! use serde_kata::{raw, Deserializer, DocumentOptions};
//!
//! let deserializer = Deserializer::new(DocumentOptions::new());
//! let value = deserializer.parse_slice(br#"{"a": [1, 2.5, null]}"#).unwrap();
//! assert_eq!(value, raw!({"a": [1, 2.5, null]}));
//! ```

use crate::{DocumentOptions, Error, Result, Value};
use std::io;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parses encoded text into a generic [`Value`].
pub struct Deserializer {
    options: DocumentOptions,
}

impl Deserializer {
    pub fn new(options: DocumentOptions) -> Self {
        Deserializer { options }
    }

    /// Decodes `bytes` with the configured encoding and parses the text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if the bytes are not valid in the
    /// encoding, or [`Error::Parse`] if the text is malformed.
    pub fn parse_slice(&self, bytes: &[u8]) -> Result<Value> {
        let text = self.options.encoding.decode(bytes)?;
        parse_text(&text)
    }

    /// Parses `text` as if it had been read in the configured encoding.
    ///
    /// The text is encoded first, so characters the encoding cannot
    /// represent are rejected the same way they would be on the wire.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] or [`Error::Parse`].
    pub fn parse_str(&self, text: &str) -> Result<Value> {
        let bytes = self.options.encoding.encode(text)?;
        self.parse_slice(&bytes)
    }

    /// Reads the whole stream, then behaves like [`Deserializer::parse_slice`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails, otherwise as
    /// [`Deserializer::parse_slice`].
    pub fn parse_reader<R: io::Read>(&self, mut reader: R) -> Result<Value> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| Error::io(&e.to_string()))?;
        self.parse_slice(&bytes)
    }
}

fn parse_text(text: &str) -> Result<Value> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    serde_json::from_str(text).map_err(Error::parse)
}
