//! Configuration options for reading and writing documents.
//!
//! This module provides the types that customize the codec boundary:
//!
//! - [`DocumentOptions`]: main configuration struct
//! - [`Encoding`]: text encoding of the serialized document
//!
//! ## Examples
//!
//! ```rust
//! use serde_kata::{DocumentOptions, Encoding};
//!
//! // Pretty-printed output with 4-space indentation
//! let options = DocumentOptions::pretty().with_indent(4);
//!
//! // Read and write UTF-16 little-endian text
//! let options = DocumentOptions::new().with_encoding(Encoding::Utf16Le);
//! assert_eq!(options.encoding.as_str(), "utf-16le");
//! ```

use crate::{Error, Result};

/// Text encoding of a serialized document.
///
/// The parser itself works on UTF-8; other encodings are transcoded at
/// the boundary. Text that cannot be represented in the chosen encoding
/// (for example non-ASCII characters with [`Encoding::Ascii`]) is an
/// [`Error::Encoding`].
///
/// # Examples
///
/// ```rust
/// use serde_kata::Encoding;
///
/// assert_eq!(Encoding::Ascii.encode("abc").unwrap(), b"abc".to_vec());
/// assert!(Encoding::Ascii.encode("あ").is_err());
/// assert_eq!(Encoding::Utf16Le.decode(&[0x61, 0x00]).unwrap(), "a");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Ascii,
    Utf16Le,
    Utf16Be,
}

impl Encoding {
    /// Returns the conventional label of this encoding.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Ascii => "ascii",
            Encoding::Utf16Le => "utf-16le",
            Encoding::Utf16Be => "utf-16be",
        }
    }

    /// Encodes `text` into bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if `text` contains characters the
    /// encoding cannot represent.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            Encoding::Utf8 => Ok(text.as_bytes().to_vec()),
            Encoding::Ascii => match text.char_indices().find(|(_, ch)| !ch.is_ascii()) {
                Some((offset, ch)) => Err(Error::encoding(
                    self.as_str(),
                    format!("character {:?} at byte {} is not ASCII", ch, offset),
                )),
                None => Ok(text.as_bytes().to_vec()),
            },
            Encoding::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            Encoding::Utf16Be => Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
        }
    }

    /// Decodes `bytes` into a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if `bytes` are not valid in this encoding.
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            Encoding::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_string)
                .map_err(|e| Error::encoding(self.as_str(), e)),
            Encoding::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(offset) => Err(Error::encoding(
                    self.as_str(),
                    format!("byte 0x{:02x} at {} is not ASCII", bytes[offset], offset),
                )),
                None => Ok(bytes.iter().map(|&b| b as char).collect()),
            },
            Encoding::Utf16Le | Encoding::Utf16Be => {
                if bytes.len() % 2 != 0 {
                    return Err(Error::encoding(
                        self.as_str(),
                        format!("odd byte length {}", bytes.len()),
                    ));
                }
                let little_endian = *self == Encoding::Utf16Le;
                let units = bytes.chunks_exact(2).map(|pair| {
                    if little_endian {
                        u16::from_le_bytes([pair[0], pair[1]])
                    } else {
                        u16::from_be_bytes([pair[0], pair[1]])
                    }
                });
                char::decode_utf16(units)
                    .collect::<std::result::Result<String, _>>()
                    .map_err(|e| Error::encoding(self.as_str(), e))
            }
        }
    }
}

/// Configuration options for the codec boundary.
///
/// # Examples
///
/// ```rust
/// use serde_kata::{DocumentOptions, Encoding};
///
/// let options = DocumentOptions::new();
/// assert_eq!(options.encoding, Encoding::Utf8);
/// assert!(!options.pretty);
///
/// let options = DocumentOptions::pretty()
///     .with_encoding(Encoding::Ascii)
///     .with_indent(4);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Debug)]
pub struct DocumentOptions {
    pub encoding: Encoding,
    pub indent: usize,
    pub pretty: bool,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        DocumentOptions {
            encoding: Encoding::default(),
            indent: 2,
            pretty: false,
        }
    }
}

impl DocumentOptions {
    /// Creates default options (UTF-8, compact output).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with newlines and indentation.
    #[must_use]
    pub fn pretty() -> Self {
        DocumentOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the text encoding used for both input and output.
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Default is 2. Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
