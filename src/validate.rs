//! Format-directed matching of raw values, and skeleton construction.
//!
//! [`validate`] walks a [`Format`] and a raw [`Value`] together and
//! produces the node payload, or the type mismatch of the innermost value
//! that did not fit. Matching is all-or-nothing: one bad element or one
//! missing required field fails the whole value.
//!
//! [`skeleton`] builds a payload from a format alone, for documents that
//! are filled in by assignment rather than parsed.

use crate::format::{Format, Kind, NullPolicy};
use crate::node::{Data, Node};
use crate::value::{Number, Value};
use crate::{Error, Result};
use indexmap::IndexMap;

/// Found-value text used when a required key is absent.
const NOTHING: &str = "nothing";

/// Matches `raw` against `format`.
///
/// `key` names the value in error messages; array elements are reported
/// as `key[index]`.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] for the innermost value that does not
/// match its format.
///
/// # Examples
///
/// ```rust
/// use serde_kata::validate::validate;
/// use serde_kata::{raw, Data, Format};
///
/// let format = Format::array(Format::string().or_nothing());
/// match validate("tags", &format, &raw!(["a", null, "b"])).unwrap() {
///     Data::Array(items) => assert_eq!(items.len(), 2),
///     other => panic!("unexpected {:?}", other),
/// }
///
/// assert!(validate("n", &Format::int(), &raw!(1.5)).is_err());
/// ```
pub fn validate(key: &str, format: &Format, raw: &Value) -> Result<Data> {
    if matches!(format.kind(), Kind::Wrapper) {
        return Err(Error::type_mismatch(key, format, raw));
    }
    if raw.is_null() {
        return if format.accepts_null() {
            Ok(Data::Null)
        } else {
            Err(Error::type_mismatch(key, format, raw))
        };
    }

    match (format.kind(), raw) {
        (Kind::String, Value::String(s)) => Ok(Data::String(s.clone())),
        (Kind::Int, Value::Number(Number::Integer(i))) => Ok(Data::Int(*i)),
        (Kind::Float, Value::Number(Number::Float(f))) => Ok(Data::Float(*f)),
        (Kind::Bool, Value::Bool(b)) => Ok(Data::Bool(*b)),
        (Kind::Array(element), Value::Array(items)) => {
            let mut nodes = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                if item.is_null() && element.is_omittable() {
                    continue;
                }
                let data = validate(&format!("{}[{}]", key, index), element, item)?;
                nodes.push(Node::new(String::new(), (**element).clone(), data));
            }
            Ok(Data::Array(nodes))
        }
        (Kind::Object(schema), Value::Object(map)) => {
            let mut fields = IndexMap::with_capacity(schema.len());
            for (name, field) in schema {
                let data = match map.get(name) {
                    Some(value) if value.is_null() && field.is_omittable() => continue,
                    Some(value) => validate(name, field, value)?,
                    None => match field.policy() {
                        NullPolicy::Nullable => Data::Null,
                        NullPolicy::Omittable => continue,
                        NullPolicy::Required => {
                            return Err(Error::type_mismatch(name, field, NOTHING))
                        }
                    },
                };
                fields.insert(name.clone(), Node::new(name.clone(), field.clone(), data));
            }
            Ok(Data::Object(fields))
        }
        _ => Err(Error::type_mismatch(key, format, raw)),
    }
}

/// Builds the empty payload described by `format`.
///
/// Required scalars become [`Data::Empty`] and must be assigned before
/// encoding; nullable and omittable scalars become `null`. Objects always
/// contain every declared field. An array holds one seed element shaped
/// by its element format, unless that element would be `null`, in which
/// case the array is empty.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if a [`Kind::Wrapper`] format appears
/// anywhere in the tree.
///
/// # Examples
///
/// ```rust
/// use serde_kata::validate::skeleton;
/// use serde_kata::{Data, Format};
///
/// assert_eq!(skeleton("s", &Format::string()).unwrap(), Data::Empty);
/// assert_eq!(skeleton("s", &Format::string().or_null()).unwrap(), Data::Null);
/// assert!(skeleton("w", &Format::wrapper()).is_err());
/// ```
pub fn skeleton(key: &str, format: &Format) -> Result<Data> {
    match format.kind() {
        Kind::String | Kind::Int | Kind::Float | Kind::Bool => {
            if format.accepts_null() {
                Ok(Data::Null)
            } else {
                Ok(Data::Empty)
            }
        }
        Kind::Array(element) => {
            let seed = skeleton(&format!("{}[0]", key), element)?;
            if matches!(seed, Data::Null) {
                Ok(Data::Array(Vec::new()))
            } else {
                Ok(Data::Array(vec![Node::new(
                    String::new(),
                    (**element).clone(),
                    seed,
                )]))
            }
        }
        Kind::Object(schema) => {
            let mut fields = IndexMap::with_capacity(schema.len());
            for (name, field) in schema {
                let data = skeleton(name, field)?;
                fields.insert(name.clone(), Node::new(name.clone(), field.clone(), data));
            }
            Ok(Data::Object(fields))
        }
        Kind::Wrapper => Err(Error::type_mismatch(key, format, NOTHING)),
    }
}
