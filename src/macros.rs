/// Builds a raw [`Value`](crate::Value) from a JSON-like literal.
///
/// ```rust
/// use serde_kata::{raw, Value};
///
/// let value = raw!({
///     "name": "Ada",
///     "age": null,
///     "tags": ["a", null, "b"]
/// });
/// assert!(value.is_object());
/// assert_eq!(raw!(null), Value::Null);
/// assert_eq!(raw!([-1, 2]).to_string(), "[-1,2]");
/// ```
///
/// Array elements and object values are single token trees, with an
/// optional leading minus on number literals. Wrap any other compound
/// expression in parentheses: `raw!([(a + b), 1])`.
#[macro_export]
macro_rules! raw {
    // Array elements, one at a time; a leading minus joins its literal
    (@array [$($done:expr,)*]) => {
        $crate::Value::Array(vec![$($done),*])
    };

    (@array [$($done:expr,)*] - $num:literal $(, $($rest:tt)*)?) => {
        $crate::raw!(@array [$($done,)* $crate::raw!(-$num),] $($($rest)*)?)
    };

    (@array [$($done:expr,)*] $elem:tt $(, $($rest:tt)*)?) => {
        $crate::raw!(@array [$($done,)* $crate::raw!($elem),] $($($rest)*)?)
    };

    // Object entries, one at a time
    (@object $object:ident) => {};

    (@object $object:ident $key:literal : - $num:literal $(, $($rest:tt)*)?) => {
        $object.insert($key.to_string(), $crate::raw!(-$num));
        $crate::raw!(@object $object $($($rest)*)?);
    };

    (@object $object:ident $key:literal : $value:tt $(, $($rest:tt)*)?) => {
        $object.insert($key.to_string(), $crate::raw!($value));
        $crate::raw!(@object $object $($($rest)*)?);
    };

    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elems:tt)+ ]) => {
        $crate::raw!(@array [] $($elems)+)
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    // Handle non-empty object
    ({ $($entries:tt)+ }) => {{
        let mut object = $crate::Map::new();
        $crate::raw!(@object object $($entries)+);
        $crate::Value::Object(object)
    }};

    // Numbers, strings and any other expression convertible into a Value
    ($s:expr) => {
        $crate::Value::from($s)
    };
}
