/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// ```rust
/// use yajson::json;
///
/// let doc = json!({
///     "name": "Alice",
///     "age": 30,
///     "tags": ["rust", "json"]
/// });
/// assert_eq!(doc.get_object_key(0), "name");
/// ```
#[macro_export]
macro_rules! json {
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
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::json!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::Object::new())
    };

    // Handle non-empty object; repeated keys are appended, not merged
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Object::new();
        $(
            object.push($key.to_string(), $crate::json!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback: any expression convertible into a Value
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
