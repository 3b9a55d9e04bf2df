use serde::de::Unexpected;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// For keys that must be present on the wire but may be null. Plain `Option`
// fields also accept the key being absent entirely; routing through this
// helper keeps the missing-key case a hard error while null still maps to
// `None`.
pub fn required_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::deserialize(deserializer)
}

pub fn to_unexpected<'a>(value: Value) -> Unexpected<'a> {
    match value {
        Value::Null => Unexpected::Other("null"),
        Value::Bool(b) => Unexpected::Bool(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Unexpected::Signed(i)
            } else if let Some(u) = n.as_u64() {
                Unexpected::Unsigned(u)
            } else if let Some(f) = n.as_f64() {
                Unexpected::Float(f)
            } else {
                Unexpected::Other("number")
            }
        }
        Value::String(_) => Unexpected::Other("string"),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
