/// Strict literal coercion of raw argument strings into typed values.
///
/// Typed parameters decode their token as a JSON literal and the decoded
/// runtime type must match the declaration exactly. `"5.5"` is not an int,
/// `"1"` is not a bool, `"5five"` is nothing at all. The single deliberate
/// widening: an integer literal satisfies a float parameter.
use crate::command::{ParamSpec, ParamType};
use crate::errors::DispatchError;
use crate::value::Value;

/// Coerce one raw token against one parameter declaration.
///
/// # Errors
///
/// Returns [`DispatchError::InvalidArgument`] naming the parameter and its
/// declared type when the token does not decode to that type.
pub(crate) fn coerce(raw: &str, spec: &ParamSpec) -> Result<Value, DispatchError> {
    let mismatch = || DispatchError::InvalidArgument {
        param: spec.name.clone(),
        expected: spec.ty,
        given: raw.to_owned(),
    };

    match spec.ty {
        ParamType::Untyped | ParamType::Str => Ok(Value::Str(raw.to_owned())),
        ParamType::Int => serde_json::from_str::<serde_json::Number>(raw)
            .ok()
            .and_then(|n| n.as_i64())
            .map(Value::Int)
            .ok_or_else(mismatch),
        ParamType::Float => serde_json::from_str::<serde_json::Number>(raw)
            .ok()
            .and_then(|n| n.as_f64())
            .map(Value::Float)
            .ok_or_else(mismatch),
        ParamType::Bool => serde_json::from_str::<bool>(raw)
            .ok()
            .map(Value::Bool)
            .ok_or_else(mismatch),
        ParamType::Object => serde_json::from_str::<serde_json::Value>(raw)
            .ok()
            .filter(|v| v.is_array() || v.is_object())
            .map(Value::Object)
            .ok_or_else(mismatch),
    }
}
