//! Composable schema descriptors for request and response payloads.
//!
//! A [`Schema`] describes the shape of one payload as data. Validating an
//! untyped `serde_json::Value` either yields the normalized wire form of the
//! value or a [`SchemaError`] naming the offending path and the expected
//! shape. Normalization is the only transformation performed: an
//! [`Schema::IntegerString`] accepts `"42"` and yields the number `42`, so
//! path parameters arrive in handlers already typed.

use serde_json::Value;
use thiserror::Error;

/// Errors produced when a value does not match its descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Value at `path` has the wrong shape.
    #[error("invalid value at {path}: expected {expected}, found {found}")]
    Mismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A declared object field is absent.
    #[error("missing field {field:?} at {path}")]
    MissingField { path: String, field: &'static str },
}

impl SchemaError {
    fn mismatch(path: &str, expected: &'static str, found: &Value) -> Self {
        Self::Mismatch {
            path: path.to_string(),
            expected,
            found: json_type_name(found),
        }
    }
}

/// Short type name of a JSON value, used in error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A named field inside an [`Schema::Object`] descriptor.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub schema: Schema,
}

impl Field {
    pub fn new(name: &'static str, schema: Schema) -> Self {
        Self { name, schema }
    }
}

/// A composable payload descriptor.
///
/// Descriptors validate untyped input into its normalized wire form and are
/// the single source of truth for both request and response shapes.
#[derive(Debug, Clone)]
pub enum Schema {
    /// A JSON string.
    String,
    /// A JSON integer.
    Integer,
    /// An integer carried as a decimal string, normalized to a number.
    /// Path parameters use this descriptor.
    IntegerString,
    /// A homogeneous array of the inner descriptor.
    Array(Box<Schema>),
    /// An object with a fixed set of declared fields. Undeclared fields are
    /// dropped during normalization.
    Object(Vec<Field>),
}

impl Schema {
    /// Array-of constructor.
    pub fn array(item: Schema) -> Self {
        Self::Array(Box::new(item))
    }

    /// Struct-of-fields constructor.
    pub fn object(fields: Vec<Field>) -> Self {
        Self::Object(fields)
    }

    /// Validate `value` against this descriptor.
    ///
    /// Returns the normalized value on success. The error carries the
    /// JSON-path of the first mismatch.
    pub fn validate(&self, value: &Value) -> Result<Value, SchemaError> {
        self.validate_at(value, "$")
    }

    fn validate_at(&self, value: &Value, path: &str) -> Result<Value, SchemaError> {
        match self {
            Self::String => match value {
                Value::String(s) => Ok(Value::String(s.clone())),
                other => Err(SchemaError::mismatch(path, "string", other)),
            },
            Self::Integer => match value.as_i64() {
                Some(n) => Ok(Value::from(n)),
                None => Err(SchemaError::mismatch(path, "integer", value)),
            },
            Self::IntegerString => match value {
                Value::String(s) => match s.parse::<i64>() {
                    Ok(n) => Ok(Value::from(n)),
                    Err(_) => Err(SchemaError::mismatch(path, "integer string", value)),
                },
                other => match other.as_i64() {
                    Some(n) => Ok(Value::from(n)),
                    None => Err(SchemaError::mismatch(path, "integer string", other)),
                },
            },
            Self::Array(item) => match value {
                Value::Array(items) => {
                    let mut out = Vec::with_capacity(items.len());
                    for (index, entry) in items.iter().enumerate() {
                        out.push(item.validate_at(entry, &format!("{path}[{index}]"))?);
                    }
                    Ok(Value::Array(out))
                }
                other => Err(SchemaError::mismatch(path, "array", other)),
            },
            Self::Object(fields) => match value {
                Value::Object(map) => {
                    let mut out = serde_json::Map::with_capacity(fields.len());
                    for field in fields {
                        let raw = map.get(field.name).ok_or_else(|| SchemaError::MissingField {
                            path: path.to_string(),
                            field: field.name,
                        })?;
                        let nested = format!("{path}.{}", field.name);
                        out.insert(field.name.to_string(), field.schema.validate_at(raw, &nested)?);
                    }
                    Ok(Value::Object(out))
                }
                other => Err(SchemaError::mismatch(path, "object", other)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_accepts_string() {
        assert_eq!(Schema::String.validate(&json!("hello")).unwrap(), json!("hello"));
    }

    #[test]
    fn string_rejects_number() {
        let err = Schema::String.validate(&json!(3)).unwrap_err();
        assert_eq!(
            err,
            SchemaError::Mismatch {
                path: "$".to_string(),
                expected: "string",
                found: "number",
            }
        );
    }

    #[test]
    fn integer_string_normalizes_to_number() {
        assert_eq!(Schema::IntegerString.validate(&json!("42")).unwrap(), json!(42));
    }

    #[test]
    fn integer_string_accepts_plain_integer() {
        assert_eq!(Schema::IntegerString.validate(&json!(7)).unwrap(), json!(7));
    }

    #[test]
    fn integer_string_rejects_non_numeric() {
        let err = Schema::IntegerString.validate(&json!("abc")).unwrap_err();
        assert!(matches!(err, SchemaError::Mismatch { expected: "integer string", .. }));
    }

    #[test]
    fn object_requires_declared_fields() {
        let schema = Schema::object(vec![Field::new("content", Schema::String)]);
        let err = schema.validate(&json!({})).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingField {
                path: "$".to_string(),
                field: "content",
            }
        );
    }

    #[test]
    fn object_drops_undeclared_fields() {
        let schema = Schema::object(vec![Field::new("content", Schema::String)]);
        let out = schema.validate(&json!({"content": "x", "extra": 1})).unwrap();
        assert_eq!(out, json!({"content": "x"}));
    }

    #[test]
    fn array_reports_index_of_bad_element() {
        let schema = Schema::array(Schema::Integer);
        let err = schema.validate(&json!([1, "two", 3])).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::Mismatch { ref path, .. } if path == "$[1]"
        ));
    }

    #[test]
    fn nested_object_path_in_errors() {
        let schema = Schema::array(Schema::object(vec![
            Field::new("id", Schema::Integer),
            Field::new("content", Schema::String),
        ]));
        let err = schema.validate(&json!([{"id": 1, "content": 2}])).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::Mismatch { ref path, .. } if path == "$[0].content"
        ));
    }
}
