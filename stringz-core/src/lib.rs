//! Stringz Core - Fundamental types
//!
//! This crate provides the core types shared by the Stringz crates:
//! - `Value`: Runtime values (text, numbers, lists, errors)
//! - `StringzError`: Structured errors with machine-readable codes
//! - `FmtOptions`: Formatter configuration

mod value;
mod error;
mod config;

pub use value::Value;
pub use error::{StringzError, Severity, codes};
pub use config::{FmtOptions, MissingArgument, MISSING_ENV};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Value, StringzError, Severity, FmtOptions, MissingArgument};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod value_tests {
        use super::*;

        #[test]
        fn test_from_i64() {
            let v: Value = 42i64.into();
            assert_eq!(v.as_int(), Some(42));
        }

        #[test]
        fn test_from_str() {
            let v: Value = "hello".into();
            assert!(matches!(v, Value::Text(_)));
            assert_eq!(v.as_text(), Some("hello"));
        }

        #[test]
        fn test_from_bool() {
            let v: Value = true.into();
            assert!(matches!(v, Value::Bool(true)));
        }

        #[test]
        fn test_type_name() {
            assert_eq!(Value::Int(0).type_name(), "Int");
            assert_eq!(Value::Text(String::new()).type_name(), "Text");
            assert_eq!(Value::Bool(true).type_name(), "Bool");
            assert_eq!(Value::Null.type_name(), "Null");
        }

        #[test]
        fn test_is_error() {
            let err = Value::Error(StringzError::internal("boom"));
            assert!(err.is_error());
            assert!(!Value::Null.is_error());
        }

        #[test]
        fn test_display_natural_text() {
            assert_eq!(Value::Text("fox".to_string()).to_string(), "fox");
            assert_eq!(Value::Int(-7).to_string(), "-7");
            assert_eq!(Value::Float(2.5).to_string(), "2.5");
            assert_eq!(Value::Bool(false).to_string(), "false");
            assert_eq!(Value::Null.to_string(), "");
            let list = Value::List(vec![Value::Int(1), "a".into()]);
            assert_eq!(list.to_string(), "[1, a]");
        }

        #[test]
        fn test_serde_tagged() {
            let v = Value::Text("x".to_string());
            let json = serde_json::to_value(&v).unwrap();
            assert_eq!(json, serde_json::json!({"type": "Text", "value": "x"}));
            let back: Value = serde_json::from_value(json).unwrap();
            assert_eq!(back, v);
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_error_construction() {
            let err = StringzError::index_out_of_range(3, 2);
            assert_eq!(err.code, codes::INDEX_OUT_OF_RANGE);
            assert!(err.message.contains('3'));
            assert_eq!(err.severity, Severity::Error);
        }

        #[test]
        fn test_internal_is_fatal() {
            let err = StringzError::internal("lock poisoned");
            assert_eq!(err.severity, Severity::Fatal);
        }

        #[test]
        fn test_error_display() {
            let err = StringzError::arg_count("fmt", 1, 0);
            let display = format!("{}", err);
            assert!(display.starts_with("[ARG_COUNT]"));
            assert!(display.contains("suggestion"));
        }

        #[test]
        fn test_error_serialize_skips_missing_suggestion() {
            let err = StringzError::arg_type("fmt", "template", "Text", "Int");
            let json = serde_json::to_value(&err).unwrap();
            assert!(json.get("suggestion").is_none());
            assert_eq!(json["severity"], "error");
        }
    }
}
