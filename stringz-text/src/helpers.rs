//! Helper functions for plugin argument handling

use stringz_core::{StringzError, Value};

/// Extract text, returning error if null
pub fn require_text<'a>(value: &'a Value, func: &str, arg: &str) -> Result<&'a str, StringzError> {
    match value {
        Value::Text(s) => Ok(s.as_str()),
        Value::Null => Err(StringzError::arg_type(func, arg, "Text", "Null")),
        Value::Error(e) => Err(e.clone()),
        other => Err(StringzError::arg_type(func, arg, "Text", other.type_name())),
    }
}

/// Subject text of a call: `Ok(None)` means the subject was null
pub fn subject_text<'a>(value: &'a Value, func: &str) -> Result<Option<&'a str>, StringzError> {
    match value {
        Value::Text(s) => Ok(Some(s.as_str())),
        Value::Null => Ok(None),
        Value::Error(e) => Err(e.clone()),
        other => Err(StringzError::arg_type(func, "text", "Text", other.type_name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stringz_core::codes;

    #[test]
    fn test_subject_text() {
        let val = Value::Text("hello".to_string());
        assert_eq!(subject_text(&val, "fmt").unwrap(), Some("hello"));
        assert_eq!(subject_text(&Value::Null, "fmt").unwrap(), None);
    }

    #[test]
    fn test_require_text_rejects_null() {
        let err = require_text(&Value::Null, "replace_all", "search").unwrap_err();
        assert_eq!(err.code, codes::ARG_TYPE);
        assert!(err.message.contains("'search'"));
    }

    #[test]
    fn test_subject_text_names_function() {
        let err = subject_text(&Value::Int(3), "ends_with").unwrap_err();
        assert!(err.message.starts_with("ends_with()"));
    }

    #[test]
    fn test_error_propagates() {
        let original = StringzError::internal("upstream");
        let err = require_text(&Value::Error(original.clone()), "fmt", "template").unwrap_err();
        assert_eq!(err, original);
    }
}
