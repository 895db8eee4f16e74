//! Regex metacharacter escaping

use stringz_plugin::prelude::*;
use crate::helpers::subject_text;

/// Characters that get a leading backslash. Backslash itself is not in the set.
const SPECIAL: &[char] = &['-', '[', ']', '/', '{', '}', '(', ')', '*', '+', '?', '.', '^', '$', '|'];

/// Whether `c` needs escaping to be read literally in a pattern
pub fn is_regex_special(c: char) -> bool {
    SPECIAL.contains(&c)
}

/// Prefix every recognized metacharacter in `text` with `\`.
///
/// Any other character, whitespace and backslash included, is kept as is.
pub fn escape_regex(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        if is_regex_special(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

// ============ EscapeRegex ============

pub struct EscapeRegex;

static ESCAPE_REGEX_ARGS: [ArgMeta; 1] = [
    ArgMeta {
        name: "text",
        typ: "Text",
        description: "Character(s) to escape",
        optional: false,
        default: None,
    },
];

static ESCAPE_REGEX_EXAMPLES: [&str; 2] = [
    "escape_regex(\".\") → \"\\\\.\"",
    "escape_regex(\" \") → \" \"",
];

static ESCAPE_REGEX_RELATED: [&str; 1] = ["replace_all_ignore_case"];

impl FunctionPlugin for EscapeRegex {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "escape_regex",
            description: "Escape regex metacharacters so they match literally",
            usage: "escape_regex(text)",
            args: &ESCAPE_REGEX_ARGS,
            returns: "Text",
            examples: &ESCAPE_REGEX_EXAMPLES,
            category: "text/escape",
            related: &ESCAPE_REGEX_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(StringzError::arg_count("escape_regex", 1, 0));
        }

        match subject_text(&args[0], "escape_regex") {
            Ok(Some(s)) => Value::Text(escape_regex(s)),
            Ok(None) => Value::Null,
            Err(e) => Value::Error(e),
        }
    }
}
