//! Literal substring replacement: replace_all, replace_all_ignore_case
//!
//! The search text is always taken literally, never as a pattern.
//! An empty search text leaves the input unchanged.

use stringz_plugin::prelude::*;
use crate::helpers::{require_text, subject_text};
use crate::search::find_ignore_case;

/// Replace every non-overlapping occurrence of `old` with `new` (case-sensitive)
pub fn replace_all(value: &str, old: &str, new: &str) -> String {
    replace_with(value, old, new, |hay, needle| {
        hay.find(needle).map(|start| (start, start + needle.len()))
    })
}

/// Replace every occurrence of `old`, compared ignoring case, with `new` as given
pub fn replace_all_ignore_case(value: &str, old: &str, new: &str) -> String {
    replace_with(value, old, new, find_ignore_case)
}

/// Leftmost-first replacement loop. `find` returns a byte range into its haystack.
fn replace_with<F>(value: &str, old: &str, new: &str, find: F) -> String
where
    F: Fn(&str, &str) -> Option<(usize, usize)>,
{
    if old.is_empty() {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    let mut count = 0usize;
    while let Some((start, end)) = find(rest, old) {
        out.push_str(&rest[..start]);
        out.push_str(new);
        rest = &rest[end..];
        count += 1;
    }
    out.push_str(rest);

    tracing::trace!(count, "replaced occurrences");
    out
}

/// Shared body for the three-argument replace plugins
fn call_replace(name: &str, args: &[Value], replace: fn(&str, &str, &str) -> String) -> Value {
    if args.len() < 3 {
        return Value::Error(StringzError::arg_count(name, 3, args.len()));
    }

    let text = match subject_text(&args[0], name) {
        Ok(Some(s)) => s,
        Ok(None) => return Value::Null,
        Err(e) => return Value::Error(e),
    };

    let search = match require_text(&args[1], name, "search") {
        Ok(s) => s,
        Err(e) => return Value::Error(e),
    };

    let replacement = match require_text(&args[2], name, "replacement") {
        Ok(s) => s,
        Err(e) => return Value::Error(e),
    };

    Value::Text(replace(text, search, replacement))
}

static REPLACE_ARGS: [ArgMeta; 3] = [
    ArgMeta {
        name: "text",
        typ: "Text",
        description: "Source text",
        optional: false,
        default: None,
    },
    ArgMeta {
        name: "search",
        typ: "Text",
        description: "Literal substring to find",
        optional: false,
        default: None,
    },
    ArgMeta {
        name: "replacement",
        typ: "Text",
        description: "Replacement string",
        optional: false,
        default: None,
    },
];

// ============ ReplaceAll ============

pub struct ReplaceAll;

static REPLACE_ALL_EXAMPLES: [&str; 2] = [
    "replace_all(\"Bobby\", \"b\", \"d\") → \"Boddy\"",
    "replace_all(\"baa baa black sheep\", \"baa\", \"meow\") → \"meow meow black sheep\"",
];

static REPLACE_ALL_RELATED: [&str; 2] = ["replace_all_ignore_case", "escape_regex"];

impl FunctionPlugin for ReplaceAll {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "replace_all",
            description: "Replace all literal occurrences of substring (case-sensitive)",
            usage: "replace_all(text, search, replacement)",
            args: &REPLACE_ARGS,
            returns: "Text",
            examples: &REPLACE_ALL_EXAMPLES,
            category: "text/modify",
            related: &REPLACE_ALL_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_replace("replace_all", args, replace_all)
    }
}

// ============ ReplaceAllIgnoreCase ============

pub struct ReplaceAllIgnoreCase;

static REPLACE_ALL_IGNORE_CASE_EXAMPLES: [&str; 2] = [
    "replace_all_ignore_case(\"Bobby\", \"b\", \"d\") → \"doddy\"",
    "replace_all_ignore_case(\"Box\", \"b\", \"d\") → \"dox\"",
];

static REPLACE_ALL_IGNORE_CASE_RELATED: [&str; 2] = ["replace_all", "contains_ignore_case"];

impl FunctionPlugin for ReplaceAllIgnoreCase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "replace_all_ignore_case",
            description: "Replace all literal occurrences of substring, ignoring case",
            usage: "replace_all_ignore_case(text, search, replacement)",
            args: &REPLACE_ARGS,
            returns: "Text",
            examples: &REPLACE_ALL_IGNORE_CASE_EXAMPLES,
            category: "text/modify",
            related: &REPLACE_ALL_IGNORE_CASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_replace("replace_all_ignore_case", args, replace_all_ignore_case)
    }
}
