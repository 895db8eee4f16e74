//! Text search functions: starts_with, ends_with, contains_ignore_case

use stringz_plugin::prelude::*;
use crate::helpers::{require_text, subject_text};

/// True iff `value` begins with `prefix` (case-sensitive)
pub fn starts_with(value: &str, prefix: &str) -> bool {
    value.as_bytes().get(..prefix.len()) == Some(prefix.as_bytes())
}

/// True iff `value` ends with `suffix` (case-sensitive)
pub fn ends_with(value: &str, suffix: &str) -> bool {
    value.len() >= suffix.len() && value.as_bytes()[value.len() - suffix.len()..] == *suffix.as_bytes()
}

/// True iff `needle` occurs in `value`, ignoring case. An empty needle always matches.
pub fn contains_ignore_case(value: &str, needle: &str) -> bool {
    find_ignore_case(value, needle).is_some()
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte length of the prefix of `hay` that matches `needle` case-insensitively
fn match_len_ignore_case(hay: &str, needle: &str) -> Option<usize> {
    let mut hay_chars = hay.char_indices();
    for n in needle.chars() {
        match hay_chars.next() {
            Some((_, h)) if chars_eq_ignore_case(h, n) => {}
            _ => return None,
        }
    }
    Some(hay_chars.next().map_or(hay.len(), |(i, _)| i))
}

/// Leftmost case-insensitive occurrence of `needle`, as a byte range into `hay`
pub(crate) fn find_ignore_case(hay: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return Some((0, 0));
    }
    hay.char_indices().find_map(|(start, _)| {
        match_len_ignore_case(&hay[start..], needle).map(|len| (start, start + len))
    })
}

/// Shared body for the two-argument text predicates
fn call_predicate(name: &str, args: &[Value], pred: fn(&str, &str) -> bool) -> Value {
    if args.len() < 2 {
        return Value::Error(StringzError::arg_count(name, 2, args.len()));
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

    Value::Bool(pred(text, search))
}

static PREDICATE_ARGS: [ArgMeta; 2] = [
    ArgMeta {
        name: "text",
        typ: "Text",
        description: "Text to search in",
        optional: false,
        default: None,
    },
    ArgMeta {
        name: "search",
        typ: "Text",
        description: "Text to look for",
        optional: false,
        default: None,
    },
];

// ============ StartsWith ============

pub struct StartsWith;

static STARTS_WITH_EXAMPLES: [&str; 2] = [
    "starts_with(\"Franklin\", \"Frank\") → true",
    "starts_with(\"Bob\", \"b\") → false",
];

static STARTS_WITH_RELATED: [&str; 2] = ["ends_with", "contains_ignore_case"];

impl FunctionPlugin for StartsWith {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "starts_with",
            description: "Check if text starts with prefix (case-sensitive)",
            usage: "starts_with(text, prefix)",
            args: &PREDICATE_ARGS,
            returns: "Bool",
            examples: &STARTS_WITH_EXAMPLES,
            category: "text/search",
            related: &STARTS_WITH_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_predicate("starts_with", args, starts_with)
    }
}

// ============ EndsWith ============

pub struct EndsWith;

static ENDS_WITH_EXAMPLES: [&str; 2] = [
    "ends_with(\"Franklin\", \"lin\") → true",
    "ends_with(\"Bob\", \"B\") → false",
];

static ENDS_WITH_RELATED: [&str; 2] = ["starts_with", "contains_ignore_case"];

impl FunctionPlugin for EndsWith {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "ends_with",
            description: "Check if text ends with suffix (case-sensitive)",
            usage: "ends_with(text, suffix)",
            args: &PREDICATE_ARGS,
            returns: "Bool",
            examples: &ENDS_WITH_EXAMPLES,
            category: "text/search",
            related: &ENDS_WITH_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_predicate("ends_with", args, ends_with)
    }
}

// ============ ContainsIgnoreCase ============

pub struct ContainsIgnoreCase;

static CONTAINS_IGNORE_CASE_EXAMPLES: [&str; 2] = [
    "contains_ignore_case(\"BOB\", \"b\") → true",
    "contains_ignore_case(\"The quick brown\", \"x\") → false",
];

static CONTAINS_IGNORE_CASE_RELATED: [&str; 2] = ["starts_with", "replace_all_ignore_case"];

impl FunctionPlugin for ContainsIgnoreCase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "contains_ignore_case",
            description: "Check if text contains substring, ignoring case",
            usage: "contains_ignore_case(text, search)",
            args: &PREDICATE_ARGS,
            returns: "Bool",
            examples: &CONTAINS_IGNORE_CASE_EXAMPLES,
            category: "text/search",
            related: &CONTAINS_IGNORE_CASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_predicate("contains_ignore_case", args, contains_ignore_case)
    }
}
