//! Template formatting with `%{s}` and `%{N}` placeholders
//!
//! A single left-to-right scan over the template:
//! - `%{s}` takes the next argument from a cursor that starts at 0
//! - `%{N}` takes argument `N` and leaves the cursor alone
//! - `%%{s}` / `%%{N}` (a `%` right before a valid placeholder) is kept verbatim
//! - anything that is not a complete placeholder is copied through as text
//!
//! Substituted text is never scanned again.

use std::fmt::Display;

use stringz_plugin::prelude::*;
use thiserror::Error;

use crate::helpers::subject_text;

/// Errors from template formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FmtError {
    #[error("placeholder requests argument {index} but only {len} supplied")]
    IndexOutOfRange { index: usize, len: usize },
}

impl From<FmtError> for StringzError {
    fn from(err: FmtError) -> Self {
        match err {
            FmtError::IndexOutOfRange { index, len } => StringzError::index_out_of_range(index, len),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Sequential,
    Indexed(usize),
}

/// Parse a placeholder at the very start of `s`, returning it with its byte length.
fn parse_placeholder(s: &str) -> Option<(Marker, usize)> {
    let body = s.strip_prefix("%{")?;
    let close = body.find('}')?;
    let content = &body[..close];

    let marker = if content == "s" {
        Marker::Sequential
    } else if !content.is_empty() && content.bytes().all(|b| b.is_ascii_digit()) {
        // Indices too large for usize can never be in range
        let index = content.bytes().fold(0usize, |acc, b| {
            acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
        });
        Marker::Indexed(index)
    } else {
        return None;
    };

    Some((marker, "%{".len() + close + 1))
}

/// Format `template` with `args`, failing on a placeholder past the last argument.
pub fn fmt<A: Display>(template: &str, args: &[A]) -> Result<String, FmtError> {
    fmt_with(template, args, &FmtOptions::default())
}

/// Format `template` with `args` under the given options.
pub fn fmt_with<A: Display>(template: &str, args: &[A], options: &FmtOptions) -> Result<String, FmtError> {
    let mut out = String::with_capacity(template.len());
    let mut seq = 0usize;
    let mut pos = 0usize;

    while let Some(offset) = template[pos..].find('%') {
        let at = pos + offset;
        out.push_str(&template[pos..at]);
        let rest = &template[at..];

        // Escaped placeholder: copy `%` plus the whole token untouched
        if let Some((_, len)) = rest.strip_prefix('%').and_then(parse_placeholder) {
            out.push_str(&rest[..1 + len]);
            pos = at + 1 + len;
            continue;
        }

        let Some((marker, len)) = parse_placeholder(rest) else {
            if rest.starts_with("%{") {
                tracing::trace!(offset = at, "malformed placeholder left as text");
            }
            out.push('%');
            pos = at + 1;
            continue;
        };

        let index = match marker {
            Marker::Sequential => seq,
            Marker::Indexed(i) => i,
        };

        match args.get(index) {
            Some(arg) => {
                out.push_str(&arg.to_string());
                if marker == Marker::Sequential {
                    seq += 1;
                }
            }
            None => {
                tracing::debug!(index, len = args.len(), policy = ?options.missing, "argument out of range");
                match options.missing {
                    MissingArgument::Error => {
                        return Err(FmtError::IndexOutOfRange { index, len: args.len() });
                    }
                    MissingArgument::Empty => {}
                }
            }
        }
        pos = at + len;
    }

    out.push_str(&template[pos..]);
    Ok(out)
}

// ============ Fmt ============

pub struct Fmt;

static FMT_ARGS: [ArgMeta; 2] = [
    ArgMeta {
        name: "template",
        typ: "Text",
        description: "Template with %{s} (next) or %{N} (indexed) placeholders",
        optional: false,
        default: None,
    },
    ArgMeta {
        name: "values",
        typ: "Any... | List",
        description: "Values to substitute, variadic or as one list",
        optional: true,
        default: Some("[]"),
    },
];

static FMT_EXAMPLES: [&str; 3] = [
    "fmt(\"The %{s} %{s}\", \"quick\", \"fox\") → \"The quick fox\"",
    "fmt(\"The %{2} %{0} %{1}\", [\"quick\", \"brown\", \"fox\"]) → \"The fox quick brown\"",
    "fmt(\"The %%{s}\", \"quick\") → \"The %%{s}\"",
];

static FMT_RELATED: [&str; 1] = ["replace_all"];

impl FunctionPlugin for Fmt {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "fmt",
            description: "Substitute sequential %{s} and indexed %{N} placeholders",
            usage: "fmt(template, value1, value2, ...) or fmt(template, [values])",
            args: &FMT_ARGS,
            returns: "Text",
            examples: &FMT_EXAMPLES,
            category: "text/format",
            related: &FMT_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(StringzError::arg_count("fmt", 1, 0));
        }

        let template = match subject_text(&args[0], "fmt") {
            Ok(Some(s)) => s,
            Ok(None) => return Value::Null,
            Err(e) => return Value::Error(e),
        };

        let values = match &args[1..] {
            [Value::List(list)] => list.as_slice(),
            rest => rest,
        };

        if let Some(err) = values.iter().find_map(Value::as_error) {
            return Value::Error(err.clone());
        }

        match fmt_with(template, values, &ctx.fmt_options) {
            Ok(s) => Value::Text(s),
            Err(e) => Value::Error(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: [&str; 3] = ["quick", "brown", "fox"];

    fn eval_ctx() -> EvalContext {
        EvalContext::new(std::sync::Arc::new(PluginRegistry::new()))
    }

    fn fox(template: &str) -> String {
        fmt(template, &FOX).unwrap()
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(fmt("The quick brown fox", &["bob", "frank"]).unwrap(), "The quick brown fox");
        assert_eq!(fmt::<&str>("", &[]).unwrap(), "");
    }

    #[test]
    fn test_indexed() {
        assert_eq!(fox("The %{0} %{1} %{2}"), "The quick brown fox");
        assert_eq!(fox("The %{2} %{0} %{1}"), "The fox quick brown");
        assert_eq!(fox("The %{0} %{0} %{0}"), "The quick quick quick");
    }

    #[test]
    fn test_sequential() {
        assert_eq!(fox("The %{s} %{s} %{s}"), "The quick brown fox");
    }

    #[test]
    fn test_indexed_does_not_move_cursor() {
        assert_eq!(fox("The %{0} %{s} %{2}"), "The quick quick fox");
        assert_eq!(fox("The %{2} %{s} %{0}"), "The fox quick quick");
        assert_eq!(fox("%{2}%{s}%{1}%{s}"), "foxquickbrownbrown");
    }

    #[test]
    fn test_escaped_placeholders_kept() {
        assert_eq!(fox("The %%{s} %%{s} %%{s}"), "The %%{s} %%{s} %%{s}");
        assert_eq!(fox("The %{s} %{s} %%{s}"), "The quick brown %%{s}");
        assert_eq!(fox("%%{1} %{s}"), "%%{1} quick");
    }

    #[test]
    fn test_escape_only_before_valid_placeholder() {
        assert_eq!(fox("100%% sure %{s}"), "100%% sure quick");
        assert_eq!(fox("%%{x} %{s}"), "%%{x} quick");
        assert_eq!(fox("%%%{s}"), "%%%{s}");
    }

    #[test]
    fn test_unterminated_left_as_text() {
        assert_eq!(fox("The %{s} %{s} %{2"), "The quick brown %{2");
        assert_eq!(fox("The %{s %{s} %{2}"), "The %{s quick fox");
        assert_eq!(fox("The %{s %{0} %{1 %{s} %{2} %{1"), "The %{s quick %{1 quick fox %{1");
    }

    #[test]
    fn test_invalid_content_left_as_text() {
        assert_eq!(fox("%{} %{-1} %{ 0} %{ss} %{0x1}"), "%{} %{-1} %{ 0} %{ss} %{0x1}");
        assert_eq!(fox("%{name} %{s}"), "%{name} quick");
    }

    #[test]
    fn test_substitution_not_rescanned() {
        let out = fmt("%{s} %{s}", &["%{s}", "x"]).unwrap();
        assert_eq!(out, "%{s} x");
    }

    #[test]
    fn test_display_arguments() {
        assert_eq!(fmt("%{s} + %{s} = %{2}", &[1, 2, 3]).unwrap(), "1 + 2 = 3");
        assert_eq!(fmt("%{0}", &[2.5]).unwrap(), "2.5");
    }

    #[test]
    fn test_non_ascii_text_preserved() {
        assert_eq!(fmt("héllo %{s} – ünïcode %{0}", &["wörld"]).unwrap(), "héllo wörld – ünïcode wörld");
    }

    #[test]
    fn test_out_of_range_is_error_by_default() {
        assert_eq!(
            fmt("%{3}", &FOX),
            Err(FmtError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            fmt("%{s}%{s}", &["only"]),
            Err(FmtError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_huge_index_out_of_range() {
        let err = fmt("%{99999999999999999999999999}", &FOX).unwrap_err();
        assert_eq!(err, FmtError::IndexOutOfRange { index: usize::MAX, len: 3 });
    }

    #[test]
    fn test_out_of_range_empty_policy() {
        let opts = FmtOptions::new(MissingArgument::Empty);
        assert_eq!(fmt_with("[%{5}] %{s} [%{s}]", &["a"], &opts).unwrap(), "[] a []");
    }

    #[test]
    fn test_error_converts_to_structured() {
        let err: StringzError = FmtError::IndexOutOfRange { index: 4, len: 1 }.into();
        assert_eq!(err.code, codes::INDEX_OUT_OF_RANGE);
    }

    #[test]
    fn test_plugin_variadic() {
        let args: Vec<Value> = vec!["The %{s} %{s}".into(), "quick".into(), Value::Int(42)];
        let result = Fmt.call(&args, &eval_ctx());
        assert_eq!(result.as_text(), Some("The quick 42"));
    }

    #[test]
    fn test_plugin_list() {
        let list = Value::List(vec!["quick".into(), "brown".into(), "fox".into()]);
        let args = vec![Value::Text("The %{2} %{0} %{1}".to_string()), list];
        let result = Fmt.call(&args, &eval_ctx());
        assert_eq!(result.as_text(), Some("The fox quick brown"));
    }

    #[test]
    fn test_plugin_out_of_range() {
        let args = vec![Value::Text("%{1}".to_string()), Value::Text("a".to_string())];
        let result = Fmt.call(&args, &eval_ctx());
        assert_eq!(result.as_error().unwrap().code, codes::INDEX_OUT_OF_RANGE);
    }

    #[test]
    fn test_plugin_uses_context_options() {
        let ctx = eval_ctx().with_fmt_options(FmtOptions::new(MissingArgument::Empty));
        let args = vec![Value::Text("a%{1}b".to_string()), Value::Text("x".to_string())];
        assert_eq!(Fmt.call(&args, &ctx).as_text(), Some("ab"));
    }

    #[test]
    fn test_plugin_error_argument_propagates() {
        let args = vec![
            Value::Text("%{s}".to_string()),
            Value::Error(StringzError::internal("upstream")),
        ];
        let result = Fmt.call(&args, &eval_ctx());
        assert_eq!(result.as_error().unwrap().code, codes::INTERNAL);
    }

    #[test]
    fn test_plugin_template_only() {
        let args = vec![Value::Text("plain".to_string())];
        assert_eq!(Fmt.call(&args, &eval_ctx()).as_text(), Some("plain"));
    }
}
