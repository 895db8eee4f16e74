//! Method-call syntax for the string primitives on `str`

use std::fmt::Display;

use stringz_core::FmtOptions;

use crate::escape::escape_regex;
use crate::replace::{replace_all, replace_all_ignore_case};
use crate::search::contains_ignore_case;
use crate::template::{fmt_with, FmtError};

/// Extension methods for `str`.
///
/// `starts_with` / `ends_with` are already inherent on `str` with the same
/// meaning, so they are not repeated here.
pub trait TextExt {
    fn contains_ignore_case(&self, needle: &str) -> bool;
    fn replace_all(&self, old: &str, new: &str) -> String;
    fn replace_all_ignore_case(&self, old: &str, new: &str) -> String;
    fn escape_regex(&self) -> String;
    fn fmt_args<A: Display>(&self, args: &[A]) -> Result<String, FmtError>;
    fn fmt_args_with<A: Display>(&self, args: &[A], options: &FmtOptions) -> Result<String, FmtError>;
}

impl TextExt for str {
    fn contains_ignore_case(&self, needle: &str) -> bool {
        contains_ignore_case(self, needle)
    }

    fn replace_all(&self, old: &str, new: &str) -> String {
        replace_all(self, old, new)
    }

    fn replace_all_ignore_case(&self, old: &str, new: &str) -> String {
        replace_all_ignore_case(self, old, new)
    }

    fn escape_regex(&self) -> String {
        escape_regex(self)
    }

    fn fmt_args<A: Display>(&self, args: &[A]) -> Result<String, FmtError> {
        fmt_with(self, args, &FmtOptions::default())
    }

    fn fmt_args_with<A: Display>(&self, args: &[A], options: &FmtOptions) -> Result<String, FmtError> {
        fmt_with(self, args, options)
    }
}
