//! Formatter configuration
//!
//! Controls what `fmt` does when a placeholder asks for an argument that
//! was not supplied.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Environment variable consulted by [`FmtOptions::from_env`]
pub const MISSING_ENV: &str = "STRINGZ_FMT_MISSING";

/// Policy for placeholders that point past the end of the argument list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingArgument {
    /// Fail the whole call with an out-of-range error
    #[default]
    Error,
    /// Substitute empty text and keep going
    Empty,
}

impl FromStr for MissingArgument {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(MissingArgument::Error),
            "empty" => Ok(MissingArgument::Empty),
            other => Err(format!("unknown missing-argument policy '{}'", other)),
        }
    }
}

/// Options for template formatting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FmtOptions {
    pub missing: MissingArgument,
}

impl FmtOptions {
    pub fn new(missing: MissingArgument) -> Self {
        Self { missing }
    }

    /// Read options from `STRINGZ_FMT_MISSING`, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_env_value(env::var(MISSING_ENV).ok().as_deref())
    }

    fn from_env_value(raw: Option<&str>) -> Self {
        let missing = match raw {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "ignoring {}", MISSING_ENV);
                MissingArgument::default()
            }),
            None => MissingArgument::default(),
        };
        Self { missing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_error() {
        assert_eq!(FmtOptions::default().missing, MissingArgument::Error);
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!("EMPTY".parse::<MissingArgument>(), Ok(MissingArgument::Empty));
        assert_eq!(" error ".parse::<MissingArgument>(), Ok(MissingArgument::Error));
        assert!("wrap".parse::<MissingArgument>().is_err());
    }

    #[test]
    fn test_env_value_fallback() {
        assert_eq!(FmtOptions::from_env_value(Some("empty")).missing, MissingArgument::Empty);
        assert_eq!(FmtOptions::from_env_value(Some("bogus")).missing, MissingArgument::Error);
        assert_eq!(FmtOptions::from_env_value(None).missing, MissingArgument::Error);
    }

    #[test]
    fn test_deserialize() {
        let opts: FmtOptions = serde_json::from_str(r#"{"missing": "empty"}"#).unwrap();
        assert_eq!(opts.missing, MissingArgument::Empty);

        let opts: FmtOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, FmtOptions::default());
    }
}
