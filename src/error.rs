//! Error types for substitution and config loading.
//!
//! Substitution failures are recoverable: every variant carries the
//! best-effort output so the caller can still use the text.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure from `<token>` or `{variable}` substitution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubstitutionError {
    /// A `<name>` with no entry in the token map
    #[error("unknown token <{name}>")]
    UnknownToken { name: String, partial: String },

    /// A `{name}` with no entry in the variable map
    #[error("unknown variable {{{name}}}")]
    UnknownVariable { name: String, partial: String },

    /// Variables were still unresolved after `depth` passes
    #[error("variable expansion exceeded maximum depth of {depth}")]
    MaxDepthExceeded { depth: usize, partial: String },
}

impl SubstitutionError {
    /// The text as it stood when substitution stopped
    pub fn partial(&self) -> &str {
        match self {
            SubstitutionError::UnknownToken { partial, .. }
            | SubstitutionError::UnknownVariable { partial, .. }
            | SubstitutionError::MaxDepthExceeded { partial, .. } => partial,
        }
    }

    pub fn into_partial(self) -> String {
        match self {
            SubstitutionError::UnknownToken { partial, .. }
            | SubstitutionError::UnknownVariable { partial, .. }
            | SubstitutionError::MaxDepthExceeded { partial, .. } => partial,
        }
    }

    /// The unresolved placeholder name, if the failure was a lookup miss
    pub fn name(&self) -> Option<&str> {
        match self {
            SubstitutionError::UnknownToken { name, .. }
            | SubstitutionError::UnknownVariable { name, .. } => Some(name.as_str()),
            SubstitutionError::MaxDepthExceeded { .. } => None,
        }
    }
}

/// Failure to read a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SubstitutionError::UnknownToken {
            name: "bad".to_string(),
            partial: String::new(),
        };
        assert_eq!(err.to_string(), "unknown token <bad>");

        let err = SubstitutionError::UnknownVariable {
            name: "bad1".to_string(),
            partial: String::new(),
        };
        assert_eq!(err.to_string(), "unknown variable {bad1}");

        let err = SubstitutionError::MaxDepthExceeded {
            depth: 10,
            partial: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "variable expansion exceeded maximum depth of 10"
        );
    }

    #[test]
    fn test_partial_accessors() {
        let err = SubstitutionError::MaxDepthExceeded {
            depth: 3,
            partial: "{a}".to_string(),
        };
        assert_eq!(err.partial(), "{a}");
        assert_eq!(err.name(), None);
        assert_eq!(err.into_partial(), "{a}");
    }

    #[test]
    fn test_config_error_keeps_source() {
        use std::error::Error as _;

        let err = ConfigError::Read {
            path: PathBuf::from("missing.conf"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().starts_with("failed to read config file missing.conf"));
        assert!(err.source().is_some());
    }
}
