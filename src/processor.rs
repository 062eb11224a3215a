use std::collections::HashMap;

use tracing::{debug, trace};

use crate::ast::Segment;
use crate::error::SubstitutionError;
use crate::parser::TemplateParser;

/// Number of `{variable}` passes allowed before giving up
pub const DEFAULT_MAX_DEPTH: usize = 10;

fn bad_token(name: &str) -> String {
    format!("!BAD-TOKEN:'{name}'!")
}

fn bad_var(name: &str) -> String {
    format!("!BAD-VAR:'{name}'!")
}

/// Replacement values for `<token>` placeholders.
///
/// Values are inserted literally: a value containing `<other>` is not
/// expanded again.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenMap(HashMap<String, String>);

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the replacement for `name`, returning the previous one
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replace every `<name>` in `src`.
    ///
    /// Unknown names are replaced with `!BAD-TOKEN:'name'!` and the whole
    /// string is still processed; the first unknown name is reported in the
    /// error along with that output.
    pub fn detokenize(&self, src: &str) -> Result<String, SubstitutionError> {
        let segments = match TemplateParser::parse_tokens(src) {
            Ok(segments) => segments,
            Err(_) => return Ok(src.to_string()),
        };

        let mut result = String::with_capacity(src.len());
        let mut unknown: Option<&str> = None;
        for segment in segments {
            match segment {
                Segment::Literal(text) => result.push_str(text),
                Segment::Placeholder(name) => match self.get(name) {
                    Some(value) => result.push_str(value),
                    None => {
                        debug!(token = name, "unknown token");
                        unknown.get_or_insert(name);
                        result.push_str(&bad_token(name));
                    }
                },
            }
        }

        match unknown {
            Some(name) => Err(SubstitutionError::UnknownToken {
                name: name.to_string(),
                partial: result,
            }),
            None => Ok(result),
        }
    }
}

impl From<HashMap<String, String>> for TokenMap {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TokenMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for TokenMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

/// Replacement values for `{variable}` placeholders.
///
/// Values may reference other variables; the text is rescanned after each
/// pass until nothing is left to replace or `max_depth` passes have run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableMap {
    vars: HashMap<String, String>,
    max_depth: usize,
}

impl Default for VariableMap {
    fn default() -> Self {
        Self {
            vars: HashMap::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Outcome of a single substitution pass
struct Pass {
    text: String,
    replaced: bool,
    unknown: Option<String>,
}

impl VariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of substitution passes
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Set the value for `name`, returning the previous one
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Replace every `{name}` in `src`, following variables that expand to
    /// further variables.
    ///
    /// An unknown name ends expansion after the pass it was found in; the
    /// error carries the text produced by that pass, with
    /// `!BAD-VAR:'name'!` in place of each unknown name.
    ///
    /// At most `max_depth` passes run. A chain of exactly `max_depth` levels
    /// still succeeds; `MaxDepthExceeded` is returned only when a `{name}`
    /// is left over after the last pass.
    pub fn replace_vars(&self, src: &str) -> Result<String, SubstitutionError> {
        let mut text = src.to_string();
        for depth in 0..self.max_depth {
            let pass = self.substitute_pass(&text);
            if let Some(name) = pass.unknown {
                return Err(SubstitutionError::UnknownVariable {
                    name,
                    partial: pass.text,
                });
            }
            if !pass.replaced {
                return Ok(text);
            }
            trace!(pass = depth + 1, text = %pass.text, "variable pass");
            text = pass.text;
        }

        if has_variables(&text) {
            debug!(depth = self.max_depth, "variable expansion too deep");
            return Err(SubstitutionError::MaxDepthExceeded {
                depth: self.max_depth,
                partial: text,
            });
        }
        Ok(text)
    }

    /// Replace each `{name}` in `src` once, without rescanning inserted values
    fn substitute_pass(&self, src: &str) -> Pass {
        let segments = match TemplateParser::parse_variables(src) {
            Ok(segments) => segments,
            Err(_) => {
                return Pass {
                    text: src.to_string(),
                    replaced: false,
                    unknown: None,
                };
            }
        };

        let mut pass = Pass {
            text: String::with_capacity(src.len()),
            replaced: false,
            unknown: None,
        };
        for segment in segments {
            match segment {
                Segment::Literal(text) => pass.text.push_str(text),
                Segment::Placeholder(name) => {
                    pass.replaced = true;
                    match self.get(name) {
                        Some(value) => pass.text.push_str(value),
                        None => {
                            debug!(variable = name, "unknown variable");
                            pass.unknown.get_or_insert_with(|| name.to_string());
                            pass.text.push_str(&bad_var(name));
                        }
                    }
                }
            }
        }
        pass
    }
}

impl From<HashMap<String, String>> for VariableMap {
    fn from(vars: HashMap<String, String>) -> Self {
        Self {
            vars,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars: HashMap<String, String> =
            iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self::from(vars)
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for VariableMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.vars
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

/// Whether `text` holds at least one `<token>` placeholder
pub fn has_tokens(text: &str) -> bool {
    TemplateParser::parse_tokens(text)
        .is_ok_and(|segments| segments.iter().any(Segment::is_placeholder))
}

/// Whether `text` holds at least one `{variable}` placeholder
pub fn has_variables(text: &str) -> bool {
    TemplateParser::parse_variables(text)
        .is_ok_and(|segments| segments.iter().any(Segment::is_placeholder))
}
