//! Labeled config blocks.
//!
//! Two layouts are recognised. Data blocks hold a list in braces, optionally
//! with a separator character that splits entries on the same line:
//!
//! ```text
//! fruit {
//!     apple
//!     # comments and blank lines are dropped
//!     banana
//! }
//!
//! veg , {
//!     carrot, leek
//! }
//! ```
//!
//! Raw blocks keep their text verbatim between angle brackets:
//!
//! ```text
//! motd <
//!   Welcome back.
//! >
//! ```
//!
//! In both layouts the closing `}` or `>` must be alone on its line,
//! followed by a newline. A block without such a line is not a block.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::list::list_to_sep_string;

/// `label [sep] {` at the start of a line
static DATA_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([[:word:]]+)[[:space:]]*([,;:|/]?)[[:space:]]*\{")
        .expect("valid data header regex")
});

/// `label <` at the start of a line
static RAW_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([[:word:]]+)[[:space:]]*<").expect("valid raw header regex")
});

const DATA_CLOSE: &str = "\n}\n";
const RAW_CLOSE: &str = "\n>\n";

/// A labeled block found in config text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBlock<'a> {
    pub label: Cow<'a, str>,
    pub body: Cow<'a, str>,
}

impl ConfigBlock<'_> {
    /// Detach the block from the text it was scanned from
    pub fn into_owned(self) -> ConfigBlock<'static> {
        ConfigBlock {
            label: Cow::Owned(self.label.into_owned()),
            body: Cow::Owned(self.body.into_owned()),
        }
    }
}

/// Header and body located by a scan of the remaining text
struct BlockMatch<'a> {
    label: &'a str,
    sep: &'a str,
    body: &'a str,
    /// Offset just past the closing line
    end: usize,
}

fn find_block<'a>(rest: &'a str, header: &Regex, close: &str) -> Option<BlockMatch<'a>> {
    let caps = header.captures(rest)?;
    let open = caps.get(0)?;
    let label = caps.get(1)?.as_str();
    let sep = caps.get(2).map_or("", |m| m.as_str());

    // An unclosed first header means no later header can close either
    let body_start = open.end();
    let close_at = body_start + rest[body_start..].find(close)?;
    Some(BlockMatch {
        label,
        sep,
        body: &rest[body_start..close_at],
        end: close_at + close.len(),
    })
}

/// Iterator over `label { ... }` data blocks.
///
/// Each body is reduced to its list entries joined by newlines; when the
/// header names a separator, the separator is also turned into a newline.
#[derive(Debug, Clone)]
pub struct DataBlocks<'a> {
    rest: &'a str,
}

impl<'a> Iterator for DataBlocks<'a> {
    type Item = ConfigBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = find_block(self.rest, &DATA_HEADER, DATA_CLOSE)?;
        self.rest = &self.rest[found.end..];

        let mut body = list_to_sep_string(found.body, "\n");
        if !found.sep.is_empty() {
            body = body.replace(found.sep, "\n");
        }
        trace!(label = found.label, sep = found.sep, "data block");
        Some(ConfigBlock {
            label: Cow::Borrowed(found.label),
            body: Cow::Owned(body),
        })
    }
}

/// Iterator over `label < ... >` raw blocks.
///
/// Bodies are returned untouched, except that a newline right after the `<`
/// belongs to the header line and the newline before `>` to the closing line.
#[derive(Debug, Clone)]
pub struct RawBlocks<'a> {
    rest: &'a str,
}

impl<'a> Iterator for RawBlocks<'a> {
    type Item = ConfigBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = find_block(self.rest, &RAW_HEADER, RAW_CLOSE)?;
        self.rest = &self.rest[found.end..];

        let body = found.body.strip_prefix('\n').unwrap_or(found.body);
        trace!(label = found.label, "raw block");
        Some(ConfigBlock {
            label: Cow::Borrowed(found.label),
            body: Cow::Borrowed(body),
        })
    }
}

/// Scan `text` for brace-delimited data blocks
pub fn data_blocks(text: &str) -> DataBlocks<'_> {
    DataBlocks { rest: text }
}

/// Scan `text` for angle-bracket raw blocks
pub fn raw_blocks(text: &str) -> RawBlocks<'_> {
    RawBlocks { rest: text }
}

/// Call `f(label, body)` for each data block in `text`
pub fn handle_config_data<F>(text: &str, mut f: F)
where
    F: FnMut(&str, &str),
{
    for block in data_blocks(text) {
        f(&block.label, &block.body);
    }
}

/// Call `f(label, body)` for each raw block in `text`
pub fn handle_config_blocks<F>(text: &str, mut f: F)
where
    F: FnMut(&str, &str),
{
    for block in raw_blocks(text) {
        f(&block.label, &block.body);
    }
}

fn read_config(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a file and collect its data blocks
pub fn load_config_data(path: impl AsRef<Path>) -> Result<Vec<ConfigBlock<'static>>, ConfigError> {
    let path = path.as_ref();
    let text = read_config(path)?;
    let blocks: Vec<_> = data_blocks(&text).map(ConfigBlock::into_owned).collect();
    debug!(path = %path.display(), blocks = blocks.len(), "loaded config data");
    Ok(blocks)
}

/// Read a file and collect its raw blocks
pub fn load_config_blocks(
    path: impl AsRef<Path>,
) -> Result<Vec<ConfigBlock<'static>>, ConfigError> {
    let path = path.as_ref();
    let text = read_config(path)?;
    let blocks: Vec<_> = raw_blocks(&text).map(ConfigBlock::into_owned).collect();
    debug!(path = %path.display(), blocks = blocks.len(), "loaded config blocks");
    Ok(blocks)
}
