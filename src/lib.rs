//! Small text utilities: Latin-1 remapping, whitespace and number cleanup,
//! `\uHHHH` decoding, `<token>` and `{variable}` templates, and line-oriented
//! lists and labeled config blocks.

pub mod ast;
pub mod config;
pub mod error;
pub mod latin1;
pub mod list;
pub mod normalize;
pub mod parser;
pub mod processor;
pub mod unicode;

pub use config::{
    ConfigBlock, DataBlocks, RawBlocks, data_blocks, handle_config_blocks, handle_config_data,
    load_config_blocks, load_config_data, raw_blocks,
};
pub use error::{ConfigError, SubstitutionError};
pub use latin1::latin1_to_unicode;
pub use list::{list_to_sep_string, list_to_vec, sep_list_to_vec};
pub use normalize::{clean_spaces, float_trim_dot_zeros, trim_dot_zeros};
pub use processor::{DEFAULT_MAX_DEPTH, TokenMap, VariableMap};
pub use unicode::fix_unicode_escaped_text;
