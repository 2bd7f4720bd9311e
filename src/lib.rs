//! Groups names that share a fingerprint.
//!
//! Input lines of the form `FINGERPRINT NAME` are parsed, bucketed by
//! fingerprint in first-seen order, and every bucket holding two or more
//! names is printed as a block. Blocks are separated by one blank line.
//!
//! Modules:
//! - `model`: records, rejections and parse errors
//! - `parser`: validates and splits a single input line
//! - `store`: insertion-ordered fingerprint → names map
//! - `printer`: writes multi-member groups
//! - `engine`: the read/parse/group/print loop
//! - `config`: TOML file and environment settings
//! - `logging`: stage-tagged diagnostics on stderr
//! - `error`: fatal run errors

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod model;
pub mod parser;
pub mod printer;
pub mod store;
