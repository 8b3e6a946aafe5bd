//! Library half of the `modelschema` binary: config loading, declaration files,
//! and the catalog of aspects a declaration file may name.

pub mod catalog;
pub mod config;
pub mod declarations;
