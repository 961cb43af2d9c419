//! Batch driver around `conj_core`: dictionary ingestion, section export and
//! the `conjtool` commands.

pub mod commands;
pub mod dict_source;
pub mod export;
pub mod trace_init;
