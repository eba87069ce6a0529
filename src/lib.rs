//! Textscope - Text Analysis Service
//!
//! Core library: the analysis engine (tokenizer, lexicon, analyzer) and
//! the minimal HTTP layer that serves it.

pub mod analysis;
pub mod config;
pub mod http;
pub mod server;
