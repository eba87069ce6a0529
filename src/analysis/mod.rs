//! Text analysis engine.
//!
//! - **`tokenizer`**: splits raw text into normalized word tokens
//! - **`lexicon`**: fixed stop-word set plus sentiment weight tables
//! - **`analyzer`**: composes the two into an [`AnalysisResult`]

pub mod analyzer;
pub mod lexicon;
pub mod tokenizer;

pub use analyzer::{AnalysisResult, Analyzer};
pub use lexicon::Lexicon;
