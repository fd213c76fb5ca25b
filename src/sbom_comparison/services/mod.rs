mod comparison_engine;
mod differ;
mod matcher;
mod result_assembler;
mod summarizer;

pub use comparison_engine::ComparisonEngine;
pub use differ::Differ;
pub use matcher::{MatchedIdentity, Matcher, Presence};
pub use result_assembler::ResultAssembler;
pub use summarizer::Summarizer;
