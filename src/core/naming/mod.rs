pub mod parser;
pub mod types;
pub mod vocabulary;

pub use parser::*;
pub use types::*;
pub use vocabulary::{classify, TagTable, Vocabulary};
