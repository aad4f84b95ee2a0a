//! Domain layer: SSF sentence records, tokens, chunks and feature structures
//!
//! Everything here is pure string processing with no I/O.

pub mod features;
pub mod sentence;
pub mod types;

pub use features::{parse_feature_block, parse_features};
pub use sentence::{extract_sentences, SentenceExtractor, SentenceRecord};
pub use types::{chunk_label, Chunk, ChunkRole, Features, HeadIndex, Relation, Token};
