//! Conversion statistics

use std::ops::AddAssign;

/// Counts gathered while converting a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversionStats {
    /// Sentences converted
    pub sentences: usize,
    /// Chunks emitted
    pub chunks: usize,
    /// Tokens emitted
    pub tokens: usize,
    /// Chunks that carry an inter-chunk relation
    pub relations: usize,
}

impl AddAssign for ConversionStats {
    fn add_assign(&mut self, other: Self) {
        self.sentences += other.sentences;
        self.chunks += other.chunks;
        self.tokens += other.tokens;
        self.relations += other.relations;
    }
}
