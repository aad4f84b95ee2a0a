//! Token/chunk decoding
//!
//! Turns the body of one sentence into its ordered chunks and the index from
//! head-token identifiers to chunk tags.

use crate::domain::{parse_feature_block, Chunk, ChunkRole, HeadIndex, SentenceRecord, Token};
use crate::error::{ConvertError, Result};
use std::collections::HashMap;

/// Chunks of one sentence plus the index needed to resolve their relations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedSentence {
    /// Chunks in order of first appearance
    pub chunks: Vec<Chunk>,
    /// Head-token identifier to chunk tag
    pub head_index: HeadIndex,
}

impl DecodedSentence {
    /// Total number of tokens across all chunks
    pub fn token_count(&self) -> usize {
        self.chunks.iter().map(|chunk| chunk.tokens.len()).sum()
    }
}

/// Decode one tab-separated token line: address, form, POS, feature block
pub fn decode_token_line(line_no: usize, line: &str) -> Result<Token> {
    let fields: Vec<&str> = line.split('\t').collect();
    let [_address, form, pos, block] = fields.as_slice() else {
        return Err(ConvertError::MalformedTokenLine {
            line: line_no,
            fields: fields.len(),
        });
    };

    let features = parse_feature_block(line_no, block)?;
    Ok(Token::new(*form, *pos, features))
}

/// Groups tokens into chunks keyed by tag, preserving first-seen order
#[derive(Debug, Default)]
pub struct ChunkGrouper {
    chunks: Vec<Chunk>,
    positions: HashMap<String, usize>,
    head_index: HeadIndex,
}

impl ChunkGrouper {
    /// Create an empty grouper
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a token to its chunk, registering it if it is a head
    pub fn push(&mut self, mut token: Token) -> Result<()> {
        let (role, tag) = token.chunk_membership()?;
        let tag = tag.to_string();

        if role == ChunkRole::Head {
            token.is_head = true;
            if let Some(previous) = self.head_index.register(token.identifier(), tag.as_str()) {
                if previous != tag {
                    log::warn!(
                        "token '{}' heads both {} and {}; relations will resolve to {}",
                        token.identifier(),
                        previous,
                        tag,
                        tag
                    );
                }
            }
        }

        let position = match self.positions.get(&tag) {
            Some(&position) => position,
            None => {
                self.chunks.push(Chunk::new(tag.as_str()));
                self.positions.insert(tag, self.chunks.len() - 1);
                self.chunks.len() - 1
            }
        };
        self.chunks[position].tokens.push(token);

        Ok(())
    }

    /// Number of chunks seen so far
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Finish grouping
    pub fn finish(self) -> DecodedSentence {
        DecodedSentence {
            chunks: self.chunks,
            head_index: self.head_index,
        }
    }
}

/// Decode every token line of a sentence body
///
/// Blank lines are skipped.
pub fn decode_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<DecodedSentence> {
    let mut grouper = ChunkGrouper::new();

    for (index, line) in lines.into_iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        grouper.push(decode_token_line(index + 1, line)?)?;
    }

    Ok(grouper.finish())
}

/// Decode a sentence record's body
pub fn decode_sentence(record: &SentenceRecord<'_>) -> Result<DecodedSentence> {
    decode_lines(record.lines())
}
