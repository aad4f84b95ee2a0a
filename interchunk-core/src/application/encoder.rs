//! Inter-chunk encoding
//!
//! Lifts each chunk's relation from its head token to the chunk and writes
//! the chunk forest back out in SSF bracket notation.

use super::decoder::DecodedSentence;
use crate::domain::{Chunk, HeadIndex, Token};
use crate::error::{ConvertError, Result};
use std::fmt;
use std::str::FromStr;

/// How to pick the head of a chunk that does not have exactly one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HeadPolicy {
    /// Zero or several head tokens is an error
    #[default]
    Strict,
    /// The first head token in append order carries the relation;
    /// a chunk without a head emits no relation
    FirstWins,
}

impl HeadPolicy {
    /// Name as accepted on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadPolicy::Strict => "strict",
            HeadPolicy::FirstWins => "first-wins",
        }
    }
}

impl fmt::Display for HeadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeadPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "strict" => Ok(HeadPolicy::Strict),
            "first-wins" => Ok(HeadPolicy::FirstWins),
            other => Err(format!(
                "unknown head policy '{other}' (expected 'strict' or 'first-wins')"
            )),
        }
    }
}

/// Encoded chunk text of one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSentence {
    /// Chunk brackets, newline-separated, no header or footer
    pub text: String,
    /// Number of chunks that emitted a relation
    pub relations: usize,
}

/// Serializes decoded chunks as an inter-chunk SSF tree
#[derive(Debug, Clone, Copy, Default)]
pub struct InterChunkEncoder {
    head_policy: HeadPolicy,
}

impl InterChunkEncoder {
    /// Create an encoder with the given head policy
    pub fn new(head_policy: HeadPolicy) -> Self {
        Self { head_policy }
    }

    /// The head policy in effect
    pub fn head_policy(&self) -> HeadPolicy {
        self.head_policy
    }

    /// Pick the token whose `drel` becomes the chunk's relation
    fn head_of<'c>(&self, chunk: &'c Chunk) -> Result<Option<&'c Token>> {
        let mut heads = chunk.heads();
        let first = heads.next();

        match self.head_policy {
            HeadPolicy::FirstWins => Ok(first),
            HeadPolicy::Strict => {
                let head = first.ok_or_else(|| ConvertError::MissingHead {
                    chunk: chunk.tag.clone(),
                })?;
                if heads.next().is_some() {
                    return Err(ConvertError::MultipleHeads {
                        chunk: chunk.tag.clone(),
                    });
                }
                Ok(Some(head))
            }
        }
    }

    /// Resolve a chunk's outgoing relation as `label:targetChunkTag`
    pub fn chunk_relation(&self, chunk: &Chunk, index: &HeadIndex) -> Result<Option<String>> {
        let Some(head) = self.head_of(chunk)? else {
            return Ok(None);
        };
        let Some(relation) = head.relation()? else {
            return Ok(None);
        };

        let target = index.resolve(&chunk.tag, relation.target)?;
        log::trace!(
            "{}: {} -> {} resolved to {}",
            chunk.tag,
            relation.label,
            relation.target,
            target
        );
        Ok(Some(format!("{}:{}", relation.label, target)))
    }

    /// Encode one chunk at the given 1-based address
    fn encode_chunk(
        &self,
        address: usize,
        chunk: &Chunk,
        index: &HeadIndex,
        lines: &mut Vec<String>,
    ) -> Result<bool> {
        let label = chunk.label()?;
        let relation = self.chunk_relation(chunk, index)?;

        let features = match &relation {
            Some(drel) => format!("<fs drel='{}' name='{}'>", drel, chunk.tag),
            None => format!("<fs name='{}'>", chunk.tag),
        };
        lines.push(format!("{address}\t((\t{label}\t{features}"));

        for (position, token) in chunk.tokens.iter().enumerate() {
            lines.push(format!(
                "{}.{}\t{}\t{}\t<fs af='{}' name='{}'>",
                address,
                position + 1,
                token.form,
                token.pos,
                token.analysis()?,
                token.form
            ));
        }
        lines.push("\t))".to_string());

        Ok(relation.is_some())
    }

    /// Encode all chunks of a sentence, addressed `1..N` in order
    pub fn encode(&self, sentence: &DecodedSentence) -> Result<EncodedSentence> {
        let mut lines = Vec::with_capacity(sentence.token_count() + 2 * sentence.chunks.len());
        let mut relations = 0;

        for (position, chunk) in sentence.chunks.iter().enumerate() {
            if self.encode_chunk(position + 1, chunk, &sentence.head_index, &mut lines)? {
                relations += 1;
            }
        }

        Ok(EncodedSentence {
            text: lines.join("\n"),
            relations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::decoder::decode_lines;

    fn decode(lines: &[&str]) -> DecodedSentence {
        decode_lines(lines.iter().copied()).unwrap()
    }

    #[test]
    fn test_single_chunk_without_relation() {
        let sentence = decode(&["1\tराम\tNN\t<fs af='राम,n,m,sg,3,d,0,0' chunkType='head:NP1'>"]);
        let encoded = InterChunkEncoder::default().encode(&sentence).unwrap();

        assert_eq!(
            encoded.text,
            "1\t((\tNP\t<fs name='NP1'>\n1.1\tराम\tNN\t<fs af='राम,n,m,sg,3,d,0,0' name='राम'>\n\t))"
        );
        assert_eq!(encoded.relations, 0);
    }

    #[test]
    fn test_relation_is_lifted_to_chunk() {
        let sentence = decode(&[
            "1\tram\tNNP\t<fs af='r' name='rAma' drel='k1:KAyA' chunkType='head:NP1'>",
            "2\tne\tPSP\t<fs af='n' chunkType='child:NP1'>",
            "3\tkhaya\tVM\t<fs af='k' name='KAyA' chunkType='head:VGF1'>",
        ]);
        let encoded = InterChunkEncoder::default().encode(&sentence).unwrap();
        let lines: Vec<_> = encoded.text.lines().collect();

        assert_eq!(lines[0], "1\t((\tNP\t<fs drel='k1:VGF1' name='NP1'>");
        assert_eq!(lines[1], "1.1\tram\tNNP\t<fs af='r' name='ram'>");
        assert_eq!(lines[2], "1.2\tne\tPSP\t<fs af='n' name='ne'>");
        assert_eq!(lines[3], "\t))");
        assert_eq!(lines[4], "2\t((\tVGF\t<fs name='VGF1'>");
        assert_eq!(lines[5], "2.1\tkhaya\tVM\t<fs af='k' name='khaya'>");
        assert_eq!(encoded.relations, 1);
    }

    #[test]
    fn test_dangling_relation_fails() {
        let sentence = decode(&[
            "1\tram\tNNP\t<fs af='r' drel='k1:nowhere' chunkType='head:NP1'>",
        ]);
        assert_eq!(
            InterChunkEncoder::default().encode(&sentence),
            Err(ConvertError::DanglingRelation {
                chunk: "NP1".to_string(),
                target: "nowhere".to_string(),
            })
        );
    }

    #[test]
    fn test_relation_to_child_token_is_dangling() {
        let sentence = decode(&[
            "1\ta\tNN\t<fs af='a' drel='k1:b' chunkType='head:NP1'>",
            "2\tb\tPSP\t<fs af='b' chunkType='child:NP1'>",
        ]);
        assert!(matches!(
            InterChunkEncoder::default().encode(&sentence),
            Err(ConvertError::DanglingRelation { .. })
        ));
    }

    #[test]
    fn test_strict_policy_rejects_multiple_heads() {
        let sentence = decode(&[
            "1\ta\tNN\t<fs af='a' chunkType='head:NP1'>",
            "2\tb\tNN\t<fs af='b' chunkType='head:NP1'>",
        ]);
        assert_eq!(
            InterChunkEncoder::new(HeadPolicy::Strict).encode(&sentence),
            Err(ConvertError::MultipleHeads {
                chunk: "NP1".to_string()
            })
        );
    }

    #[test]
    fn test_strict_policy_rejects_headless_chunk() {
        let sentence = decode(&["1\ta\tNN\t<fs af='a' chunkType='child:NP1'>"]);
        assert_eq!(
            InterChunkEncoder::new(HeadPolicy::Strict).encode(&sentence),
            Err(ConvertError::MissingHead {
                chunk: "NP1".to_string()
            })
        );
    }

    #[test]
    fn test_first_wins_policy() {
        let sentence = decode(&[
            "1\ta\tNN\t<fs af='a' drel='k1:v' chunkType='head:NP1'>",
            "2\tb\tNN\t<fs af='b' drel='k2:v' chunkType='head:NP1'>",
            "3\tc\tPSP\t<fs af='c' chunkType='child:NP2'>",
            "4\tv\tVM\t<fs af='v' chunkType='head:VGF1'>",
        ]);
        let encoded = InterChunkEncoder::new(HeadPolicy::FirstWins)
            .encode(&sentence)
            .unwrap();

        assert!(encoded.text.contains("1\t((\tNP\t<fs drel='k1:VGF1' name='NP1'>"));
        assert!(encoded.text.contains("2\t((\tNP\t<fs name='NP2'>"));
        assert_eq!(encoded.relations, 1);
    }

    #[test]
    fn test_missing_af_fails() {
        let sentence = decode(&["1\ta\tNN\t<fs chunkType='head:NP1'>"]);
        assert_eq!(
            InterChunkEncoder::default().encode(&sentence),
            Err(ConvertError::MissingFeature {
                token: "a".to_string(),
                key: "af".to_string(),
            })
        );
    }

    #[test]
    fn test_head_policy_parsing() {
        assert_eq!("strict".parse::<HeadPolicy>(), Ok(HeadPolicy::Strict));
        assert_eq!("first-wins".parse::<HeadPolicy>(), Ok(HeadPolicy::FirstWins));
        assert!("last-wins".parse::<HeadPolicy>().is_err());
        assert_eq!(HeadPolicy::FirstWins.to_string(), "first-wins");
    }
}
