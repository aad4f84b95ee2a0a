//! Document conversion

use super::{Config, ConversionStats};
use crate::application::{decode_sentence, InterChunkEncoder};
use crate::domain::{SentenceExtractor, SentenceRecord};
use crate::error::{ConvertError, Result};
use std::path::Path;

/// Converted sentences of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertedDocument {
    /// One block per sentence: header, chunks, footer, trailing newline
    pub blocks: Vec<String>,
    /// Counts over the whole document
    pub stats: ConversionStats,
}

impl ConvertedDocument {
    /// Join the sentence blocks with newlines, as written to disk
    pub fn render(&self) -> String {
        self.blocks.join("\n")
    }
}

/// Converts intra-chunk SSF documents to inter-chunk form
///
/// Sentences are handled one at a time; nothing is shared between them.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: Config,
    encoder: InterChunkEncoder,
}

impl Converter {
    /// Create a converter
    pub fn new(config: Config) -> Self {
        let encoder = InterChunkEncoder::new(config.head_policy());
        Self { config, encoder }
    }

    /// The configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert one sentence into its output block
    pub fn convert_sentence(&self, record: &SentenceRecord<'_>) -> Result<(String, ConversionStats)> {
        let decoded = decode_sentence(record)?;
        let encoded = self.encoder.encode(&decoded)?;

        let header = if self.config.normalize_header_quotes() {
            record.normalized_header()
        } else {
            record.header.into()
        };

        let stats = ConversionStats {
            sentences: 1,
            chunks: decoded.chunks.len(),
            tokens: decoded.token_count(),
            relations: encoded.relations,
        };
        log::debug!(
            "{}: {} chunks, {} tokens, {} relations",
            record.header,
            stats.chunks,
            stats.tokens,
            stats.relations
        );

        let block = format!("{}\n{}\n{}\n", header, encoded.text, record.footer);
        Ok((block, stats))
    }

    /// Convert every sentence of a document
    ///
    /// Fails on the first sentence that cannot be converted.
    pub fn convert_text(&self, text: &str) -> Result<ConvertedDocument> {
        let mut document = ConvertedDocument::default();

        for (index, record) in SentenceExtractor::new(text).enumerate() {
            let (block, stats) = self
                .convert_sentence(&record)
                .map_err(|e| e.in_sentence(index + 1, record.header))?;
            document.blocks.push(block);
            document.stats += stats;
        }

        if document.blocks.is_empty() {
            log::warn!("no <Sentence> records found in input");
        }

        Ok(document)
    }

    /// Read a UTF-8 file, trim surrounding whitespace, and convert it
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<ConvertedDocument> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConvertError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.convert_text(text.trim())
    }
}
