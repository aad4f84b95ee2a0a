//! Conversion error types

use thiserror::Error;

/// Errors raised while decoding or encoding an SSF sentence
///
/// None of these are recovered internally. The first failing sentence
/// aborts conversion of the whole document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A token line did not split into address, form, POS and feature block
    #[error("malformed token line {line}: expected 4 tab-separated fields, found {fields}")]
    MalformedTokenLine {
        /// 1-based line number inside the sentence body
        line: usize,
        /// Number of fields actually found
        fields: usize,
    },

    /// The feature block was not wrapped in `<fs ...>`
    #[error("malformed feature block on token line {line}: {block}")]
    MalformedFeatureBlock {
        /// 1-based line number inside the sentence body
        line: usize,
        /// The offending block
        block: String,
    },

    /// A feature token lacked the `key=value` shape
    #[error("malformed feature '{feature}': expected key='value'")]
    MalformedFeature {
        /// The offending feature token
        feature: String,
    },

    /// A token carried no `chunkType` feature
    #[error("token '{token}' has no chunkType feature")]
    MissingChunkType {
        /// Identifier of the token
        token: String,
    },

    /// The `chunkType` value had no `<role>:<tag>` separator
    #[error("token '{token}' has malformed chunkType '{value}'")]
    MalformedChunkType {
        /// Identifier of the token
        token: String,
        /// The raw `chunkType` value
        value: String,
    },

    /// A feature needed for output was absent
    #[error("token '{token}' has no '{key}' feature")]
    MissingFeature {
        /// Identifier of the token
        token: String,
        /// Name of the missing feature
        key: String,
    },

    /// The `drel` value had no `<label>:<target>` separator
    #[error("token '{token}' has malformed drel '{value}'")]
    MalformedRelation {
        /// Identifier of the token
        token: String,
        /// The raw `drel` value
        value: String,
    },

    /// A relation pointed at a token that heads no chunk
    #[error("chunk {chunk} depends on '{target}', which heads no chunk in this sentence")]
    DanglingRelation {
        /// Tag of the dependent chunk
        chunk: String,
        /// Identifier that could not be resolved
        target: String,
    },

    /// More than one token claimed to head the same chunk
    #[error("chunk {chunk} has more than one head token")]
    MultipleHeads {
        /// Tag of the chunk
        chunk: String,
    },

    /// No token claimed to head the chunk
    #[error("chunk {chunk} has no head token")]
    MissingHead {
        /// Tag of the chunk
        chunk: String,
    },

    /// A chunk tag had no uppercase label prefix
    #[error("chunk tag '{tag}' has no uppercase label")]
    InvalidChunkTag {
        /// The offending tag
        tag: String,
    },

    /// Any of the above, located at a specific sentence of a document
    #[error("sentence {index} ({header}): {source}")]
    Sentence {
        /// 1-based position of the sentence in the document
        index: usize,
        /// The sentence's header line as found in the input
        header: String,
        /// The underlying failure
        #[source]
        source: Box<ConvertError>,
    },

    /// The input could not be read
    #[error("failed to read {path}: {message}")]
    Io {
        /// Path that failed
        path: String,
        /// Description from the operating system
        message: String,
    },
}

impl ConvertError {
    /// Attach sentence position to an error
    pub fn in_sentence(self, index: usize, header: &str) -> Self {
        ConvertError::Sentence {
            index,
            header: header.to_string(),
            source: Box::new(self),
        }
    }

    /// The innermost error, looking through sentence wrappers
    pub fn root(&self) -> &ConvertError {
        match self {
            ConvertError::Sentence { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangling_relation_display() {
        let error = ConvertError::DanglingRelation {
            chunk: "NP1".to_string(),
            target: "KAyA".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "chunk NP1 depends on 'KAyA', which heads no chunk in this sentence"
        );
    }

    #[test]
    fn test_sentence_wrapper_keeps_root() {
        let error = ConvertError::MalformedFeature {
            feature: "af".to_string(),
        }
        .in_sentence(3, "<Sentence id='3'>");

        assert!(error.to_string().starts_with("sentence 3 (<Sentence id='3'>)"));
        assert_eq!(
            error.root(),
            &ConvertError::MalformedFeature {
                feature: "af".to_string()
            }
        );
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error as _;

        let error = ConvertError::MissingHead {
            chunk: "VGF1".to_string(),
        }
        .in_sentence(1, "<Sentence id='1'>");

        let source = error.source().expect("sentence errors carry a source");
        assert_eq!(source.to_string(), "chunk VGF1 has no head token");
    }
}
